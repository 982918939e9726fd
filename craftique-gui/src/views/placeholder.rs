use craftique::navigation::Page;
use craftique_ui::{
    component::{card, text},
    theme,
    widget::*,
};
use iced::Length;

use crate::state::Msg;

pub fn under_development(page: Page) -> String {
    format!(
        "This page is currently under development. It will be the central hub for managing your {} in Craftique.",
        page.title().to_lowercase()
    )
}

pub fn placeholder_view<'a>(page: Page) -> Element<'a, Msg> {
    Column::new()
        .spacing(25)
        .push(text::h1(page.title()).style(theme::text::accent))
        .push(
            card(text::p1_regular(under_development(page)).style(theme::text::secondary))
                .width(Length::Fill),
        )
        .into()
}
