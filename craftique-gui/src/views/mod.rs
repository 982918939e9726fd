pub mod dashboard;
pub mod home;
pub mod login;
pub mod placeholder;
pub mod register;
pub mod reset;

use craftique::{account::Identity, navigation::Page};
use craftique_ui::{
    component::{button, separation, text},
    theme,
    widget::*,
};
use iced::{
    widget::{scrollable, Space},
    Alignment, Length,
};

use crate::state::Msg;

/// Header, scrollable page content and footer.
pub fn layout<'a>(identity: Option<&Identity>, content: Element<'a, Msg>) -> Element<'a, Msg> {
    Column::new()
        .push(header(identity))
        .push(separation())
        .push(
            scrollable(
                Column::new()
                    .push(
                        Container::new(content)
                            .padding(30)
                            .width(Length::Fill)
                            .height(Length::Shrink),
                    )
                    .push(Space::with_height(Length::Fixed(40.0)))
                    .push(footer()),
            )
            .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn header<'a>(identity: Option<&Identity>) -> Element<'a, Msg> {
    let brand = Button::new(text::h3("Craftique").style(theme::text::accent))
        .padding(0)
        .style(theme::button::transparent)
        .on_press(Msg::Navigate(Page::Home));

    let nav = match identity {
        Some(identity) => Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(button::avatar(identity.initial()).on_press(Msg::Navigate(Page::Profile)))
            .push(button::secondary("Logout").on_press(Msg::Logout)),
        None => Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(button::transparent("Login").on_press(Msg::Navigate(Page::Login)))
            .push(button::primary_compact("Register").on_press(Msg::Navigate(Page::Register))),
    };

    Container::new(
        Row::new()
            .align_y(Alignment::Center)
            .push(brand)
            .push(Space::with_width(Length::Fill))
            .push(nav),
    )
    .padding([15, 30])
    .width(Length::Fill)
    .style(theme::container::header)
    .into()
}

fn footer<'a>() -> Element<'a, Msg> {
    Container::new(
        Column::new()
            .spacing(5)
            .align_x(Alignment::Center)
            .push(text::p2_regular("Craftique by Afrida"))
            .push(text::caption("LinkedIn | Instagram | GitHub")),
    )
    .padding(25)
    .center_x(Length::Fill)
    .style(theme::container::footer)
    .into()
}

/// Centered card holding one of the account forms.
fn form_card<'a>(content: impl Into<Element<'a, Msg>>) -> Element<'a, Msg> {
    Container::new(
        craftique_ui::component::card(content)
            .max_width(460)
            .width(Length::Fill),
    )
    .center_x(Length::Fill)
    .padding([30, 0])
    .into()
}
