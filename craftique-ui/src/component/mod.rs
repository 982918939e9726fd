pub mod button;
pub mod form;
pub mod notification;
pub mod text;

use iced::{widget::Space, Alignment, Length};

use crate::{theme, widget::*};

pub fn separation<'a, T: 'a>() -> Container<'a, T> {
    Container::new(Space::with_width(Length::Fill))
        .style(theme::container::rule)
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
}

/// White rounded card.
pub fn card<'a, T: 'a>(content: impl Into<Element<'a, T>>) -> Container<'a, T> {
    Container::new(content)
        .padding(30)
        .style(theme::card::simple)
}

/// Tinted card showing a figure under its label.
pub fn stat_card<'a, T: 'a>(label: &'static str, value: impl std::fmt::Display) -> Container<'a, T> {
    Container::new(
        Column::new()
            .spacing(5)
            .align_x(Alignment::Start)
            .push(text::p2_regular(label))
            .push(text::h3(value)),
    )
    .padding(20)
    .width(Length::Fill)
    .style(theme::card::stat)
}
