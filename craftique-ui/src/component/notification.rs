use crate::{component::text, theme, widget::*};
use iced::Length;

pub fn success<'a, T: 'a>(message: impl std::fmt::Display) -> Container<'a, T> {
    Container::new(text::p2_regular(message))
        .padding(12)
        .width(Length::Fill)
        .style(theme::notification::success)
}

pub fn error<'a, T: 'a>(message: impl std::fmt::Display) -> Container<'a, T> {
    Container::new(text::p2_regular(message))
        .padding(12)
        .width(Length::Fill)
        .style(theme::notification::error)
}
