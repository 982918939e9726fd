use super::text::text;
use crate::font::MEDIUM;
use crate::{theme, widget::*};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::container;

pub fn primary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(
        container(
            text(t)
                .font(MEDIUM)
                .align_y(iced::Alignment::Center)
                .align_x(iced::Alignment::Center),
        )
        .align_y(Vertical::Center)
        .align_x(Horizontal::Center)
        .width(iced::Length::Fill)
        .padding(5),
    )
    .style(theme::button::primary)
}

/// Primary button shrinking to its label.
pub fn primary_compact<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(container(text(t).font(MEDIUM)).padding([2, 8])).style(theme::button::primary)
}

pub fn secondary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(container(text(t)).padding([2, 8])).style(theme::button::secondary)
}

pub fn transparent<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(container(text(t)).padding([2, 8])).style(theme::button::transparent)
}

pub fn link<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(text(t).size(super::text::P2_SIZE))
        .padding(0)
        .style(theme::button::link)
}

pub fn menu<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(container(text(t)).padding(5))
        .width(iced::Length::Fill)
        .style(theme::button::menu)
}

pub fn menu_active<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(container(text(t).font(MEDIUM)).padding(5))
        .width(iced::Length::Fill)
        .style(theme::button::menu_pressed)
}

/// Round button showing a single letter.
pub fn avatar<'a, T: 'a>(initial: String) -> Button<'a, T> {
    Button::new(
        container(text(initial).font(MEDIUM))
            .center_x(iced::Length::Fixed(28.0))
            .center_y(iced::Length::Fixed(28.0)),
    )
    .padding(2)
    .style(theme::button::avatar)
}
