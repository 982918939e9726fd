use iced::widget::container::{transparent, Catalog, Style, StyleFn};
use iced::Background;

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(transparent)
    }

    fn style(&self, class: &Self::Class<'_>) -> Style {
        class(self)
    }
}

pub fn header(theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(theme.colors.general.header)),
        ..Default::default()
    }
}

pub fn rule(theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(theme.colors.general.rule)),
        ..Default::default()
    }
}

pub fn footer(theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(theme.colors.general.footer)),
        text_color: Some(theme.colors.general.foreground),
        ..Default::default()
    }
}
