use iced::widget::container;
use iced::widget::scrollable::{Catalog, Rail, Scroller, Status, Style, StyleFn};
use iced::{Background, Border};

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, _status: Status) -> Style {
    Style {
        container: container::Style::default(),
        vertical_rail: rail(theme),
        horizontal_rail: rail(theme),
        gap: Some(Background::Color(theme.colors.general.background)),
    }
}

fn rail(theme: &Theme) -> Rail {
    Rail {
        background: None,
        border: Border::default(),
        scroller: Scroller {
            color: theme.colors.general.scrollable,
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    }
}
