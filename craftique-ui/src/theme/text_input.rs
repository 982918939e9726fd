use iced::{
    widget::text_input::{Catalog, Status, Style, StyleFn},
    Background, Border, Color,
};

use super::Theme;

const RADIUS: f32 = 8.0;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

/// Grey border, amber once focused.
pub fn primary(theme: &Theme, status: Status) -> Style {
    field(theme, status, None)
}

/// Field whose content was rejected.
pub fn invalid(theme: &Theme, status: Status) -> Style {
    field(theme, status, Some(theme.colors.text_inputs.invalid))
}

/// Field whose content passed its checks.
pub fn confirmed(theme: &Theme, status: Status) -> Style {
    field(theme, status, Some(theme.colors.text_inputs.confirmed))
}

fn field(theme: &Theme, status: Status, state: Option<Color>) -> Style {
    let c = &theme.colors.text_inputs;
    let (background, value, border) = match status {
        Status::Disabled => (c.disabled_background, c.disabled_value, Border {
            radius: RADIUS.into(),
            width: 1.0,
            color: c.border,
        }),
        Status::Focused { .. } => (c.background, c.value, Border {
            radius: RADIUS.into(),
            width: 2.0,
            color: state.unwrap_or(c.focused),
        }),
        Status::Active | Status::Hovered => (c.background, c.value, Border {
            radius: RADIUS.into(),
            width: 1.0,
            color: state.unwrap_or(c.border),
        }),
    };
    Style {
        background: Background::Color(background),
        border,
        icon: c.placeholder,
        placeholder: c.placeholder,
        value,
        selection: c.selection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_follows_the_field_state() {
        let theme = <Theme as std::default::Default>::default();
        let c = theme.colors.text_inputs;
        assert_eq!(primary(&theme, Status::Active).border.color, c.border);
        assert_eq!(primary(&theme, Status::Focused).border.color, c.focused);
        assert_eq!(invalid(&theme, Status::Focused).border.color, c.invalid);
        assert_eq!(confirmed(&theme, Status::Hovered).border.color, c.confirmed);
        let disabled = confirmed(&theme, Status::Disabled);
        assert_eq!(disabled.border.color, c.border);
        assert_eq!(disabled.background, Background::Color(c.disabled_background));
    }
}
