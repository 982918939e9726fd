use crate::widget::text_input;
use iced::Length;

use crate::{component::text, theme, widget::*};

#[derive(Debug, Clone)]
pub struct Value<T> {
    pub value: T,
    pub warning: Option<String>,
    pub valid: bool,
}

impl std::default::Default for Value<String> {
    fn default() -> Self {
        Self {
            value: "".to_string(),
            warning: None,
            valid: true,
        }
    }
}

impl Value<String> {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            ..Default::default()
        }
    }

    /// A value carrying a warning is shown as invalid.
    pub fn with_warning(value: &str, warning: Option<String>) -> Self {
        Self {
            value: value.to_string(),
            valid: warning.is_none(),
            warning,
        }
    }
}

pub struct Form<'a, Message> {
    input: TextInput<'a, Message>,
    warning: Option<String>,
    valid: bool,
    confirmed: bool,
}

impl<'a, Message: 'a> Form<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Form`].
    ///
    /// It expects:
    /// - a placeholder
    /// - the current value
    /// - a function that produces a message when the [`Form`] changes
    pub fn new<F>(placeholder: &str, value: &Value<String>, on_change: F) -> Self
    where
        F: 'static + Fn(String) -> Message,
    {
        Self {
            input: text_input::TextInput::new(placeholder, &value.value).on_input(on_change),
            warning: value.warning.clone(),
            valid: value.valid,
            confirmed: false,
        }
    }

    /// Creates a new [`Form`] that has a disabled input.
    pub fn new_disabled(placeholder: &str, value: &Value<String>) -> Self {
        Self {
            input: text_input::TextInput::new(placeholder, &value.value),
            warning: value.warning.clone(),
            valid: value.valid,
            confirmed: false,
        }
    }

    /// Creates a new [`Form`] that trims input values before applying the `on_change` function.
    pub fn new_trimmed<F>(placeholder: &str, value: &Value<String>, on_change: F) -> Self
    where
        F: 'static + Fn(String) -> Message,
    {
        Self {
            input: text_input::TextInput::new(placeholder, &value.value)
                .on_input(move |s| on_change(s.trim().to_string())),
            warning: value.warning.clone(),
            valid: value.valid,
            confirmed: false,
        }
    }

    /// Marks a value that passed its checks. Ignored while the value is invalid.
    pub fn confirmed(mut self, confirmed: bool) -> Self {
        self.confirmed = confirmed;
        self
    }

    /// Hides the typed characters.
    pub fn secure(mut self) -> Self {
        self.input = self.input.secure(true);
        self
    }

    /// Sets the message produced when Enter is pressed in the [`Form`].
    pub fn on_submit(mut self, message: Message) -> Self {
        self.input = self.input.on_submit(message);
        self
    }

    /// Sets the padding of the [`Form`].
    pub fn padding(mut self, units: u16) -> Self {
        self.input = self.input.padding(units);
        self
    }

    /// Sets the [`Form`] with a text size
    pub fn size(mut self, size: u16) -> Self {
        self.input = self.input.size(size);
        self
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        Container::new(
            Column::new()
                .push(if !form.valid {
                    form.input.style(theme::text_input::invalid)
                } else if form.confirmed {
                    form.input.style(theme::text_input::confirmed)
                } else {
                    form.input
                })
                .push_maybe(if !form.valid {
                    form.warning
                        .map(|message| text::caption(message).style(theme::text::error))
                } else {
                    None
                })
                .width(Length::Fill)
                .spacing(5),
        )
        .width(Length::Fill)
        .into()
    }
}

/// Labelled field, the label above the input.
pub fn labelled<'a, Message: 'a + Clone>(
    label: &'static str,
    form: Form<'a, Message>,
) -> Element<'a, Message> {
    Column::new()
        .spacing(5)
        .push(text::p2_regular(label).style(theme::text::secondary))
        .push(Element::from(form))
        .into()
}
