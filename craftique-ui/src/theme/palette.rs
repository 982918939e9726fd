use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
    pub header: iced::Color,
    pub footer: iced::Color,
    pub rule: iced::Color,
    pub scrollable: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub accent: iced::Color,
    pub success: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub transparent: Button,
    pub link: Button,
    pub menu: Button,
    pub avatar: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
    pub stat: ContainerPalette,
    pub success: ContainerPalette,
    pub sidebar: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub success: ContainerPalette,
    pub error: ContainerPalette,
}

/// Colors of the text inputs. The border tells the state of the field.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub background: iced::Color,
    pub disabled_background: iced::Color,
    pub value: iced::Color,
    pub disabled_value: iced::Color,
    pub placeholder: iced::Color,
    pub selection: iced::Color,
    pub border: iced::Color,
    pub focused: iced::Color,
    pub invalid: iced::Color,
    pub confirmed: iced::Color,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::AMBER_50,
                foreground: color::WHITE,
                header: color::WHITE,
                footer: color::GREY_7,
                rule: color::GREY_2,
                scrollable: color::AMBER_600,
            },
            text: Text {
                primary: color::GREY_7,
                secondary: color::GREY_5,
                accent: color::AMBER_800,
                success: color::GREEN,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::AMBER_600,
                        text: color::WHITE,
                        border: color::AMBER_600.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::AMBER_700,
                        text: color::WHITE,
                        border: color::AMBER_700.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::AMBER_800,
                        text: color::WHITE,
                        border: color::AMBER_800.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_3,
                        text: color::WHITE,
                        border: color::GREY_3.into(),
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::AMBER_700,
                        border: color::AMBER_600.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::AMBER_100,
                        text: color::AMBER_800,
                        border: color::AMBER_700.into(),
                    },
                    pressed: None,
                    disabled: None,
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_7,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_1,
                        text: color::GREY_7,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::AMBER_600,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::AMBER_800,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                menu: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_5,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::AMBER_100,
                        text: color::AMBER_800,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::AMBER_100,
                        text: color::AMBER_800,
                        border: None,
                    }),
                    disabled: None,
                },
                avatar: Button {
                    active: ButtonPalette {
                        background: color::AMBER_600,
                        text: color::WHITE,
                        border: color::AMBER_700.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::AMBER_700,
                        text: color::WHITE,
                        border: color::AMBER_800.into(),
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: color::GREY_1.into(),
                },
                stat: ContainerPalette {
                    background: color::AMBER_100,
                    text: color::AMBER_800.into(),
                    border: None,
                },
                success: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: color::GREEN.into(),
                },
                sidebar: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: color::GREY_2.into(),
                },
            },
            notifications: Notifications {
                success: ContainerPalette {
                    background: color::LIGHT_GREEN,
                    text: color::GREEN.into(),
                    border: None,
                },
                error: ContainerPalette {
                    background: color::LIGHT_RED,
                    text: color::RED.into(),
                    border: None,
                },
            },
            text_inputs: TextInputs {
                background: color::WHITE,
                disabled_background: color::GREY_1,
                value: color::GREY_7,
                disabled_value: color::GREY_5,
                placeholder: color::GREY_3,
                selection: color::TRANSPARENT_AMBER,
                border: color::GREY_2,
                focused: color::AMBER_600,
                invalid: color::RED,
                confirmed: color::GREEN,
            },
        }
    }
}
