use craftique::{login::LoginForm, navigation::Page};
use craftique_ui::{
    component::{
        button,
        form::{self, Form, Value},
        notification,
        text::{self, P1_SIZE},
    },
    theme,
    widget::*,
};
use iced::{Alignment, Length};

use super::form_card;
use crate::state::Msg;

pub fn login_view(state: &LoginForm) -> Element<'_, Msg> {
    let (handle, secret) = if !state.processing {
        (
            Form::new("Username", &Value::new(&state.handle), Msg::LoginUpdateHandle)
                .on_submit(Msg::LoginSubmit),
            Form::new("Password", &Value::new(&state.secret), Msg::LoginUpdateSecret)
                .on_submit(Msg::LoginSubmit),
        )
    } else {
        (
            Form::new_disabled("Username", &Value::new(&state.handle)),
            Form::new_disabled("Password", &Value::new(&state.secret)),
        )
    };

    let content = Column::new()
        .spacing(15)
        .push(
            Container::new(text::h2("Login to Craftique").style(theme::text::accent))
                .center_x(Length::Fill),
        )
        .push_maybe(state.notice.map(notification::success))
        .push_maybe(state.error.map(notification::error))
        .push(form::labelled("Username", handle.size(P1_SIZE).padding(10)))
        .push(form::labelled(
            "Password",
            secret.secure().size(P1_SIZE).padding(10),
        ))
        .push(
            button::primary(if state.processing {
                "Logging in..."
            } else {
                "Log In"
            })
            .on_press_maybe(state.can_submit().then_some(Msg::LoginSubmit)),
        )
        .push(
            Column::new()
                .spacing(8)
                .align_x(Alignment::Center)
                .width(Length::Fill)
                .push(button::link("Forgot Password?").on_press(Msg::Navigate(Page::ForgotPassword)))
                .push(
                    Row::new()
                        .spacing(5)
                        .align_y(Alignment::Center)
                        .push(text::p2_regular("Don't have an account?").style(theme::text::secondary))
                        .push(button::link("Register").on_press(Msg::Navigate(Page::Register))),
                ),
        );

    form_card(content)
}
