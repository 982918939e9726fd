use craftique::{
    navigation::Page,
    reset::{ResetForm, ResetStep},
};
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

pub fn reset_view(state: &ResetForm) -> Element<'_, Msg> {
    match &state.step {
        ResetStep::Input => input_view(state),
        ResetStep::Success { masked, countdown } => success_view(masked, countdown.remaining()),
    }
}

fn input_view(state: &ResetForm) -> Element<'_, Msg> {
    let address = Value::new(&state.address);
    let address = if !state.processing {
        Form::new_trimmed("Email", &address, Msg::ResetUpdateAddress).on_submit(Msg::ResetSubmit)
    } else {
        Form::new_disabled("Email", &address)
    };

    let content = Column::new()
        .spacing(15)
        .push(
            Container::new(text::h2("Reset Your Password").style(theme::text::accent))
                .center_x(Length::Fill),
        )
        .push(
            text::p2_regular(
                "Enter your email address below and we will send you a secure link to reset your password.",
            )
            .style(theme::text::secondary),
        )
        .push_maybe(state.error.map(notification::error))
        .push(form::labelled("Email", address.size(P1_SIZE).padding(10)))
        .push(
            button::primary("Send Reset Link")
                .on_press_maybe((!state.processing).then_some(Msg::ResetSubmit)),
        )
        .push(
            Container::new(button::link("Back to Login").on_press(Msg::Navigate(Page::Login)))
                .center_x(Length::Fill),
        );

    form_card(content)
}

fn success_view<'a>(masked: &str, remaining: u32) -> Element<'a, Msg> {
    let content = Column::new()
        .spacing(15)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .push(text::h1("\u{2713}").style(theme::text::success))
        .push(text::h2("Link Sent Successfully!").style(theme::text::success))
        .push(text::p1_regular("A password reset link has been sent to your email:"))
        .push(text::p1_bold(masked).style(theme::text::accent))
        .push(
            text::p2_regular(format!(
                "This page will automatically redirect to the login screen in {} seconds.",
                remaining
            ))
            .style(theme::text::secondary),
        )
        .push(button::secondary("Go to Login Now").on_press(Msg::ResetGoToLogin));

    Container::new(
        Container::new(content)
            .padding(40)
            .max_width(460)
            .width(Length::Fill)
            .style(theme::card::success),
    )
    .center_x(Length::Fill)
    .padding([30, 0])
    .into()
}
