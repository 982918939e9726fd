use craftique::{
    account::Role,
    navigation::Page,
    registration::RegistrationForm,
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

pub fn register_view(state: &RegistrationForm) -> Element<'_, Msg> {
    let draft = &state.draft;
    let handle_available = state.handle_status.map(|s| s.available);

    let handle = Value::with_warning(
        &draft.handle,
        state
            .handle_message()
            .filter(|_| handle_available == Some(false))
            .map(str::to_string),
    );
    let address = Value::with_warning(
        &draft.address,
        state.address_error().map(|e| e.to_string()),
    );

    let field = |placeholder: &str, value: &Value<String>, on_change: fn(String) -> Msg| {
        let form = if !state.submitting {
            Form::new(placeholder, value, on_change)
        } else {
            Form::new_disabled(placeholder, value)
        };
        form.size(P1_SIZE).padding(10)
    };

    let roles: Row<Msg> = Row::new().spacing(10).width(Length::Fill);
    let role_selector = Role::ALL.iter().fold(roles, |row, role| {
        let btn = if *role == draft.role {
            button::menu_active(role.as_str())
        } else {
            button::menu(role.as_str())
        };
        row.push(btn.on_press_maybe(
            (!state.submitting).then_some(Msg::RegisterSelectRole(*role)),
        ))
    });

    let content = Column::new()
        .spacing(15)
        .push(
            Container::new(text::h2("Create Your Account").style(theme::text::accent))
                .center_x(Length::Fill),
        )
        .push(form::labelled(
            "Username",
            field("Username", &handle, Msg::RegisterUpdateHandle)
                .confirmed(handle_available == Some(true)),
        ))
        .push_maybe(
            state
                .handle_message()
                .filter(|_| handle_available == Some(true))
                .map(|message| text::caption(message).style(theme::text::success)),
        )
        .push(form::labelled(
            "Full Name",
            field(
                "Full Name",
                &Value::new(&draft.display_name),
                Msg::RegisterUpdateDisplayName,
            ),
        ))
        .push(form::labelled(
            "Phone",
            field("Phone (optional)", &Value::new(&draft.phone), Msg::RegisterUpdatePhone),
        ))
        .push(
            Row::new()
                .spacing(10)
                .align_y(Alignment::Center)
                .push(
                    Container::new(form::labelled(
                        "Email",
                        field("Email", &address, Msg::RegisterUpdateAddress)
                            .confirmed(state.address_confirmed()),
                    ))
                    .width(Length::Fill),
                )
                .push_maybe(
                    state
                        .address_confirmed()
                        .then(|| text::h4_bold("\u{2713}").style(theme::text::success)),
                ),
        )
        .push(form::labelled(
            "Password",
            field(
                "Password",
                &Value::new(&draft.secret),
                Msg::RegisterUpdateSecret,
            )
            .secure(),
        ))
        .push(
            Column::new()
                .spacing(5)
                .push(text::p2_regular("Role").style(theme::text::secondary))
                .push(role_selector),
        )
        .push_maybe(state.error.map(notification::error))
        .push(
            button::primary(if state.submitting {
                "Registering..."
            } else {
                "Register"
            })
            .on_press_maybe(state.can_submit().then_some(Msg::RegisterSubmit)),
        )
        .push(
            Container::new(
                button::link("Already have an account? Login")
                    .on_press(Msg::Navigate(Page::Login)),
            )
            .center_x(Length::Fill),
        );

    form_card(content)
}
