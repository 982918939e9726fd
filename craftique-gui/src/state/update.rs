use craftique::{
    login::{self, LoginForm},
    navigation::Page,
    registration::{self, FieldCheck},
    reset,
    router::View,
};
use iced::Task;
use tracing::debug;

use super::{message::Msg, State};

// Update routing logic
impl State {
    #[rustfmt::skip]
    pub fn update(&mut self, message: Msg) -> Task<Msg> {
        if !message.is_sensitive() {
            debug!("{:?}", message);
        }
        match message {
            // Navigation
            Msg::Navigate(page) => self.on_navigate(page),
            Msg::Logout => self.session.end_session(),

            // Login
            Msg::LoginUpdateHandle(handle) => self.login.on_update_handle(handle),
            Msg::LoginUpdateSecret(secret) => self.login.on_update_secret(secret),
            Msg::LoginSubmit => return self.on_login_submit(),
            Msg::LoginResult(res) => self.login.on_authenticated(res, &self.session, &mut self.navigator),

            // Registration
            Msg::RegisterUpdateHandle(v) => {
                let check = self.registration.on_update_handle(v);
                return self.schedule_check(check);
            }
            Msg::RegisterUpdateAddress(v) => {
                let check = self.registration.on_update_address(v);
                return self.schedule_check(check);
            }
            Msg::RegisterUpdateDisplayName(v) => self.registration.on_update_display_name(v),
            Msg::RegisterUpdatePhone(v) => self.registration.on_update_phone(v),
            Msg::RegisterUpdateSecret(v) => self.registration.on_update_secret(v),
            Msg::RegisterSelectRole(role) => self.registration.on_select_role(role),
            Msg::RegisterCheckResult(outcome) => {
                self.registration.apply(outcome);
            }
            Msg::RegisterSubmit => return self.on_register_submit(),
            Msg::RegisterResult(res) => self.on_register_result(res),

            // Password reset
            Msg::ResetUpdateAddress(address) => self.reset.on_update_address(address),
            Msg::ResetSubmit => return self.on_reset_submit(),
            Msg::ResetResult(sequence, outcome) => self.reset.on_reset_result(sequence, outcome),
            Msg::ResetGoToLogin => self.reset.go_to_login(&mut self.navigator),
            Msg::CountdownTick => self.reset.on_tick(&mut self.navigator),
        }
        Task::none()
    }

    /// Forms are emptied when their view is left.
    fn on_navigate(&mut self, page: Page) {
        let from = self.current_view();
        self.navigator.navigate(page.token());
        let to = self.current_view();
        if from != to {
            match from {
                View::ForgotPassword => self.reset.teardown(),
                View::Register => self.registration.teardown(),
                View::Login => self.login = LoginForm::new(),
                _ => {}
            }
        }
        if to != View::Login {
            self.login.notice = None;
        }
    }

    fn on_login_submit(&mut self) -> Task<Msg> {
        if let Some(credentials) = self.login.begin_submit() {
            let directory = self.directory.clone();
            Task::perform(
                async move { login::authenticate(directory.as_ref(), credentials).await },
                Msg::LoginResult,
            )
        } else {
            Task::none()
        }
    }

    fn schedule_check(&self, check: Option<FieldCheck>) -> Task<Msg> {
        if let Some(check) = check {
            let directory = self.directory.clone();
            Task::perform(
                async move { registration::run_check(directory.as_ref(), check).await },
                Msg::RegisterCheckResult,
            )
        } else {
            Task::none()
        }
    }

    fn on_register_submit(&mut self) -> Task<Msg> {
        if let Some(draft) = self.registration.begin_submit() {
            let directory = self.directory.clone();
            Task::perform(
                async move { registration::register(directory.as_ref(), draft).await },
                Msg::RegisterResult,
            )
        } else {
            Task::none()
        }
    }

    fn on_register_result(&mut self, res: Result<(), craftique::FormError>) {
        if let Some(ack) = self.registration.on_submitted(res, &mut self.navigator) {
            self.login = LoginForm {
                notice: Some(ack),
                ..LoginForm::new()
            };
        }
    }

    fn on_reset_submit(&mut self) -> Task<Msg> {
        if let Some(request) = self.reset.begin_submit() {
            let directory = self.directory.clone();
            Task::perform(
                async move { reset::request_reset(directory.as_ref(), request).await },
                |(sequence, outcome)| Msg::ResetResult(sequence, outcome),
            )
        } else {
            Task::none()
        }
    }
}
