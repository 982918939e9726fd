pub mod message;
mod update;

use std::sync::Arc;

use craftique::{
    directory::Directory,
    login::LoginForm,
    navigation::Navigator,
    registration::RegistrationForm,
    reset::ResetForm,
    router::{self, View},
    session::SessionStore,
};
use craftique_ui::widget::Element;

pub use message::Msg;

use crate::views;

/// The whole client state, mutated only by [`State::update`].
pub struct State {
    pub directory: Arc<dyn Directory>,
    pub session: SessionStore,
    pub navigator: Navigator,
    pub login: LoginForm,
    pub registration: RegistrationForm,
    pub reset: ResetForm,
}

impl State {
    pub fn new(directory: Arc<dyn Directory>, countdown_secs: u32) -> Self {
        Self {
            directory,
            session: SessionStore::new(),
            navigator: Navigator::new(),
            login: LoginForm::new(),
            registration: RegistrationForm::new(),
            reset: ResetForm::new(countdown_secs),
        }
    }

    pub fn current_view(&self) -> View {
        router::dispatch(self.navigator.current(), self.session.is_authenticated())
    }

    /// True while the reset confirmation counts down on screen.
    pub fn is_counting_down(&self) -> bool {
        self.current_view() == View::ForgotPassword && self.reset.is_counting()
    }

    pub fn view(&self) -> Element<'_, Msg> {
        let identity = self.session.identity();
        let content = match self.current_view() {
            View::Landing => views::home::landing_view(identity.as_ref()),
            View::Dashboard => views::dashboard::dashboard_view(identity.as_ref()),
            View::Login => views::login::login_view(&self.login),
            View::Register => views::register::register_view(&self.registration),
            View::ForgotPassword => views::reset::reset_view(&self.reset),
            View::Placeholder(page) => views::placeholder::placeholder_view(page),
        };
        views::layout(identity.as_ref(), content)
    }
}
