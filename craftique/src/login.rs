use tracing::debug;

use crate::{
    account::Identity,
    directory::Directory,
    error::FormError,
    navigation::{Navigator, Page},
    session::SessionStore,
};

/// Handle and secret submitted by the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub handle: String,
    pub secret: String,
}

/// Login form state.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub handle: String,
    pub secret: String,
    pub error: Option<FormError>,
    /// One-shot message shown above the form, e.g. after a registration.
    pub notice: Option<&'static str>,
    pub processing: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_update_handle(&mut self, handle: String) {
        self.handle = handle;
    }

    pub fn on_update_secret(&mut self, secret: String) {
        self.secret = secret;
    }

    pub fn can_submit(&self) -> bool {
        !self.processing
    }

    /// Clears the previous error and returns the credentials to authenticate.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.processing {
            return None;
        }
        self.error = None;
        self.notice = None;
        self.processing = true;
        Some(Credentials {
            handle: self.handle.clone(),
            secret: self.secret.clone(),
        })
    }

    /// Opens the session and goes to the dashboard, or keeps a single error.
    pub fn on_authenticated(
        &mut self,
        result: Result<Identity, FormError>,
        session: &SessionStore,
        navigator: &mut Navigator,
    ) {
        self.processing = false;
        match result {
            Ok(identity) => {
                *self = Self::default();
                session.begin_session(identity);
                navigator.navigate(Page::Dashboard.token());
            }
            Err(e) => {
                debug!("login refused: {}", e);
                self.error = Some(e);
            }
        }
    }
}

pub async fn authenticate(
    directory: &dyn Directory,
    credentials: Credentials,
) -> Result<Identity, FormError> {
    directory
        .authenticate(&credentials.handle, &credentials.secret)
        .await
}

/// Runs a whole login: authenticate and apply the result.
pub async fn submit_login(
    form: &mut LoginForm,
    directory: &dyn Directory,
    session: &SessionStore,
    navigator: &mut Navigator,
) {
    if let Some(credentials) = form.begin_submit() {
        let result = authenticate(directory, credentials).await;
        form.on_authenticated(result, session, navigator);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{account::Role, directory::MockDirectory, router, router::View};

    async fn login(handle: &str, secret: &str) -> (LoginForm, SessionStore, Navigator) {
        let directory = MockDirectory::default();
        let session = SessionStore::new();
        let mut navigator = Navigator::new();
        navigator.navigate("login");
        let mut form = LoginForm::new();
        form.on_update_handle(handle.to_string());
        form.on_update_secret(secret.to_string());
        submit_login(&mut form, &directory, &session, &mut navigator).await;
        (form, session, navigator)
    }

    #[tokio::test(start_paused = true)]
    async fn correct_credentials_open_the_dashboard() {
        let (form, session, navigator) = login("artisan", "pass").await;
        assert_eq!(form.error, None);
        assert!(form.handle.is_empty());
        let identity = session.identity().unwrap();
        assert_eq!(identity.handle, "artisan");
        assert_eq!(identity.display_name, "Amara Sinha");
        assert_eq!(identity.role, Role::Artisan);
        assert_eq!(navigator.current(), "dashboard");
        assert_eq!(
            router::dispatch(navigator.current(), session.is_authenticated()),
            View::Dashboard
        );
    }

    #[tokio::test(start_paused = true)]
    async fn any_mismatch_keeps_a_single_error() {
        for (handle, secret) in [
            ("artisan", "wrong"),
            ("nobody", "pass"),
            ("ARTISAN", "pass"),
            ("", ""),
        ] {
            let (form, session, navigator) = login(handle, secret).await;
            assert_eq!(form.error, Some(FormError::InvalidCredentials));
            assert_eq!(
                form.error.unwrap().to_string(),
                "Invalid username or password."
            );
            assert!(!session.is_authenticated());
            assert_eq!(navigator.current(), "login");
            assert!(!form.processing);
        }
    }

    #[test]
    fn resubmitting_clears_the_previous_error() {
        let mut form = LoginForm::new();
        form.error = Some(FormError::InvalidCredentials);
        form.notice = Some("hello");
        let credentials = form.begin_submit().unwrap();
        assert_eq!(form.error, None);
        assert_eq!(form.notice, None);
        assert_eq!(credentials.handle, "");
        // No double submission while processing.
        assert!(form.begin_submit().is_none());
    }
}
