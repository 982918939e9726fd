use craftique::{
    account::{Identity, Role},
    directory::ResetOutcome,
    error::FormError,
    navigation::Page,
    registration::CheckOutcome,
};

/// All application messages
#[derive(Debug, Clone)]
pub enum Msg {
    // Navigation
    Navigate(Page),
    Logout,

    // Login
    LoginUpdateHandle(String),
    LoginUpdateSecret(String),
    LoginSubmit,
    LoginResult(Result<Identity, FormError>),

    // Registration
    RegisterUpdateHandle(String),
    RegisterUpdateDisplayName(String),
    RegisterUpdatePhone(String),
    RegisterUpdateAddress(String),
    RegisterUpdateSecret(String),
    RegisterSelectRole(Role),
    RegisterCheckResult(CheckOutcome),
    RegisterSubmit,
    RegisterResult(Result<(), FormError>),

    // Password reset
    ResetUpdateAddress(String),
    ResetSubmit,
    /// Outcome of the reset request with the given sequence number.
    ResetResult(u64, ResetOutcome),
    ResetGoToLogin,
    CountdownTick,
}

impl Msg {
    /// True if the message carries a secret that must stay out of the logs.
    pub fn is_sensitive(&self) -> bool {
        matches!(
            self,
            Msg::LoginUpdateSecret(_) | Msg::RegisterUpdateSecret(_)
        )
    }
}
