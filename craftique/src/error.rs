use thiserror::Error;

/// Errors surfaced inline by the forms. None of them is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Invalid username or password.")]
    InvalidCredentials,
    #[error("Enter a valid email")]
    AddressFormatInvalid,
    #[error("Email already exists")]
    AddressAlreadyRegistered,
    #[error("Username already exists")]
    HandleUnavailable,
    #[error("Email not found. Please check the address and try again.")]
    AddressNotFound,
}
