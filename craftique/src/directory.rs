//! The user directory: the backend contract the workflows are written against, and the fixed
//! in-memory implementation used until a real backend exists.

use async_trait::async_trait;
use tracing::debug;

use crate::{
    account::{Account, Identity, Role},
    config::Timings,
    error::FormError,
    registration::RegistrationDraft,
};

pub const MASK_CHAR: char = '*';

/// Answer of an address check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressCheck {
    pub format_valid: bool,
    pub exists: bool,
}

/// Answer of a password reset request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetOutcome {
    pub found: bool,
    pub masked_address: Option<String>,
}

#[async_trait]
pub trait Directory: Send + Sync {
    async fn authenticate(&self, handle: &str, secret: &str) -> Result<Identity, FormError>;

    async fn check_handle_available(&self, handle: &str) -> bool;

    async fn validate_address(&self, address: &str) -> AddressCheck;

    async fn register(&self, draft: &RegistrationDraft) -> Result<(), FormError>;

    async fn request_password_reset(&self, address: &str) -> ResetOutcome;
}

/// Returns true if the address is a `local@domain.tld` email.
pub fn is_valid_address(address: &str) -> bool {
    email_address::EmailAddress::parse_with_options(
        address,
        email_address::Options::default().with_required_tld(),
    )
    .is_ok()
}

/// Hides the middle of the local part of an address, keeping its first and last two characters.
/// Local parts of four characters or less are left untouched.
pub fn mask_address(address: &str) -> String {
    let (local, domain) = match address.rsplit_once('@') {
        Some((local, domain)) => (local, Some(domain)),
        None => (address, None),
    };

    let chars: Vec<char> = local.chars().collect();
    let masked: String = if chars.len() > 4 {
        chars[..2]
            .iter()
            .copied()
            .chain(std::iter::repeat(MASK_CHAR).take(chars.len() - 4))
            .chain(chars[chars.len() - 2..].iter().copied())
            .collect()
    } else {
        local.to_string()
    };

    match domain {
        Some(domain) => format!("{}@{}", masked, domain),
        None => masked,
    }
}

/// Directory answering from a fixed set of accounts after simulated latencies.
#[derive(Debug, Clone)]
pub struct MockDirectory {
    accounts: Vec<Account>,
    timings: Timings,
}

impl MockDirectory {
    pub fn new(timings: Timings) -> Self {
        Self::with_accounts(seed_accounts(), timings)
    }

    pub fn with_accounts(accounts: Vec<Account>, timings: Timings) -> Self {
        Self { accounts, timings }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    fn handle_exists(&self, handle: &str) -> bool {
        let folded = handle.to_lowercase();
        self.accounts
            .iter()
            .any(|account| account.handle.to_lowercase() == folded)
    }

    fn address_exists(&self, address: &str) -> bool {
        let folded = address.trim().to_lowercase();
        self.accounts
            .iter()
            .any(|account| account.address.to_lowercase() == folded)
    }
}

impl Default for MockDirectory {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}

#[async_trait]
impl Directory for MockDirectory {
    async fn authenticate(&self, handle: &str, secret: &str) -> Result<Identity, FormError> {
        self.accounts
            .iter()
            .find(|account| account.handle == handle && account.secret == secret)
            .map(Account::identity)
            .ok_or(FormError::InvalidCredentials)
    }

    async fn check_handle_available(&self, handle: &str) -> bool {
        tokio::time::sleep(self.timings.check_delay()).await;
        !self.handle_exists(handle)
    }

    async fn validate_address(&self, address: &str) -> AddressCheck {
        if !is_valid_address(address) {
            return AddressCheck {
                format_valid: false,
                exists: false,
            };
        }
        tokio::time::sleep(self.timings.check_delay()).await;
        AddressCheck {
            format_valid: true,
            exists: self.address_exists(address),
        }
    }

    async fn register(&self, draft: &RegistrationDraft) -> Result<(), FormError> {
        debug!("registering user {}", draft.handle);
        tokio::time::sleep(self.timings.submit_delay()).await;
        if self.handle_exists(&draft.handle) {
            return Err(FormError::HandleUnavailable);
        }
        if self.address_exists(&draft.address) {
            return Err(FormError::AddressAlreadyRegistered);
        }
        Ok(())
    }

    async fn request_password_reset(&self, address: &str) -> ResetOutcome {
        if self.address_exists(address) {
            ResetOutcome {
                found: true,
                masked_address: Some(mask_address(address.trim())),
            }
        } else {
            ResetOutcome {
                found: false,
                masked_address: None,
            }
        }
    }
}

fn seed_accounts() -> Vec<Account> {
    vec![
        Account::new(
            "artisan",
            "Amara Sinha",
            "amara.sinha@craftique.com",
            "pass",
            Role::Artisan,
        ),
        Account::new(
            "buyer",
            "Hassan Khan",
            "hassan.khan@craftique.com",
            "pass",
            Role::Buyer,
        ),
    ]
}
