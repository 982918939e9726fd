//! Registration form and its per-field asynchronous validation.
//!
//! Every edit of the handle or the address issues a new sequence number for that field. A check
//! carries the number it was issued with, and its result is only applied if no newer edit happened
//! in the meantime. Superseded checks still run to completion, their results are dropped.

use tracing::debug;

use crate::{
    account::Role,
    directory::{is_valid_address, AddressCheck, Directory},
    error::FormError,
    navigation::{Navigator, Page},
};

pub const REGISTRATION_ACK: &str = "Registration Successful! Please log in.";

/// In-progress registration data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub handle: String,
    pub display_name: String,
    pub phone: String,
    pub address: String,
    pub secret: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Handle,
    Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleStatus {
    pub available: bool,
}

impl HandleStatus {
    pub fn message(&self) -> &'static str {
        if self.available {
            "Username available"
        } else {
            "Username already exists"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressStatus {
    pub format_valid: bool,
    /// Unknown until the existence check answered.
    pub already_exists: Option<bool>,
}

impl AddressStatus {
    pub fn format_invalid() -> Self {
        Self {
            format_valid: false,
            already_exists: None,
        }
    }

    pub fn is_usable(&self) -> bool {
        self.format_valid && self.already_exists == Some(false)
    }

    pub fn error(&self) -> Option<FormError> {
        if !self.format_valid {
            Some(FormError::AddressFormatInvalid)
        } else if self.already_exists == Some(true) {
            Some(FormError::AddressAlreadyRegistered)
        } else {
            None
        }
    }

    pub fn message(&self) -> String {
        self.error().map(|e| e.to_string()).unwrap_or_default()
    }
}

/// A check to run against the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    pub field: Field,
    pub sequence: u64,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckResult {
    Handle { available: bool },
    Address(AddressCheck),
}

/// A finished check, tagged with the sequence number it was issued with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    pub field: Field,
    pub sequence: u64,
    pub result: CheckResult,
}

pub async fn run_check(directory: &dyn Directory, check: FieldCheck) -> CheckOutcome {
    let result = match check.field {
        Field::Handle => CheckResult::Handle {
            available: directory.check_handle_available(&check.value).await,
        },
        Field::Address => CheckResult::Address(directory.validate_address(&check.value).await),
    };
    CheckOutcome {
        field: check.field,
        sequence: check.sequence,
        result,
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub draft: RegistrationDraft,
    pub handle_status: Option<HandleStatus>,
    pub address_status: Option<AddressStatus>,
    pub submitting: bool,
    pub error: Option<FormError>,
    handle_sequence: u64,
    address_sequence: u64,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_update_handle(&mut self, handle: String) -> Option<FieldCheck> {
        self.handle_sequence += 1;
        self.draft.handle = handle;
        if self.draft.handle.is_empty() {
            self.handle_status = None;
            return None;
        }
        Some(FieldCheck {
            field: Field::Handle,
            sequence: self.handle_sequence,
            value: self.draft.handle.clone(),
        })
    }

    pub fn on_update_address(&mut self, address: String) -> Option<FieldCheck> {
        self.address_sequence += 1;
        self.draft.address = address;
        if !is_valid_address(&self.draft.address) {
            self.address_status = Some(AddressStatus::format_invalid());
            return None;
        }
        Some(FieldCheck {
            field: Field::Address,
            sequence: self.address_sequence,
            value: self.draft.address.clone(),
        })
    }

    pub fn on_update_display_name(&mut self, display_name: String) {
        self.draft.display_name = display_name;
    }

    pub fn on_update_phone(&mut self, phone: String) {
        self.draft.phone = phone;
    }

    pub fn on_update_secret(&mut self, secret: String) {
        self.draft.secret = secret;
    }

    pub fn on_select_role(&mut self, role: Role) {
        self.draft.role = role;
    }

    /// Applies a check result if it answers the latest edit of its field.
    /// Returns false if the result was stale and dropped.
    pub fn apply(&mut self, outcome: CheckOutcome) -> bool {
        let latest = match outcome.field {
            Field::Handle => self.handle_sequence,
            Field::Address => self.address_sequence,
        };
        if outcome.sequence != latest {
            debug!(
                "dropping stale {:?} check {} (latest is {})",
                outcome.field, outcome.sequence, latest
            );
            return false;
        }
        match outcome.result {
            CheckResult::Handle { available } => {
                self.handle_status = Some(HandleStatus { available });
            }
            CheckResult::Address(check) => {
                self.address_status = Some(AddressStatus {
                    format_valid: check.format_valid,
                    already_exists: check.format_valid.then_some(check.exists),
                });
            }
        }
        true
    }

    pub fn is_valid(&self) -> bool {
        let draft = &self.draft;
        !draft.handle.is_empty()
            && !draft.display_name.is_empty()
            && !draft.address.is_empty()
            && !draft.secret.is_empty()
            && self.handle_status.map(|s| s.available).unwrap_or(false)
            && self.address_status.map(|s| s.is_usable()).unwrap_or(false)
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.submitting
    }

    /// Message under the handle input, if any.
    pub fn handle_message(&self) -> Option<&'static str> {
        if self.draft.handle.is_empty() {
            return None;
        }
        self.handle_status.map(|s| s.message())
    }

    /// Error under the address input, if any.
    pub fn address_error(&self) -> Option<FormError> {
        if self.draft.address.is_empty() {
            return None;
        }
        self.address_status.and_then(|s| s.error())
    }

    /// True once the address is known to be valid and unused.
    pub fn address_confirmed(&self) -> bool {
        !self.draft.address.is_empty() && self.address_status.map(|s| s.is_usable()) == Some(true)
    }

    pub fn begin_submit(&mut self) -> Option<RegistrationDraft> {
        if !self.can_submit() {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some(self.draft.clone())
    }

    /// Empties the form. Sequence numbers keep growing so checks still in flight are dropped.
    pub fn teardown(&mut self) {
        *self = Self {
            handle_sequence: self.handle_sequence + 1,
            address_sequence: self.address_sequence + 1,
            ..Self::default()
        };
    }

    /// On success the form is reset, the login page is shown and the acknowledgment returned.
    pub fn on_submitted(
        &mut self,
        result: Result<(), FormError>,
        navigator: &mut Navigator,
    ) -> Option<&'static str> {
        if !self.submitting {
            debug!("dropping registration result, no submission pending");
            return None;
        }
        self.submitting = false;
        match result {
            Ok(()) => {
                self.teardown();
                navigator.navigate(Page::Login.token());
                Some(REGISTRATION_ACK)
            }
            Err(e) => {
                debug!("registration refused: {}", e);
                self.error = Some(e);
                None
            }
        }
    }
}

pub async fn register(
    directory: &dyn Directory,
    draft: RegistrationDraft,
) -> Result<(), FormError> {
    directory.register(&draft).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::MockDirectory;

    fn outcome(check: &FieldCheck, result: CheckResult) -> CheckOutcome {
        CheckOutcome {
            field: check.field,
            sequence: check.sequence,
            result,
        }
    }

    fn valid_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        let handle = form.on_update_handle("woodworker".to_string()).unwrap();
        assert!(form.apply(outcome(&handle, CheckResult::Handle { available: true })));
        form.on_update_display_name("Wood Worker".to_string());
        let address = form
            .on_update_address("wood@craftique.com".to_string())
            .unwrap();
        assert!(form.apply(outcome(
            &address,
            CheckResult::Address(AddressCheck {
                format_valid: true,
                exists: false
            })
        )));
        form.on_update_secret("s3cret".to_string());
        form
    }

    #[test]
    fn submit_enabled_only_when_everything_holds() {
        let form = valid_form();
        assert!(form.is_valid());
        assert!(form.can_submit());

        let mut f = form.clone();
        f.on_update_display_name(String::new());
        assert!(!f.can_submit());

        let mut f = form.clone();
        f.on_update_secret(String::new());
        assert!(!f.can_submit());

        let mut f = form.clone();
        assert!(f.on_update_handle(String::new()).is_none());
        assert!(!f.can_submit());

        let mut f = form.clone();
        let check = f.on_update_handle("artisan".to_string()).unwrap();
        f.apply(outcome(&check, CheckResult::Handle { available: false }));
        assert!(!f.can_submit());

        let mut f = form.clone();
        assert!(f.on_update_address("wood@".to_string()).is_none());
        assert_eq!(f.address_status, Some(AddressStatus::format_invalid()));
        assert!(!f.can_submit());

        let mut f = form.clone();
        let check = f
            .on_update_address("amara.sinha@craftique.com".to_string())
            .unwrap();
        f.apply(outcome(
            &check,
            CheckResult::Address(AddressCheck {
                format_valid: true,
                exists: true,
            }),
        ));
        assert_eq!(f.address_error(), Some(FormError::AddressAlreadyRegistered));
        assert!(!f.can_submit());

        // Phone is optional.
        let mut f = form.clone();
        f.on_update_phone(String::new());
        assert!(f.can_submit());

        let mut f = form;
        assert!(f.begin_submit().is_some());
        assert!(f.is_valid());
        assert!(!f.can_submit());
        assert!(f.begin_submit().is_none());
    }

    #[test]
    fn pending_checks_keep_submit_disabled() {
        let mut form = RegistrationForm::new();
        form.on_update_handle("woodworker".to_string());
        form.on_update_display_name("Wood Worker".to_string());
        form.on_update_address("wood@craftique.com".to_string());
        form.on_update_secret("s3cret".to_string());
        assert!(!form.can_submit());
    }

    #[test]
    fn stale_results_are_dropped() {
        let mut form = RegistrationForm::new();
        let first = form.on_update_handle("artisan".to_string()).unwrap();
        let second = form.on_update_handle("artisan42".to_string()).unwrap();

        // The newer check answers first, then the older one arrives late.
        assert!(form.apply(outcome(&second, CheckResult::Handle { available: true })));
        assert!(!form.apply(outcome(&first, CheckResult::Handle { available: false })));
        assert_eq!(form.handle_status, Some(HandleStatus { available: true }));
        assert_eq!(form.handle_message(), Some("Username available"));

        let pending = form
            .on_update_address("amara.sinha@craftique.com".to_string())
            .unwrap();
        // Typing an invalid address supersedes the pending existence check.
        assert!(form.on_update_address("amara.sinha@".to_string()).is_none());
        assert!(!form.apply(outcome(
            &pending,
            CheckResult::Address(AddressCheck {
                format_valid: true,
                exists: true
            })
        )));
        assert_eq!(form.address_error(), Some(FormError::AddressFormatInvalid));
    }

    #[test]
    fn messages_follow_the_inputs() {
        let mut form = RegistrationForm::new();
        assert_eq!(form.handle_message(), None);
        assert_eq!(form.address_error(), None);

        let check = form.on_update_handle("artisan".to_string()).unwrap();
        assert_eq!(form.handle_message(), None);
        form.apply(outcome(&check, CheckResult::Handle { available: false }));
        assert_eq!(form.handle_message(), Some("Username already exists"));
        form.on_update_handle(String::new());
        assert_eq!(form.handle_message(), None);

        form.on_update_address("nope".to_string());
        assert_eq!(
            form.address_error().map(|e| e.to_string()),
            Some("Enter a valid email".to_string())
        );
        assert!(!form.address_confirmed());
        form.on_update_address(String::new());
        assert_eq!(form.address_error(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn checks_against_the_directory() {
        let directory = MockDirectory::default();
        let mut form = RegistrationForm::new();

        let check = form.on_update_handle("Buyer".to_string()).unwrap();
        let result = run_check(&directory, check).await;
        assert!(form.apply(result));
        assert_eq!(form.handle_status, Some(HandleStatus { available: false }));

        let check = form
            .on_update_address("hassan.khan@craftique.com".to_string())
            .unwrap();
        assert!(form.apply(run_check(&directory, check).await));
        assert_eq!(
            form.address_status,
            Some(AddressStatus {
                format_valid: true,
                already_exists: Some(true)
            })
        );
        assert_eq!(form.address_status.unwrap().message(), "Email already exists");

        let check = form
            .on_update_address("new.maker@craftique.com".to_string())
            .unwrap();
        assert!(form.apply(run_check(&directory, check).await));
        assert!(form.address_confirmed());
        assert_eq!(form.address_status.unwrap().message(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn successful_submission_goes_to_login() {
        let directory = MockDirectory::default();
        let mut navigator = Navigator::new();
        navigator.navigate("register");
        let mut form = valid_form();

        let draft = form.begin_submit().unwrap();
        assert!(form.submitting);
        let start = tokio::time::Instant::now();
        let result = register(&directory, draft).await;
        assert!(start.elapsed() >= std::time::Duration::from_millis(1500));

        assert_eq!(form.on_submitted(result, &mut navigator), Some(REGISTRATION_ACK));
        assert_eq!(navigator.current(), "login");
        assert!(!form.submitting);
        assert_eq!(form.draft, RegistrationDraft::default());
    }

    #[test]
    fn failed_submission_stays() {
        let mut navigator = Navigator::new();
        navigator.navigate("register");
        let mut form = valid_form();
        form.begin_submit().unwrap();
        assert_eq!(
            form.on_submitted(Err(FormError::HandleUnavailable), &mut navigator),
            None
        );
        assert_eq!(navigator.current(), "register");
        assert_eq!(form.error, Some(FormError::HandleUnavailable));
        assert!(form.can_submit());
    }

    #[test]
    fn checks_from_before_a_submission_stay_stale() {
        let mut navigator = Navigator::new();
        let mut form = valid_form();
        // Still in flight when the form is submitted.
        let old = form.on_update_handle("artisan".to_string()).unwrap();
        form.begin_submit().unwrap();
        form.on_submitted(Ok(()), &mut navigator).unwrap();

        let fresh = form.on_update_handle("newmaker".to_string()).unwrap();
        assert!(fresh.sequence > old.sequence);
        assert!(!form.apply(outcome(&old, CheckResult::Handle { available: false })));
        assert_eq!(form.handle_status, None);
        assert!(form.apply(outcome(&fresh, CheckResult::Handle { available: true })));
        assert_eq!(form.handle_message(), Some("Username available"));
    }

    #[test]
    fn teardown_drops_pending_work() {
        let mut navigator = Navigator::new();
        navigator.navigate("register");
        let mut form = valid_form();
        let handle = form.on_update_handle("potter".to_string()).unwrap();
        let address = form.on_update_address("potter@craftique.com".to_string()).unwrap();

        form.teardown();
        assert_eq!(form.draft, RegistrationDraft::default());
        assert!(!form.apply(outcome(&handle, CheckResult::Handle { available: true })));
        assert!(!form.apply(outcome(
            &address,
            CheckResult::Address(AddressCheck {
                format_valid: true,
                exists: false,
            })
        )));
        assert_eq!(form.handle_status, None);
        assert_eq!(form.address_status, None);

        // A submission answered after leaving the page does nothing.
        assert_eq!(form.on_submitted(Ok(()), &mut navigator), None);
        assert_eq!(navigator.current(), "register");
    }
}
