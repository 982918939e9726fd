use tracing::{debug, info};

use crate::{
    directory::{is_valid_address, Directory, ResetOutcome},
    error::FormError,
    navigation::{Navigator, Page},
};

/// Seconds left before the confirmation page goes back to login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(secs: u32) -> Self {
        Self { remaining: secs }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Decrements the countdown. Returns true on the tick that reaches zero, and only on that one.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetStep {
    Input,
    Success { masked: String, countdown: Countdown },
}

/// A lookup to run, tagged with the request it answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetRequest {
    pub sequence: u64,
    pub address: String,
}

#[derive(Debug, Clone)]
pub struct ResetForm {
    pub address: String,
    pub step: ResetStep,
    pub error: Option<FormError>,
    pub processing: bool,
    countdown_secs: u32,
    /// Last issued request, never reset.
    sequence: u64,
}

impl ResetForm {
    /// A zero countdown is raised to one second so the confirmation always goes back to login.
    pub fn new(countdown_secs: u32) -> Self {
        Self {
            address: String::new(),
            step: ResetStep::Input,
            error: None,
            processing: false,
            countdown_secs: countdown_secs.max(1),
            sequence: 0,
        }
    }

    pub fn on_update_address(&mut self, address: String) {
        self.address = address;
    }

    /// Returns the lookup to run, or sets a format error.
    pub fn begin_submit(&mut self) -> Option<ResetRequest> {
        if self.processing {
            return None;
        }
        self.error = None;
        let address = self.address.trim();
        if !is_valid_address(address) {
            self.error = Some(FormError::AddressFormatInvalid);
            return None;
        }
        let address = address.to_string();
        self.processing = true;
        self.sequence += 1;
        Some(ResetRequest {
            sequence: self.sequence,
            address,
        })
    }

    /// Only the result of the latest request is applied. Results arriving after a teardown are dropped.
    pub fn on_reset_result(&mut self, sequence: u64, outcome: ResetOutcome) {
        if !self.processing || sequence != self.sequence {
            debug!(
                "dropping reset result {}, latest request is {}",
                sequence, self.sequence
            );
            return;
        }
        self.processing = false;
        match outcome {
            ResetOutcome {
                found: true,
                masked_address: Some(masked),
            } => {
                info!("password reset link sent to {}", masked);
                self.step = ResetStep::Success {
                    masked,
                    countdown: Countdown::new(self.countdown_secs),
                };
            }
            _ => self.error = Some(FormError::AddressNotFound),
        }
    }

    pub fn is_counting(&self) -> bool {
        matches!(&self.step, ResetStep::Success { countdown, .. } if !countdown.is_expired())
    }

    pub fn remaining(&self) -> Option<u32> {
        match &self.step {
            ResetStep::Success { countdown, .. } => Some(countdown.remaining()),
            ResetStep::Input => None,
        }
    }

    /// Advances the countdown by one second, going to login when it expires.
    pub fn on_tick(&mut self, navigator: &mut Navigator) {
        let expired = match &mut self.step {
            ResetStep::Success { countdown, .. } => countdown.tick(),
            ResetStep::Input => {
                debug!("countdown tick without a pending reset");
                return;
            }
        };
        if expired {
            self.teardown();
            navigator.navigate(Page::Login.token());
        }
    }

    pub fn go_to_login(&mut self, navigator: &mut Navigator) {
        self.teardown();
        navigator.navigate(Page::Login.token());
    }

    /// Drops any pending countdown and goes back to an empty input step.
    pub fn teardown(&mut self) {
        let sequence = self.sequence;
        *self = Self::new(self.countdown_secs);
        self.sequence = sequence;
    }
}

pub async fn request_reset(directory: &dyn Directory, request: ResetRequest) -> (u64, ResetOutcome) {
    let outcome = directory.request_password_reset(&request.address).await;
    (request.sequence, outcome)
}

/// Runs a whole reset request: format check, lookup and apply the result.
pub async fn submit_reset(form: &mut ResetForm, directory: &dyn Directory) {
    if let Some(request) = form.begin_submit() {
        let (sequence, outcome) = request_reset(directory, request).await;
        form.on_reset_result(sequence, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::DEFAULT_COUNTDOWN_SECS, directory::MockDirectory};

    async fn reset_for(address: &str) -> ResetForm {
        let directory = MockDirectory::default();
        let mut form = ResetForm::new(DEFAULT_COUNTDOWN_SECS);
        form.on_update_address(address.to_string());
        submit_reset(&mut form, &directory).await;
        form
    }

    #[test]
    fn countdown_expires_once() {
        let mut countdown = Countdown::new(3);
        assert!(!countdown.tick());
        assert!(!countdown.tick());
        assert!(countdown.tick());
        assert!(countdown.is_expired());
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn known_address_shows_the_masked_address() {
        let form = reset_for("hassan.khan@craftique.com").await;
        assert_eq!(form.error, None);
        assert!(!form.processing);
        assert_eq!(
            form.step,
            ResetStep::Success {
                masked: "ha*******an@craftique.com".to_string(),
                countdown: Countdown::new(10),
            }
        );
        assert!(form.is_counting());
        assert_eq!(form.remaining(), Some(10));
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_or_invalid_address_stays_on_input() {
        let form = reset_for("nobody@craftique.com").await;
        assert_eq!(form.step, ResetStep::Input);
        assert_eq!(form.error, Some(FormError::AddressNotFound));
        assert!(!form.processing);

        let form = reset_for("nobody").await;
        assert_eq!(form.step, ResetStep::Input);
        assert_eq!(form.error, Some(FormError::AddressFormatInvalid));
    }

    #[tokio::test(start_paused = true)]
    async fn ten_ticks_navigate_to_login_exactly_once() {
        let mut form = reset_for("amara.sinha@craftique.com").await;
        let mut navigator = Navigator::new();
        navigator.navigate("forgot-password");

        for _ in 0..9 {
            form.on_tick(&mut navigator);
            assert_eq!(navigator.current(), "forgot-password");
        }
        assert_eq!(form.remaining(), Some(1));

        form.on_tick(&mut navigator);
        assert_eq!(navigator.current(), "login");
        assert!(!form.is_counting());
        assert_eq!(form.step, ResetStep::Input);

        // Late ticks do nothing.
        navigator.navigate("register");
        form.on_tick(&mut navigator);
        assert_eq!(navigator.current(), "register");
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_cancels_the_countdown() {
        let mut form = reset_for("amara.sinha@craftique.com").await;
        let mut navigator = Navigator::new();
        navigator.navigate("forgot-password");
        for _ in 0..4 {
            form.on_tick(&mut navigator);
        }

        form.teardown();
        navigator.navigate("home");
        assert!(!form.is_counting());
        for _ in 0..20 {
            form.on_tick(&mut navigator);
        }
        assert_eq!(navigator.current(), "home");
    }

    #[test]
    fn late_result_after_teardown_is_dropped() {
        let mut form = ResetForm::new(DEFAULT_COUNTDOWN_SECS);
        form.on_update_address("amara.sinha@craftique.com".to_string());
        let request = form.begin_submit().unwrap();
        form.teardown();
        form.on_reset_result(
            request.sequence,
            ResetOutcome {
                found: true,
                masked_address: Some("am*******ha@craftique.com".to_string()),
            },
        );
        assert_eq!(form.step, ResetStep::Input);
        assert!(!form.is_counting());
    }

    #[test]
    fn late_result_does_not_answer_a_newer_request() {
        let mut form = ResetForm::new(DEFAULT_COUNTDOWN_SECS);
        form.on_update_address("amara.sinha@craftique.com".to_string());
        let first = form.begin_submit().unwrap();
        form.teardown();

        form.on_update_address("nobody@craftique.com".to_string());
        let second = form.begin_submit().unwrap();
        assert!(second.sequence > first.sequence);

        form.on_reset_result(
            first.sequence,
            ResetOutcome {
                found: true,
                masked_address: Some("am*******ha@craftique.com".to_string()),
            },
        );
        assert!(form.processing);
        assert_eq!(form.step, ResetStep::Input);

        form.on_reset_result(
            second.sequence,
            ResetOutcome {
                found: false,
                masked_address: None,
            },
        );
        assert!(!form.processing);
        assert_eq!(form.step, ResetStep::Input);
        assert_eq!(form.error, Some(FormError::AddressNotFound));
    }

    #[tokio::test(start_paused = true)]
    async fn go_to_login_now() {
        let mut form = reset_for("amara.sinha@craftique.com").await;
        let mut navigator = Navigator::new();
        form.go_to_login(&mut navigator);
        assert_eq!(navigator.current(), "login");
        assert!(!form.is_counting());
        navigator.navigate("home");
        for _ in 0..10 {
            form.on_tick(&mut navigator);
        }
        assert_eq!(navigator.current(), "home");
    }
}
