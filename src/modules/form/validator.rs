use log::debug;

use super::events::SubmitEvent;
use super::fields::{FieldId, Notifier, PasswordInput};
use super::rules::{validate_confirmation, validate_password};
use crate::modules::utils::logging::log_form_event;
use crate::{SUBMISSION_BLOCKED_LOG, SUCCESS_NOTICE};

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Both checks passed, the user was notified and the form reset
    Accepted,
    /// At least one check failed; the error slots say which
    Blocked,
}

/// Validates the update-password form. The two inputs and the notifier are
/// injected so any host (terminal, GUI, test double) can drive it.
pub struct FormValidator<F, N> {
    new_password: F,
    confirm_password: F,
    notifier: N,
}

impl<F: PasswordInput, N: Notifier> FormValidator<F, N> {
    pub fn new(new_password: F, confirm_password: F, notifier: N) -> Self {
        Self {
            new_password,
            confirm_password,
            notifier,
        }
    }

    /// Runs the ordered rule list on the new password and refreshes its
    /// error slot. Returns true when the slot ends up empty.
    pub fn validate_new_password(&mut self) -> bool {
        let message = match validate_password(&self.new_password.value()) {
            Ok(()) => String::new(),
            Err(e) => e.to_string(),
        };
        debug!("{} field checked: valid={}", FieldId::New, message.is_empty());

        self.new_password.set_error(&message);
        message.is_empty()
    }

    /// Checks the confirmation is present and equal to the new password,
    /// then refreshes its error slot. Complexity rules are not re-run.
    pub fn validate_confirm_password(&mut self) -> bool {
        let message = match validate_confirmation(
            &self.new_password.value(),
            &self.confirm_password.value(),
        ) {
            Ok(()) => String::new(),
            Err(e) => e.to_string(),
        };
        debug!("{} field checked: valid={}", FieldId::Confirm, message.is_empty());

        self.confirm_password.set_error(&message);
        message.is_empty()
    }

    /// Submit handler. The default action is always suppressed, and both
    /// checks always run so both slots are refreshed together.
    pub fn handle_submit(&mut self, event: &mut SubmitEvent) -> SubmitOutcome {
        event.prevent_default();

        let new_ok = self.validate_new_password();
        let confirm_ok = self.validate_confirm_password();

        if new_ok && confirm_ok {
            self.notifier.notify(SUCCESS_NOTICE);
            self.new_password.reset();
            self.confirm_password.reset();
            log_form_event("submit", true, None);
            SubmitOutcome::Accepted
        } else {
            let failed = match (new_ok, confirm_ok) {
                (false, false) => "new,confirm",
                (false, true) => "new",
                _ => "confirm",
            };
            let details = format!("{} failed={}", SUBMISSION_BLOCKED_LOG, failed);
            log_form_event("submit", false, Some(details.as_str()));
            SubmitOutcome::Blocked
        }
    }

    pub fn field(&self, id: FieldId) -> &F {
        match id {
            FieldId::New => &self.new_password,
            FieldId::Confirm => &self.confirm_password,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut F {
        match id {
            FieldId::New => &mut self.new_password,
            FieldId::Confirm => &mut self.confirm_password,
        }
    }

    /// Both inputs at once, new password first
    pub fn fields_mut(&mut self) -> (&mut F, &mut F) {
        (&mut self.new_password, &mut self.confirm_password)
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}
