use log::debug;

use super::fields::{PasswordInput, Visibility};

/// Show-password checkbox. Mirrors its checked state onto both inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityToggle {
    mode: Visibility,
}

impl VisibilityToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Visibility {
        self.mode
    }

    pub fn is_checked(&self) -> bool {
        self.mode.is_plain()
    }

    /// Change handler: applies the checkbox state to both inputs.
    pub fn on_change<F: PasswordInput>(&mut self, checked: bool, new_password: &mut F, confirm_password: &mut F) {
        self.mode = Visibility::from_checked(checked);
        new_password.set_visibility(self.mode);
        confirm_password.set_visibility(self.mode);
        debug!("Password visibility set to {:?}", self.mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::form::fields::MemoryField;

    #[test]
    fn test_toggle_follows_checkbox() {
        let mut toggle = VisibilityToggle::new();
        let mut new = MemoryField::with_value("secret");
        let mut confirm = MemoryField::with_value("secret");

        assert_eq!(toggle.mode(), Visibility::Obscured);
        assert!(!toggle.is_checked());

        toggle.on_change(true, &mut new, &mut confirm);
        assert_eq!(new.visibility(), Visibility::Plain);
        assert_eq!(confirm.visibility(), Visibility::Plain);
        assert!(toggle.is_checked());

        toggle.on_change(false, &mut new, &mut confirm);
        assert_eq!(new.visibility(), Visibility::Obscured);
        assert_eq!(confirm.visibility(), Visibility::Obscured);

        // Repeated events with the same state are harmless
        toggle.on_change(false, &mut new, &mut confirm);
        assert_eq!(new.visibility(), Visibility::Obscured);
    }

    #[test]
    fn test_toggle_resyncs_drifted_fields() {
        let mut toggle = VisibilityToggle::new();
        let mut new = MemoryField::new();
        let mut confirm = MemoryField::new();
        confirm.set_visibility(Visibility::Plain);

        toggle.on_change(false, &mut new, &mut confirm);
        assert_eq!(new.visibility(), confirm.visibility());
        assert_eq!(confirm.visibility(), Visibility::Obscured);
    }

    #[test]
    fn test_toggle_does_not_touch_values_or_errors() {
        let mut toggle = VisibilityToggle::new();
        let mut new = MemoryField::with_value("abc");
        let mut confirm = MemoryField::with_value("abd");
        new.set_error("Password must be at least 8 characters long.");

        toggle.on_change(true, &mut new, &mut confirm);
        assert_eq!(new.value(), "abc");
        assert_eq!(confirm.value(), "abd");
        assert_eq!(new.error(), "Password must be at least 8 characters long.");
    }
}
