use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the two password inputs on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldId {
    New,
    Confirm,
}

impl FieldId {
    /// Element id of the input itself
    pub fn input_id(&self) -> &'static str {
        match self {
            FieldId::New => "newPassword",
            FieldId::Confirm => "confirmPassword",
        }
    }

    /// Element id of the message slot bound to the input
    pub fn error_slot_id(&self) -> &'static str {
        match self {
            FieldId::New => "newPasswordErrMsg",
            FieldId::Confirm => "confirmPasswordErrMsg",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::New => "New Password",
            FieldId::Confirm => "Confirm Password",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldId::New => write!(f, "new"),
            FieldId::Confirm => write!(f, "confirm"),
        }
    }
}

/// Rendering mode of a password input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Obscured,
    Plain,
}

impl Visibility {
    /// Maps the show-password checkbox state to a mode
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Visibility::Plain
        } else {
            Visibility::Obscured
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Visibility::Plain)
    }
}

/// The capabilities the validator and toggle need from a rendered input:
/// read its value, write its error slot, read and set its rendering mode,
/// and reset it.
pub trait PasswordInput {
    fn value(&self) -> String;
    fn set_error(&mut self, message: &str);
    fn visibility(&self) -> Visibility;
    fn set_visibility(&mut self, mode: Visibility);
    /// Empties the value and any decoration left on the input
    fn reset(&mut self);
}

/// Presents a message the user has to acknowledge before the form moves on.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// An input held entirely in memory. Backs the terminal form and serves as
/// a stand-in for real widgets in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryField {
    pub value: String,
    pub error: String,
    pub visibility: Visibility,
}

impl MemoryField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    /// Renders the value as it would appear on screen
    pub fn display_value(&self, mask_char: char) -> String {
        match self.visibility {
            Visibility::Plain => self.value.clone(),
            Visibility::Obscured => std::iter::repeat(mask_char)
                .take(self.value.chars().count())
                .collect(),
        }
    }
}

impl PasswordInput for MemoryField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_error(&mut self, message: &str) {
        self.error = message.to_string();
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn set_visibility(&mut self, mode: Visibility) {
        self.visibility = mode;
    }

    fn reset(&mut self) {
        self.value.clear();
    }
}
