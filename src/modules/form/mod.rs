pub mod controller;
pub mod events;
pub mod fields;
pub mod rules;
pub mod toggle;
pub mod validator;

// Re-export the main types and functions
pub use controller::{FormState, PasswordForm};
pub use events::{EventDispatcher, FormEvent, FormEventKind, SubmitEvent};
pub use fields::{FieldId, MemoryField, Notifier, PasswordInput, Visibility};
pub use rules::{validate_confirmation, validate_password, ConfirmationError, PasswordRuleError};
pub use toggle::VisibilityToggle;
pub use validator::{FormValidator, SubmitOutcome};
