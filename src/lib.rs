// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{form, terminal, utils};

// Re-export commonly used types
pub use modules::form::{FieldId, FormValidator, PasswordForm, SubmitOutcome, Visibility};
pub use modules::utils::{FormConfig, FormError};

// Constants
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const SUCCESS_NOTICE: &str = "Password Update Successful (All Validations Passed)!";
pub const SUBMISSION_BLOCKED_LOG: &str = "Form submission blocked due to validation errors.";
pub const DEFAULT_LOG_FILE: &str = "pwgate.log";
