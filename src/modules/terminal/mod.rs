pub mod notifier;
pub mod render;
pub mod user_interface;

pub use notifier::TerminalNotifier;
pub use user_interface::{handle_check_command, prompt_check_values, run_form_flow};
