use log::warn;

use super::render::format_notice;
use crate::modules::form::Notifier;
use crate::modules::utils::io::read_line;

/// Prints notifications on stdout. When `wait_for_ack` is set the user has
/// to press Enter before control returns to the form.
#[derive(Debug, Clone, Copy)]
pub struct TerminalNotifier {
    wait_for_ack: bool,
}

impl TerminalNotifier {
    pub fn blocking() -> Self {
        Self { wait_for_ack: true }
    }

    pub fn non_blocking() -> Self {
        Self { wait_for_ack: false }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&mut self, message: &str) {
        println!("{}", format_notice(message));
        if self.wait_for_ack {
            println!("Press Enter to continue...");
            if let Err(e) = read_line() {
                warn!("Failed to read acknowledgement: {}", e);
            }
        }
    }
}
