// src/modules/terminal/user_interface.rs
use log::{debug, info};
use std::io::{self, BufRead};

use super::notifier::TerminalNotifier;
use super::render::render_form;
use crate::modules::form::{FieldId, MemoryField, PasswordForm, SubmitOutcome, Visibility};
use crate::modules::utils::config::FormConfig;
use crate::modules::utils::error::FormError;
use crate::modules::utils::io::{prompt_with_confirmation, read_line, read_line_from, read_masked};
use crate::modules::utils::logging::log_form_event;

/// Actions offered by the interactive form menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    EnterNew,
    EnterConfirm,
    ToggleShow,
    Submit,
    Exit,
}

/// Maps a menu choice (number or command) to an action
pub fn parse_action(input: &str) -> Option<FormAction> {
    match input.trim().to_lowercase().as_str() {
        "1" | "new" => Some(FormAction::EnterNew),
        "2" | "confirm" => Some(FormAction::EnterConfirm),
        "3" | "show" | "hide" | "toggle" => Some(FormAction::ToggleShow),
        "4" | "submit" => Some(FormAction::Submit),
        "5" | "exit" | "quit" => Some(FormAction::Exit),
        _ => None,
    }
}

/// Function to show the form menu
pub fn show_form_options(show_password: bool) {
    let toggle = if show_password { "Hide" } else { "Show" };
    println!("\n1. Enter new password     (or type 'new')");
    println!("2. Confirm password       (or type 'confirm')");
    println!("3. {} password          (or type 'show')", toggle);
    println!("4. Submit                 (or type 'submit')");
    println!("5. Exit                   (or type 'exit')");
    println!("\nEnter your choice         (1-5 or command):");
}

/// Reads menu choices from `reader` until one is valid. End of input
/// counts as exit so a closed stdin cannot keep the loop alive.
pub fn read_action<R: BufRead>(reader: &mut R) -> io::Result<FormAction> {
    loop {
        let choice = match read_line_from(reader) {
            Ok(line) => line,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                debug!("Input closed, leaving the form");
                return Ok(FormAction::Exit);
            }
            Err(e) => return Err(e),
        };
        match parse_action(&choice) {
            Some(action) => return Ok(action),
            None => println!("Invalid choice. Please enter 1-5 or a command."),
        }
    }
}

/// Reads a field value, masked or echoed depending on the current mode
fn read_field_value(id: FieldId, mode: Visibility) -> io::Result<String> {
    println!("\nEnter {}:", id.label());
    match mode {
        Visibility::Obscured => read_masked(),
        Visibility::Plain => read_line(),
    }
}

// Interactive update-password form. Loops until the user exits; a
// successful submit resets the form and keeps the loop going.
pub fn run_form_flow(config: &FormConfig) -> Result<(), FormError> {
    let mut form = PasswordForm::new(
        MemoryField::new(),
        MemoryField::new(),
        TerminalNotifier::blocking(),
    );
    log_form_event("open", true, None);

    loop {
        println!("{}", render_form(&form, config.mask_char));
        show_form_options(form.show_password());

        let action = read_action(&mut io::stdin().lock())?;
        debug!("Form action: {:?}", action);

        match action {
            FormAction::EnterNew | FormAction::EnterConfirm => {
                let id = if action == FormAction::EnterNew {
                    FieldId::New
                } else {
                    FieldId::Confirm
                };
                let value = read_field_value(id, form.visibility())?;
                form.field_mut(id).set_value(value);
            }
            FormAction::ToggleShow => {
                let checked = !form.show_password();
                form.set_show_password(checked);
            }
            FormAction::Submit => {
                if form.submit() == SubmitOutcome::Blocked {
                    println!("\nPlease fix the errors above and submit again.");
                }
            }
            FormAction::Exit => {
                let dirty = [FieldId::New, FieldId::Confirm]
                    .iter()
                    .any(|id| !form.field(*id).value.is_empty());
                if dirty
                    && !prompt_with_confirmation(
                        "\nThe form has unsubmitted values that will be discarded.",
                        "Exit anyway?",
                    )?
                {
                    continue;
                }
                log_form_event("close", true, None);
                return Ok(());
            }
        }
    }
}

/// One-shot check for scripts. Without a confirmation the password is
/// confirmed against itself, so only the complexity rules decide.
/// Prints both error slots and returns the submit outcome.
pub fn handle_check_command(password: &str, confirm: Option<&str>) -> SubmitOutcome {
    info!("Checking password from the command line");

    let mut form = PasswordForm::new(
        MemoryField::with_value(password),
        MemoryField::with_value(confirm.unwrap_or(password)),
        TerminalNotifier::non_blocking(),
    );
    let outcome = form.submit();

    if outcome == SubmitOutcome::Blocked {
        for id in [FieldId::New, FieldId::Confirm] {
            let error = form.field(id).error();
            if !error.is_empty() {
                println!("{}: {}", id.error_slot_id(), error);
            }
        }
    }
    outcome
}

/// Prompts for the new password and its confirmation without echo, for
/// `check` runs that keep the secret off the command line.
pub fn prompt_check_values() -> io::Result<(String, String)> {
    let password = read_field_value(FieldId::New, Visibility::Obscured)?;
    let confirm = read_field_value(FieldId::Confirm, Visibility::Obscured)?;
    Ok((password, confirm))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_action("1"), Some(FormAction::EnterNew));
        assert_eq!(parse_action(" new "), Some(FormAction::EnterNew));
        assert_eq!(parse_action("CONFIRM"), Some(FormAction::EnterConfirm));
        assert_eq!(parse_action("show"), Some(FormAction::ToggleShow));
        assert_eq!(parse_action("hide"), Some(FormAction::ToggleShow));
        assert_eq!(parse_action("4"), Some(FormAction::Submit));
        assert_eq!(parse_action("quit"), Some(FormAction::Exit));
        assert_eq!(parse_action("6"), None);
        assert_eq!(parse_action(""), None);
    }

    #[test]
    fn test_read_action_skips_invalid_choices() {
        let mut input = io::Cursor::new("bogus\n\n3\n");
        assert_eq!(read_action(&mut input).unwrap(), FormAction::ToggleShow);
    }

    #[test]
    fn test_read_action_exits_at_end_of_input() {
        let mut input = io::Cursor::new("");
        assert_eq!(read_action(&mut input).unwrap(), FormAction::Exit);

        // Invalid lines followed by a closed stream still terminate
        let mut input = io::Cursor::new("bogus\n6\n");
        assert_eq!(read_action(&mut input).unwrap(), FormAction::Exit);
    }

    #[test]
    fn test_check_command_outcomes() {
        assert_eq!(handle_check_command("Abc123!@", None), SubmitOutcome::Accepted);
        assert_eq!(
            handle_check_command("Abc123!@", Some("Abc123!@")),
            SubmitOutcome::Accepted
        );
        assert_eq!(handle_check_command("abc", None), SubmitOutcome::Blocked);
        assert_eq!(
            handle_check_command("Password1!", Some("Password2!")),
            SubmitOutcome::Blocked
        );
    }
}
