use crate::modules::form::{FieldId, MemoryField, Notifier, PasswordForm};

/// Renders the form the way the terminal shows it: each input as masked or
/// plain text, its error slot underneath, then the checkbox.
pub fn render_form<N: Notifier>(form: &PasswordForm<MemoryField, N>, mask_char: char) -> String {
    let mut out = String::from("\n=== Update Password ===\n");

    for id in [FieldId::New, FieldId::Confirm] {
        let field = form.field(id);
        out.push_str(&format!("{:<18}{}\n", format!("{}:", id.label()), field.display_value(mask_char)));
        if !field.error().is_empty() {
            out.push_str(&format!("{:<18}! {}\n", "", field.error()));
        }
    }

    let checkbox = if form.show_password() { "[x]" } else { "[ ]" };
    out.push_str(&format!("{} Show password\n", checkbox));
    out
}

/// Frames a notification so it stands out from the form
pub fn format_notice(message: &str) -> String {
    let border = "*".repeat(message.chars().count() + 4);
    format!("\n{}\n* {} *\n{}", border, message, border)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::form::validator::tests::RecordingNotifier;

    fn form(new: &str, confirm: &str) -> PasswordForm<MemoryField, RecordingNotifier> {
        PasswordForm::new(
            MemoryField::with_value(new),
            MemoryField::with_value(confirm),
            RecordingNotifier::default(),
        )
    }

    #[test]
    fn test_render_obscured_form() {
        let f = form("abc", "");
        let rendered = render_form(&f, '*');
        assert!(rendered.contains("New Password:     ***\n"));
        assert!(rendered.contains("[ ] Show password"));
        assert!(!rendered.contains("abc"));
    }

    #[test]
    fn test_render_plain_form_with_errors() {
        let mut f = form("abc", "abc");
        f.set_show_password(true);
        f.submit();

        let rendered = render_form(&f, '*');
        assert!(rendered.contains("New Password:     abc\n"));
        assert!(rendered.contains("! Password must be at least 8 characters long."));
        assert!(rendered.contains("[x] Show password"));
        // The confirm slot is clear, so no marker follows it
        assert_eq!(rendered.matches("! ").count(), 1);
    }

    #[test]
    fn test_format_notice() {
        assert_eq!(format_notice("Done"), "\n********\n* Done *\n********");
    }
}
