use std::io::{self, BufRead, Write};

/// Helper function to read a line from stdin
pub fn read_line() -> io::Result<String> {
    let stdin = io::stdin();
    read_line_from(&mut stdin.lock())
}

/// Reads one line from `reader` without its line ending.
/// Other whitespace is kept; trimming is the validator's business.
/// End of input is an `UnexpectedEof` error, never an empty line.
pub fn read_line_from<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
    }
    let trimmed = input.trim_end_matches(['\n', '\r']).len();
    input.truncate(trimmed);
    Ok(input)
}

/// Reads a password without echoing it to the terminal
pub fn read_masked() -> io::Result<String> {
    rpassword::read_password()
}

/// Helper function to prompt for input with confirmation
pub fn prompt_with_confirmation(prompt: &str, confirmation: &str) -> io::Result<bool> {
    println!("{}", prompt);
    print!("{} (y/n): ", confirmation);
    io::stdout().flush()?;

    // Closed input takes the default answer
    let response = match read_line() {
        Ok(line) => line.trim().to_lowercase(),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => String::new(),
        Err(e) => return Err(e),
    };
    Ok(response.is_empty() || response == "y")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_keeps_inner_whitespace() {
        let mut input = Cursor::new("  Abc123!@ \r\nnext\n");
        assert_eq!(read_line_from(&mut input).unwrap(), "  Abc123!@ ");
        assert_eq!(read_line_from(&mut input).unwrap(), "next");
    }

    #[test]
    fn test_read_line_reports_end_of_input() {
        let mut input = Cursor::new("\n");
        // A blank line is still a line
        assert_eq!(read_line_from(&mut input).unwrap(), "");

        let err = read_line_from(&mut input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
