//! Interactive yes/no questions on the command context

use std::io::{self, BufRead, Write};

/// Read one whitespace-delimited token from the next input line
///
/// Blocks until a line is available. EOF yields an empty answer.
pub fn read_token(input: &mut dyn BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.split_whitespace().next().unwrap_or_default().to_string())
}

/// Answers that accept a forced retry: `y` or `yes`
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer, "y" | "yes")
}

/// Ask `question (y/n) ` and report whether the answer was exactly `y`
///
/// Any other answer, `yes` included, prints `Abort.`.
pub fn confirm(input: &mut dyn BufRead, output: &mut dyn Write, question: &str) -> io::Result<bool> {
    write!(output, "{question} (y/n) ")?;
    output.flush()?;
    if read_token(input)? == "y" {
        return Ok(true);
    }
    writeln!(output, "Abort.")?;
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_token_takes_first_word() {
        let mut input = Cursor::new("  yes please\nno\n");
        assert_eq!(read_token(&mut input).unwrap(), "yes");
        assert_eq!(read_token(&mut input).unwrap(), "no");
        assert_eq!(read_token(&mut input).unwrap(), "");
    }

    #[test]
    fn test_affirmative_answers() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("yes"));
        assert!(!is_affirmative("Y"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative(""));
    }

    #[test]
    fn test_confirm_negative_prints_abort() {
        let mut input = Cursor::new("n\n");
        let mut output = Vec::new();
        let confirmed = confirm(&mut input, &mut output, "Are you sure?").unwrap();

        assert!(!confirmed);
        assert_eq!(String::from_utf8(output).unwrap(), "Are you sure? (y/n) Abort.\n");
    }

    #[test]
    fn test_confirm_only_accepts_y() {
        let mut input = Cursor::new("yes\n");
        let mut output = Vec::new();
        assert!(!confirm(&mut input, &mut output, "Remove?").unwrap());
        assert_eq!(String::from_utf8(output).unwrap(), "Remove? (y/n) Abort.\n");
    }

    #[test]
    fn test_confirm_positive() {
        let mut input = Cursor::new("y\n");
        let mut output = Vec::new();
        assert!(confirm(&mut input, &mut output, "Are you sure?").unwrap());
        assert_eq!(String::from_utf8(output).unwrap(), "Are you sure? (y/n) ");
    }
}
