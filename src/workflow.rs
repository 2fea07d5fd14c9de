//! Workflow module.
//!
//! This module contains helpers around GitHub Actions workflow
//! commands, the stdout protocol the runner interprets.

/// Reports a failure to the runner.
///
/// Prints an `error` workflow command, rendered by the runner as an
/// error annotation on the step. Invoked at most once per run, only
/// on failure.
pub fn error(message: &str) {
    println!("{}", error_command(message));
}

fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Escapes command data. Percents must be escaped first so the other
/// escapes are not double-encoded.
fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_command() {
        assert_eq!(
            "::error::cannot send email: timeout",
            error_command("cannot send email: timeout")
        );
    }

    #[test]
    fn keep_multiline_message_in_one_command() {
        assert_eq!(
            "::error::line one%0Aline two",
            error_command("line one\nline two")
        );
    }

    #[test]
    fn escape_data_characters() {
        assert_eq!("a%0Ab%0Dc%25d", escape_data("a\nb\rc%d"));
    }

    #[test]
    fn escape_percent_before_line_breaks() {
        assert_eq!("%25%0A", escape_data("%\n"));
    }
}
