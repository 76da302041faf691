//! Multi-line message composition.
//!
//! The submit contract: a plain submitted line sends the message; a
//! modified submission (a line ended with a trailing backslash, the CLI
//! analogue of Shift+Enter) inserts a literal newline and keeps composing
//! instead of sending.

/// Accumulates continuation lines until a plain submission completes the
/// message.
#[derive(Default)]
pub struct Composer {
    buffer: String,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one submitted line.
    ///
    /// Returns the complete message when the line is a plain submission;
    /// `None` when it ended with the continuation marker, in which case the
    /// marker is replaced by a literal newline and composition continues.
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        if let Some(stripped) = line.strip_suffix('\\') {
            self.buffer.push_str(stripped);
            self.buffer.push('\n');
            None
        } else {
            let mut message = std::mem::take(&mut self.buffer);
            message.push_str(line);
            Some(message)
        }
    }

    /// Whether a partial message is being composed.
    pub fn is_composing(&self) -> bool {
        !self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_sends() {
        let mut composer = Composer::new();
        assert_eq!(composer.push_line("Hello"), Some("Hello".to_string()));
        assert!(!composer.is_composing());
    }

    #[test]
    fn test_continuation_inserts_literal_newline() {
        let mut composer = Composer::new();
        assert_eq!(composer.push_line("first\\"), None);
        assert!(composer.is_composing());
        assert_eq!(
            composer.push_line("second"),
            Some("first\nsecond".to_string())
        );
        assert!(!composer.is_composing());
    }

    #[test]
    fn test_multiple_continuations() {
        let mut composer = Composer::new();
        assert_eq!(composer.push_line("a\\"), None);
        assert_eq!(composer.push_line("b\\"), None);
        assert_eq!(composer.push_line("c"), Some("a\nb\nc".to_string()));
    }

    #[test]
    fn test_empty_plain_line_sends_empty() {
        // The controller's guard treats this as a no-op.
        let mut composer = Composer::new();
        assert_eq!(composer.push_line(""), Some(String::new()));
    }
}
