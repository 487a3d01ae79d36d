//! Newline-aware output writer for documentation markup.
//!
//! The writer tracks the last character emitted so that `ensure_line` can
//! start a fresh line without producing blank lines, and so that CRLF
//! normalization stays correct when a `\r` and its `\n` arrive in separate
//! calls.

/// Line terminator convention for rendered output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix line endings (`\n`).
    #[default]
    Lf,
    /// Windows line endings (`\r\n`).
    CrLf,
}

impl LineEnding {
    /// The literal terminator string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Buffered markup writer with two write paths.
///
/// The *constant* path (`write_constant`, `write_constant_line`) is for text
/// known to contain no newlines; it is appended verbatim. The *variable*
/// path (`write`, `write_char`) scans for `\n` and inserts the configured
/// terminator, treating a `\n` already preceded by `\r` as normalized even
/// when the `\r` was written by an earlier call.
pub struct DocWriter {
    out: String,
    line_ending: LineEnding,
    /// Last character written; starts as `\n` so the output begins at a
    /// line start.
    last: char,
    /// Reusable buffer for CRLF normalization. Grows on demand, never
    /// shrinks; `clear` keeps the capacity between calls.
    scratch: String,
}

impl DocWriter {
    /// Create a writer targeting the given line-ending convention.
    #[must_use]
    pub fn new(line_ending: LineEnding) -> Self {
        Self {
            out: String::with_capacity(4096),
            line_ending,
            last: '\n',
            scratch: String::with_capacity(256),
        }
    }

    /// Append text known to contain no newlines. Empty input is a no-op.
    pub fn write_constant(&mut self, text: &str) {
        if let Some(c) = text.chars().next_back() {
            self.out.push_str(text);
            self.last = c;
        }
    }

    /// Append newline-free text followed by the line terminator.
    pub fn write_constant_line(&mut self, text: &str) {
        self.out.push_str(text);
        self.write_line();
    }

    /// Append one line terminator.
    pub fn write_line(&mut self) {
        self.out.push_str(self.line_ending.as_str());
        self.last = '\n';
    }

    /// Append a terminator only if the output does not already end with
    /// one. Idempotent.
    pub fn ensure_line(&mut self) {
        if self.last != '\n' {
            self.write_line();
        }
    }

    /// Append text that may contain newlines, normalizing each `\n` to the
    /// configured terminator. A `\n` whose preceding character is `\r` is
    /// already normalized, including when that `\r` ended a previous call.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        match self.line_ending {
            LineEnding::Lf => self.out.push_str(text),
            LineEnding::CrLf => {
                let bytes = text.as_bytes();
                let mut last_pos = 0;
                self.scratch.clear();
                for (pos, &byte) in bytes.iter().enumerate() {
                    if byte != b'\n' {
                        continue;
                    }
                    let before = if pos == 0 {
                        self.last
                    } else {
                        char::from(bytes[pos - 1])
                    };
                    if before != '\r' {
                        self.scratch.push_str(&text[last_pos..pos]);
                        self.scratch.push('\r');
                        last_pos = pos;
                    }
                }
                self.scratch.push_str(&text[last_pos..]);
                self.out.push_str(&self.scratch);
            }
        }

        // The tracked character is the last of the source text, not of the
        // normalized copy, so a trailing `\n` still reads as a line start.
        if let Some(c) = text.chars().next_back() {
            self.last = c;
        }
    }

    /// Append a single character through the variable path.
    pub fn write_char(&mut self, c: char) {
        if self.line_ending == LineEnding::CrLf && c == '\n' && self.last != '\r' {
            self.out.push('\r');
        }
        self.out.push(c);
        self.last = c;
    }

    /// The rendered output so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consume the writer and return the rendered output.
    #[must_use]
    pub fn into_string(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_constant_write_verbatim() {
        let mut writer = DocWriter::new(LineEnding::CrLf);
        writer.write_constant("<para>");
        assert_eq!(writer.as_str(), "<para>");
    }

    #[test]
    fn test_constant_line_appends_terminator() {
        let mut writer = DocWriter::new(LineEnding::CrLf);
        writer.write_constant_line("</para>");
        assert_eq!(writer.as_str(), "</para>\r\n");
    }

    #[test]
    fn test_variable_write_normalizes_lf() {
        let mut writer = DocWriter::new(LineEnding::CrLf);
        writer.write("a\nb\nc");
        assert_eq!(writer.as_str(), "a\r\nb\r\nc");
    }

    #[test]
    fn test_variable_write_keeps_existing_crlf() {
        let mut writer = DocWriter::new(LineEnding::CrLf);
        writer.write("a\r\nb");
        assert_eq!(writer.as_str(), "a\r\nb");
    }

    #[test]
    fn test_lf_mode_passes_through() {
        let mut writer = DocWriter::new(LineEnding::Lf);
        writer.write("a\nb");
        assert_eq!(writer.as_str(), "a\nb");
    }

    #[test]
    fn test_normalization_across_call_boundary() {
        // The '\r' ends one call and the '\n' starts the next; no second
        // '\r' may be inserted.
        let mut writer = DocWriter::new(LineEnding::CrLf);
        writer.write("a\r");
        writer.write("\nb");
        assert_eq!(writer.as_str(), "a\r\nb");
    }

    #[test]
    fn test_split_point_invariance() {
        let input = "one\ntwo\r\nthree\rfour\n";
        for split in 0..=input.len() {
            if !input.is_char_boundary(split) {
                continue;
            }
            let mut whole = DocWriter::new(LineEnding::CrLf);
            whole.write(input);
            let mut parts = DocWriter::new(LineEnding::CrLf);
            parts.write(&input[..split]);
            parts.write(&input[split..]);
            assert_eq!(whole.as_str(), parts.as_str(), "split at {split}");
        }
    }

    #[test]
    fn test_ensure_line_is_idempotent() {
        let mut writer = DocWriter::new(LineEnding::Lf);
        writer.write_constant("text");
        writer.ensure_line();
        writer.ensure_line();
        assert_eq!(writer.as_str(), "text\n");
    }

    #[test]
    fn test_ensure_line_at_start_writes_nothing() {
        let mut writer = DocWriter::new(LineEnding::Lf);
        writer.ensure_line();
        assert_eq!(writer.as_str(), "");
    }

    #[test]
    fn test_empty_writes_are_no_ops() {
        let mut writer = DocWriter::new(LineEnding::Lf);
        writer.write_constant("text");
        writer.write_constant("");
        writer.write("");
        writer.ensure_line();
        assert_eq!(writer.as_str(), "text\n");
    }

    #[test]
    fn test_write_char_normalizes_newline() {
        let mut writer = DocWriter::new(LineEnding::CrLf);
        writer.write_char('a');
        writer.write_char('\n');
        assert_eq!(writer.as_str(), "a\r\n");
    }
}
