//! Space-delimited tokenizer for access log lines.

/// Separator between log fields. Only the space character splits; tabs stay
/// inside tokens.
pub const FIELD_DELIMITER: char = ' ';

/// Splits a raw log line into its non-empty, space-delimited tokens.
///
/// The trailing line terminator (`\n` or `\r\n`) is removed first. Runs of
/// consecutive spaces collapse, so no empty tokens are produced. A line that
/// is blank after trimming yields an empty sequence.
///
/// The iterator borrows from `line` and is consumed once.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    let body = line.trim_end_matches(['\n', '\r']);
    let body = if body.trim().is_empty() { "" } else { body };
    body.split(FIELD_DELIMITER).filter(|token| !token.is_empty())
}

/// Returns the client IP address token of a log line, if the line has one.
pub fn ip_token(line: &str) -> Option<&str> {
    tokenize(line).next()
}
