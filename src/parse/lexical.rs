pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\t')
}

/// Returns whether `c` may appear in the text of a nonterminal.
///
/// A backslash counts as a text character since it begins an escape sequence.
pub fn is_text_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '|' | ':' | '=' | ';' | ' ' | '\\')
}

/// Returns whether `c` may appear in the text of a terminal.
pub fn is_terminal_char(c: char) -> bool {
    is_text_char(c) || matches!(c, '<' | '>')
}

/// Decodes the character following a backslash.
pub fn unescape(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        'n' => Some('\n'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        _ => None,
    }
}

/// Returns the escape sequence encoding `c`, if `c` must be escaped.
pub fn escape(c: char) -> Option<&'static str> {
    match c {
        '"' => Some("\\\""),
        '\n' => Some("\\n"),
        '\t' => Some("\\t"),
        '\\' => Some("\\\\"),
        _ => None,
    }
}
