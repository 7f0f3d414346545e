//! Character constants and classification used by the scanner.

pub const TAB: char = '\t';
pub const LINE_FEED: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';
pub const SPACE: char = ' ';
pub const NO_BREAK_SPACE: char = '\u{00A0}';

pub const DOUBLE_QUOTE: char = '"';
pub const DOLLAR_SIGN: char = '$';
pub const SINGLE_QUOTE: char = '\'';
pub const ASTERISK: char = '*';
pub const DOT: char = '.';
pub const SLASH: char = '/';
pub const BACKSLASH: char = '\\';
pub const UNDERSCORE: char = '_';
pub const BACKTICK: char = '`';
pub const OPEN_BRACE: char = '{';
pub const CLOSE_BRACE: char = '}';

/// Check if a character is a line terminator.
#[inline]
pub fn is_line_break(ch: char) -> bool {
    ch == LINE_FEED || ch == CARRIAGE_RETURN
}

/// Check if a character is skipped between tokens.
#[inline]
pub fn is_white_space(ch: char) -> bool {
    matches!(ch, SPACE | NO_BREAK_SPACE | TAB) || is_line_break(ch)
}

/// Check if a character is a decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if a character can start an identifier.
#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    ch == UNDERSCORE || ch == DOLLAR_SIGN || ch.is_ascii_alphabetic()
}

/// Check if a character can be part of an identifier.
#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    ch == UNDERSCORE || ch == DOLLAR_SIGN || ch.is_ascii_alphanumeric()
}

/// Single-character punctuation tokens.
#[inline]
pub fn is_punctuation(ch: char) -> bool {
    matches!(ch, '(' | ')' | '{' | '}' | '[' | ']' | ';' | ',' | ':' | '?')
}

/// Characters that start and continue an operator run.
#[inline]
pub fn is_operator_char(ch: char) -> bool {
    matches!(
        ch,
        '+' | '-' | '*' | '/' | '%' | '&' | '|' | '^' | '<' | '>' | '!' | '=' | '~'
    )
}

/// Resolve the character after a backslash in a string or template.
#[inline]
pub fn unescape(ch: char) -> char {
    match ch {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        '0' => '\0',
        // `\\`, `\"`, `\'` and every other escaped character map to themselves.
        other => other,
    }
}
