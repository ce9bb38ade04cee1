/// Characters that may start an operator lexeme: the operator set plus both
/// parentheses.
///
/// # Example
/// ```
/// use shunt::interpreter::scan::is_operator_char;
///
/// assert!(is_operator_char('<'));
/// assert!(is_operator_char('('));
/// assert!(!is_operator_char('#'));
/// assert!(!is_operator_char('a'));
/// ```
#[must_use]
pub const fn is_operator_char(c: char) -> bool {
    matches!(c,
             '+' | '-' | '*' | '/' | '%' | '^' | '|' | '&' | '~' | '!' | '=' | '<' | '>' | '(' | ')')
}

/// Characters that can be the second half of a two-character operator
/// (`&& || == != <= >= << >>`).
const fn continues_operator(c: u8) -> bool {
    matches!(c, b'&' | b'|' | b'=' | b'<' | b'>')
}

/// Consumes a run of digits containing at most one `.`, starting at `i`.
///
/// A second `.` ends the run. A leading `-` is not part of the number.
///
/// # Returns
/// The consumed slice, the index one past it, and whether it contained a
/// decimal point.
///
/// # Example
/// ```
/// use shunt::interpreter::scan::scan_number;
///
/// assert_eq!(scan_number("12+3", 0), ("12", 2, false));
/// assert_eq!(scan_number("x=1.5.2", 2), ("1.5", 5, true));
/// assert_eq!(scan_number(".", 0), (".", 1, true));
/// ```
#[must_use]
pub fn scan_number(buf: &str, i: usize) -> (&str, usize, bool) {
    let bytes = buf.as_bytes();
    let mut end = i;
    let mut had_decimal = false;

    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => end += 1,
            b'.' if !had_decimal => {
                had_decimal = true;
                end += 1;
            },
            _ => break,
        }
    }

    (&buf[i..end], end, had_decimal)
}

/// Consumes an alphanumeric run starting at `i`.
///
/// The caller has already checked that the first character is alphabetic.
///
/// # Example
/// ```
/// use shunt::interpreter::scan::scan_identifier;
///
/// assert_eq!(scan_identifier("rate2*x", 0), ("rate2", 5));
/// ```
#[must_use]
pub fn scan_identifier(buf: &str, i: usize) -> (&str, usize) {
    let end = buf.as_bytes()[i..].iter()
                                  .position(|b| !b.is_ascii_alphanumeric())
                                  .map_or(buf.len(), |len| i + len);

    (&buf[i..end], end)
}

/// Consumes an operator run starting at `i`.
///
/// A parenthesis is always a lexeme of its own. Any other operator character
/// starts a run that continues while the next character can complete a
/// two-character operator, so `&&!` splits into `&&` and `!` while `+=` stays
/// together (and is later rejected as unknown).
///
/// # Example
/// ```
/// use shunt::interpreter::scan::scan_operator;
///
/// assert_eq!(scan_operator("a<=b", 1), ("<=", 3));
/// assert_eq!(scan_operator("&&!b", 0), ("&&", 2));
/// assert_eq!(scan_operator("((", 0), ("(", 1));
/// assert_eq!(scan_operator("=(", 0), ("=", 1));
/// ```
#[must_use]
pub fn scan_operator(buf: &str, i: usize) -> (&str, usize) {
    let bytes = buf.as_bytes();
    let mut end = i + 1;

    if !matches!(bytes[i], b'(' | b')') {
        while bytes.get(end).is_some_and(|&b| continues_operator(b)) {
            end += 1;
        }
    }

    (&buf[i..end], end)
}
