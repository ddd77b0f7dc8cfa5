use alloc::string::String;

/// Flattens multi-line JSON text into the single line the translator reads.
///
/// Each line (ended by `\n`, `\r\n` or a lone `\r`) is trimmed of leading
/// and trailing whitespace and the results are concatenated with no
/// separator. Tokens separated only by a line break are therefore joined:
///
/// ```rust
/// assert_eq!(json2xml::flatten_lines("[1,\n  2\n]"), "[1,2]");
/// assert_eq!(json2xml::flatten_lines("[1\n2]"), "[12]");
/// ```
#[must_use]
pub fn flatten_lines(text: &str) -> String {
    // `\r\n` leaves an empty piece between the two breaks, which adds
    // nothing to the result.
    text.split(['\n', '\r']).map(str::trim).collect()
}
