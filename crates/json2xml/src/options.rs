/// Configuration options for the JSON to XML translator.
///
/// The defaults reproduce the reference translation byte for byte: text
/// content is copied verbatim and any character the host classifies as
/// whitespace may separate tokens. Nesting is capped so that hostile input
/// cannot exhaust the stack.
///
/// # Examples
///
/// ```rust
/// use json2xml::{Translator, TranslatorOptions};
///
/// let options = TranslatorOptions {
///     escape_text: true,
///     ..Default::default()
/// };
/// let translation = Translator::new(r#"{"a":"x<y"}"#, options).translate();
/// assert_eq!(translation.xml(), "<object><a><string>x&lt;y</string></a></object>");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslatorOptions {
    /// Whether to replace `&`, `<` and `>` in text content with their XML
    /// entity references.
    ///
    /// Object keys become tag names and are never rewritten, so output can
    /// still be malformed XML when a key contains markup characters.
    ///
    /// # Default
    ///
    /// `false`
    pub escape_text: bool,

    /// Whether to restrict whitespace to the four characters defined by the
    /// JSON grammar: space (U+0020), line feed (U+000A), carriage return
    /// (U+000D), and horizontal tab (U+0009).
    ///
    /// When `false`, any character for which [`char::is_whitespace`] holds
    /// is skipped between tokens.
    ///
    /// # Default
    ///
    /// `false`
    pub json_whitespace_only: bool,

    /// The maximum number of arrays and objects that may be open at once.
    ///
    /// Opening one more fails with
    /// [`ErrorKind::NestingTooDeep`](crate::ErrorKind::NestingTooDeep) at
    /// the offending `[` or `{`. Zero rejects every container.
    ///
    /// # Default
    ///
    /// `512`
    pub max_depth: usize,
}

impl TranslatorOptions {
    /// Default for [`max_depth`](Self::max_depth).
    pub const DEFAULT_MAX_DEPTH: usize = 512;
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        Self {
            escape_text: false,
            json_whitespace_only: false,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

impl TranslatorOptions {
    #[inline]
    pub(crate) fn is_whitespace(self, ch: char) -> bool {
        if self.json_whitespace_only {
            matches!(ch, ' ' | '\t' | '\n' | '\r')
        } else {
            ch.is_whitespace()
        }
    }
}
