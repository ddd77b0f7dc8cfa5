//! The recursive-descent translator.
//!
//! Each JSON production is one function that consumes input through the
//! shared [`Cursor`] and returns the XML fragment for what it consumed. There
//! is no intermediate tree: nesting in the output mirrors the call stack.
//!
//! | Lookahead      | Production | Fragment                 |
//! |----------------|------------|--------------------------|
//! | `{`            | object     | `<object>…</object>`     |
//! | `[`            | array      | `<array>…</array>`       |
//! | `"`            | string     | `<string>…</string>`     |
//! | `true`/`false` | literal    | `<boolean>…</boolean>`   |
//! | `null`         | literal    | `<null/>`                |
//! | digit or `-`   | number     | `<number>…</number>`     |
//!
//! # Examples
//!
//! ```rust
//! use json2xml::translate;
//!
//! let translation = translate(r#"{"a":1,"b":[true,false,null]}"#);
//! assert!(!translation.has_errors());
//! assert_eq!(
//!     translation.xml(),
//!     "<object><a><number>1</number></a><b><array><boolean>true</boolean>\
//!      <boolean>false</boolean><null/></array></b></object>"
//! );
//! ```

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use crate::{
    cursor::Cursor,
    error::{ErrorKind, ErrorRecord, TranslateError},
    options::TranslatorOptions,
    xml,
};

type Result<T> = core::result::Result<T, TranslateError>;

/// Translates JSON text into XML in a single pass.
///
/// The input is expected to be the flattened document (see
/// [`flatten_lines`](crate::flatten_lines)), but any string is accepted.
#[derive(Debug, Clone)]
pub struct Translator<'src> {
    input: &'src str,
    options: TranslatorOptions,
}

impl<'src> Translator<'src> {
    /// Creates a translator over `input`.
    #[must_use]
    pub fn new(input: &'src str, options: TranslatorOptions) -> Self {
        Self { input, options }
    }

    /// Runs the translation.
    ///
    /// Every call starts from a fresh cursor, so repeated calls on the same
    /// translator return identical results.
    #[must_use]
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip_all, fields(len = self.input.len()))
    )]
    pub fn translate(&self) -> Translation {
        let mut cursor = Cursor::new(self.input, self.options);
        let mut xml = String::new();
        let mut errors = Vec::new();

        if let Err(err) = parse(&mut cursor, self.options, &mut xml) {
            #[cfg(feature = "tracing")]
            tracing::debug!(position = err.position, kind = ?err.kind, "translation failed");
            errors.push(ErrorRecord::from(err));
        }

        Translation { xml, errors }
    }
}

/// Translates `input` with the default options.
#[must_use]
pub fn translate(input: &str) -> Translation {
    Translator::new(input, TranslatorOptions::default()).translate()
}

/// The outcome of a translation run.
///
/// The XML text is only meaningful when [`has_errors`](Self::has_errors)
/// returns `false`. After a failure it holds whatever the top-level
/// production had completed, which may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    xml: String,
    errors: Vec<ErrorRecord>,
}

impl Translation {
    /// The produced XML text.
    #[must_use]
    pub fn xml(&self) -> &str {
        &self.xml
    }

    /// Errors recorded during the run. Holds at most one entry, since the
    /// first failure ends the translation.
    #[must_use]
    pub fn errors(&self) -> &[ErrorRecord] {
        &self.errors
    }

    /// Whether the run recorded any error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors rendered as `Error at position <offset>: <message>`.
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Consumes the translation, returning the XML text regardless of errors.
    #[must_use]
    pub fn into_xml(self) -> String {
        self.xml
    }

    /// `Ok` with the XML text when the run was clean, otherwise the errors.
    ///
    /// # Errors
    ///
    /// Returns the recorded error list when it is non-empty.
    pub fn into_result(self) -> core::result::Result<String, Vec<ErrorRecord>> {
        if self.errors.is_empty() {
            Ok(self.xml)
        } else {
            Err(self.errors)
        }
    }
}

#[inline]
fn fail(cursor: &Cursor<'_>, kind: ErrorKind) -> TranslateError {
    TranslateError::new(kind, cursor.position())
}

/// Top-level entry: exactly one value, then only whitespace.
fn parse(cursor: &mut Cursor<'_>, options: TranslatorOptions, out: &mut String) -> Result<()> {
    out.push_str(&parse_element(cursor, options)?);
    cursor.skip_whitespace();
    if !cursor.is_eof() {
        return Err(fail(cursor, ErrorKind::TrailingContent));
    }
    Ok(())
}

fn parse_element(cursor: &mut Cursor<'_>, options: TranslatorOptions) -> Result<String> {
    cursor.skip_whitespace();

    // Depth failures point at the opening bracket.
    let open = cursor.position();
    if cursor.match_literal("{") {
        if !cursor.descend() {
            return Err(TranslateError::new(ErrorKind::NestingTooDeep, open));
        }
        let out = parse_object(cursor, options);
        cursor.ascend();
        return out;
    }
    if cursor.match_literal("[") {
        if !cursor.descend() {
            return Err(TranslateError::new(ErrorKind::NestingTooDeep, open));
        }
        let out = parse_array(cursor, options);
        cursor.ascend();
        return out;
    }

    let mut out = String::new();
    match cursor.peek() {
        Some('"') => {
            let text = parse_string(cursor)?;
            xml::text_element(&mut out, "string", text, options.escape_text);
        }
        Some('t' | 'f') if cursor.starts_with("true") || cursor.starts_with("false") => {
            let text = parse_literal(cursor)?;
            xml::text_element(&mut out, "boolean", text, false);
        }
        Some('n') if cursor.starts_with("null") => {
            parse_literal(cursor)?;
            out.push_str("<null/>");
        }
        Some(ch) if ch.is_ascii_digit() || ch == '-' => {
            let text = parse_number(cursor);
            xml::text_element(&mut out, "number", text, options.escape_text);
        }
        // Includes end of buffer.
        _ => return Err(fail(cursor, ErrorKind::InvalidElement)),
    }
    Ok(out)
}

/// Called with the cursor just past `{`.
fn parse_object(cursor: &mut Cursor<'_>, options: TranslatorOptions) -> Result<String> {
    let mut out = String::from("<object>");
    cursor.skip_whitespace();

    if !cursor.match_literal("}") {
        loop {
            cursor.skip_whitespace();
            if cursor.peek() != Some('"') {
                return Err(fail(cursor, ErrorKind::ExpectedPropertyName));
            }
            // Keys become tag names verbatim.
            let name = parse_string(cursor)?;
            cursor.skip_whitespace();
            if !cursor.match_literal(":") {
                return Err(fail(cursor, ErrorKind::ExpectedColon));
            }

            xml::open_tag(&mut out, name);
            out.push_str(&parse_element(cursor, options)?);
            xml::close_tag(&mut out, name);

            cursor.skip_whitespace();
            if !cursor.match_literal(",") {
                break;
            }
        }
        if !cursor.match_literal("}") {
            return Err(fail(cursor, ErrorKind::ExpectedCloseBrace));
        }
    }

    out.push_str("</object>");
    Ok(out)
}

/// Called with the cursor just past `[`.
fn parse_array(cursor: &mut Cursor<'_>, options: TranslatorOptions) -> Result<String> {
    let mut out = String::from("<array>");
    cursor.skip_whitespace();

    if !cursor.match_literal("]") {
        loop {
            out.push_str(&parse_element(cursor, options)?);
            cursor.skip_whitespace();
            if !cursor.match_literal(",") {
                break;
            }
        }
        if !cursor.match_literal("]") {
            return Err(fail(cursor, ErrorKind::ExpectedCloseBracket));
        }
    }

    out.push_str("</array>");
    Ok(out)
}

/// Called with the cursor on the opening `"`. Escape sequences are not
/// interpreted: the first `"` after the opening one ends the string.
fn parse_string<'src>(cursor: &mut Cursor<'src>) -> Result<&'src str> {
    cursor.bump();
    let text = cursor.eat_while(|ch| ch != '"');
    if cursor.bump().is_none() {
        return Err(fail(cursor, ErrorKind::UnterminatedString));
    }
    Ok(text)
}

/// Prefix match only: `truex` yields `true` and leaves `x` unread.
fn parse_literal(cursor: &mut Cursor<'_>) -> Result<&'static str> {
    for literal in ["true", "false", "null"] {
        if cursor.match_literal(literal) {
            return Ok(literal);
        }
    }
    Err(fail(cursor, ErrorKind::InvalidLiteral))
}

/// An optional `-` followed by the longest run of ASCII digits and `.`.
/// Digit placement is not validated and an empty run is accepted.
fn parse_number<'src>(cursor: &mut Cursor<'src>) -> &'src str {
    let mark = cursor.mark();
    cursor.match_literal("-");
    cursor.eat_while(|ch| ch.is_ascii_digit() || ch == '.');
    cursor.since(mark)
}
