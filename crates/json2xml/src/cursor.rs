//! Cursor: the read position into the flattened input.
//!
//! The cursor is owned by a single translation and handed to every grammar
//! production by exclusive reference. It tracks two offsets in lockstep:
//! the byte offset used for slicing the borrowed input, and the character
//! offset reported in error records.
//!
//! Invariants
//! - `byte` always lies on a UTF-8 boundary of `text` and `byte <= text.len()`.
//! - `pos` equals the number of characters in `text[..byte]`.
//! - Both offsets only ever grow.
//! - `depth` counts the containers currently open and never exceeds
//!   `options.max_depth`.

use crate::options::TranslatorOptions;

#[derive(Debug, Clone)]
pub(crate) struct Cursor<'src> {
    text: &'src str,
    byte: usize,
    pos: usize,
    depth: usize,
    options: TranslatorOptions,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(text: &'src str, options: TranslatorOptions) -> Self {
        Self {
            text,
            byte: 0,
            pos: 0,
            depth: 0,
            options,
        }
    }

    /// Character offset of the next unread character.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.byte >= self.text.len()
    }

    #[inline]
    fn rest(&self) -> &'src str {
        &self.text[self.byte..]
    }

    /// The character under the cursor, or `None` at end of buffer.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes and returns the character under the cursor.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.byte += ch.len_utf8();
        self.pos += 1;
        Some(ch)
    }

    /// Byte offset to pass to [`Cursor::since`] later.
    #[inline]
    pub(crate) fn mark(&self) -> usize {
        self.byte
    }

    /// Input consumed since `mark`.
    #[inline]
    pub(crate) fn since(&self, mark: usize) -> &'src str {
        &self.text[mark..self.byte]
    }

    /// Lookahead for a fixed prefix without consuming it.
    #[inline]
    pub(crate) fn starts_with(&self, literal: &str) -> bool {
        self.rest().starts_with(literal)
    }

    /// Consumes `literal` if the unread input starts with it.
    pub(crate) fn match_literal(&mut self, literal: &str) -> bool {
        if !self.starts_with(literal) {
            return false;
        }
        self.byte += literal.len();
        self.pos += literal.chars().count();
        true
    }

    /// Consumes the longest run of characters satisfying `pred` and returns
    /// it as a slice of the input.
    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'src str {
        let start = self.byte;
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.byte += ch.len_utf8();
            self.pos += 1;
        }
        &self.text[start..self.byte]
    }

    /// Records one more open container. Returns `false`, leaving the depth
    /// unchanged, when that would exceed `max_depth`.
    pub(crate) fn descend(&mut self) -> bool {
        if self.depth >= self.options.max_depth {
            return false;
        }
        self.depth += 1;
        true
    }

    pub(crate) fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub(crate) fn skip_whitespace(&mut self) {
        let options = self.options;
        self.eat_while(|ch| options.is_whitespace(ch));
    }
}
