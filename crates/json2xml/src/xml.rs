//! Helpers for appending XML markup to a fragment.

use alloc::string::String;

#[inline]
pub(crate) fn open_tag(out: &mut String, name: &str) {
    out.push('<');
    out.push_str(name);
    out.push('>');
}

#[inline]
pub(crate) fn close_tag(out: &mut String, name: &str) {
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Appends `<name>text</name>`, escaping `text` when requested.
pub(crate) fn text_element(out: &mut String, name: &str, text: &str, escape: bool) {
    open_tag(out, name);
    if escape {
        push_escaped(out, text);
    } else {
        out.push_str(text);
    }
    close_tag(out, name);
}

/// Appends `text` with `&`, `<` and `>` replaced by entity references.
pub(crate) fn push_escaped(out: &mut String, text: &str) {
    let mut last = 0;
    for (idx, ch) in text.char_indices() {
        let entity = match ch {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            _ => continue,
        };
        out.push_str(&text[last..idx]);
        out.push_str(entity);
        last = idx + 1;
    }
    out.push_str(&text[last..]);
}
