use alloc::{string::String, vec::Vec};

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use super::arbitrary::{Json, Spacing};
use crate::{Translator, TranslatorOptions, translate};

/// Walks the tags of `xml` and checks that every opening tag is closed by a
/// tag of the same name, in order. `<null/>` is self-contained.
fn tags_balanced(xml: &str) -> bool {
    let mut stack: Vec<&str> = Vec::new();
    let mut rest = xml;
    while let Some(open) = rest.find('<') {
        let Some(close) = rest[open..].find('>') else {
            return false;
        };
        let tag = &rest[open + 1..open + close];
        rest = &rest[open + close + 1..];
        if tag.ends_with('/') {
            continue;
        }
        if let Some(name) = tag.strip_prefix('/') {
            if stack.pop() != Some(name) {
                return false;
            }
        } else {
            stack.push(tag);
        }
    }
    stack.is_empty()
}

#[test]
fn balanced_checker_sanity() {
    assert!(tags_balanced("<a><b></b><null/></a>"));
    assert!(!tags_balanced("<a><b></a></b>"));
    assert!(!tags_balanced("<a>"));
}

/// Property: a well-formed document translates without errors into exactly
/// the expected markup, and that markup has balanced tags.
#[test]
fn well_formed_documents_translate_cleanly() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(doc: Json, spacing: Spacing) -> bool {
        let src = doc.render(spacing.0);
        let translation = translate(&src);
        !translation.has_errors()
            && !translation.xml().is_empty()
            && translation.xml() == doc.expected_xml()
            && tags_balanced(translation.xml())
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Json, Spacing) -> bool);
}

/// Property: truncating a non-trivial document anywhere inside it always
/// yields exactly one error and never panics.
#[test]
fn truncated_documents_report_one_error() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(doc: Json, cut: usize) -> bool {
        let src = doc.render("");
        if !matches!(doc, Json::Array(_) | Json::Object(_)) {
            return true;
        }
        let chars: Vec<char> = src.chars().collect();
        let cut = cut % chars.len();
        let truncated: String = chars[..cut].iter().collect();
        translate(&truncated).errors().len() == 1
    }

    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(Json, usize) -> bool);
}

#[quickcheck]
fn translation_is_deterministic(input: String) -> bool {
    let translator = Translator::new(&input, TranslatorOptions::default());
    translator.translate() == translator.translate()
}

#[quickcheck]
fn never_more_than_one_error(input: String) -> bool {
    translate(&input).errors().len() <= 1
}
