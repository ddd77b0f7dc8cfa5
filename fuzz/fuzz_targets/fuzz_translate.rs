#![no_main]

use arbitrary::Arbitrary;
use json2xml::{ErrorKind, Translator, TranslatorOptions, flatten_lines};
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Value};

/// A JSON document the translator must always accept once rendered by
/// serde_json, as long as no string needed escaping.
#[derive(Arbitrary, Debug)]
enum Doc {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    Arr(Vec<Doc>),
    Obj(Vec<(String, Doc)>),
}

impl Doc {
    fn into_value(self) -> Value {
        match self {
            Doc::Null => Value::Null,
            Doc::Bool(b) => Value::Bool(b),
            Doc::Int(n) => Value::from(n),
            Doc::Str(s) => Value::String(s),
            Doc::Arr(items) => Value::Array(items.into_iter().map(Doc::into_value).collect()),
            Doc::Obj(members) => Value::Object(
                members
                    .into_iter()
                    .map(|(k, v)| (k, v.into_value()))
                    .collect::<Map<_, _>>(),
            ),
        }
    }
}

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    doc: Doc,
    pretty: bool,
    escape_text: bool,
    json_whitespace_only: bool,
}

fuzz_target!(|input: Input| {
    let options = TranslatorOptions {
        escape_text: input.escape_text,
        json_whitespace_only: input.json_whitespace_only,
        ..Default::default()
    };

    // Arbitrary text: never panics, never more than one error.
    let translator = Translator::new(&input.text, options);
    let first = translator.translate();
    assert!(first.errors().len() <= 1);
    assert_eq!(first, translator.translate());

    // Well-formed text within the depth limit: always translates.
    let value = input.doc.into_value();
    let rendered = if input.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .expect("serializable");
    if rendered.contains('\\') {
        return;
    }
    let flat = flatten_lines(&rendered);
    let translation = Translator::new(&flat, options).translate();
    if let [error] = translation.errors() {
        assert_eq!(error.kind, ErrorKind::NestingTooDeep, "{flat:?}: {error}");
        return;
    }
    assert!(!translation.has_errors());
    assert!(!translation.xml().is_empty());
});
