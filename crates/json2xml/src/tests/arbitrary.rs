use alloc::{
    boxed::Box,
    format,
    string::{String, ToString},
    vec::Vec,
};

use quickcheck::{Arbitrary, Gen};

/// A JSON document restricted to what the translator reads faithfully:
/// strings without quotes or backslashes and plain decimal numbers.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Json {
    Null,
    Boolean(bool),
    Number(String),
    String(String),
    Array(Vec<Json>),
    Object(Vec<(String, Json)>),
}

fn alphanumeric(g: &mut Gen) -> String {
    String::arbitrary(g)
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

fn number(g: &mut Gen) -> String {
    let int = u32::arbitrary(g);
    let sign = if bool::arbitrary(g) { "-" } else { "" };
    if bool::arbitrary(g) {
        format!("{sign}{int}.{}", u8::arbitrary(g))
    } else {
        format!("{sign}{int}")
    }
}

impl Arbitrary for Json {
    fn arbitrary(g: &mut Gen) -> Self {
        fn gen_val(g: &mut Gen, depth: usize) -> Json {
            let choices = if depth == 0 { 4 } else { 6 };
            match usize::arbitrary(g) % choices {
                0 => Json::Null,
                1 => Json::Boolean(bool::arbitrary(g)),
                2 => Json::Number(number(g)),
                3 => Json::String(alphanumeric(g)),
                4 => {
                    let len = usize::arbitrary(g) % 4;
                    Json::Array((0..len).map(|_| gen_val(g, depth - 1)).collect())
                }
                _ => {
                    let len = usize::arbitrary(g) % 4;
                    Json::Object(
                        (0..len)
                            .map(|_| {
                                let key = format!("k{}", alphanumeric(g));
                                (key, gen_val(g, depth - 1))
                            })
                            .collect(),
                    )
                }
            }
        }

        let depth = usize::arbitrary(g) % 4;
        gen_val(g, depth)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Json::Array(items) => {
                let items = items.clone();
                Box::new(items.shrink().map(Json::Array))
            }
            Json::Object(members) => {
                let members = members.clone();
                Box::new(
                    members
                        .into_iter()
                        .map(|(_, value)| value)
                        .collect::<Vec<_>>()
                        .into_iter(),
                )
            }
            _ => quickcheck::empty_shrinker(),
        }
    }
}

impl Json {
    /// Renders JSON text, inserting `ws` around every structural token.
    pub(crate) fn render(&self, ws: &str) -> String {
        let mut out = String::new();
        self.render_into(&mut out, ws);
        out
    }

    fn render_into(&self, out: &mut String, ws: &str) {
        match self {
            Json::Null => out.push_str("null"),
            Json::Boolean(b) => out.push_str(&b.to_string()),
            Json::Number(n) => out.push_str(n),
            Json::String(s) => {
                out.push('"');
                out.push_str(s);
                out.push('"');
            }
            Json::Array(items) => {
                out.push('[');
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        out.push_str(ws);
                        out.push(',');
                    }
                    out.push_str(ws);
                    item.render_into(out, ws);
                }
                out.push_str(ws);
                out.push(']');
            }
            Json::Object(members) => {
                out.push('{');
                for (idx, (key, value)) in members.iter().enumerate() {
                    if idx > 0 {
                        out.push_str(ws);
                        out.push(',');
                    }
                    out.push_str(ws);
                    out.push('"');
                    out.push_str(key);
                    out.push('"');
                    out.push_str(ws);
                    out.push(':');
                    out.push_str(ws);
                    value.render_into(out, ws);
                }
                out.push_str(ws);
                out.push('}');
            }
        }
    }

    /// The XML the translator is expected to produce for this document.
    pub(crate) fn expected_xml(&self) -> String {
        match self {
            Json::Null => "<null/>".into(),
            Json::Boolean(b) => format!("<boolean>{b}</boolean>"),
            Json::Number(n) => format!("<number>{n}</number>"),
            Json::String(s) => format!("<string>{s}</string>"),
            Json::Array(items) => {
                let inner: String = items.iter().map(Json::expected_xml).collect();
                format!("<array>{inner}</array>")
            }
            Json::Object(members) => {
                let inner: String = members
                    .iter()
                    .map(|(key, value)| format!("<{key}>{}</{key}>", value.expected_xml()))
                    .collect();
                format!("<object>{inner}</object>")
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Spacing(pub(crate) &'static str);

impl Arbitrary for Spacing {
    fn arbitrary(g: &mut Gen) -> Self {
        let options: &[&'static str] = &["", " ", "\t", "  ", "\u{3000}"];
        Spacing(g.choose(options).copied().unwrap_or(""))
    }
}
