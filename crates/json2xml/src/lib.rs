//! A single-pass JSON to XML translator.
//!
//! The translator validates JSON syntax and emits XML markup in the same
//! recursive descent, without building a tree. Every JSON value becomes one
//! element named after its type, and object members become elements named
//! after their keys.
//!
//! ```rust
//! use json2xml::translate;
//!
//! let ok = translate(r#"{"a":[1,"x"]}"#);
//! assert_eq!(
//!     ok.xml(),
//!     "<object><a><array><number>1</number><string>x</string></array></a></object>"
//! );
//!
//! let bad = translate("[1,2,]");
//! assert_eq!(bad.error_messages(), ["Error at position 5: invalid element"]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod error;
mod lines;
mod options;
mod translator;
mod xml;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, ErrorRecord, TranslateError};
pub use lines::flatten_lines;
pub use options::TranslatorOptions;
pub use translator::{Translation, Translator, translate};
