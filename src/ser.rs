//! Compact JSON rendering of [`FormValue`] trees.
//!
//! The output is a single line with no insignificant whitespace. Object
//! properties appear in insertion order and array holes render as `null`.
//! Nothing is sorted or pretty-printed, so equal trees always render to the
//! same bytes.
//!
//! ## Usage
//!
//! Most users should go through the crate root:
//!
//! ```rust
//! use form_json::{to_string, FormData};
//!
//! let mut form = FormData::new();
//! form.append_text("pet[name]", "Hypatia", "text");
//! assert_eq!(to_string(&form), r#"{"pet":{"name":"Hypatia"}}"#);
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use form_json::{form_value, Serializer};
//!
//! let mut serializer = Serializer::new();
//! serializer.serialize_value(&form_value!({ "a": [1, 2] }));
//! assert_eq!(serializer.into_inner(), r#"{"a":[1,2]}"#);
//! ```

use crate::{FormValue, Number};
use std::fmt::Write;

/// Writes JSON text for form values into an owned buffer.
pub struct Serializer {
    output: String,
}

impl Serializer {
    #[must_use]
    pub fn new() -> Self {
        Serializer {
            output: String::with_capacity(256),
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    pub fn serialize_value(&mut self, value: &FormValue) {
        match value {
            FormValue::Null => self.output.push_str("null"),
            FormValue::Bool(b) => self.output.push_str(if *b { "true" } else { "false" }),
            FormValue::Number(n) => self.write_number(n),
            FormValue::String(s) => self.write_string(s),
            FormValue::Array(items) => {
                self.output.push('[');
                for (i, slot) in items.iter().enumerate() {
                    if i > 0 {
                        self.output.push(',');
                    }
                    match slot {
                        Some(item) => self.serialize_value(item),
                        None => self.output.push_str("null"),
                    }
                }
                self.output.push(']');
            }
            FormValue::Object(map) | FormValue::File(map) => {
                self.output.push('{');
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        self.output.push(',');
                    }
                    self.write_string(key);
                    self.output.push(':');
                    self.serialize_value(item);
                }
                self.output.push('}');
            }
        }
    }

    fn write_number(&mut self, n: &Number) {
        // Display already maps non-finite floats to `null`
        let _ = write!(self.output, "{}", n);
    }

    #[inline]
    fn write_string(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\u{0008}' => self.output.push_str("\\b"),
                '\u{000C}' => self.output.push_str("\\f"),
                c if (c as u32) < 0x20 => {
                    let _ = write!(self.output, "\\u{:04x}", c as u32);
                }
                _ => self.output.push(ch),
            }
        }
        self.output.push('"');
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders any value as compact JSON text.
#[must_use]
pub fn value_to_string(value: &FormValue) -> String {
    let mut serializer = Serializer::new();
    serializer.serialize_value(value);
    serializer.into_inner()
}
