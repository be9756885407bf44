//! # form_json
//!
//! Encodes an HTML form data set as a single JSON document, using bracket-path
//! field names to express nesting.
//!
//! ## What does it do?
//!
//! Form submissions are flat, ordered lists of name/value pairs. By naming
//! fields like `pet[0][name]`, a form can describe hierarchical data without a
//! schema. This crate parses each name into path steps and builds one nested
//! tree from the whole list:
//!
//! ```rust
//! use form_json::{to_string, FormData};
//!
//! let mut form = FormData::new();
//! form.append_text("pet[species]", "Dahut", "text");
//! form.append_text("pet[name]", "Hypatia", "text");
//! form.append_text("kids[1]", "Thelma", "text");
//! form.append_text("kids[0]", "Ashley", "text");
//!
//! assert_eq!(
//!     to_string(&form),
//!     r#"{"pet":{"species":"Dahut","name":"Hypatia"},"kids":["Ashley","Thelma"]}"#
//! );
//! ```
//!
//! ## Key Features
//!
//! - **Never fails on input**: malformed names become literal keys and
//!   conflicting fields are merged, never rejected
//! - **Deterministic**: properties keep submission order; the same entries in
//!   the same order always give the same bytes
//! - **Sparse arrays**: `x[0]` and `x[2]` give `["...", null, "..."]`
//! - **Files**: file fields become `{"name", "type", "body"}` objects with a
//!   base64 body
//!
//! ## Conflicting fields
//!
//! When a later field disagrees with the shape an earlier one established, the
//! existing value is reshaped instead of overwritten:
//!
//! ```rust
//! use form_json::{to_string, FormData};
//!
//! let mut form = FormData::new();
//! form.append_text("mix", "scalar", "text");
//! form.append_text("mix[0]", "array 1", "text");
//! form.append_text("mix[2]", "array 2", "text");
//! form.append_text("mix[key]", "key key", "text");
//!
//! assert_eq!(
//!     to_string(&form),
//!     r#"{"mix":{"":"scalar","0":"array 1","2":"array 2","key":"key key"}}"#
//! );
//! ```
//!
//! See [`tree`] for the full set of rules and [`path`] for the name grammar.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`debug` per encode call and per
//! malformed name, `trace` per entry and per reshaped value). Install any
//! subscriber to see them.

pub mod encode;
pub mod entry;
pub mod error;
pub mod form;
pub mod macros;
pub mod map;
pub mod options;
pub mod path;
pub mod ser;
pub mod tree;
pub mod value;

pub use encode::Encoder;
pub use entry::{Entry, EntryValue, FormFile};
pub use error::{Error, Result};
pub use form::FormData;
pub use map::FormMap;
pub use options::EncodeOptions;
pub use ser::{value_to_string, Serializer};
pub use value::{FormValue, Number};

use std::io;

/// Builds the value tree for a form data set.
///
/// # Examples
///
/// ```rust
/// use form_json::{to_value, FormData};
///
/// let mut form = FormData::new();
/// form.append_text("highlander[]", "one", "text");
///
/// let tree = to_value(&form);
/// assert!(tree.get("highlander").is_some_and(|v| v.is_array()));
/// ```
#[must_use]
pub fn to_value(form: &FormData) -> FormValue {
    to_value_with_options(form, EncodeOptions::default())
}

#[must_use]
pub fn to_value_with_options(form: &FormData, options: EncodeOptions) -> FormValue {
    Encoder::new(options).encode(form)
}

/// Encodes a form data set as a JSON string.
///
/// # Examples
///
/// ```rust
/// use form_json::{to_string, FormData};
///
/// let mut form = FormData::new();
/// form.append_text("hearbeat[0]", "thunk", "text");
/// form.append_text("hearbeat[2]", "thunk", "text");
///
/// assert_eq!(to_string(&form), r#"{"hearbeat":["thunk",null,"thunk"]}"#);
/// ```
#[must_use]
pub fn to_string(form: &FormData) -> String {
    to_string_with_options(form, EncodeOptions::default())
}

#[must_use]
pub fn to_string_with_options(form: &FormData, options: EncodeOptions) -> String {
    value_to_string(&to_value_with_options(form, options))
}

/// Encodes a form data set as UTF-8 JSON bytes.
#[must_use]
pub fn to_vec(form: &FormData) -> Vec<u8> {
    to_vec_with_options(form, EncodeOptions::default())
}

#[must_use]
pub fn to_vec_with_options(form: &FormData, options: EncodeOptions) -> Vec<u8> {
    to_string_with_options(form, options).into_bytes()
}

/// Encodes a form data set into a writer.
///
/// # Examples
///
/// ```rust
/// use form_json::{to_writer, FormData};
///
/// let mut form = FormData::new();
/// form.append_text("name", "Bender", "text");
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &form).unwrap();
/// assert_eq!(buffer, br#"{"name":"Bender"}"#);
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn to_writer<W>(writer: W, form: &FormData) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, form, EncodeOptions::default())
}

/// Encodes a form data set into a writer with custom options.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn to_writer_with_options<W>(mut writer: W, form: &FormData, options: EncodeOptions) -> Result<()>
where
    W: io::Write,
{
    let json = to_string_with_options(form, options);
    writer.write_all(json.as_bytes())?;
    Ok(())
}
