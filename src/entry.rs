//! Form data set entries.
//!
//! An [`Entry`] is one submitted field: a bracket-path name plus either a text
//! value or a [`FormFile`]. File bodies are held in memory so that the same
//! entry list can be encoded any number of times with identical output.

use crate::form::normalize_line_breaks;
use crate::{FormMap, FormValue, Result};
use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use std::io::Read;

/// A submitted file: its name, mime type and materialized body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormFile {
    name: String,
    mime_type: String,
    body: Vec<u8>,
}

impl FormFile {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        FormFile {
            name: name.into(),
            mime_type: mime_type.into(),
            body: body.into(),
        }
    }

    /// Reads the whole byte source once and keeps the bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the reader fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_json::FormFile;
    /// use std::io::Cursor;
    ///
    /// let file = FormFile::from_reader("hi.txt", "text/plain", Cursor::new(b"hi")).unwrap();
    /// assert_eq!(file.body(), b"hi");
    /// ```
    pub fn from_reader<R: Read>(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        mut reader: R,
    ) -> Result<Self> {
        let mut body = Vec::new();
        reader.read_to_end(&mut body)?;
        Ok(FormFile::new(name, mime_type, body))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The object a file contributes to the encoded tree:
    /// `{"name": ..., "type": ..., "body": <base64>}`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_json::FormFile;
    ///
    /// let file = FormFile::new("hi.txt", "text/plain", "hi");
    /// assert_eq!(
    ///     file.to_value().to_string(),
    ///     r#"{"name":"hi.txt","type":"text/plain","body":"aGk="}"#
    /// );
    /// ```
    #[must_use]
    pub fn to_value(&self) -> FormValue {
        let mut wrapper = FormMap::with_capacity(3);
        wrapper.insert("name".to_string(), FormValue::from(self.name.as_str()));
        wrapper.insert("type".to_string(), FormValue::from(self.mime_type.as_str()));
        wrapper.insert(
            "body".to_string(),
            FormValue::String(BASE64_STANDARD.encode(&self.body)),
        );
        FormValue::File(wrapper)
    }
}

/// The value half of an entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryValue {
    Text(String),
    File(FormFile),
}

/// One field of a form data set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    name: String,
    value: EntryValue,
    entry_type: String,
}

impl Entry {
    /// A text entry of type `"text"`.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Entry {
            name: name.into(),
            value: EntryValue::Text(value.into()),
            entry_type: "text".to_string(),
        }
    }

    /// A file entry of type `"file"`.
    pub fn file(name: impl Into<String>, file: FormFile) -> Self {
        Entry {
            name: name.into(),
            value: EntryValue::File(file),
            entry_type: "file".to_string(),
        }
    }

    /// Replaces the control type (`"text"`, `"textarea"`, `"checkbox"`, ...).
    #[must_use]
    pub fn with_type(mut self, entry_type: impl Into<String>) -> Self {
        self.entry_type = entry_type.into();
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &EntryValue {
        &self.value
    }

    #[must_use]
    pub fn entry_type(&self) -> &str {
        &self.entry_type
    }

    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self.value, EntryValue::File(_))
    }

    /// Applies CRLF normalization for `textarea` (name and value) and `file`
    /// (name only) entries; other types are returned unchanged.
    pub(crate) fn with_normalized_newlines(mut self) -> Self {
        if self.entry_type.eq_ignore_ascii_case("textarea") {
            self.name = normalize_line_breaks(&self.name);
            if let EntryValue::Text(text) = &mut self.value {
                *text = normalize_line_breaks(text);
            }
        } else if self.entry_type.eq_ignore_ascii_case("file") {
            self.name = normalize_line_breaks(&self.name);
        }
        self
    }

    /// The leaf this entry contributes to the tree: its text, or the file
    /// wrapper object.
    #[must_use]
    pub fn resolve(&self) -> FormValue {
        match &self.value {
            EntryValue::Text(text) => FormValue::from(text.as_str()),
            EntryValue::File(file) => file.to_value(),
        }
    }
}
