//! The ordered collection of entries a form submits.
//!
//! [`FormData`] preserves append order, which the encoder depends on: the
//! same fields appended in a different order can produce a different tree.
//!
//! Appending applies the usual form-submission newline rule: for `textarea`
//! controls the name and value, and for `file` controls the name, have every
//! line break (`CR`, `LF` or `CRLF`) normalized to `CRLF`.
//!
//! ```rust
//! use form_json::FormData;
//!
//! let mut form = FormData::new();
//! form.append_text("note", "one\ntwo", "textarea");
//! form.append_text("raw", "one\ntwo", "text");
//!
//! assert_eq!(form.to_string(), r#"{"note":"one\r\ntwo","raw":"one\ntwo"}"#);
//! ```

use crate::{Entry, FormFile};
use std::fmt;

/// An ordered form data set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<Entry>,
    normalize_newlines: bool,
}

impl FormData {
    /// Creates an empty set that normalizes line breaks on append.
    #[must_use]
    pub fn new() -> Self {
        FormData {
            entries: Vec::new(),
            normalize_newlines: true,
        }
    }

    /// Turns CRLF normalization of `textarea` and `file` entries on or off
    /// for entries appended afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_json::FormData;
    ///
    /// let mut form = FormData::new().with_normalize_newlines(false);
    /// form.append_text("note", "one\ntwo", "textarea");
    /// assert_eq!(form.to_string(), r#"{"note":"one\ntwo"}"#);
    /// ```
    #[must_use]
    pub fn with_normalize_newlines(mut self, normalize: bool) -> Self {
        self.normalize_newlines = normalize;
        self
    }

    /// Appends a text field. `entry_type` is the control type, e.g. `"text"`,
    /// `"textarea"` or `"checkbox"`.
    pub fn append_text(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        entry_type: &str,
    ) {
        self.append(Entry::text(name, value).with_type(entry_type));
    }

    /// Appends a file field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_json::{FormData, FormFile};
    ///
    /// let mut form = FormData::new();
    /// form.append_file("upload", FormFile::new("hi.txt", "text/plain", "hi"), "file");
    /// assert!(form.entries()[0].is_file());
    /// ```
    pub fn append_file(&mut self, name: impl Into<String>, file: FormFile, entry_type: &str) {
        self.append(Entry::file(name, file).with_type(entry_type));
    }

    pub fn append(&mut self, entry: Entry) {
        let entry = if self.normalize_newlines {
            entry.with_normalized_newlines()
        } else {
            entry
        };
        self.entries.push(entry);
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns an iterator over the entry names, in append order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(Entry::name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FormData {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FormData {
    /// Renders the JSON encoding of the set with default options.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::to_string(self))
    }
}

impl<'a> IntoIterator for &'a FormData {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Extend<Entry> for FormData {
    fn extend<T: IntoIterator<Item = Entry>>(&mut self, iter: T) {
        for entry in iter {
            self.append(entry);
        }
    }
}

impl FromIterator<Entry> for FormData {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        let mut form = FormData::new();
        form.extend(iter);
        form
    }
}

/// Replaces every bare `CR`, bare `LF` and `CRLF` with `CRLF`.
///
/// # Examples
///
/// ```rust
/// use form_json::form::normalize_line_breaks;
///
/// assert_eq!(normalize_line_breaks("a\rb\nc\r\nd"), "a\r\nb\r\nc\r\nd");
/// ```
#[must_use]
pub fn normalize_line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                chars.next_if_eq(&'\n');
                out.push_str("\r\n");
            }
            '\n' => out.push_str("\r\n"),
            other => out.push(other),
        }
    }
    out
}
