//! The encoder: form data set in, value tree out.
//!
//! For each entry, in append order, the encoder resolves the entry's leaf
//! value (text, or the file wrapper object), parses its name into steps and
//! merges the value into a tree that starts out as an empty object. The tree
//! belongs to a single [`Encoder::encode`] call.

use crate::path::parse_path_with_limit;
use crate::{tree, EncodeOptions, Entry, FormMap, FormValue};
use tracing::{debug, trace};

/// Builds value trees from entry lists.
///
/// # Examples
///
/// ```rust
/// use form_json::{EncodeOptions, Encoder, Entry};
///
/// let entries = vec![
///     Entry::text("pet[0][species]", "Dahut"),
///     Entry::text("pet[0][name]", "Hypatia"),
///     Entry::text("pet[1][species]", "Felis Stultus"),
///     Entry::text("pet[1][name]", "Billie"),
/// ];
///
/// let tree = Encoder::new(EncodeOptions::default()).encode(&entries);
/// assert_eq!(
///     tree.to_string(),
///     r#"{"pet":[{"species":"Dahut","name":"Hypatia"},{"species":"Felis Stultus","name":"Billie"}]}"#
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    #[must_use]
    pub fn new(options: EncodeOptions) -> Self {
        Encoder { options }
    }

    #[must_use]
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encodes `entries` in order. The result is always an object.
    pub fn encode<'a, I>(&self, entries: I) -> FormValue
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut root = FormValue::Object(FormMap::new());
        let mut count = 0usize;

        for entry in entries {
            self.apply_entry(&mut root, entry);
            count += 1;
        }

        debug!(entries = count, "encoded form data set");
        root
    }

    fn apply_entry(&self, root: &mut FormValue, entry: &Entry) {
        let is_file = entry.is_file();
        let value = entry.resolve();
        let path = parse_path_with_limit(entry.name(), self.options.max_index);

        trace!(
            name = entry.name(),
            steps = path.steps().len(),
            is_file,
            "applying entry"
        );
        tree::apply(root, path.steps(), value, is_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{form_value, FormFile};

    #[test]
    fn test_empty_input_is_empty_object() {
        let entries: Vec<Entry> = Vec::new();
        let tree = Encoder::default().encode(&entries);
        assert_eq!(tree, form_value!({}));
    }

    #[test]
    fn test_file_entry_is_wrapped_once() {
        let entries = vec![Entry::file(
            "docs[0][scan]",
            FormFile::new("scan.txt", "text/plain", "ok"),
        )];
        let tree = Encoder::default().encode(&entries);
        assert_eq!(
            tree.to_string(),
            r#"{"docs":[{"scan":{"name":"scan.txt","type":"text/plain","body":"b2s="}}]}"#
        );
        let scan = tree.get("docs").and_then(|d| d.get_index(0)).and_then(|d| d.get("scan"));
        assert!(scan.is_some_and(FormValue::is_file));
    }

    #[test]
    fn test_max_index_option() {
        let entries = vec![Entry::text("a[5]", "x")];

        let tree = Encoder::new(EncodeOptions::new().with_max_index(4)).encode(&entries);
        assert_eq!(tree, form_value!({ "a[5]": "x" }));

        let tree = Encoder::new(EncodeOptions::new().with_max_index(5)).encode(&entries);
        assert_eq!(tree.get("a").and_then(|a| a.as_array()).map(Vec::len), Some(6));
    }
}
