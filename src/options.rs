//! Configuration options for form encoding.
//!
//! ## Examples
//!
//! ```rust
//! use form_json::{to_string_with_options, EncodeOptions, FormData};
//!
//! let mut form = FormData::new();
//! form.append_text("slot[12]", "x", "text");
//!
//! // Indices above the limit make the name a literal key
//! let options = EncodeOptions::new().with_max_index(10);
//! assert_eq!(to_string_with_options(&form, options), r#"{"slot[12]":"x"}"#);
//! ```

use crate::path::DEFAULT_MAX_INDEX;

/// Configuration for encoding a [`FormData`](crate::FormData).
///
/// Newline normalization happens when entries are appended, so it is a
/// [`FormData`](crate::FormData) setting rather than an encode option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Largest array index a field name may use.
    ///
    /// The default admits any non-negative 32-bit index. Arrays are padded
    /// with holes up to the index, so a single field such as
    /// `a[2147483647]` allocates billions of slots. Lower this when field
    /// names come from untrusted input.
    pub max_index: u32,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            max_index: DEFAULT_MAX_INDEX,
        }
    }
}

impl EncodeOptions {
    /// Creates default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_json::EncodeOptions;
    ///
    /// let options = EncodeOptions::new();
    /// assert_eq!(options.max_index, i32::MAX as u32);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the largest accepted array index.
    ///
    /// Bounding the index bounds the number of holes a single field can
    /// materialize.
    #[must_use]
    pub fn with_max_index(mut self, max_index: u32) -> Self {
        self.max_index = max_index;
        self
    }
}
