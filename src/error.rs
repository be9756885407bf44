//! Error types for form encoding.
//!
//! Path parsing and tree building never fail: a malformed field name degrades
//! to a literal top-level key, and every collision between fields is resolved
//! by coercion. The only fallible operations are the I/O edges around the
//! encoder:
//!
//! - **Reading** a file's byte source when building a [`FormFile`](crate::FormFile)
//! - **Writing** the encoded document to an [`io::Write`](std::io::Write) sink
//!
//! ## Examples
//!
//! ```rust
//! use form_json::{Error, FormFile};
//! use std::io::{self, Read};
//!
//! struct Broken;
//!
//! impl Read for Broken {
//!     fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
//!         Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
//!     }
//! }
//!
//! let result = FormFile::from_reader("a.txt", "text/plain", Broken);
//! assert!(matches!(result, Err(Error::Io(_))));
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur around form encoding.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while reading a file body or writing the output
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates an I/O error for file reading/writing failures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_json::Error;
    ///
    /// let err = Error::io("broken pipe");
    /// assert_eq!(err.to_string(), "IO error: broken pipe");
    /// ```
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
