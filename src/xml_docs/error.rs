//! Error types for the XML documentation module
//!
//! Only failures that indicate a broken documentation file (or an unparseable
//! culture name) are errors. A binary that cannot be located or a documentation
//! file that does not exist is reported as `None` by the callers instead.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for XML documentation operations
#[derive(Error, Debug)]
pub enum DocsError {
    /// IO errors while reading a documentation file
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The documentation file is not well-formed XML
    #[error("XML parsing error in file {file:?} at position {position}: {message}")]
    XmlParsing {
        file: PathBuf,
        position: u64,
        message: String,
    },

    /// A structural element the documentation format requires is missing
    #[error("Missing <{element}> element in documentation file {file:?}")]
    MissingElement { file: PathBuf, element: String },

    /// An entry element is missing a required attribute
    #[error("<{element}> element without '{attribute}' attribute in documentation file {file:?}")]
    MissingAttribute {
        file: PathBuf,
        element: String,
        attribute: String,
    },

    /// Culture name that is not a valid locale identifier
    #[error("Invalid culture name: '{name}'")]
    InvalidCulture { name: String },
}

/// Result type alias for XML documentation operations
pub type DocsResult<T> = Result<T, DocsError>;

/// Helper trait for converting IO errors with context
pub trait IoContext<T> {
    fn with_io_context(self, message: &str) -> DocsResult<T>;
}

impl<T> IoContext<T> for Result<T, std::io::Error> {
    fn with_io_context(self, message: &str) -> DocsResult<T> {
        self.map_err(|e| DocsError::Io {
            message: message.to_string(),
            source: e,
        })
    }
}
