//! Error types for DIF writing.
//!
//! Every failure a write can run into is reported through the single [`Error`] enum.
//!
//! ## Error Categories
//!
//! - **Configuration Errors**: Unknown column types or encoding labels
//! - **Precondition Errors**: Writing a document without columns or without rows
//! - **Value Errors**: Numeric cells that cannot be read as a decimal number
//! - **I/O Errors**: Failures of the underlying sink, passed through unchanged
//!
//! Configuration errors are raised before anything is written. Value errors are raised
//! while the offending row is emitted, so chunks of earlier rows may already be in the sink.
//!
//! ## Examples
//!
//! ```rust
//! use serde_dif::{to_string, Document, Error, Schema};
//!
//! let document = Document::new(Schema::new());
//! let result = to_string(&document);
//!
//! assert!(matches!(result, Err(Error::NoColumns)));
//! ```

use std::fmt;
use std::io;
use thiserror::Error;

/// Represents all possible errors that can occur while building or writing a DIF document.
#[derive(Debug, Error)]
pub enum Error {
    /// A column was configured with a type other than numeric or string
    #[error("Invalid data type \"{type_name}\" for column \"{column}\"")]
    InvalidColumnType { column: String, type_name: String },

    /// The schema has no columns
    #[error("No columns specified for DIF file")]
    NoColumns,

    /// The document has no rows
    #[error("No data specified for DIF file")]
    NoData,

    /// A value of a numeric column cannot be interpreted as a decimal number
    #[error("Cannot interpret \"{value}\" as a number")]
    NumericFormat { value: String },

    /// The encoding label is unknown or cannot be used for writing
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// A DIF type indicator outside of -1, 0 and 1
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A serialized record contains a value that does not fit in a single cell
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// The output encoding produced bytes that are not valid UTF-8
    #[error("Output is not valid UTF-8, use a byte sink for this output encoding")]
    NonUtf8Output,

    /// IO error of the sink, passed through unchanged
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid column type error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dif::Error;
    ///
    /// let err = Error::invalid_column_type("Price", "date");
    /// assert!(err.to_string().contains("\"date\""));
    /// ```
    pub fn invalid_column_type(column: &str, type_name: &str) -> Self {
        Error::InvalidColumnType {
            column: column.to_string(),
            type_name: type_name.to_string(),
        }
    }

    /// Creates a numeric format error for a value that is not a number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dif::Error;
    ///
    /// let err = Error::numeric_format("twelve");
    /// assert!(err.to_string().contains("twelve"));
    /// ```
    pub fn numeric_format(value: &str) -> Self {
        Error::NumericFormat {
            value: value.to_string(),
        }
    }

    /// Creates an unsupported encoding error.
    pub fn unsupported_encoding(label: &str) -> Self {
        Error::UnsupportedEncoding(label.to_string())
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(msg: &str) -> Self {
        Error::InvalidArgument(msg.to_string())
    }

    /// Creates an unsupported type error for values that cannot become a cell.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` for errors reported before anything was written to the sink.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dif::Error;
    ///
    /// assert!(Error::NoData.is_precondition());
    /// assert!(!Error::numeric_format("x").is_precondition());
    /// ```
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Error::NoColumns
                | Error::NoData
                | Error::UnsupportedEncoding(_)
                | Error::InvalidColumnType { .. }
        )
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
