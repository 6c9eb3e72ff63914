//! Configuration options for DIF writing.
//!
//! [`DifOptions`] is an immutable value built with `with_*` methods. A
//! [`DifWriter`](crate::DifWriter) takes its own copy when it is created, so changing an
//! options value later never affects a write in progress.
//!
//! ## Examples
//!
//! ```rust
//! use serde_dif::DifOptions;
//!
//! // Defaults: "\n" line breaks, UTF-8 input, ASCII output
//! let options = DifOptions::new();
//! assert_eq!(options.output_encoding, "ASCII");
//!
//! // Excel-style output
//! let options = DifOptions::windows()
//!     .with_output_encoding("Windows-1252")
//!     .with_generator_comment("EXCEL");
//! assert_eq!(options.line_break, "\r\n");
//! ```
//!
//! Options can also be read from configuration files through serde. Missing fields take
//! their default values:
//!
//! ```rust
//! use serde_dif::DifOptions;
//!
//! let options: DifOptions = serde_json::from_str(r#"{"output_encoding": "UTF-8"}"#).unwrap();
//! assert_eq!(options.output_encoding, "UTF-8");
//! assert_eq!(options.line_break, "\n");
//! ```

use serde::{Deserialize, Serialize};

/// Comment written into the `TABLE` header chunk unless configured otherwise.
pub const DEFAULT_GENERATOR_COMMENT: &str = "MEHR IT DIF WRITER";

/// Encoding the cell texts are assumed to be in unless configured otherwise.
pub const DEFAULT_INPUT_ENCODING: &str = "UTF-8";

/// Encoding of the written document unless configured otherwise.
pub const DEFAULT_OUTPUT_ENCODING: &str = "ASCII";

/// Configuration options for DIF writing.
///
/// # Examples
///
/// ```rust
/// use serde_dif::DifOptions;
///
/// let options = DifOptions::new()
///     .with_input_encoding("ISO-8859-15")
///     .with_output_encoding("UTF-8")
///     .with_line_break("\r\n");
/// assert_eq!(options.input_encoding, "ISO-8859-15");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifOptions {
    /// Terminator written after every line, verbatim
    pub line_break: String,
    /// Encoding label of column names, text cells and the generator comment
    pub input_encoding: String,
    /// Encoding label of the written document
    pub output_encoding: String,
    /// Comment of the `TABLE` header chunk
    pub generator_comment: String,
}

impl Default for DifOptions {
    fn default() -> Self {
        DifOptions {
            line_break: "\n".to_string(),
            input_encoding: DEFAULT_INPUT_ENCODING.to_string(),
            output_encoding: DEFAULT_OUTPUT_ENCODING.to_string(),
            generator_comment: DEFAULT_GENERATOR_COMMENT.to_string(),
        }
    }
}

impl DifOptions {
    /// Creates default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dif::DifOptions;
    ///
    /// let options = DifOptions::new();
    /// assert_eq!(options.line_break, "\n");
    /// assert_eq!(options.input_encoding, "UTF-8");
    /// assert_eq!(options.generator_comment, "MEHR IT DIF WRITER");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates default options with `"\r\n"` line breaks.
    #[must_use]
    pub fn windows() -> Self {
        DifOptions {
            line_break: "\r\n".to_string(),
            ..Default::default()
        }
    }

    /// Sets the line terminator.
    #[must_use]
    pub fn with_line_break(mut self, line_break: impl Into<String>) -> Self {
        self.line_break = line_break.into();
        self
    }

    /// Sets the encoding of the texts handed to the writer.
    ///
    /// Labels are resolved when writing; an unknown label fails the write before any
    /// output is produced.
    #[must_use]
    pub fn with_input_encoding(mut self, label: impl Into<String>) -> Self {
        self.input_encoding = label.into();
        self
    }

    /// Sets the encoding of the written document.
    ///
    /// Characters that cannot be represented in this encoding are written as `?`.
    #[must_use]
    pub fn with_output_encoding(mut self, label: impl Into<String>) -> Self {
        self.output_encoding = label.into();
        self
    }

    /// Sets the comment of the `TABLE` header chunk.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dif::DifOptions;
    ///
    /// let options = DifOptions::new().with_generator_comment("EXCEL");
    /// assert_eq!(options.generator_comment, "EXCEL");
    /// ```
    #[must_use]
    pub fn with_generator_comment(mut self, comment: impl Into<String>) -> Self {
        self.generator_comment = comment.into();
        self
    }
}
