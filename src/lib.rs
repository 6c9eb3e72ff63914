//! # serde_dif
//!
//! A writer for the Data Interchange Format (DIF), the chunk-based text format spreadsheet
//! programs use to exchange tables.
//!
//! ## What is DIF?
//!
//! DIF describes a table as a sequence of small line groups ("chunks"): a header naming
//! the number of columns and rows, then one chunk per cell. It is old, simple and still
//! read by Excel, LibreOffice and many data tools. See the [`format`] module for the
//! exact grammar.
//!
//! ## Key Features
//!
//! - **Byte-exact Output**: Chunk layout, quoting and number formatting follow what common
//!   DIF readers expect
//! - **Number Normalization**: `1,9780`, `"1.978"` and `1.978` all become `1.978`; empty
//!   cells become `0`
//! - **Character Encodings**: Any input and output encoding known to `encoding_rs`, plus
//!   strict ASCII; unrepresentable characters become `?`
//! - **Serde Records**: Rows can be built from any struct deriving `Serialize`
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_dif::{row, to_string, ColumnType, Document, Schema};
//!
//! let document = Document::new(
//!     Schema::new()
//!         .with_column("Text", ColumnType::String)
//!         .with_column("Number", ColumnType::Numeric),
//! )
//! .with_row(row! { "Text" => "hello", "Number" => 1 })
//! .with_row(row! { "Text" => "has a double quote \" in text", "Number" => -3 });
//!
//! let dif = to_string(&document).unwrap();
//! assert!(dif.starts_with("TABLE\n0,1\n\"MEHR IT DIF WRITER\"\nVECTORS\n0,2\n"));
//! assert!(dif.contains("1,0\n\"has a double quote \"\" in text\"\n0,-3\nV\n"));
//! assert!(dif.ends_with("-1,0\nEOD\n"));
//! ```
//!
//! ### Writing Records
//!
//! ```rust
//! use serde::Serialize;
//! use serde_dif::{to_vec_with_options, ColumnType, DifOptions, Document, Schema};
//!
//! #[derive(Serialize)]
//! struct Product {
//!     sku: String,
//!     price: f64,
//! }
//!
//! let products = vec![
//!     Product { sku: "Käse".to_string(), price: 4.5 },
//!     Product { sku: "Brot".to_string(), price: 2.0 },
//! ];
//!
//! let schema = Schema::new()
//!     .with_column("sku", ColumnType::String)
//!     .with_column("price", ColumnType::Numeric);
//! let document = Document::from_records(schema, &products).unwrap();
//!
//! let options = DifOptions::windows().with_output_encoding("Windows-1252");
//! let bytes = to_vec_with_options(&document, options).unwrap();
//! assert!(bytes.ends_with(b"-1,0\r\nEOD\r\n"));
//! ```
//!
//! ## Errors
//!
//! Missing columns or rows and unknown encodings are reported before anything is written.
//! A numeric cell that is not a number is reported when its row is reached. See
//! [`Error`] for the full list.
//!
//! ## Logging
//!
//! The writer logs through the [`log`](https://docs.rs/log) facade: a `debug` record per
//! document, a `trace` record per chunk, and a `warn` record when characters had to be
//! replaced with `?`. Install any `log` compatible logger to see them.

pub mod chunk;
pub mod document;
pub mod encoding;
pub mod error;
pub mod format;
pub mod macros;
pub mod number;
pub mod options;
pub mod quote;
pub mod schema;
pub mod ser;
pub mod value;
pub mod writer;

pub use document::Document;
pub use error::{Error, Result};
pub use options::{
    DifOptions, DEFAULT_GENERATOR_COMMENT, DEFAULT_INPUT_ENCODING, DEFAULT_OUTPUT_ENCODING,
};
pub use schema::{ColumnDefinition, ColumnType, Schema, TypeIndicator};
pub use ser::{CellSerializer, RowSerializer};
pub use value::{CellValue, Row};
pub use writer::DifWriter;

use serde::Serialize;
use std::io;
use std::path::Path;

/// Write a document to a DIF string with default options.
///
/// # Examples
///
/// ```rust
/// use serde_dif::{row, to_string, ColumnType, Document, Schema};
///
/// let document = Document::new(Schema::new().with_column("n", ColumnType::Numeric))
///     .with_row(row! { "n" => "1,50" });
/// let dif = to_string(&document).unwrap();
/// assert!(dif.contains("\n0,1.5\nV\n"));
/// ```
///
/// # Errors
///
/// Returns an error if the document has no columns or rows, or a numeric cell is not a
/// number.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(document: &Document) -> Result<String> {
    to_string_with_options(document, DifOptions::default())
}

/// Write a document to a DIF string with custom options.
///
/// # Errors
///
/// Returns an error if the document cannot be written, or
/// [`Error::NonUtf8Output`] if the output encoding produced bytes that are not UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(document: &Document, options: DifOptions) -> Result<String> {
    DifWriter::new(options).write_to_string(document)
}

/// Write a document to a byte vector with default options.
///
/// # Errors
///
/// Returns an error if the document cannot be written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec(document: &Document) -> Result<Vec<u8>> {
    to_vec_with_options(document, DifOptions::default())
}

/// Write a document to a byte vector with custom options.
///
/// # Errors
///
/// Returns an error if the document cannot be written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec_with_options(document: &Document, options: DifOptions) -> Result<Vec<u8>> {
    DifWriter::new(options).write_to_vec(document)
}

/// Write a document to a writer with default options.
///
/// The writer is not closed. Pass `&mut writer` to keep using it.
///
/// # Examples
///
/// ```rust
/// use serde_dif::{row, to_writer, ColumnType, Document, Schema};
///
/// let document = Document::new(Schema::new().with_column("Text", ColumnType::String))
///     .with_row(row! { "Text" => "hi" });
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &document).unwrap();
/// assert!(buffer.ends_with(b"-1,0\nBOT\n1,0\n\"hi\"\n-1,0\nEOD\n"));
/// ```
///
/// # Errors
///
/// Returns an error if the document cannot be written or the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, document: &Document) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, document, DifOptions::default())
}

/// Write a document to a writer with custom options.
///
/// # Errors
///
/// Returns an error if the document cannot be written or the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(writer: W, document: &Document, options: DifOptions) -> Result<()>
where
    W: io::Write,
{
    DifWriter::new(options).write(document, writer)
}

/// Write a document to a file with default options, creating or truncating it.
///
/// # Errors
///
/// Returns an error if the document cannot be written or the file cannot be created.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_path<P: AsRef<Path>>(path: P, document: &Document) -> Result<()> {
    to_path_with_options(path, document, DifOptions::default())
}

/// Write a document to a file with custom options, creating or truncating it.
///
/// # Errors
///
/// Returns an error if the document cannot be written or the file cannot be created.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_path_with_options<P: AsRef<Path>>(
    path: P,
    document: &Document,
    options: DifOptions,
) -> Result<()> {
    DifWriter::new(options).write_to_path(document, path)
}

/// Convert a struct or map implementing `Serialize` into a [`Row`].
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_dif::{to_row, CellValue};
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: f64 }
///
/// let row = to_row(&Point { x: 1, y: 2.5 }).unwrap();
/// assert_eq!(row.get("x"), Some(&CellValue::Integer(1)));
/// assert_eq!(row.get("y"), Some(&CellValue::Decimal(2.5)));
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if the value is not a struct or map, or one of its
/// fields is a sequence, nested struct or map, or an enum variant with data.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_row<T>(value: &T) -> Result<Row>
where
    T: ?Sized + Serialize,
{
    value.serialize(RowSerializer)
}
