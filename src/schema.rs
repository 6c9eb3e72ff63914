//! Column definitions for DIF documents.
//!
//! A [`Schema`] is an ordered list of named columns, each declared as
//! [`ColumnType::Numeric`] or [`ColumnType::String`], plus the flag deciding whether the
//! column names are written as a header row.
//!
//! Columns are kept in an [`IndexMap`], so they are written in the order they were added.
//! Adding a column whose name already exists replaces its type and keeps its position.
//!
//! ## Examples
//!
//! ```rust
//! use serde_dif::{ColumnType, Schema};
//!
//! let schema = Schema::new()
//!     .with_column("Text", ColumnType::String)
//!     .with_column("Number", ColumnType::Numeric);
//!
//! assert_eq!(schema.len(), 2);
//! assert!(schema.output_headers());
//!
//! // Column types given as text are checked immediately
//! let result = Schema::try_from_columns([("Text", "1"), ("When", "date")], true);
//! assert!(result.is_err());
//! ```

use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// The type indicator that starts every DIF data chunk.
///
/// # Examples
///
/// ```rust
/// use serde_dif::TypeIndicator;
/// use std::convert::TryFrom;
///
/// assert_eq!(TypeIndicator::try_from(-1).unwrap(), TypeIndicator::Directive);
/// assert_eq!(TypeIndicator::String.code(), 1);
/// assert!(TypeIndicator::try_from(2).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeIndicator {
    Directive,
    Numeric,
    String,
}

impl TypeIndicator {
    /// Returns the numeric code written into the chunk.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            TypeIndicator::Directive => -1,
            TypeIndicator::Numeric => 0,
            TypeIndicator::String => 1,
        }
    }
}

impl TryFrom<i32> for TypeIndicator {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            -1 => Ok(TypeIndicator::Directive),
            0 => Ok(TypeIndicator::Numeric),
            1 => Ok(TypeIndicator::String),
            other => Err(Error::invalid_argument(&format!(
                "Unknown data chunk type \"{}\"",
                other
            ))),
        }
    }
}

/// The declared type of a column.
///
/// Parsing accepts the DIF codes `"0"` and `"1"` as well as the names `"numeric"` and
/// `"string"` in any letter case.
///
/// # Examples
///
/// ```rust
/// use serde_dif::ColumnType;
///
/// assert_eq!("0".parse::<ColumnType>().unwrap(), ColumnType::Numeric);
/// assert_eq!("String".parse::<ColumnType>().unwrap(), ColumnType::String);
/// assert!("-1".parse::<ColumnType>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Numeric,
    String,
}

impl ColumnType {
    /// Returns the type indicator of the data chunks written for this column.
    #[must_use]
    pub const fn indicator(self) -> TypeIndicator {
        match self {
            ColumnType::Numeric => TypeIndicator::Numeric,
            ColumnType::String => TypeIndicator::String,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ColumnType::Numeric => "numeric",
            ColumnType::String => "string",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "0" => Ok(ColumnType::Numeric),
            "1" => Ok(ColumnType::String),
            name if name.eq_ignore_ascii_case("numeric") => Ok(ColumnType::Numeric),
            name if name.eq_ignore_ascii_case("string") => Ok(ColumnType::String),
            _ => Err(Error::invalid_column_type("", s)),
        }
    }
}

/// A single named column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDefinition<'a> {
    pub name: &'a str,
    pub column_type: ColumnType,
}

/// An ordered set of columns and the header row flag.
///
/// # Examples
///
/// ```rust
/// use serde_dif::{ColumnType, Schema};
///
/// let schema = Schema::new()
///     .with_column("Name", ColumnType::String)
///     .with_column("Age", ColumnType::Numeric)
///     .with_headers(false);
///
/// let names: Vec<_> = schema.columns().map(|c| c.name).collect();
/// assert_eq!(names, vec!["Name", "Age"]);
/// assert!(!schema.output_headers());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    columns: IndexMap<String, ColumnType>,
    #[serde(default = "default_output_headers")]
    output_headers: bool,
}

fn default_output_headers() -> bool {
    true
}

impl Default for Schema {
    fn default() -> Self {
        Schema {
            columns: IndexMap::new(),
            output_headers: true,
        }
    }
}

impl Schema {
    /// Creates an empty schema that writes a header row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a schema from column names and textual column types.
    ///
    /// Fails with [`Error::InvalidColumnType`] naming the first column whose type is
    /// neither numeric nor string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dif::{ColumnType, Error, Schema};
    ///
    /// let schema = Schema::try_from_columns([("Text", "1"), ("Number", "0")], false).unwrap();
    /// assert_eq!(schema.column_type("Number"), Some(ColumnType::Numeric));
    ///
    /// let err = Schema::try_from_columns([("Number", "2")], true).unwrap_err();
    /// assert!(matches!(err, Error::InvalidColumnType { ref column, .. } if column == "Number"));
    /// ```
    pub fn try_from_columns<I, K, T>(columns: I, output_headers: bool) -> Result<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: AsRef<str>,
    {
        let mut schema = Schema::new().with_headers(output_headers);
        for (name, type_name) in columns {
            let name = name.into();
            let column_type = type_name
                .as_ref()
                .parse::<ColumnType>()
                .map_err(|_| Error::invalid_column_type(&name, type_name.as_ref()))?;
            schema.columns.insert(name, column_type);
        }
        Ok(schema)
    }

    /// Adds a column, replacing the type of an existing column with the same name.
    #[must_use]
    pub fn with_column(mut self, name: impl Into<String>, column_type: ColumnType) -> Self {
        self.push_column(name, column_type);
        self
    }

    /// Sets whether the column names are written as a header row.
    #[must_use]
    pub fn with_headers(mut self, output_headers: bool) -> Self {
        self.output_headers = output_headers;
        self
    }

    /// Adds a column in place.
    ///
    /// Returns the previous type if a column with this name already existed.
    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        column_type: ColumnType,
    ) -> Option<ColumnType> {
        self.columns.insert(name.into(), column_type)
    }

    /// Returns whether the column names are written as a header row.
    #[inline]
    #[must_use]
    pub fn output_headers(&self) -> bool {
        self.output_headers
    }

    /// Returns the declared type of a column.
    #[must_use]
    pub fn column_type(&self, name: &str) -> Option<ColumnType> {
        self.columns.get(name).copied()
    }

    /// Iterates over the columns in output order.
    pub fn columns(&self) -> impl Iterator<Item = ColumnDefinition<'_>> {
        self.columns.iter().map(|(name, column_type)| ColumnDefinition {
            name: name.as_str(),
            column_type: *column_type,
        })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, ColumnType)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, ColumnType)>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for (name, column_type) in iter {
            schema.push_column(name, column_type);
        }
        schema
    }
}
