//! Cell values and row records.
//!
//! This module provides [`CellValue`], the value of a single cell, and [`Row`], an ordered
//! mapping from column names to cell values.
//!
//! ## Core Types
//!
//! - [`CellValue`]: absent, integer, decimal or text
//! - [`Row`]: one row record, keyed by column name
//!
//! A row does not need an entry for every column. A missing entry is written exactly like
//! [`CellValue::Absent`]: `0` in numeric columns and `""` in string columns.
//!
//! ## Creating Values
//!
//! ```rust
//! use serde_dif::{CellValue, Row};
//!
//! let row = Row::new()
//!     .with("Text", "hello")
//!     .with("Number", 1)
//!     .with("Price", 9.5)
//!     .with("Note", None::<&str>);
//!
//! assert_eq!(row.get("Number"), Some(&CellValue::Integer(1)));
//! assert!(row.get("Note").unwrap().is_absent());
//! assert!(row.get("Missing").is_none());
//! ```
//!
//! ## Text Encoding
//!
//! Text is stored as bytes in the writer's configured input encoding. Strings contribute
//! their UTF-8 bytes; text in another encoding is passed with [`CellValue::bytes`]:
//!
//! ```rust
//! use serde_dif::CellValue;
//!
//! // "ä" in ISO-8859-15
//! let value = CellValue::bytes(vec![0xE4]);
//! assert_eq!(value.as_bytes(), Some(&[0xE4][..]));
//! ```

use indexmap::IndexMap;
use std::fmt;

/// The value of a single cell.
///
/// # Examples
///
/// ```rust
/// use serde_dif::CellValue;
///
/// assert!(CellValue::from(42).is_integer());
/// assert!(CellValue::from(1.5).is_decimal());
/// assert!(CellValue::from("x").is_text());
/// assert!(CellValue::from(None::<i64>).is_absent());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Absent,
    Integer(i64),
    Decimal(f64),
    Text(Vec<u8>),
}

impl CellValue {
    /// Creates a text value from bytes in the input encoding.
    #[must_use]
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        CellValue::Text(bytes.into())
    }

    #[inline]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, CellValue::Absent)
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, CellValue::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_decimal(&self) -> bool {
        matches!(self, CellValue::Decimal(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, CellValue::Text(_))
    }

    /// Returns the raw text bytes, or `None` for non-text values.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            CellValue::Text(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Returns the text as `&str` if it is valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dif::CellValue;
    ///
    /// assert_eq!(CellValue::from("hello").as_str(), Some("hello"));
    /// assert_eq!(CellValue::bytes(vec![0xFF]).as_str(), None);
    /// assert_eq!(CellValue::from(1).as_str(), None);
    /// ```
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Absent => Ok(()),
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Decimal(d) => write!(f, "{}", d),
            CellValue::Text(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
        }
    }
}

impl From<i8> for CellValue {
    fn from(value: i8) -> Self {
        CellValue::Integer(value as i64)
    }
}

impl From<i16> for CellValue {
    fn from(value: i16) -> Self {
        CellValue::Integer(value as i64)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Integer(value as i64)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<u8> for CellValue {
    fn from(value: u8) -> Self {
        CellValue::Integer(value as i64)
    }
}

impl From<u16> for CellValue {
    fn from(value: u16) -> Self {
        CellValue::Integer(value as i64)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Integer(value as i64)
    }
}

impl From<u64> for CellValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => CellValue::Integer(i),
            // Too large for i64, the digits are still a valid numeric text
            Err(_) => CellValue::Text(value.to_string().into_bytes()),
        }
    }
}

impl From<f32> for CellValue {
    /// Widens through the shortest text of the `f32`, so `0.1f32` stays `0.1`.
    fn from(value: f32) -> Self {
        let widened = value
            .to_string()
            .parse::<f64>()
            .unwrap_or_else(|_| f64::from(value));
        CellValue::Decimal(widened)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Decimal(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.as_bytes().to_vec())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value.into_bytes())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Absent, Into::into)
    }
}

/// One row record: column names mapped to cell values, in insertion order.
///
/// # Examples
///
/// ```rust
/// use serde_dif::{CellValue, Row};
///
/// let mut row = Row::new();
/// row.insert("Text", "hello");
/// assert!(row.insert("Text", "bye").is_some());
///
/// assert_eq!(row.len(), 1);
/// assert_eq!(row.get("Text").and_then(|v| v.as_str()), Some("bye"));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Row(IndexMap<String, CellValue>);

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Row(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Row(IndexMap::with_capacity(capacity))
    }

    /// Sets a cell and returns the row, for building rows inline.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(column, value);
        self
    }

    /// Sets a cell, returning the previous value of that column.
    pub fn insert(
        &mut self,
        column: impl Into<String>,
        value: impl Into<CellValue>,
    ) -> Option<CellValue> {
        self.0.insert(column.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.0.get(column)
    }

    /// Returns the cell of a column, treating a missing entry as [`CellValue::Absent`].
    #[must_use]
    pub fn cell(&self, column: &str) -> &CellValue {
        const ABSENT: &CellValue = &CellValue::Absent;
        self.0.get(column).unwrap_or(ABSENT)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, CellValue> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = (&'a String, &'a CellValue);
    type IntoIter = indexmap::map::Iter<'a, String, CellValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Row {
    type Item = (String, CellValue);
    type IntoIter = indexmap::map::IntoIter<String, CellValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_cell_is_absent() {
        let row = Row::new().with("Number", 1.8);
        assert_eq!(row.cell("Text"), &CellValue::Absent);
        assert_eq!(row.cell("Number"), &CellValue::Decimal(1.8));
    }

    #[test]
    fn test_large_u64_becomes_text() {
        let value = CellValue::from(u64::MAX);
        assert_eq!(value.as_str(), Some("18446744073709551615"));
        assert_eq!(CellValue::from(7u64), CellValue::Integer(7));
    }

    #[test]
    fn test_from_iter_keeps_order() {
        let row: Row = vec![("b", 1), ("a", 2)].into_iter().collect();
        let keys: Vec<_> = row.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_f32_widens_to_its_short_form() {
        assert_eq!(CellValue::from(0.1f32), CellValue::Decimal(0.1));
        assert_eq!(CellValue::from(16_777_216f32), CellValue::Decimal(16_777_216.0));
        assert_eq!(CellValue::from(0.1f32).to_string(), "0.1");
        assert!(matches!(CellValue::from(f32::NAN), CellValue::Decimal(d) if d.is_nan()));
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::from(-3).to_string(), "-3");
        assert_eq!(CellValue::from("x").to_string(), "x");
        assert_eq!(CellValue::Absent.to_string(), "");
    }
}
