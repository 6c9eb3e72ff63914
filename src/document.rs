//! Documents: a schema plus the rows to write.
//!
//! ## Examples
//!
//! ```rust
//! use serde_dif::{row, ColumnType, Document, Schema};
//!
//! let mut document = Document::new(
//!     Schema::new()
//!         .with_column("Text", ColumnType::String)
//!         .with_column("Number", ColumnType::Numeric),
//! );
//!
//! document.push_row(row! { "Text" => "hello", "Number" => 1 });
//! document.push_row(row! { "Text" => "bye" });
//!
//! assert_eq!(document.len(), 2);
//! assert_eq!(document.tuple_count(), 3);
//! ```

use crate::{to_row, Result, Row, Schema};
use serde::Serialize;

/// A schema and its rows, in output order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    schema: Schema,
    rows: Vec<Row>,
}

impl Document {
    /// Creates a document without rows.
    #[must_use]
    pub fn new(schema: Schema) -> Self {
        Document {
            schema,
            rows: Vec::new(),
        }
    }

    /// Creates a document from serializable records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`](crate::Error::UnsupportedType) if a record is not
    /// a struct or map of plain values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde::Serialize;
    /// use serde_dif::{ColumnType, Document, Schema};
    ///
    /// #[derive(Serialize)]
    /// struct Product { sku: String, price: f64 }
    ///
    /// let schema = Schema::new()
    ///     .with_column("sku", ColumnType::String)
    ///     .with_column("price", ColumnType::Numeric);
    /// let products = vec![Product { sku: "A1".to_string(), price: 9.99 }];
    ///
    /// let document = Document::from_records(schema, &products).unwrap();
    /// assert_eq!(document.len(), 1);
    /// ```
    pub fn from_records<'a, T, I>(schema: Schema, records: I) -> Result<Self>
    where
        T: Serialize + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut document = Document::new(schema);
        for record in records {
            document.push_record(record)?;
        }
        Ok(document)
    }

    /// Replaces the rows.
    #[must_use]
    pub fn with_rows(mut self, rows: impl IntoIterator<Item = Row>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Appends a row.
    #[must_use]
    pub fn with_row(mut self, row: Row) -> Self {
        self.push_row(row);
        self
    }

    /// Replaces the schema, keeping the rows.
    pub fn set_schema(&mut self, schema: Schema) {
        self.schema = schema;
    }

    /// Replaces the rows.
    pub fn set_rows(&mut self, rows: impl IntoIterator<Item = Row>) {
        self.rows = rows.into_iter().collect();
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Appends a serializable record as a row.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be converted with [`to_row`].
    pub fn push_record<T>(&mut self, record: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.rows.push(to_row(record)?);
        Ok(())
    }

    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the value of the `TUPLES` header: the rows plus the header row, if written.
    #[must_use]
    pub fn tuple_count(&self) -> usize {
        self.rows.len() + usize::from(self.schema.output_headers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellValue, ColumnType};

    fn schema() -> Schema {
        Schema::new()
            .with_column("Text", ColumnType::String)
            .with_column("Number", ColumnType::Numeric)
    }

    #[test]
    fn test_tuple_count_follows_header_flag() {
        let document = Document::new(schema()).with_row(Row::new()).with_row(Row::new());
        assert_eq!(document.tuple_count(), 3);

        let document = Document::new(schema().with_headers(false)).with_row(Row::new());
        assert_eq!(document.tuple_count(), 1);
    }

    #[test]
    fn test_set_schema_keeps_rows() {
        let mut document = Document::new(schema()).with_row(Row::new().with("Text", "x"));
        document.set_schema(Schema::new().with_column("Other", ColumnType::Numeric));
        assert_eq!(document.len(), 1);
        assert_eq!(document.schema().len(), 1);
    }

    #[test]
    fn test_set_rows_replaces() {
        let mut document = Document::new(schema()).with_row(Row::new());
        document.set_rows(vec![
            Row::new().with("Number", 1),
            Row::new().with("Number", 2),
            Row::new().with("Number", 3),
        ]);
        assert_eq!(document.len(), 3);
        assert_eq!(document.rows()[2].cell("Number"), &CellValue::Integer(3));
    }
}
