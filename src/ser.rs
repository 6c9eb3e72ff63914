//! Converting serializable records into rows.
//!
//! This module provides [`RowSerializer`], a serde `Serializer` that turns a struct or map
//! into a [`Row`], and [`CellSerializer`], which turns a single field into a [`CellValue`].
//!
//! ## Field Conversions
//!
//! | Rust value | Cell |
//! |------------|------|
//! | Integers | `Integer` (u64 above `i64::MAX` becomes its decimal text) |
//! | `f32`, `f64` | `Decimal` |
//! | `bool` | `Integer(1)` or `Integer(0)` |
//! | `&str`, `String`, `char` | `Text` |
//! | Byte arrays serialized as bytes | `Text`, taken as bytes in the input encoding |
//! | `None`, `()` | `Absent` |
//! | Unit enum variants | `Text` with the variant name |
//!
//! Sequences, nested maps and structs, and enum variants with data cannot be stored in a
//! cell and fail with [`Error::UnsupportedType`].
//!
//! ## Usage
//!
//! ```rust
//! use serde::Serialize;
//! use serde_dif::{to_row, CellValue};
//!
//! #[derive(Serialize)]
//! struct User { id: u32, name: String, email: Option<String> }
//!
//! let row = to_row(&User { id: 7, name: "Alice".to_string(), email: None }).unwrap();
//!
//! assert_eq!(row.get("id"), Some(&CellValue::Integer(7)));
//! assert_eq!(row.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! assert!(row.get("email").unwrap().is_absent());
//! ```

use crate::{CellValue, Error, Result, Row};
use serde::ser::{self, Impossible, Serialize};

/// Serializes a struct or map into a [`Row`].
pub struct RowSerializer;

/// Serializes a single field into a [`CellValue`].
pub struct CellSerializer;

pub struct SerializeRow {
    row: Row,
    current_key: Option<String>,
}

impl SerializeRow {
    fn new() -> Self {
        SerializeRow {
            row: Row::new(),
            current_key: None,
        }
    }
}

fn not_a_record(what: &str) -> Error {
    Error::unsupported_type(&format!("{} cannot be written as a row", what))
}

fn not_a_cell(what: &str) -> Error {
    Error::unsupported_type(&format!("{} cannot be written into a single cell", what))
}

fn to_cell<T: Serialize + ?Sized>(value: &T) -> Result<CellValue> {
    value.serialize(CellSerializer)
}

impl ser::Serializer for RowSerializer {
    type Ok = Row;
    type Error = Error;

    type SerializeSeq = Impossible<Row, Error>;
    type SerializeTuple = Impossible<Row, Error>;
    type SerializeTupleStruct = Impossible<Row, Error>;
    type SerializeTupleVariant = Impossible<Row, Error>;
    type SerializeMap = SerializeRow;
    type SerializeStruct = SerializeRow;
    type SerializeStructVariant = Impossible<Row, Error>;

    fn serialize_bool(self, _v: bool) -> Result<Row> {
        Err(not_a_record("bool"))
    }

    fn serialize_i8(self, _v: i8) -> Result<Row> {
        Err(not_a_record("integer"))
    }

    fn serialize_i16(self, _v: i16) -> Result<Row> {
        Err(not_a_record("integer"))
    }

    fn serialize_i32(self, _v: i32) -> Result<Row> {
        Err(not_a_record("integer"))
    }

    fn serialize_i64(self, _v: i64) -> Result<Row> {
        Err(not_a_record("integer"))
    }

    fn serialize_u8(self, _v: u8) -> Result<Row> {
        Err(not_a_record("integer"))
    }

    fn serialize_u16(self, _v: u16) -> Result<Row> {
        Err(not_a_record("integer"))
    }

    fn serialize_u32(self, _v: u32) -> Result<Row> {
        Err(not_a_record("integer"))
    }

    fn serialize_u64(self, _v: u64) -> Result<Row> {
        Err(not_a_record("integer"))
    }

    fn serialize_f32(self, _v: f32) -> Result<Row> {
        Err(not_a_record("float"))
    }

    fn serialize_f64(self, _v: f64) -> Result<Row> {
        Err(not_a_record("float"))
    }

    fn serialize_char(self, _v: char) -> Result<Row> {
        Err(not_a_record("char"))
    }

    fn serialize_str(self, _v: &str) -> Result<Row> {
        Err(not_a_record("string"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Row> {
        Err(not_a_record("bytes"))
    }

    fn serialize_none(self) -> Result<Row> {
        Err(not_a_record("none"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Row>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Row> {
        Err(not_a_record("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Row> {
        Err(not_a_record(name))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Row> {
        Err(not_a_record(variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Row>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Row>
    where
        T: ?Sized + Serialize,
    {
        Err(not_a_record("newtype variant"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(not_a_record("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(not_a_record("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(not_a_record("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(not_a_record("tuple variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeRow> {
        Ok(SerializeRow::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeRow> {
        Ok(SerializeRow::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(not_a_record("struct variant"))
    }
}

impl ser::SerializeMap for SerializeRow {
    type Ok = Row;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let column = match to_cell(key)? {
            CellValue::Text(bytes) => String::from_utf8(bytes)
                .map_err(|_| Error::custom("Column names must be valid UTF-8"))?,
            CellValue::Integer(i) => i.to_string(),
            _ => return Err(Error::custom("Column names must be strings or integers")),
        };
        self.current_key = Some(column);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.row.insert(key, to_cell(value)?);
        Ok(())
    }

    fn end(self) -> Result<Row> {
        Ok(self.row)
    }
}

impl ser::SerializeStruct for SerializeRow {
    type Ok = Row;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.row.insert(key, to_cell(value)?);
        Ok(())
    }

    fn skip_field(&mut self, _key: &'static str) -> Result<()> {
        // Skipped fields are missing cells, written like absent values
        Ok(())
    }

    fn end(self) -> Result<Row> {
        Ok(self.row)
    }
}

impl ser::Serializer for CellSerializer {
    type Ok = CellValue;
    type Error = Error;

    type SerializeSeq = Impossible<CellValue, Error>;
    type SerializeTuple = Impossible<CellValue, Error>;
    type SerializeTupleStruct = Impossible<CellValue, Error>;
    type SerializeTupleVariant = Impossible<CellValue, Error>;
    type SerializeMap = Impossible<CellValue, Error>;
    type SerializeStruct = Impossible<CellValue, Error>;
    type SerializeStructVariant = Impossible<CellValue, Error>;

    fn serialize_bool(self, v: bool) -> Result<CellValue> {
        Ok(CellValue::Integer(i64::from(v)))
    }

    fn serialize_i8(self, v: i8) -> Result<CellValue> {
        Ok(CellValue::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<CellValue> {
        Ok(CellValue::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<CellValue> {
        Ok(CellValue::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<CellValue> {
        Ok(CellValue::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<CellValue> {
        match i64::try_from(v) {
            Ok(i) => Ok(CellValue::Integer(i)),
            Err(_) => Ok(CellValue::from(v.to_string())),
        }
    }

    fn serialize_u8(self, v: u8) -> Result<CellValue> {
        Ok(CellValue::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<CellValue> {
        Ok(CellValue::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<CellValue> {
        Ok(CellValue::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<CellValue> {
        Ok(CellValue::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<CellValue> {
        match i64::try_from(v) {
            Ok(i) => Ok(CellValue::Integer(i)),
            Err(_) => Ok(CellValue::from(v.to_string())),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<CellValue> {
        Ok(CellValue::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<CellValue> {
        Ok(CellValue::from(v))
    }

    fn serialize_char(self, v: char) -> Result<CellValue> {
        Ok(CellValue::from(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<CellValue> {
        Ok(CellValue::from(v))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<CellValue> {
        Ok(CellValue::bytes(v))
    }

    fn serialize_none(self) -> Result<CellValue> {
        Ok(CellValue::Absent)
    }

    fn serialize_some<T>(self, value: &T) -> Result<CellValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<CellValue> {
        Ok(CellValue::Absent)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<CellValue> {
        Ok(CellValue::Absent)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<CellValue> {
        Ok(CellValue::from(variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<CellValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<CellValue>
    where
        T: ?Sized + Serialize,
    {
        Err(not_a_cell("newtype variant"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(not_a_cell("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(not_a_cell("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(not_a_cell("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(not_a_cell("tuple variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(not_a_cell("map"))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(not_a_cell(name))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(not_a_cell("struct variant"))
    }
}
