//! Canonical decimal text for numeric cells.
//!
//! Numeric cells are written as plain decimal numbers without trailing fractional zeros
//! and without a decimal point for integral values. Text input may use `.` or `,` as the
//! decimal separator; digit grouping and exponent notation are not supported. Absent and
//! blank values are written as `0`.
//!
//! | Input | Output |
//! |-------|--------|
//! | `1` | `1` |
//! | `-3` | `-3` |
//! | `1.8` | `1.8` |
//! | `"1,9780"` | `1.978` |
//! | `"  "`, absent | `0` |

use crate::encoding::Charset;
use crate::{CellValue, Error, Result};
use bigdecimal::BigDecimal;
use std::str::FromStr;

/// Normalizes a cell value into canonical decimal text.
///
/// Text values are decoded from `input` before parsing.
///
/// # Errors
///
/// Returns [`Error::NumericFormat`] if the value is not a number.
///
/// # Examples
///
/// ```rust
/// use serde_dif::encoding::Charset;
/// use serde_dif::number::normalize;
/// use serde_dif::CellValue;
///
/// let utf8 = Charset::for_label("UTF-8").unwrap();
/// assert_eq!(normalize(&CellValue::from("1,9780"), utf8).unwrap(), "1.978");
/// assert_eq!(normalize(&CellValue::from(-3), utf8).unwrap(), "-3");
/// assert_eq!(normalize(&CellValue::Absent, utf8).unwrap(), "0");
/// ```
pub fn normalize(value: &CellValue, input: Charset) -> Result<String> {
    match value {
        CellValue::Absent => Ok("0".to_string()),
        CellValue::Integer(i) => Ok(i.to_string()),
        CellValue::Decimal(d) => {
            if !d.is_finite() {
                return Err(Error::numeric_format(&d.to_string()));
            }
            // Display of f64 is the shortest text that reads back to the same value
            normalize_text(&d.to_string())
        }
        CellValue::Text(bytes) => normalize_text(&input.decode(bytes)),
    }
}

/// Normalizes numeric text.
///
/// # Errors
///
/// Returns [`Error::NumericFormat`] if the trimmed text is not a plain decimal number.
///
/// # Examples
///
/// ```rust
/// use serde_dif::number::normalize_text;
///
/// assert_eq!(normalize_text("1.8").unwrap(), "1.8");
/// assert_eq!(normalize_text(" 100,00 ").unwrap(), "100");
/// assert_eq!(normalize_text("").unwrap(), "0");
/// assert!(normalize_text("1.000,5").is_err());
/// assert!(normalize_text("1e3").is_err());
/// ```
pub fn normalize_text(text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok("0".to_string());
    }

    let decimal = parse_decimal(trimmed).ok_or_else(|| Error::numeric_format(text))?;
    Ok(decimal.normalized().to_plain_string())
}

fn parse_decimal(text: &str) -> Option<BigDecimal> {
    if !text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b',' | b'+' | b'-'))
    {
        return None;
    }

    let separators = text.bytes().filter(|b| matches!(b, b'.' | b',')).count();
    if separators > 1 {
        return None;
    }

    BigDecimal::from_str(&text.replace(',', ".")).ok()
}
