/// Builds a [`Row`](crate::Row) from `column => value` pairs.
///
/// Values go through `Into<CellValue>`, so integers, floats, strings and `Option`s of those
/// can be used directly.
///
/// # Examples
///
/// ```rust
/// use serde_dif::{row, CellValue};
///
/// let row = row! { "Text" => "hello", "Number" => 1, "Note" => None::<&str> };
///
/// assert_eq!(row.len(), 3);
/// assert_eq!(row.get("Number"), Some(&CellValue::Integer(1)));
/// assert!(row! {}.is_empty());
/// ```
#[macro_export]
macro_rules! row {
    // Handle empty row
    () => {
        $crate::Row::new()
    };

    ($($column:expr => $value:expr),+ $(,)?) => {{
        let mut row = $crate::Row::new();
        $(
            row.insert($column, $value);
        )+
        row
    }};
}
