//! Customizing DIF output with DifOptions.
//!
//! Run with: cargo run --example custom_options

use serde_dif::{
    row, to_string_with_options, to_vec_with_options, ColumnType, DifOptions, Document, Schema,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let schema = Schema::new()
        .with_column("City", ColumnType::String)
        .with_column("Temperature", ColumnType::Numeric);
    let document = Document::new(schema)
        .with_row(row! { "City" => "Köln", "Temperature" => "12,50" })
        .with_row(row! { "City" => "Zürich €", "Temperature" => -3 });

    // Default output is ASCII, so non-ASCII characters become "?"
    println!("Default (ASCII, LF):");
    let default = serde_dif::to_string(&document)?;
    println!("{}\n", default);

    // UTF-8 output keeps every character
    println!("UTF-8 output:");
    let utf8_options = DifOptions::new().with_output_encoding("UTF-8");
    println!("{}\n", to_string_with_options(&document, utf8_options)?);

    // Windows-1252 with CRLF line breaks, as read by older spreadsheet software
    println!("Windows-1252, CRLF, custom comment:");
    let windows_options = DifOptions::new()
        .with_output_encoding("Windows-1252")
        .with_line_break("\r\n")
        .with_generator_comment("WEATHER EXPORT");
    let bytes = to_vec_with_options(&document, windows_options)?;
    let (text, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
    println!("{} bytes:\n{}", bytes.len(), text.replace("\r\n", "\\r\\n\n"));

    Ok(())
}
