//! Writing serde records as a DIF table.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_dif::{row, to_string, ColumnType, Document, Schema};
use std::error::Error;

#[derive(Debug, Serialize)]
struct Product {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "Stock")]
    stock: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    let schema = Schema::new()
        .with_column("Name", ColumnType::String)
        .with_column("Price", ColumnType::Numeric)
        .with_column("Stock", ColumnType::Numeric);

    let products = vec![
        Product {
            name: "Desk lamp".to_string(),
            price: 24.90,
            stock: 12,
        },
        Product {
            name: "Chair \"Comfort\"".to_string(),
            price: 89.0,
            stock: 3,
        },
    ];

    let mut document = Document::from_records(schema, &products)?;

    // Rows can also be built by hand, missing cells are written as 0 or ""
    document.push_row(row! { "Name" => "Shelf", "Price" => "49,50" });

    let dif = to_string(&document)?;
    println!("DIF output:\n{}", dif);
    println!("✓ {} tuples written", document.tuple_count());

    Ok(())
}
