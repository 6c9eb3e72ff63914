use serde::Serialize;
use serde_dif::{
    row, to_string, to_string_with_options, to_vec_with_options, CellValue, ColumnType,
    DifOptions, Document, Error, Row, Schema,
};

fn numeric_line(value: impl Into<CellValue>) -> String {
    let schema = Schema::new()
        .with_column("n", ColumnType::Numeric)
        .with_headers(false);
    let document = Document::new(schema).with_row(Row::new().with("n", value));
    let dif = to_string(&document).unwrap();
    let lines: Vec<&str> = dif.lines().collect();
    // TABLE, VECTORS, TUPLES and DATA headers, then BOT
    assert_eq!(lines[13], "BOT");
    assert_eq!(lines[15], "V");
    lines[14].to_string()
}

fn string_line(value: impl Into<CellValue>) -> String {
    let schema = Schema::new()
        .with_column("s", ColumnType::String)
        .with_headers(false);
    let document = Document::new(schema).with_row(Row::new().with("s", value));
    let dif = to_string(&document).unwrap();
    let lines: Vec<&str> = dif.lines().collect();
    assert_eq!(lines[14], "1,0");
    lines[15].to_string()
}

#[test]
fn test_header_counts() {
    let schema = Schema::new()
        .with_column("a", ColumnType::String)
        .with_column("b", ColumnType::Numeric)
        .with_column("c", ColumnType::String);
    let document = Document::new(schema)
        .with_row(row! { "a" => "x" })
        .with_row(row! { "b" => 2 })
        .with_row(row! { "c" => "z" })
        .with_row(row! {});

    let dif = to_string(&document).unwrap();
    let lines: Vec<&str> = dif.lines().collect();

    assert_eq!(
        &lines[..12],
        &[
            "TABLE",
            "0,1",
            "\"MEHR IT DIF WRITER\"",
            "VECTORS",
            "0,3",
            "\"\"",
            "TUPLES",
            "0,5",
            "\"\"",
            "DATA",
            "0,0",
            "\"\"",
        ]
    );
}

#[test]
fn test_chunk_layout() {
    let schema = Schema::new()
        .with_column("a", ColumnType::String)
        .with_column("b", ColumnType::Numeric);
    let document = Document::new(schema)
        .with_row(row! { "a" => "x", "b" => 1 })
        .with_row(row! { "a" => "y", "b" => 2 });

    let dif = to_string(&document).unwrap();
    let lines: Vec<&str> = dif.lines().collect();

    // 4 header chunks, (1 + 2 rows) tuples of BOT and 2 cells, EOD
    assert_eq!(lines.len(), 4 * 3 + 3 * (2 + 2 * 2) + 2);
    assert_eq!(lines.iter().filter(|l| **l == "BOT").count(), 3);
    assert_eq!(lines.iter().filter(|l| **l == "EOD").count(), 1);
    assert_eq!(&lines[lines.len() - 2..], &["-1,0", "EOD"]);
}

#[test]
fn test_column_order_follows_schema() {
    let schema = Schema::new()
        .with_column("second", ColumnType::String)
        .with_column("first", ColumnType::String);
    let document = Document::new(schema).with_row(row! { "first" => "1", "second" => "2" });

    let dif = to_string(&document).unwrap();
    let second = dif.find("\"2\"").unwrap();
    let first = dif.find("\"1\"").unwrap();
    assert!(second < first);
    assert!(dif.find("\"second\"").unwrap() < dif.find("\"first\"").unwrap());
}

#[test]
fn test_duplicate_column_keeps_position_and_last_type() {
    let schema = Schema::new()
        .with_column("a", ColumnType::String)
        .with_column("b", ColumnType::String)
        .with_column("a", ColumnType::Numeric);
    assert_eq!(schema.len(), 2);

    let document = Document::new(schema).with_row(row! { "a" => "7", "b" => "x" });
    let dif = to_string(&document).unwrap();
    assert!(dif.contains("VECTORS\n0,2\n"));
    assert!(dif.contains("-1,0\nBOT\n0,7\nV\n1,0\n\"x\"\n"));
}

#[test]
fn test_number_normalization() {
    assert_eq!(numeric_line(1), "0,1");
    assert_eq!(numeric_line(-3), "0,-3");
    assert_eq!(numeric_line(1.8), "0,1.8");
    assert_eq!(numeric_line("1,9780"), "0,1.978");
    assert_eq!(numeric_line("1.50"), "0,1.5");
    assert_eq!(numeric_line("  42 "), "0,42");
    assert_eq!(numeric_line("+5"), "0,5");
    assert_eq!(numeric_line("-0.000"), "0,0");
    assert_eq!(numeric_line(""), "0,0");
    assert_eq!(numeric_line(None::<i32>), "0,0");
    assert_eq!(numeric_line(u64::MAX), "0,18446744073709551615");
    assert_eq!(
        numeric_line("123456789012345678901234567890.000000000000000000001"),
        "0,123456789012345678901234567890.000000000000000000001"
    );
}

#[test]
fn test_invalid_numbers() {
    let invalid = [
        "abc", "1.2.3", "1,2.3", "--1", "0x10", "1 000", "1e3", "2.5E-2", "1e200000000",
    ];
    for text in invalid {
        let document = Document::new(Schema::new().with_column("n", ColumnType::Numeric))
            .with_row(Row::new().with("n", text));
        match to_string(&document) {
            Err(Error::NumericFormat { value }) => assert_eq!(value, text),
            other => panic!("Expected NumericFormat for {:?}, got {:?}", text, other),
        }
    }

    let document = Document::new(Schema::new().with_column("n", ColumnType::Numeric))
        .with_row(Row::new().with("n", f64::NAN));
    assert!(matches!(to_string(&document), Err(Error::NumericFormat { .. })));
}

#[test]
fn test_string_quoting() {
    assert_eq!(string_line("plain"), "\"plain\"");
    assert_eq!(string_line("\""), "\"\"\"\"");
    assert_eq!(string_line("a \"b\" c"), "\"a \"\"b\"\" c\"");
    assert_eq!(string_line(""), "\"\"");
    assert_eq!(string_line(None::<&str>), "\"\"");
    assert_eq!(string_line("comma, separated"), "\"comma, separated\"");
}

#[test]
fn test_numbers_in_string_columns() {
    assert_eq!(string_line(-3), "\"-3\"");
    assert_eq!(string_line(1.5), "\"1.5\"");
}

#[test]
fn test_numbers_in_string_columns_with_utf16_input() {
    let document = Document::new(Schema::new().with_column("S", ColumnType::String))
        .with_row(row! { "S" => -3 })
        .with_row(row! { "S" => 0.25 });
    let options = DifOptions::new()
        .with_input_encoding("UTF-16LE")
        .with_output_encoding("UTF-8");
    let dif = to_string_with_options(&document, options).unwrap();

    assert!(dif.contains("BOT\n1,0\n\"-3\"\n"));
    assert!(dif.contains("BOT\n1,0\n\"0.25\"\n"));
}

#[test]
fn test_f32_cells_keep_their_short_form() {
    assert_eq!(numeric_line(0.1f32), "0,0.1");
    assert_eq!(numeric_line(-2.7f32), "0,-2.7");
    assert_eq!(string_line(0.1f32), "\"0.1\"");
}

#[test]
fn test_utf16_input() {
    fn utf16le(text: &str) -> Vec<u8> {
        text.encode_utf16().flat_map(u16::to_le_bytes).collect()
    }

    let schema = Schema::new()
        .with_column("Text", ColumnType::String)
        .with_column("Number", ColumnType::Numeric);
    let document = Document::new(schema).with_row(
        Row::new()
            .with("Text", CellValue::bytes(utf16le("a \"q\" ä")))
            .with("Number", CellValue::bytes(utf16le("1,50"))),
    );

    let options = DifOptions::new()
        .with_input_encoding("UTF-16LE")
        .with_output_encoding("UTF-8");
    let dif = to_string_with_options(&document, options).unwrap();

    assert!(dif.starts_with("TABLE\n0,1\n\"MEHR IT DIF WRITER\"\n"));
    assert!(dif.contains("-1,0\nBOT\n1,0\n\"Text\"\n1,0\n\"Number\"\n"));
    assert!(dif.contains("1,0\n\"a \"\"q\"\" ä\"\n0,1.5\nV\n"));
}

#[test]
fn test_iso_2022_jp_input_keeps_kanji_intact() {
    // "、" is JIS X 0208 0x2122, whose second byte equals the quote byte
    let document = Document::new(Schema::new().with_column("s", ColumnType::String))
        .with_row(row! { "s" => CellValue::bytes(b"\x1b$B\x21\x22\x1b(B".to_vec()) })
        .with_row(row! { "s" => CellValue::bytes(b"say \"hi\"".to_vec()) });
    let options = DifOptions::new()
        .with_input_encoding("ISO-2022-JP")
        .with_output_encoding("UTF-8");
    let dif = to_string_with_options(&document, options).unwrap();

    assert!(dif.contains("BOT\n1,0\n\"、\"\n"));
    assert!(dif.contains("BOT\n1,0\n\"say \"\"hi\"\"\"\n"));
}

#[test]
fn test_ascii_output_replaces_each_character() {
    let document = Document::new(Schema::new().with_column("Grüße", ColumnType::String))
        .with_row(row! { "Grüße" => "日本" });
    let dif = to_string(&document).unwrap();
    assert!(dif.contains("\"Gr??e\""));
    assert!(dif.contains("\"??\""));
}

#[test]
fn test_iso_8859_1_output_substitutes_unmappable() {
    let document = Document::new(Schema::new().with_column("s", ColumnType::String))
        .with_row(row! { "s" => "ä€Ω" });
    let options = DifOptions::new().with_output_encoding("ISO-8859-1");
    let bytes = to_vec_with_options(&document, options).unwrap();

    // encoding_rs treats ISO-8859-1 as windows-1252, which has a euro sign
    assert!(bytes.windows(5).any(|w| w == [b'"', 0xE4, 0x80, b'?', b'"']));
}

#[test]
fn test_unknown_encodings() {
    let document = Document::new(Schema::new().with_column("s", ColumnType::String))
        .with_row(row! { "s" => "x" });

    let options = DifOptions::new().with_input_encoding("not-an-encoding");
    match to_string_with_options(&document, options) {
        Err(Error::UnsupportedEncoding(label)) => assert_eq!(label, "not-an-encoding"),
        other => panic!("Expected UnsupportedEncoding, got {:?}", other),
    }

    let options = DifOptions::new().with_output_encoding("replacement");
    assert!(matches!(
        to_string_with_options(&document, options),
        Err(Error::UnsupportedEncoding(_))
    ));
}

#[derive(Serialize)]
enum Status {
    Active,
}

#[derive(Serialize)]
struct Flagged {
    name: char,
    enabled: bool,
    status: Status,
    count: u8,
}

#[test]
fn test_serialized_scalars() {
    let schema = Schema::new()
        .with_column("name", ColumnType::String)
        .with_column("enabled", ColumnType::Numeric)
        .with_column("status", ColumnType::String)
        .with_column("count", ColumnType::Numeric);
    let record = Flagged {
        name: 'x',
        enabled: true,
        status: Status::Active,
        count: 200,
    };
    let document = Document::from_records(schema, [&record]).unwrap();
    let dif = to_string(&document).unwrap();

    assert!(dif.contains("BOT\n1,0\n\"x\"\n0,1\nV\n1,0\n\"Active\"\n0,200\nV\n"));
}
