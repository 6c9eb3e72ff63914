//! DIF Format Reference
//!
//! This module documents the Data Interchange Format as written by this library.
//!
//! # Overview
//!
//! DIF is a line-oriented text format for exchanging tables between spreadsheet programs.
//! A document is a sequence of **chunks**. Every chunk has a fixed number of lines, and
//! every line ends with the line terminator (`"\n"` by default, `"\r\n"` for Windows
//! consumers).
//!
//! In DIF terminology a column is a **vector** and a row is a **tuple**.
//!
//! # Header Section
//!
//! Header chunks have three lines: the topic, `0,<number>` and a quoted string.
//!
//! ```text
//! TABLE
//! 0,1
//! "MEHR IT DIF WRITER"
//! VECTORS
//! 0,2
//! ""
//! TUPLES
//! 0,3
//! ""
//! DATA
//! 0,0
//! ""
//! ```
//!
//! | Topic | Number | String |
//! |-------|--------|--------|
//! | `TABLE` | Always `1` | Generator comment |
//! | `VECTORS` | Column count | Empty |
//! | `TUPLES` | Row count, plus one if the header row is written | Empty |
//! | `DATA` | Always `0` | Empty, ends the header section |
//!
//! # Data Section
//!
//! Data chunks have two lines. The first line is `<type indicator>,<number>`:
//!
//! | Indicator | Meaning | First line | Second line |
//! |-----------|---------|------------|-------------|
//! | `-1` | Directive | `-1,0` | `BOT` (beginning of tuple) or `EOD` (end of data) |
//! | `0` | Numeric value | `0,<number>` | `V` |
//! | `1` | String value | `1,0` | `"<text>"` |
//!
//! Every tuple starts with a `BOT` directive followed by one data chunk per column, in
//! column order. When the header row is enabled it is the first tuple and holds the column
//! names as string chunks. The document ends with an `EOD` directive.
//!
//! ```text
//! -1,0
//! BOT
//! 1,0
//! "hello"
//! 0,1
//! V
//! -1,0
//! EOD
//! ```
//!
//! ## Numbers
//!
//! Numbers are written in plain decimal notation with `.` as the separator, without
//! trailing fractional zeros and without a point for integral values. Empty cells of
//! numeric columns are written as `0`.
//!
//! ## Strings
//!
//! Strings are always quoted. A quote inside the text is written twice:
//!
//! ```text
//! "has a double quote "" in text"
//! ```
//!
//! Empty and missing cells of string columns are written as `""`.
//!
//! # Character Encodings
//!
//! The format itself has no encoding declaration. Readers usually expect the platform's
//! legacy code page, so output defaults to ASCII and can be switched to any encoding the
//! consumer expects (for example `Windows-1252` for Excel on western Windows systems).
//! Characters the output encoding cannot represent are written as `?`. All structural
//! lines are ASCII and look the same in every ASCII-compatible encoding.
//!
//! # Limitations
//!
//! - Only numeric and string cells; DIF's boolean values (`TRUE`/`FALSE`) and error values
//!   (`NA`, `ERROR`) are not written
//! - The optional `LABEL`, `COMMENT`, `SIZE` and `UNITS` header chunks are not written
//! - Reading DIF documents is not supported

// This module contains only documentation; no implementation code
