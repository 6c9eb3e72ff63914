//! DIF document writing.
//!
//! This module provides [`DifWriter`], which turns a [`Document`] into a DIF byte stream.
//!
//! ## Overview
//!
//! A write runs in fixed order:
//!
//! 1. **Validation**: the schema needs a column, the document a row, and both encoding
//!    labels must resolve. Nothing is written if validation fails.
//! 2. **Header**: the `TABLE`, `VECTORS`, `TUPLES` and `DATA` header chunks
//! 3. **Header row**: a `BOT` directive and one string chunk per column name, if enabled
//! 4. **Rows**: a `BOT` directive and one data chunk per column, for every row
//! 5. **Terminator**: the `EOD` directive
//!
//! Every chunk is transcoded to the output encoding and written with one call to the sink.
//! Errors after validation (a numeric cell that is not a number, a failing sink) leave the
//! chunks written so far in the sink.
//!
//! ## Usage
//!
//! ```rust
//! use serde_dif::{row, ColumnType, DifOptions, DifWriter, Document, Schema};
//!
//! let document = Document::new(
//!     Schema::new()
//!         .with_column("Text", ColumnType::String)
//!         .with_column("Number", ColumnType::Numeric),
//! )
//! .with_row(row! { "Text" => "hello", "Number" => 1 });
//!
//! let writer = DifWriter::new(DifOptions::new());
//!
//! let mut buffer = Vec::new();
//! writer.write(&document, &mut buffer).unwrap();
//! assert!(buffer.starts_with(b"TABLE\n0,1\n\"MEHR IT DIF WRITER\"\n"));
//! assert!(buffer.ends_with(b"-1,0\nEOD\n"));
//! ```

use crate::chunk::{Chunk, ChunkEncoder, Directive, HeaderTopic};
use crate::encoding::Transcoder;
use crate::{DifOptions, Document, Error, Result};
use log::{debug, trace, warn};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes documents as DIF.
///
/// A writer only holds its options and can be reused for any number of documents.
#[derive(Clone, Debug, Default)]
pub struct DifWriter {
    options: DifOptions,
}

impl DifWriter {
    #[must_use]
    pub fn new(options: DifOptions) -> Self {
        DifWriter { options }
    }

    #[must_use]
    pub fn options(&self) -> &DifOptions {
        &self.options
    }

    /// Writes `document` to `sink`.
    ///
    /// The sink is flushed but not closed; pass `&mut sink` to keep using it afterwards.
    ///
    /// # Errors
    ///
    /// - [`Error::NoColumns`], [`Error::NoData`] or [`Error::UnsupportedEncoding`] before
    ///   anything is written
    /// - [`Error::NumericFormat`] when a numeric cell is reached that is not a number
    /// - [`Error::Io`] if the sink fails
    pub fn write<W: Write>(&self, document: &Document, mut sink: W) -> Result<()> {
        let transcoder = self.prepare(document)?;
        self.emit(document, &transcoder, &mut sink)
    }

    /// Creates or truncates the file at `path` and writes `document` to it.
    ///
    /// The file is only created once validation passed, and it is closed on every path,
    /// including errors during writing.
    ///
    /// # Errors
    ///
    /// Same as [`DifWriter::write`], plus [`Error::Io`] if the file cannot be created.
    pub fn write_to_path<P: AsRef<Path>>(&self, document: &Document, path: P) -> Result<()> {
        let transcoder = self.prepare(document)?;
        let mut file = File::create(path.as_ref())?;
        debug!("Writing DIF document to {}", path.as_ref().display());
        self.emit(document, &transcoder, &mut file)
    }

    /// Writes `document` into a byte vector.
    ///
    /// # Errors
    ///
    /// Same as [`DifWriter::write`], except for sink failures.
    pub fn write_to_vec(&self, document: &Document) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(256);
        self.write(document, &mut buffer)?;
        Ok(buffer)
    }

    /// Writes `document` into a string.
    ///
    /// # Errors
    ///
    /// Same as [`DifWriter::write_to_vec`], plus [`Error::NonUtf8Output`] if the output
    /// encoding produced bytes that are not UTF-8 (use [`DifWriter::write_to_vec`] then).
    pub fn write_to_string(&self, document: &Document) -> Result<String> {
        let buffer = self.write_to_vec(document)?;
        String::from_utf8(buffer).map_err(|_| Error::NonUtf8Output)
    }

    fn prepare(&self, document: &Document) -> Result<Transcoder> {
        if document.schema().is_empty() {
            return Err(Error::NoColumns);
        }
        if document.is_empty() {
            return Err(Error::NoData);
        }
        Transcoder::from_labels(&self.options.input_encoding, &self.options.output_encoding)
    }

    fn emit<W: Write>(
        &self,
        document: &Document,
        transcoder: &Transcoder,
        sink: &mut W,
    ) -> Result<()> {
        let schema = document.schema();
        debug!(
            "Writing DIF document: {} columns, {} tuples, {} -> {}",
            schema.len(),
            document.tuple_count(),
            transcoder.input().name(),
            transcoder.output().name()
        );

        let mut out = ChunkSink {
            encoder: ChunkEncoder::new(transcoder),
            transcoder,
            line_break: self.options.line_break.as_bytes(),
            sink,
        };

        let generator_comment = transcoder.to_input(&self.options.generator_comment);
        out.write(Chunk::Header {
            topic: HeaderTopic::Table,
            count: 1,
            comment: &generator_comment,
        })?;
        out.write(Chunk::Header {
            topic: HeaderTopic::Vectors,
            count: schema.len(),
            comment: b"",
        })?;
        out.write(Chunk::Header {
            topic: HeaderTopic::Tuples,
            count: document.tuple_count(),
            comment: b"",
        })?;
        out.write(Chunk::Header {
            topic: HeaderTopic::Data,
            count: 0,
            comment: b"",
        })?;

        if schema.output_headers() {
            out.write(Chunk::Directive(Directive::Bot))?;
            for column in schema.columns() {
                let name = transcoder.to_input(column.name);
                out.write(Chunk::String(Some(&name)))?;
            }
        }

        let mut scratch = Vec::new();
        for row in document.rows() {
            out.write(Chunk::Directive(Directive::Bot))?;
            for column in schema.columns() {
                let value = row.cell(column.name);
                out.write(Chunk::cell(column.column_type, value, transcoder, &mut scratch))?;
            }
        }

        out.write(Chunk::Directive(Directive::Eod))?;
        out.sink.flush()?;

        if transcoder.substituted() > 0 {
            warn!(
                "{} characters not representable in {} were written as '?'",
                transcoder.substituted(),
                transcoder.output().name()
            );
        }
        debug!("Finished DIF document");
        Ok(())
    }
}

/// Encodes, transcodes and writes chunks to a sink.
struct ChunkSink<'a, W: Write> {
    encoder: ChunkEncoder<'a>,
    transcoder: &'a Transcoder,
    line_break: &'a [u8],
    sink: &'a mut W,
}

impl<W: Write> ChunkSink<'_, W> {
    fn write(&mut self, chunk: Chunk<'_>) -> Result<()> {
        trace!("Writing chunk {}", chunk);
        let lines = self.encoder.encode(&chunk)?;

        let mut bytes = Vec::with_capacity(lines.iter().map(Vec::len).sum::<usize>() + 8);
        for line in self.transcoder.transcode_lines(&lines) {
            bytes.extend_from_slice(&line);
            bytes.extend_from_slice(self.line_break);
        }

        self.sink.write_all(&bytes)?;
        Ok(())
    }
}
