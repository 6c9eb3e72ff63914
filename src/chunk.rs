//! Chunk encoding.
//!
//! A DIF document is a sequence of chunks, each a small fixed group of lines:
//!
//! | Chunk | Lines |
//! |-------|-------|
//! | Header | `<TOPIC>`, `0,<count>`, `"<comment>"` |
//! | Directive | `-1,0`, `BOT` or `EOD` |
//! | Numeric data | `0,<number>`, `V` |
//! | String data | `1,0`, `"<text>"` |
//!
//! [`ChunkEncoder`] produces the lines of a chunk in the input encoding. Transcoding to the
//! output encoding and line terminators are left to the writer.

use crate::encoding::Transcoder;
use crate::number;
use crate::quote::Quoter;
use crate::{CellValue, ColumnType, Result, TypeIndicator};
use std::fmt;

/// Topic of a header chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderTopic {
    Table,
    Vectors,
    Tuples,
    Data,
}

impl HeaderTopic {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HeaderTopic::Table => "TABLE",
            HeaderTopic::Vectors => "VECTORS",
            HeaderTopic::Tuples => "TUPLES",
            HeaderTopic::Data => "DATA",
        }
    }
}

/// Control code of a directive chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive {
    /// Beginning of tuple
    Bot,
    /// End of data
    Eod,
}

impl Directive {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Directive::Bot => "BOT",
            Directive::Eod => "EOD",
        }
    }
}

/// One chunk of a DIF document.
#[derive(Clone, Debug, PartialEq)]
pub enum Chunk<'a> {
    Header {
        topic: HeaderTopic,
        count: usize,
        comment: &'a [u8],
    },
    Directive(Directive),
    Numeric(&'a CellValue),
    String(Option<&'a [u8]>),
}

impl<'a> Chunk<'a> {
    /// Builds the data chunk of a cell for a column of the given type.
    ///
    /// Non-text values in string columns are written as their text form, converted to the
    /// input encoding of `transcoder`.
    pub fn cell(
        column_type: ColumnType,
        value: &'a CellValue,
        transcoder: &Transcoder,
        scratch: &'a mut Vec<u8>,
    ) -> Self {
        match column_type {
            ColumnType::Numeric => Chunk::Numeric(value),
            ColumnType::String => match value {
                CellValue::Absent => Chunk::String(None),
                CellValue::Text(bytes) => Chunk::String(Some(bytes)),
                other => {
                    *scratch = transcoder.to_input(&other.to_string());
                    let text: &'a Vec<u8> = scratch;
                    Chunk::String(Some(text.as_slice()))
                }
            },
        }
    }

    /// Returns the type indicator of this chunk, or `None` for header chunks.
    #[must_use]
    pub fn indicator(&self) -> Option<TypeIndicator> {
        match self {
            Chunk::Header { .. } => None,
            Chunk::Directive(_) => Some(TypeIndicator::Directive),
            Chunk::Numeric(_) => Some(TypeIndicator::Numeric),
            Chunk::String(_) => Some(TypeIndicator::String),
        }
    }
}

impl fmt::Display for Chunk<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chunk::Header { topic, count, .. } => write!(f, "{} {}", topic.as_str(), count),
            Chunk::Directive(directive) => f.write_str(directive.as_str()),
            Chunk::Numeric(value) => write!(f, "numeric {}", value),
            Chunk::String(_) => f.write_str("string"),
        }
    }
}

/// Encodes chunks into lines in the input encoding.
pub struct ChunkEncoder<'t> {
    transcoder: &'t Transcoder,
    quoter: Quoter,
}

impl<'t> ChunkEncoder<'t> {
    pub fn new(transcoder: &'t Transcoder) -> Self {
        ChunkEncoder {
            transcoder,
            quoter: Quoter::new(transcoder.input()),
        }
    }

    /// Encodes a chunk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NumericFormat`](crate::Error::NumericFormat) if a numeric chunk
    /// holds a value that is not a number.
    pub fn encode(&self, chunk: &Chunk<'_>) -> Result<Vec<Vec<u8>>> {
        let t = self.transcoder;
        let lines = match chunk {
            Chunk::Header {
                topic,
                count,
                comment,
            } => vec![
                t.to_input(topic.as_str()),
                t.to_input(&format!("0,{}", count)),
                self.quoter.quote(Some(*comment)),
            ],
            Chunk::Directive(directive) => vec![
                t.to_input(&format!("{},0", TypeIndicator::Directive.code())),
                t.to_input(directive.as_str()),
            ],
            Chunk::Numeric(value) => {
                let number = number::normalize(value, t.input())?;
                vec![
                    t.to_input(&format!("{},{}", TypeIndicator::Numeric.code(), number)),
                    t.to_input("V"),
                ]
            }
            Chunk::String(value) => vec![
                t.to_input(&format!("{},0", TypeIndicator::String.code())),
                self.quoter.quote(*value),
            ],
        };
        Ok(lines)
    }
}
