//! Character encodings and line transcoding.
//!
//! Every line of a DIF document is produced in the configured input encoding and then
//! transcoded to the output encoding. Transcoding never fails: characters that the output
//! encoding cannot represent are written as a single `?`, and malformed input decodes to
//! U+FFFD before being re-encoded.
//!
//! Encodings are looked up by label through [`Charset::for_label`]. Besides the labels of
//! the WHATWG Encoding Standard (handled by `encoding_rs`), strict 7-bit ASCII and BOM-less
//! UTF-16 output are supported.
//!
//! ## Examples
//!
//! ```rust
//! use serde_dif::encoding::{Charset, Transcoder};
//!
//! let transcoder = Transcoder::new(
//!     Charset::for_label("UTF-8").unwrap(),
//!     Charset::for_label("ASCII").unwrap(),
//! );
//!
//! assert_eq!(transcoder.transcode("this Ä and €".as_bytes()), b"this ? and ?".to_vec());
//! ```

use crate::{Error, Result};
use encoding_rs::{EncoderResult, Encoding, ISO_2022_JP, UTF_16BE, UTF_16LE, UTF_8};
use std::borrow::Cow;
use std::cell::Cell;

const SUBSTITUTE: u8 = b'?';

const ASCII_LABELS: &[&str] = &[
    "ascii",
    "us-ascii",
    "us_ascii",
    "ansi_x3.4-1968",
    "iso646-us",
    "iso-ir-6",
    "646",
    "cp367",
    "ibm367",
    "csascii",
];

/// A resolved character encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Charset {
    /// Strict 7-bit ASCII
    Ascii,
    /// Any other encoding known to `encoding_rs`
    Standard(&'static Encoding),
}

impl Charset {
    /// Resolves an encoding label, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedEncoding`] for unknown labels and for the
    /// `replacement` encoding, which has no encoder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dif::encoding::Charset;
    ///
    /// assert_eq!(Charset::for_label("US-ASCII").unwrap(), Charset::Ascii);
    /// assert_eq!(Charset::for_label("latin1").unwrap().name(), "windows-1252");
    /// assert!(Charset::for_label("klingon").is_err());
    /// ```
    pub fn for_label(label: &str) -> Result<Self> {
        let trimmed = label.trim();
        if ASCII_LABELS
            .iter()
            .any(|ascii| ascii.eq_ignore_ascii_case(trimmed))
        {
            return Ok(Charset::Ascii);
        }

        match Encoding::for_label_no_replacement(trimmed.as_bytes()) {
            Some(encoding) => Ok(Charset::Standard(encoding)),
            None => Err(Error::unsupported_encoding(label)),
        }
    }

    /// Returns the canonical name of the encoding.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Charset::Ascii => "US-ASCII",
            Charset::Standard(encoding) => encoding.name(),
        }
    }

    /// Returns `true` if this is UTF-8.
    #[must_use]
    pub fn is_utf8(self) -> bool {
        self == Charset::Standard(UTF_8)
    }

    /// Returns `true` if the meaning of a byte depends on escape sequences seen before it.
    ///
    /// ISO-2022-JP is the only such encoding: inside a JIS X 0208 run, `0x22` is half of a
    /// two-byte character rather than a quote.
    #[must_use]
    pub fn is_stateful(self) -> bool {
        self == Charset::Standard(ISO_2022_JP)
    }

    /// Encodes `text` into this charset, writing `?` for unrepresentable characters.
    ///
    /// Returns the bytes and the number of substituted characters.
    pub fn encode(self, text: &str) -> (Vec<u8>, usize) {
        match self {
            Charset::Ascii => {
                let mut substituted = 0;
                let bytes = text
                    .chars()
                    .map(|ch| {
                        if ch.is_ascii() {
                            ch as u8
                        } else {
                            substituted += 1;
                            SUBSTITUTE
                        }
                    })
                    .collect();
                (bytes, substituted)
            }
            Charset::Standard(encoding) if encoding == UTF_8 => (text.as_bytes().to_vec(), 0),
            Charset::Standard(encoding) if encoding == UTF_16LE => {
                (text.encode_utf16().flat_map(u16::to_le_bytes).collect(), 0)
            }
            Charset::Standard(encoding) if encoding == UTF_16BE => {
                (text.encode_utf16().flat_map(u16::to_be_bytes).collect(), 0)
            }
            Charset::Standard(encoding) => encode_with_substitution(encoding, text),
        }
    }

    /// Encodes `text`, discarding the substitution count.
    pub fn encode_lossy(self, text: &str) -> Vec<u8> {
        self.encode(text).0
    }

    /// Decodes `bytes` from this charset; malformed sequences become U+FFFD.
    pub fn decode(self, bytes: &[u8]) -> Cow<'_, str> {
        match self {
            Charset::Ascii => {
                if bytes.is_ascii() {
                    // All ASCII bytes are valid UTF-8
                    String::from_utf8_lossy(bytes)
                } else {
                    Cow::Owned(
                        bytes
                            .iter()
                            .map(|&b| {
                                if b.is_ascii() {
                                    b as char
                                } else {
                                    char::REPLACEMENT_CHARACTER
                                }
                            })
                            .collect(),
                    )
                }
            }
            Charset::Standard(encoding) => encoding.decode_without_bom_handling(bytes).0,
        }
    }
}

/// Drives an `encoding_rs` encoder, writing `?` wherever it reports an unmappable char.
fn encode_with_substitution(encoding: &'static Encoding, text: &str) -> (Vec<u8>, usize) {
    let mut encoder = encoding.new_encoder();
    let mut out = Vec::with_capacity(text.len());
    let mut buffer = [0u8; 1024];
    let mut remaining = text;
    let mut substituted = 0;

    loop {
        let (result, read, written) =
            encoder.encode_from_utf8_without_replacement(remaining, &mut buffer, true);
        out.extend_from_slice(&buffer[..written]);
        remaining = &remaining[read..];

        match result {
            EncoderResult::InputEmpty => return (out, substituted),
            EncoderResult::OutputFull => {}
            // Stateful encoders (ISO-2022-JP) are back in ASCII mode at this point
            EncoderResult::Unmappable(_) => {
                out.push(SUBSTITUTE);
                substituted += 1;
            }
        }
    }
}

/// Converts lines from an input charset to an output charset.
#[derive(Debug)]
pub struct Transcoder {
    input: Charset,
    output: Charset,
    substituted: Cell<usize>,
}

impl Transcoder {
    pub fn new(input: Charset, output: Charset) -> Self {
        Transcoder {
            input,
            output,
            substituted: Cell::new(0),
        }
    }

    /// Resolves both labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedEncoding`] if either label is unknown.
    pub fn from_labels(input: &str, output: &str) -> Result<Self> {
        Ok(Transcoder::new(
            Charset::for_label(input)?,
            Charset::for_label(output)?,
        ))
    }

    #[must_use]
    pub fn input(&self) -> Charset {
        self.input
    }

    #[must_use]
    pub fn output(&self) -> Charset {
        self.output
    }

    /// Returns `true` if lines pass through unchanged.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.input == self.output
    }

    /// Converts a UTF-8 token into the input encoding.
    pub fn to_input(&self, token: &str) -> Vec<u8> {
        if self.input.is_utf8() {
            token.as_bytes().to_vec()
        } else {
            self.input.encode_lossy(token)
        }
    }

    /// Transcodes one line from the input to the output encoding.
    pub fn transcode(&self, line: &[u8]) -> Vec<u8> {
        if self.is_identity() {
            return line.to_vec();
        }

        let text = self.input.decode(line);
        let (bytes, substituted) = self.output.encode(&text);
        if substituted > 0 {
            self.substituted.set(self.substituted.get() + substituted);
        }
        bytes
    }

    /// Transcodes every line of a chunk.
    pub fn transcode_lines(&self, lines: &[Vec<u8>]) -> Vec<Vec<u8>> {
        lines.iter().map(|line| self.transcode(line)).collect()
    }

    /// Returns the number of characters written as `?` so far.
    #[must_use]
    pub fn substituted(&self) -> usize {
        self.substituted.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charset(label: &str) -> Charset {
        Charset::for_label(label).unwrap()
    }

    #[test]
    fn test_ascii_is_strict() {
        // encoding_rs maps "ascii" to windows-1252, which would keep "Ä"
        assert_eq!(charset("ASCII"), Charset::Ascii);
        let (bytes, substituted) = Charset::Ascii.encode("Ä");
        assert_eq!(bytes, b"?".to_vec());
        assert_eq!(substituted, 1);
    }

    #[test]
    fn test_windows_1252_output() {
        let transcoder = Transcoder::new(charset("UTF-8"), charset("Windows-1252"));
        assert_eq!(
            transcoder.transcode("\"this ä and €\"".as_bytes()),
            vec![b'"', b't', b'h', b'i', b's', b' ', 0xE4, b' ', b'a', b'n', b'd', b' ', 0x80, b'"']
        );
        assert_eq!(transcoder.substituted(), 0);
    }

    #[test]
    fn test_iso_8859_15_input_to_utf8() {
        let transcoder = Transcoder::new(charset("ISO-8859-15"), charset("UTF-8"));
        assert_eq!(transcoder.transcode(&[0xE4, b' ', 0xA4]), "ä €".as_bytes().to_vec());
    }

    #[test]
    fn test_unmappable_counts_substitutions() {
        let transcoder = Transcoder::new(charset("UTF-8"), charset("ISO-8859-1"));
        // ISO-8859-1 is windows-1252 in encoding_rs; "€" fits, "Ω" and "→" do not
        assert_eq!(transcoder.transcode("€Ω→a".as_bytes()), vec![0x80, b'?', b'?', b'a']);
        assert_eq!(transcoder.substituted(), 2);
    }

    #[test]
    fn test_identity_passes_bytes_through() {
        let transcoder = Transcoder::new(charset("UTF-8"), charset("utf8"));
        assert!(transcoder.is_identity());
        // Malformed UTF-8 is left alone on the identity path
        assert_eq!(transcoder.transcode(&[0xFF, b'a']), vec![0xFF, b'a']);
    }

    #[test]
    fn test_malformed_input_becomes_substitute() {
        let transcoder = Transcoder::new(charset("UTF-8"), charset("ASCII"));
        assert_eq!(transcoder.transcode(&[b'a', 0xFF, b'b']), b"a?b".to_vec());
    }

    #[test]
    fn test_utf16_output() {
        assert_eq!(charset("UTF-16BE").encode_lossy("A€"), vec![0x00, 0x41, 0x20, 0xAC]);
        assert_eq!(charset("utf-16").encode_lossy("A"), vec![0x41, 0x00]);
    }

    #[test]
    fn test_to_input_for_utf16() {
        let transcoder = Transcoder::new(charset("UTF-16LE"), charset("UTF-8"));
        assert_eq!(transcoder.to_input("0,1"), vec![b'0', 0, b',', 0, b'1', 0]);
        assert_eq!(transcoder.transcode(&transcoder.to_input("0,1")), b"0,1".to_vec());
    }

    #[test]
    fn test_stateful_encoder_substitution() {
        let iso_2022_jp = charset("ISO-2022-JP");
        let (bytes, substituted) = iso_2022_jp.encode("日€a");
        assert_eq!(substituted, 1);
        // Ends in ASCII mode with the substitute and the trailing letter
        assert!(bytes.ends_with(b"?a"));
    }

    #[test]
    fn test_unknown_and_replacement_labels() {
        assert!(matches!(
            Charset::for_label("no-such-charset"),
            Err(Error::UnsupportedEncoding(_))
        ));
        assert!(Charset::for_label("replacement").is_err());
    }
}
