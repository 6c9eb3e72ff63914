//! Quoting of string payloads.
//!
//! DIF strings are wrapped in double quotes, and quotes inside the text are escaped by
//! doubling them: `say "hi"` becomes `"say ""hi"""`. The quote is searched on code unit
//! boundaries of the input encoding, so a quote byte inside a UTF-16 code unit is never
//! mistaken for a quote character.
//!
//! Stateful encodings (ISO-2022-JP) cannot be searched byte-wise at all, because `0x22`
//! also occurs as half of a JIS X 0208 character. Texts in such encodings are decoded,
//! quoted as characters and encoded again.

use crate::encoding::Charset;

/// Quotes texts that are encoded in a fixed input encoding.
#[derive(Clone, Debug)]
pub struct Quoter {
    charset: Charset,
    quote: Vec<u8>,
}

impl Quoter {
    /// Creates a quoter for texts in `charset`, resolving the quote character once.
    pub fn new(charset: Charset) -> Self {
        Quoter {
            charset,
            quote: charset.encode_lossy("\""),
        }
    }

    /// Returns the quote character in the input encoding.
    pub fn quote_char(&self) -> &[u8] {
        &self.quote
    }

    /// Quotes `value`; an absent value becomes an empty quoted string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dif::encoding::Charset;
    /// use serde_dif::quote::Quoter;
    ///
    /// let quoter = Quoter::new(Charset::for_label("UTF-8").unwrap());
    /// assert_eq!(quoter.quote(Some(&b"a \"b\""[..])), b"\"a \"\"b\"\"\"".to_vec());
    /// assert_eq!(quoter.quote(None), b"\"\"".to_vec());
    /// ```
    pub fn quote(&self, value: Option<&[u8]>) -> Vec<u8> {
        let q = self.quote.as_slice();
        let value = value.unwrap_or_default();
        if self.charset.is_stateful() {
            return self.quote_decoded(value);
        }

        let mut out = Vec::with_capacity(value.len() + 2 * q.len());
        out.extend_from_slice(q);

        let unit = q.len().max(1);
        let mut pos = 0;
        while pos < value.len() {
            if value[pos..].starts_with(q) {
                out.extend_from_slice(q);
                out.extend_from_slice(q);
                pos += q.len();
            } else {
                let end = (pos + unit).min(value.len());
                out.extend_from_slice(&value[pos..end]);
                pos = end;
            }
        }

        out.extend_from_slice(q);
        out
    }

    fn quote_decoded(&self, value: &[u8]) -> Vec<u8> {
        let text = self.charset.decode(value);
        let quoted = format!("\"{}\"", text.replace('"', "\"\""));
        self.charset.encode_lossy(&quoted)
    }
}

/// Reverses [`Quoter::quote`] for UTF-8 text.
///
/// Returns `None` if `quoted` is not wrapped in quotes.
pub fn unquote(quoted: &str) -> Option<String> {
    let inner = quoted.strip_prefix('"')?.strip_suffix('"')?;
    Some(inner.replace("\"\"", "\""))
}
