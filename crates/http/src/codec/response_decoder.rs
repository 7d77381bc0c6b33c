//! HTTP response decoder module
//!
//! Parses raw response text into an [`HttpResponse`] in a single linear pass:
//!
//! 1. Bytes are read as Latin-1, one character per byte
//! 2. Every `\r\n` is replaced by `\n`
//! 3. The text is split at the first `\n\n` into head and body
//! 4. The head is handed to the [`HeaderDecoder`]
//!
//! The body is everything after the first blank line, kept verbatim apart from
//! the line ending normalization. It may be empty.
//!
//! # Streaming
//!
//! A response body carries no framing in this format, so the end of input is
//! the end of the message. The [`Decoder`] implementation therefore buffers
//! until EOF and decodes in [`Decoder::decode_eof`].
//!
//! ```
//! use micro_packet::codec::ResponseDecoder;
//! use tokio_util::codec::Decoder;
//! use bytes::BytesMut;
//!
//! let mut decoder = ResponseDecoder::new();
//! let mut buf = BytesMut::from("HTTP/1.1 204 No Content\r\n\r\n");
//!
//! assert!(decoder.decode(&mut buf).unwrap().is_none());
//! let response = decoder.decode_eof(&mut buf).unwrap().unwrap();
//! assert_eq!(response.status().code, 204);
//! ```

use bytes::BytesMut;
use tokio_util::codec::Decoder;
use tracing::trace;

use crate::codec::header::HeaderDecoder;
use crate::protocol::{HttpResponse, ParseError};
use crate::utils::decode_latin1;

const BLANK_LINE: &str = "\n\n";

/// Decoder turning raw response text into an [`HttpResponse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseDecoder {
    header_decoder: HeaderDecoder,
}

impl ResponseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns [`ParseError::MalformedStatusLine`] when the head holds no status line.
    pub fn decode_text(&self, text: &str) -> Result<HttpResponse, ParseError> {
        let normalized = text.replace("\r\n", "\n");
        let (head, body) = normalized.split_once(BLANK_LINE).unwrap_or((normalized.as_str(), ""));

        trace!(head_size = head.len(), body_size = body.len(), "split response");

        let (status_line, headers) = self.header_decoder.decode(head)?;
        Ok(HttpResponse::new(status_line.version, status_line.status, headers, body.to_string()))
    }

    /// # Errors
    ///
    /// Same as [`ResponseDecoder::decode_text`].
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<HttpResponse, ParseError> {
        self.decode_text(&decode_latin1(bytes))
    }
}

impl Decoder for ResponseDecoder {
    type Item = HttpResponse;
    type Error = ParseError;

    /// Always asks for more data; the message ends at EOF.
    fn decode(&mut self, _src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        Ok(None)
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }

        let bytes = src.split();
        self.decode_bytes(&bytes).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{Params, Status};
    use indoc::indoc;

    #[test]
    fn simple_response() {
        let response = ResponseDecoder::new().decode_text("HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nhello").unwrap();

        assert_eq!(response.version(), "1.1");
        assert_eq!(response.status(), &Status { code: 200, description: "OK".to_string() });
        assert_eq!(response.headers(), &Params::from([("Content-Type", "text/plain")]));
        assert_eq!(response.body(), "hello");
    }

    #[test]
    fn lf_only_response() {
        let text = indoc! {r#"
            HTTP/1.0 404 Not Found
            Server: nginx
            Content-Type: application/json

            {"error": "missing"}"#};

        let response = ResponseDecoder::new().decode_text(text).unwrap();

        assert_eq!(response.version(), "1.0");
        assert_eq!(response.status().code, 404);
        assert_eq!(response.status().description, "Not Found");
        assert_eq!(response.headers().len(), 2);
        assert_eq!(response.body(), r#"{"error": "missing"}"#);
    }

    #[test]
    fn body_keeps_later_blank_lines() {
        let response = ResponseDecoder::new().decode_text("HTTP/1.1 200 OK\r\n\r\npart one\r\n\r\n\r\npart two\n\n").unwrap();

        assert!(response.headers().is_empty());
        assert_eq!(response.body(), "part one\n\n\npart two\n\n");
    }

    #[test]
    fn empty_body() {
        let response = ResponseDecoder::new().decode_text("HTTP/1.1 304 Not Modified\r\nETag: \"x\"\r\n\r\n").unwrap();
        assert_eq!(response.body(), "");
        assert_eq!(response.headers().get("ETag"), Some("\"x\""));

        let response = ResponseDecoder::new().decode_text("HTTP/1.1 304 Not Modified").unwrap();
        assert_eq!(response.body(), "");
    }

    #[test]
    fn status_line_only_in_body_is_malformed() {
        let err = ResponseDecoder::new().decode_text("Server: x\r\n\r\nHTTP/1.1 200 OK").unwrap_err();
        assert!(matches!(err, ParseError::MalformedStatusLine { ref head } if head == "Server: x"));
    }

    #[test]
    fn latin1_bytes() {
        let bytes = b"HTTP/1.1 200 OK\r\nX-Name: caf\xe9\r\n\r\n\xa3\xff";
        let response = ResponseDecoder::new().decode_bytes(bytes).unwrap();

        assert_eq!(response.headers().get("X-Name"), Some("caf\u{e9}"));
        assert_eq!(response.body(), "\u{a3}\u{ff}");
    }

    #[test]
    fn decoder_waits_for_eof() {
        let mut decoder = ResponseDecoder::new();
        let mut buf = BytesMut::from("HTTP/1.1 200 OK\r\n\r\nhel");

        assert!(decoder.decode(&mut buf).unwrap().is_none());
        buf.extend_from_slice(b"lo");

        let response = decoder.decode_eof(&mut buf).unwrap().unwrap();
        assert_eq!(response.body(), "hello");
        assert!(buf.is_empty());
        assert!(decoder.decode_eof(&mut buf).unwrap().is_none());
    }
}
