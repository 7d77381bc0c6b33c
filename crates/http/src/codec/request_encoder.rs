//! HTTP request encoder module
//!
//! Serializes an [`HttpMessage`] into the HTTP/1.x wire format:
//!
//! ```text
//! <METHOD> <path>[?<query>] HTTP/<version>\r\n
//! <Header-Name>: <value>\r\n
//! ...
//! Content-Length: <n>\r\n        (only for a non-empty body)
//! \r\n
//! <body>
//! ```
//!
//! The query string and form bodies are written without percent-escaping.
//! `Content-Length` counts UTF-16 code units, and byte output keeps the low
//! byte of every code unit; both are exact for Latin-1 text only.
//!
//! # Example
//!
//! ```
//! use micro_packet::codec::RequestEncoder;
//! use micro_packet::protocol::HttpMessage;
//! use tokio_util::codec::Encoder;
//! use bytes::BytesMut;
//!
//! let message = HttpMessage::builder().url("http://example.com/").build().unwrap();
//!
//! let mut dst = BytesMut::new();
//! RequestEncoder::new().encode(&message, &mut dst).unwrap();
//! assert_eq!(&dst[..], b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n");
//! ```

use bytes::{Bytes, BytesMut};
use tokio_util::codec::Encoder;
use tracing::debug;

use crate::codec::body::BodyEncoder;
use crate::codec::header::HeaderEncoder;
use crate::protocol::{BuildError, HttpMessage};
use crate::utils::{code_unit_len, put_code_units};

/// Initial buffer size allocated for a serialized request
const INIT_REQUEST_SIZE: usize = 1024;

/// Encoder producing the full request text of an [`HttpMessage`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestEncoder {
    header_encoder: HeaderEncoder,
    body_encoder: BodyEncoder,
}

impl RequestEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns [`BuildError::HeaderNameConversion`] for an unconvertible header
    /// key and [`BuildError::UnsupportedEncoding`] for a form-data body.
    pub fn encode_to_string(&self, message: &HttpMessage) -> Result<String, BuildError> {
        let mut dst = String::with_capacity(INIT_REQUEST_SIZE);

        write_request_line(message, &mut dst);
        self.header_encoder.encode(message, &mut dst)?;

        let body = self.body_encoder.encode(message.body())?;
        if !body.is_empty() {
            dst.push_str("Content-Length: ");
            dst.push_str(&code_unit_len(&body).to_string());
            dst.push_str("\r\n");
        }

        dst.push_str("\r\n");
        dst.push_str(&body);

        debug!(method = %message.method(), path = message.path(), body_size = body.len(), request_size = dst.len(), "encoded request");
        Ok(dst)
    }

    /// # Errors
    ///
    /// Same as [`RequestEncoder::encode_to_string`].
    pub fn encode_to_bytes(&self, message: &HttpMessage) -> Result<Bytes, BuildError> {
        let mut dst = BytesMut::new();
        let mut encoder = *self;
        encoder.encode(message, &mut dst)?;
        Ok(dst.freeze())
    }
}

impl Encoder<&HttpMessage> for RequestEncoder {
    type Error = BuildError;

    /// Appends the request to `dst`, one byte per UTF-16 code unit.
    fn encode(&mut self, item: &HttpMessage, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let text = self.encode_to_string(item)?;
        put_code_units(&text, dst);
        Ok(())
    }
}

fn write_request_line(message: &HttpMessage, dst: &mut String) {
    dst.push_str(message.method().as_str());
    dst.push(' ');
    dst.push_str(message.path());
    if !message.query().is_empty() {
        dst.push('?');
        dst.push_str(&message.query().to_urlencoded());
    }
    dst.push_str(" HTTP/");
    dst.push_str(message.version());
    dst.push_str("\r\n");
}
