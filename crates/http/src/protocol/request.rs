//! Decoded HTTP request representation.
//!
//! [`ParsedRequest`] is what the [`RequestDecoder`](crate::codec::RequestDecoder)
//! reads back from raw request text. It mirrors the fields an
//! [`HttpMessage`](crate::protocol::HttpMessage) serializes, which makes it the
//! natural way to check a generated packet.

use http::Method;

use crate::codec::RequestDecoder;
use crate::protocol::{Params, ParseError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    pub(crate) method: Method,
    pub(crate) version: String,
    pub(crate) path: String,
    pub(crate) query: Params,
    pub(crate) headers: Params,
    pub(crate) body: String,
}

impl ParsedRequest {
    /// # Errors
    ///
    /// See [`RequestDecoder::decode`].
    pub fn parse(src: &[u8]) -> Result<Self, ParseError> {
        RequestDecoder::new().decode(src)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The version number, `"1.0"` or `"1.1"`.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The path without its query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The percent-decoded query parameters; a repeated key keeps its last value.
    pub fn query(&self) -> &Params {
        &self.query
    }

    /// Header names as found on the wire.
    pub fn headers(&self) -> &Params {
        &self.headers
    }

    /// Everything after the blank line, one Latin-1 character per byte.
    pub fn body(&self) -> &str {
        &self.body
    }
}
