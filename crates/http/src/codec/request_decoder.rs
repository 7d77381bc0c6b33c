//! HTTP request decoder module
//!
//! Reads a complete raw request back into a [`ParsedRequest`]. The head is
//! parsed with `httparse`; the body is whatever follows the blank line.
//!
//! # Limits
//!
//! - Maximum number of headers: 64
//! - Only HTTP/1.0 and HTTP/1.1 request lines are accepted
//!
//! # Example
//!
//! ```
//! use micro_packet::codec::RequestDecoder;
//!
//! let request = RequestDecoder::new().decode(b"GET /a?x=1 HTTP/1.1\r\nHost: h\r\n\r\n").unwrap();
//! assert_eq!(request.path(), "/a");
//! assert_eq!(request.query().get("x"), Some("1"));
//! ```

use http::Method;
use httparse::{Error, Status};
use tracing::trace;
use url::form_urlencoded;

use crate::protocol::{Params, ParseError, ParsedRequest};
use crate::utils::decode_latin1;

/// Maximum number of headers allowed in a request
const MAX_HEADER_NUM: usize = 64;

/// Decoder for complete raw requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestDecoder;

impl RequestDecoder {
    pub fn new() -> Self {
        Self
    }

    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The number of headers exceeds `MAX_HEADER_NUM`
    /// - The head is malformed or not terminated by a blank line
    /// - The method is not a valid token
    pub fn decode(&self, src: &[u8]) -> Result<ParsedRequest, ParseError> {
        let mut headers = [httparse::EMPTY_HEADER; MAX_HEADER_NUM];
        let mut req = httparse::Request::new(&mut headers);

        let body_offset = match req.parse(src) {
            Ok(Status::Complete(body_offset)) => body_offset,
            Ok(Status::Partial) => return Err(ParseError::invalid_request("request head is not terminated by a blank line")),
            Err(Error::TooManyHeaders) => return Err(ParseError::too_many_headers(MAX_HEADER_NUM)),
            Err(e) => return Err(ParseError::invalid_request(e)),
        };
        trace!(body_offset, header_num = req.headers.len(), "parsed request head");

        let method = req.method.ok_or_else(|| ParseError::invalid_request("missing method"))?;
        let method = Method::from_bytes(method.as_bytes()).map_err(ParseError::invalid_request)?;

        let version = match req.version {
            Some(0) => "1.0",
            Some(1) => "1.1",
            _ => return Err(ParseError::invalid_version(format!("{:?}", req.version))),
        };

        let target = req.path.ok_or_else(|| ParseError::invalid_request("missing request target"))?;
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, form_urlencoded::parse(query.as_bytes()).into_owned().collect()),
            None => (target, Params::new()),
        };

        let parsed_headers = req.headers.iter().map(|header| (header.name, decode_latin1(header.value))).collect();

        Ok(ParsedRequest {
            method,
            version: version.to_string(),
            path: path.to_string(),
            query,
            headers: parsed_headers,
            body: decode_latin1(&src[body_offset..]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn from_curl() {
        let str = indoc! {r##"
        GET /index.html?a=1&b=x%20y&a=3 HTTP/1.1
        Host: 127.0.0.1:8080
        User-Agent: curl/7.79.1
        Accept: */*

        "##};

        let request = RequestDecoder.decode(str.as_bytes()).unwrap();

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.version(), "1.1");
        assert_eq!(request.path(), "/index.html");
        assert_eq!(request.query(), &Params::from([("a", "3"), ("b", "x y")]));
        assert_eq!(
            request.headers(),
            &Params::from([("Host", "127.0.0.1:8080"), ("User-Agent", "curl/7.79.1"), ("Accept", "*/*")])
        );
        assert_eq!(request.body(), "");
    }

    #[test]
    fn with_body() {
        let request = RequestDecoder.decode(b"POST / HTTP/1.0\r\nContent-Length: 5\r\n\r\nhello").unwrap();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.version(), "1.0");
        assert_eq!(request.headers().get("Content-Length"), Some("5"));
        assert_eq!(request.body(), "hello");
    }

    #[test]
    fn incomplete_head() {
        let err = RequestDecoder.decode(b"GET / HTTP/1.1\r\nHost: h\r\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidRequest { .. }));
    }

    #[test]
    fn too_many_headers() {
        let mut raw = String::from("GET / HTTP/1.1\r\n");
        for i in 0..=MAX_HEADER_NUM {
            raw.push_str(&format!("X-H{i}: v\r\n"));
        }
        raw.push_str("\r\n");

        let err = RequestDecoder.decode(raw.as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::TooManyHeaders { max_num: MAX_HEADER_NUM }));
    }

    #[test]
    fn invalid_request_line() {
        let err = RequestDecoder.decode(b"GET\r\n\r\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidRequest { .. }));
    }
}
