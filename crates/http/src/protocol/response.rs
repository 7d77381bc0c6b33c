//! Parsed HTTP response representation.
//!
//! [`HttpResponse`] is the output of the
//! [`ResponseDecoder`](crate::codec::ResponseDecoder). Header names are kept
//! exactly as found in the input; use [`HttpResponse::into_http`] to get a
//! typed `http::Response` with case-insensitive header lookups.

use http::{HeaderName, HeaderValue, Response, StatusCode, Version};

use crate::codec::ResponseDecoder;
use crate::protocol::{Params, ParseError};

/// Status code and reason phrase of a response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Status {
    pub code: u32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    version: String,
    status: Status,
    headers: Params,
    body: String,
}

impl HttpResponse {
    pub(crate) fn new(version: String, status: Status, headers: Params, body: String) -> Self {
        Self { version, status, headers, body }
    }

    /// Parses response text. CRLF and bare LF line endings are both accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedStatusLine`] when the head holds no status line.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        ResponseDecoder::new().decode_text(text)
    }

    /// Parses response bytes, reading each byte as one Latin-1 character.
    ///
    /// # Errors
    ///
    /// Same as [`HttpResponse::parse`].
    pub fn parse_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        ResponseDecoder::new().decode_bytes(bytes)
    }

    /// The version number from the status line, e.g. `"1.1"`.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// The status as `http::StatusCode`, if it is in the valid `100..=999` range.
    pub fn status_code(&self) -> Option<StatusCode> {
        let code = u16::try_from(self.status.code).ok()?;
        StatusCode::from_u16(code).ok()
    }

    pub fn headers(&self) -> &Params {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_parts(self) -> (String, Status, Params, String) {
        (self.version, self.status, self.headers, self.body)
    }

    /// Converts into a typed `http::Response`.
    ///
    /// # Errors
    ///
    /// Fails when the version, status code or a header is not representable
    /// by the `http` crate.
    pub fn into_http(self) -> Result<Response<String>, ParseError> {
        let version = match self.version.as_str() {
            "0.9" => Version::HTTP_09,
            "1.0" => Version::HTTP_10,
            "1.1" => Version::HTTP_11,
            "2.0" => Version::HTTP_2,
            "3.0" => Version::HTTP_3,
            other => return Err(ParseError::invalid_version(other)),
        };
        let status = self.status_code().ok_or(ParseError::InvalidStatus { code: self.status.code })?;

        let mut response = Response::new(self.body);
        *response.version_mut() = version;
        *response.status_mut() = status;

        let headers = response.headers_mut();
        headers.reserve(self.headers.len());
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| ParseError::invalid_header(format!("{name:?}: {e}")))?;
            let value = HeaderValue::from_str(value).map_err(|e| ParseError::invalid_header(format!("{name}: {e}")))?;
            headers.append(name, value);
        }

        Ok(response)
    }
}

impl TryFrom<HttpResponse> for Response<String> {
    type Error = ParseError;

    fn try_from(response: HttpResponse) -> Result<Self, Self::Error> {
        response.into_http()
    }
}
