//! The request packet model and its builder.
//!
//! An [`HttpMessage`] is assembled once from caller parameters and never
//! mutated afterwards. Everything derived from it at output time (the request
//! line, the `Authorization` header, the encoded body and `Content-Length`)
//! is computed by the [`RequestEncoder`](crate::codec::RequestEncoder).

use bytes::Bytes;
use http::Method;
use tracing::debug;

use crate::codec::RequestEncoder;
use crate::protocol::target::RequestTarget;
use crate::protocol::{Authentication, Body, BuildError, Encoding, Params};

/// Protocol version written when the caller does not choose one.
pub const DEFAULT_VERSION: &str = "1.1";

/// Header key of the derived host entry.
pub const HOST_KEY: &str = "Host";

/// Header key of the derived content type entry.
pub const CONTENT_TYPE_KEY: &str = "ContentType";

/// Everything a caller can supply to build a request.
///
/// `url` must be absolute. Entries of `query_params` override query
/// parameters found in `url`, entries of `headers` override the derived
/// `Host` and `ContentType` headers.
#[derive(Debug, Clone, Default)]
pub struct RequestParameters {
    pub url: String,
    pub method: Option<String>,
    pub version: Option<String>,
    pub query_params: Params,
    pub headers: Params,
    pub body: Option<Body>,
    pub authentication: Option<Authentication>,
}

/// Selects the representation returned by [`HttpMessage::generate_as`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputKind {
    #[default]
    Text,
    Bytes,
}

/// A serialized request in the representation asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    Text(String),
    Bytes(Bytes),
}

/// A fully resolved HTTP request packet.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpMessage {
    version: String,
    host: String,
    path: String,
    method: Method,
    encoding: Encoding,
    query: Params,
    headers: Params,
    body: Option<Body>,
    auth: Option<Authentication>,
}

impl HttpMessage {
    pub fn builder() -> RequestBuilder {
        RequestBuilder::new()
    }

    /// Resolves caller parameters into a message.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidUrl`] or [`BuildError::MissingHost`] when
    /// the url is unusable, and [`BuildError::InvalidMethod`] when the method
    /// is not a valid token.
    pub fn new(params: RequestParameters) -> Result<Self, BuildError> {
        let RequestParameters { url, method, version, query_params, headers: extra_headers, body, authentication } = params;

        let target = RequestTarget::parse(&url)?;

        let method = match method {
            Some(method) => parse_method(&method)?,
            None => Method::GET,
        };

        let mut query = target.query;
        query.extend(query_params);

        let encoding = body.as_ref().map(Body::encoding).unwrap_or_default();

        let mut headers = Params::with_capacity(extra_headers.len() + 2);
        headers.insert(HOST_KEY, target.host.clone());
        if body.as_ref().is_some_and(|body| !body.is_empty()) {
            headers.insert(CONTENT_TYPE_KEY, encoding.as_str());
        }
        headers.extend(extra_headers);

        debug!(%method, host = %target.host, path = %target.path, query_num = query.len(), "resolved request packet");

        Ok(Self {
            version: version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            host: target.host,
            path: target.path,
            method,
            encoding,
            query,
            headers,
            body,
            auth: authentication,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn query(&self) -> &Params {
        &self.query
    }

    /// The stored headers. The `Authorization` header is not among them.
    pub fn headers(&self) -> &Params {
        &self.headers
    }

    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    pub fn auth(&self) -> Option<&Authentication> {
        self.auth.as_ref()
    }

    /// Serializes the message as text.
    ///
    /// # Errors
    ///
    /// Fails when a header name cannot be converted or the body encoding is
    /// not supported; no partial output is produced.
    pub fn generate(&self) -> Result<String, BuildError> {
        RequestEncoder::new().encode_to_string(self)
    }

    /// Serializes the message as bytes, one byte per UTF-16 code unit.
    ///
    /// # Errors
    ///
    /// Same as [`HttpMessage::generate`].
    pub fn generate_bytes(&self) -> Result<Bytes, BuildError> {
        RequestEncoder::new().encode_to_bytes(self)
    }

    /// # Errors
    ///
    /// Same as [`HttpMessage::generate`].
    pub fn generate_as(&self, kind: OutputKind) -> Result<Generated, BuildError> {
        match kind {
            OutputKind::Text => self.generate().map(Generated::Text),
            OutputKind::Bytes => self.generate_bytes().map(Generated::Bytes),
        }
    }
}

impl TryFrom<RequestParameters> for HttpMessage {
    type Error = BuildError;

    fn try_from(params: RequestParameters) -> Result<Self, Self::Error> {
        Self::new(params)
    }
}

fn parse_method(method: &str) -> Result<Method, BuildError> {
    Method::from_bytes(method.to_ascii_uppercase().as_bytes()).map_err(|_e| BuildError::invalid_method(method))
}

/// Fluent construction of an [`HttpMessage`].
///
/// ```
/// use micro_packet::protocol::{Authentication, Body, HttpMessage};
///
/// let message = HttpMessage::builder()
///     .method("post")
///     .url("http://example.com/api?page=1")
///     .query("page", "2")
///     .header("Accept", "*/*")
///     .auth(Authentication::bearer("token"))
///     .body(Body::text("hi"))
///     .build()
///     .unwrap();
///
/// assert!(message.generate().unwrap().starts_with("POST /api?page=2 HTTP/1.1\r\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    params: RequestParameters,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn url<S: Into<String>>(mut self, url: S) -> Self {
        self.params.url = url.into();
        self
    }

    /// Any case is accepted, the method is written upper-case.
    #[must_use]
    pub fn method<S: Into<String>>(mut self, method: S) -> Self {
        self.params.method = Some(method.into());
        self
    }

    /// The version number only, e.g. `"1.0"`.
    #[must_use]
    pub fn version<S: Into<String>>(mut self, version: S) -> Self {
        self.params.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn query<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.params.query_params.insert(key, value);
        self
    }

    /// Header keys are camel-case (`ContentType`) or carry the `_` escape
    /// marker (`_X-Request-Id`).
    #[must_use]
    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.params.headers.insert(key, value);
        self
    }

    #[must_use]
    pub fn body(mut self, body: Body) -> Self {
        self.params.body = Some(body);
        self
    }

    #[must_use]
    pub fn auth(mut self, authentication: Authentication) -> Self {
        self.params.authentication = Some(authentication);
        self
    }

    /// # Errors
    ///
    /// See [`HttpMessage::new`].
    pub fn build(self) -> Result<HttpMessage, BuildError> {
        HttpMessage::new(self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let message = HttpMessage::builder().url("http://example.com").build().unwrap();

        assert_eq!(message.method(), &Method::GET);
        assert_eq!(message.version(), "1.1");
        assert_eq!(message.path(), "/");
        assert_eq!(message.encoding(), Encoding::TextPlain);
        assert!(message.query().is_empty());
        assert!(message.body().is_none());
        assert_eq!(message.headers(), &Params::from([("Host", "example.com")]));
    }

    #[test]
    fn method_is_case_insensitive() {
        let message = HttpMessage::builder().url("http://h").method("patch").build().unwrap();
        assert_eq!(message.method(), &Method::PATCH);

        let message = HttpMessage::builder().url("http://h").method("purge").build().unwrap();
        assert_eq!(message.method().as_str(), "PURGE");

        let err = HttpMessage::builder().url("http://h").method("GE T").build().unwrap_err();
        assert!(matches!(err, BuildError::InvalidMethod { .. }));
    }

    #[test]
    fn explicit_query_wins() {
        let message = HttpMessage::builder().url("http://h/p?a=1&c=0").query("a", "2").query("b", "3").build().unwrap();

        assert_eq!(message.query(), &Params::from([("a", "2"), ("c", "0"), ("b", "3")]));
    }

    #[test]
    fn content_type_follows_body() {
        let message = HttpMessage::builder().url("http://h").body(Body::json(&[1, 2]).unwrap()).build().unwrap();
        assert_eq!(message.encoding(), Encoding::Json);
        assert_eq!(message.headers().get("ContentType"), Some("application/json"));

        let message = HttpMessage::builder().url("http://h").body(Body::text("")).build().unwrap();
        assert_eq!(message.headers().get("ContentType"), None);
    }

    #[test]
    fn explicit_headers_override_derived() {
        let message = HttpMessage::builder()
            .url("http://h")
            .header("Host", "x")
            .header("ContentType", "text/html")
            .header("Accept", "*/*")
            .body(Body::text("hi"))
            .build()
            .unwrap();

        assert_eq!(message.headers(), &Params::from([("Host", "x"), ("ContentType", "text/html"), ("Accept", "*/*")]));
    }

    #[test]
    fn auth_is_not_stored_in_headers() {
        let message = HttpMessage::builder().url("http://h").auth(Authentication::bearer("t")).build().unwrap();

        assert!(message.headers().get("Authorization").is_none());
        assert_eq!(message.auth(), Some(&Authentication::bearer("t")));
    }

    #[test]
    fn from_parameters() {
        let params = RequestParameters {
            url: "https://example.com:8443/x".to_string(),
            version: Some("1.0".to_string()),
            ..Default::default()
        };
        let message = HttpMessage::try_from(params).unwrap();

        assert_eq!(message.host(), "example.com:8443");
        assert_eq!(message.version(), "1.0");
    }
}
