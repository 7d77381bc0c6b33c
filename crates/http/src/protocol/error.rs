use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PacketError {
    #[error("build error: {source}")]
    BuildError {
        #[from]
        source: BuildError,
    },

    #[error("parse error: {source}")]
    ParseError {
        #[from]
        source: ParseError,
    },
}

/// Errors raised while turning request parameters into wire text.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("unsupported body content encoding {tag}")]
    UnsupportedEncoding { tag: String },

    #[error("authentication header preparation failed: {reason}")]
    AuthEncoding { reason: String },

    #[error("header name {name:?} has no camel-case words and no '_' escape marker")]
    HeaderNameConversion { name: String },

    #[error("invalid url {url:?}: {source}")]
    InvalidUrl { url: String, source: url::ParseError },

    #[error("url {url:?} has no host")]
    MissingHost { url: String },

    #[error("invalid http method {method:?}")]
    InvalidMethod { method: String },

    #[error("invalid body: {reason}")]
    InvalidBody { reason: String },

    #[error("json error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl BuildError {
    pub fn unsupported_encoding<S: ToString>(tag: S) -> Self {
        Self::UnsupportedEncoding { tag: tag.to_string() }
    }

    pub fn auth_encoding<S: ToString>(str: S) -> Self {
        Self::AuthEncoding { reason: str.to_string() }
    }

    pub fn header_name_conversion<S: ToString>(name: S) -> Self {
        Self::HeaderNameConversion { name: name.to_string() }
    }

    pub fn invalid_url<S: ToString>(url: S, source: url::ParseError) -> Self {
        Self::InvalidUrl { url: url.to_string(), source }
    }

    pub fn missing_host<S: ToString>(url: S) -> Self {
        Self::MissingHost { url: url.to_string() }
    }

    pub fn invalid_method<S: ToString>(method: S) -> Self {
        Self::InvalidMethod { method: method.to_string() }
    }

    pub fn invalid_body<S: ToString>(str: S) -> Self {
        Self::InvalidBody { reason: str.to_string() }
    }
}

/// Errors raised while reading wire text back into structured fields.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("no status line found in response head {head:?}")]
    MalformedStatusLine { head: String },

    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("header number exceed the limit {max_num}")]
    TooManyHeaders { max_num: usize },

    #[error("invalid http version: {version}")]
    InvalidVersion { version: String },

    #[error("invalid status code: {code}")]
    InvalidStatus { code: u32 },

    #[error("invalid header: {reason}")]
    InvalidHeader { reason: String },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ParseError {
    pub fn malformed_status_line<S: ToString>(head: S) -> Self {
        Self::MalformedStatusLine { head: head.to_string() }
    }

    pub fn invalid_request<S: ToString>(str: S) -> Self {
        Self::InvalidRequest { reason: str.to_string() }
    }

    pub fn too_many_headers(max_num: usize) -> Self {
        Self::TooManyHeaders { max_num }
    }

    pub fn invalid_version<S: ToString>(version: S) -> Self {
        Self::InvalidVersion { version: version.to_string() }
    }

    pub fn invalid_header<S: ToString>(str: S) -> Self {
        Self::InvalidHeader { reason: str.to_string() }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}
