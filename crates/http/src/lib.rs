//! Raw HTTP/1.x packet building and parsing
//!
//! This crate turns structured request parameters into the literal text of an
//! HTTP/1.x request, and literal HTTP/1.x response text back into structured
//! fields. It performs no I/O: hosting it behind a socket is up to the caller.
//!
//! # Features
//!
//! - Request line, header block and body serialization, as text or bytes
//! - Query merging: url query first, explicit parameters override
//! - Camel-case header keys (`ContentType` → `Content-Type`) with a `_` escape
//!   marker for names sent verbatim
//! - `Basic` and `Bearer` authorization headers
//! - `text/plain`, `application/json` and `application/x-www-form-urlencoded` bodies
//! - Response parsing from CRLF or LF text, or from raw bytes
//! - `tokio_util` codec implementations for hosts that drive their own I/O
//!
//! # Example
//!
//! ```
//! use micro_packet::protocol::{Authentication, Body, HttpMessage, HttpResponse};
//! use serde_json::json;
//!
//! let message = HttpMessage::builder()
//!     .method("post")
//!     .url("http://example.com/api/users?dry_run=1")
//!     .header("Accept", "application/json")
//!     .header("_X-Request-Id", "42")
//!     .auth(Authentication::basic("u", "p"))
//!     .body(Body::Json(json!({"name": "ferris"})))
//!     .build()
//!     .unwrap();
//!
//! let request = message.generate().unwrap();
//! assert_eq!(
//!     request,
//!     "POST /api/users?dry_run=1 HTTP/1.1\r\n\
//!      Host: example.com\r\n\
//!      Content-Type: application/json\r\n\
//!      Accept: application/json\r\n\
//!      X-Request-Id: 42\r\n\
//!      Authorization: Basic dTpw\r\n\
//!      Content-Length: 17\r\n\
//!      \r\n\
//!      {\"name\":\"ferris\"}"
//! );
//!
//! let response = HttpResponse::parse("HTTP/1.1 201 Created\r\nLocation: /api/users/1\r\n\r\n").unwrap();
//! assert_eq!(response.status().code, 201);
//! assert_eq!(response.status().description, "Created");
//! assert_eq!(response.headers().get("Location"), Some("/api/users/1"));
//! ```
//!
//! # Architecture
//!
//! - [`protocol`]: data model ([`HttpMessage`](protocol::HttpMessage),
//!   [`HttpResponse`](protocol::HttpResponse)) and error types
//! - [`codec`]: encoders and decoders between the data model and wire text
//!
//! # Error Handling
//!
//! - [`protocol::PacketError`]: Top-level error type
//! - [`protocol::BuildError`]: Request building errors
//! - [`protocol::ParseError`]: Parsing errors
//!
//! Every error aborts the call; no partial output is ever returned.
//!
//! # Limitations
//!
//! - Byte output keeps the low byte of each UTF-16 code unit and byte input is
//!   read as Latin-1, so only Latin-1 text survives a round trip unchanged
//! - `Content-Length` counts UTF-16 code units
//! - Query strings and form bodies are not percent-escaped
//! - `multipart/form-data` bodies are rejected

pub mod codec;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;

pub use protocol::{BuildError, HttpMessage, HttpResponse, PacketError, ParseError};
