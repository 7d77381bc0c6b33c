//! HTTP codec module for encoding requests and decoding messages
//!
//! # Architecture
//!
//! - Request handling:
//!   - [`RequestEncoder`]: Serializes an [`HttpMessage`](crate::protocol::HttpMessage)
//!   - Header encoding via [`header`] module
//!   - Body encoding via [`body`] module
//!   - [`RequestDecoder`]: Reads a raw request back into its fields
//!
//! - Response handling:
//!   - [`ResponseDecoder`]: Parses a raw response
//!   - Status line and header parsing via [`header`] module
//!
//! # Example
//!
//! ```
//! use micro_packet::codec::{RequestEncoder, ResponseDecoder};
//! use micro_packet::protocol::HttpMessage;
//!
//! let message = HttpMessage::builder().url("http://example.com/ping").build().unwrap();
//! let request = RequestEncoder::new().encode_to_string(&message).unwrap();
//! assert!(request.starts_with("GET /ping HTTP/1.1\r\n"));
//!
//! let response = ResponseDecoder::new().decode_text("HTTP/1.1 200 OK\r\n\r\npong").unwrap();
//! assert_eq!(response.body(), "pong");
//! ```
//!
//! Both [`RequestEncoder`] and [`ResponseDecoder`] also implement the
//! `tokio_util` codec traits, so a host doing its own I/O can plug them into
//! `FramedWrite` / `FramedRead`.

pub mod body;
pub mod header;
mod request_decoder;
mod request_encoder;
mod response_decoder;

pub use request_decoder::RequestDecoder;
pub use request_encoder::RequestEncoder;
pub use response_decoder::ResponseDecoder;
