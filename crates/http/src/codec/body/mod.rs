//! HTTP body handling module for serializing request payloads
//!
//! # Components
//!
//! - [`BodyEncoder`]: turns a [`Body`](crate::protocol::Body) into wire text
//!   according to its encoding
//!
//! # Encodings
//!
//! - `text/plain`: passed through unchanged
//! - `application/json`: JSON text
//! - `application/x-www-form-urlencoded`: `key=value` pairs joined with `&`
//! - `multipart/form-data`: not supported, always an error

mod body_encoder;

pub use body_encoder::BodyEncoder;
