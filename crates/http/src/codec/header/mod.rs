//! HTTP header processing module for encoding and decoding headers
//!
//! # Components
//!
//! - [`HeaderEncoder`]: Writes the header block of a request
//!   - Converts camel-case keys to hyphenated wire names
//!   - Honors the [`ESCAPE_MARKER`] for names sent verbatim
//!   - Synthesizes the `Authorization` line from the message's credentials
//!
//! - [`HeaderDecoder`]: Reads the head of a response
//!   - Locates the status line and extracts version, code and description
//!   - Collects `Name: value` lines in encounter order

mod header_decoder;
mod header_encoder;

pub use header_decoder::HeaderDecoder;
pub use header_decoder::StatusLine;
pub use header_encoder::ESCAPE_MARKER;
pub use header_encoder::HeaderEncoder;
pub use header_encoder::wire_header_name;
