//! Data model shared by the request builder and the response parser.
//!
//! # Architecture
//!
//! - **Request packets** ([`message`]): [`HttpMessage`] and its [`RequestBuilder`]
//!   - [`Params`]: ordered, unique-key mapping for query and headers
//!   - [`Body`] / [`Encoding`]: body payload tagged with its encoding
//!   - [`Authentication`]: credentials turned into `Authorization` on output
//!
//! - **Parsed messages**:
//!   - [`HttpResponse`]: version, [`Status`], headers and body of a response
//!   - [`ParsedRequest`]: a raw request read back into its fields
//!
//! - **Error Handling** ([`error`]):
//!   - [`PacketError`]: Top-level error type
//!   - [`BuildError`]: Request construction and serialization errors
//!   - [`ParseError`]: Response and request parsing errors
//!
//! All values are plain owned data, immutable once produced, and can be
//! shared freely between threads.

mod auth;
pub use auth::Authentication;

mod body;
pub use body::Body;
pub use body::Encoding;

mod params;
pub use params::Iter as ParamsIter;
pub use params::Params;

pub mod message;
pub use message::Generated;
pub use message::HttpMessage;
pub use message::OutputKind;
pub use message::RequestBuilder;
pub use message::RequestParameters;

mod request;
pub use request::ParsedRequest;

mod response;
pub use response::HttpResponse;
pub use response::Status;

mod target;

pub mod error;
pub use error::BuildError;
pub use error::PacketError;
pub use error::ParseError;
