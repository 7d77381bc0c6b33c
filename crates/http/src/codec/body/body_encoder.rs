use crate::protocol::{Body, BuildError, Encoding};

/// Encoder for request bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyEncoder;

impl BodyEncoder {
    /// Encodes `body` as wire text. A missing body encodes as an empty string.
    ///
    /// Form fields are written without percent-escaping, so keys and values
    /// must not contain `&` or `=` themselves.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnsupportedEncoding`] for form-data bodies and
    /// [`BuildError::Json`] if JSON serialization fails.
    pub fn encode(&self, body: Option<&Body>) -> Result<String, BuildError> {
        let Some(body) = body else {
            return Ok(String::new());
        };

        match body {
            Body::TextPlain(text) => Ok(text.clone()),
            Body::Json(value) => Ok(serde_json::to_string(value)?),
            Body::FormUrlencoded(fields) => Ok(fields.to_urlencoded()),
            Body::FormData(_) => Err(BuildError::unsupported_encoding(Encoding::FormData)),
        }
    }
}
