//! Request body payloads and the encodings they are serialized with.
//!
//! A [`Body`] is a tagged union keyed by its [`Encoding`]: the shape of the
//! payload is checked once when the body is built, so the encoder never has to
//! guess whether it holds text or a structured value.

use std::fmt;
use std::str::FromStr;

use mime::Mime;
use serde::Serialize;
use serde_json::Value;

use crate::protocol::{BuildError, Params};

/// How a request body is serialized into wire text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    #[default]
    TextPlain,
    Json,
    FormUrlencoded,
    /// Recognized but not supported by the body encoder.
    FormData,
}

impl Encoding {
    /// The media type used as the `Content-Type` value.
    pub fn mime(self) -> Mime {
        match self {
            Encoding::TextPlain => mime::TEXT_PLAIN,
            Encoding::Json => mime::APPLICATION_JSON,
            Encoding::FormUrlencoded => mime::APPLICATION_WWW_FORM_URLENCODED,
            Encoding::FormData => mime::MULTIPART_FORM_DATA,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::TextPlain => "text/plain",
            Encoding::Json => "application/json",
            Encoding::FormUrlencoded => "application/x-www-form-urlencoded",
            Encoding::FormData => "multipart/form-data",
        }
    }

    fn from_mime(mime: &Mime) -> Option<Self> {
        [Encoding::TextPlain, Encoding::Json, Encoding::FormUrlencoded, Encoding::FormData].into_iter().find(|encoding| {
            let expected = encoding.mime();
            mime.type_() == expected.type_() && mime.subtype() == expected.subtype()
        })
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses either a media type (`application/json; charset=utf-8`) or a
/// variant name (`Json`, case-insensitive).
impl FromStr for Encoding {
    type Err = BuildError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        const NAMES: [(&str, Encoding); 4] = [
            ("textplain", Encoding::TextPlain),
            ("json", Encoding::Json),
            ("formurlencoded", Encoding::FormUrlencoded),
            ("formdata", Encoding::FormData),
        ];

        let trimmed = tag.trim();
        if let Some((_, encoding)) = NAMES.iter().find(|(name, _)| trimmed.eq_ignore_ascii_case(name)) {
            return Ok(*encoding);
        }

        trimmed
            .parse::<Mime>()
            .ok()
            .as_ref()
            .and_then(Encoding::from_mime)
            .ok_or_else(|| BuildError::unsupported_encoding(tag))
    }
}

/// A request body together with its encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    TextPlain(String),
    Json(Value),
    FormUrlencoded(Params),
    /// Kept so the caller gets an explicit error when serializing, not at construction.
    FormData(Value),
}

impl Body {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Body::TextPlain(text.into())
    }

    /// Serializes `value` into a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Json`] when `value` cannot be represented as JSON.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, BuildError> {
        Ok(Body::Json(serde_json::to_value(value)?))
    }

    pub fn form<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Body::FormUrlencoded(fields.into_iter().collect())
    }

    /// Resolves a dynamic encoding tag and its content.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnsupportedEncoding`] for an unknown tag, or
    /// [`BuildError::InvalidBody`] when `content` does not fit the encoding.
    pub fn from_tag(tag: &str, content: Value) -> Result<Self, BuildError> {
        Self::from_value(tag.parse()?, content)
    }

    /// Interprets `content` according to `encoding`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidBody`] when a text body is not a JSON string,
    /// or a form body is not a flat object of scalars.
    pub fn from_value(encoding: Encoding, content: Value) -> Result<Self, BuildError> {
        match encoding {
            Encoding::TextPlain => match content {
                Value::String(text) => Ok(Body::TextPlain(text)),
                other => Err(BuildError::invalid_body(format!("text/plain body must be a string, got {other}"))),
            },
            Encoding::Json => Ok(Body::Json(content)),
            Encoding::FormUrlencoded => form_fields(content).map(Body::FormUrlencoded),
            Encoding::FormData => Ok(Body::FormData(content)),
        }
    }

    pub fn encoding(&self) -> Encoding {
        match self {
            Body::TextPlain(_) => Encoding::TextPlain,
            Body::Json(_) => Encoding::Json,
            Body::FormUrlencoded(_) => Encoding::FormUrlencoded,
            Body::FormData(_) => Encoding::FormData,
        }
    }

    /// An empty text body counts as no body at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, Body::TextPlain(text) if text.is_empty())
    }
}

fn form_fields(content: Value) -> Result<Params, BuildError> {
    let Value::Object(map) = content else {
        return Err(BuildError::invalid_body(format!("form body must be an object, got {content}")));
    };

    let mut fields = Params::with_capacity(map.len());
    for (key, value) in map {
        let value = match value {
            Value::String(s) => s,
            Value::Null => String::new(),
            v @ (Value::Number(_) | Value::Bool(_)) => v.to_string(),
            v => return Err(BuildError::invalid_body(format!("form field {key:?} must be a scalar, got {v}"))),
        };
        fields.insert(key, value);
    }
    Ok(fields)
}
