//! Credentials carried by a request and the `Authorization` value derived from them.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::protocol::BuildError;

/// Authentication attached to an [`HttpMessage`](crate::protocol::HttpMessage).
///
/// It is never stored in the header bag. The `Authorization` header line is
/// computed from it each time the message is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Authentication {
    /// `Basic base64(username:password)`
    Basic { username: String, password: String },
    /// `Bearer <token>`
    Bearer { token: String },
}

impl Authentication {
    pub fn basic<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self::Basic { username: username.into(), password: password.into() }
    }

    pub fn bearer<T: Into<String>>(token: T) -> Self {
        Self::Bearer { token: token.into() }
    }

    /// Resolves an authentication type tag and its credentials object.
    ///
    /// `tag` is matched case-insensitively against `basic` and `bearer`.
    /// Basic expects `{"username", "password"}`, bearer expects `{"token"}`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::AuthEncoding`] for an unknown type or a missing
    /// credential field.
    pub fn from_tag(tag: &str, credentials: &Value) -> Result<Self, BuildError> {
        if tag.eq_ignore_ascii_case("basic") {
            let username = credential_field(credentials, "username")?;
            let password = credential_field(credentials, "password")?;
            Ok(Self::Basic { username, password })
        } else if tag.eq_ignore_ascii_case("bearer") {
            let token = credential_field(credentials, "token")?;
            Ok(Self::Bearer { token })
        } else {
            Err(BuildError::auth_encoding(format!("unsupported authentication type {tag:?}")))
        }
    }

    /// The scheme name as written on the wire.
    pub fn scheme(&self) -> &'static str {
        match self {
            Self::Basic { .. } => "Basic",
            Self::Bearer { .. } => "Bearer",
        }
    }

    /// Computes the `Authorization` header value.
    pub fn header_value(&self) -> String {
        match self {
            Self::Basic { username, password } => {
                let encoded = STANDARD.encode(format!("{username}:{password}"));
                format!("Basic {encoded}")
            }
            Self::Bearer { token } => format!("Bearer {token}"),
        }
    }
}

fn credential_field(credentials: &Value, name: &str) -> Result<String, BuildError> {
    match credentials.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(v.to_string()),
        Some(_) => Err(BuildError::auth_encoding(format!("credential field {name:?} must be a scalar"))),
        None => Err(BuildError::auth_encoding(format!("missing credential field {name:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn basic_header_value() {
        let auth = Authentication::basic("u", "p");
        assert_eq!(auth.header_value(), "Basic dTpw");

        let auth = Authentication::basic("Aladdin", "open sesame");
        assert_eq!(auth.header_value(), "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
    }

    #[test]
    fn bearer_header_value() {
        let auth = Authentication::bearer("abc.def");
        assert_eq!(auth.scheme(), "Bearer");
        assert_eq!(auth.header_value(), "Bearer abc.def");
    }

    #[test]
    fn from_tag() {
        let auth = Authentication::from_tag("Basic", &json!({"username": "u", "password": "p"})).unwrap();
        assert_eq!(auth, Authentication::basic("u", "p"));

        let auth = Authentication::from_tag("BEARER", &json!({"token": 42})).unwrap();
        assert_eq!(auth, Authentication::bearer("42"));
    }

    #[test]
    fn from_tag_rejects_unknown_type() {
        let err = Authentication::from_tag("Digest", &json!({"username": "u"})).unwrap_err();
        assert!(matches!(err, BuildError::AuthEncoding { .. }));
    }

    #[test]
    fn from_tag_rejects_missing_field() {
        let err = Authentication::from_tag("basic", &json!({"username": "u"})).unwrap_err();
        assert!(matches!(err, BuildError::AuthEncoding { ref reason } if reason.contains("password")));
    }
}
