//! HTTP header encoder for serializing request header lines
//!
//! Header keys of an [`HttpMessage`] are camel-case tokens (`ContentType`) and
//! are converted to their hyphenated wire form (`Content-Type`) here. A key
//! starting with [`ESCAPE_MARKER`] is written verbatim with the marker removed,
//! which is how callers send names that are not camel-case (`_X-Request-Id`,
//! `_sec-ch-ua`).
//!
//! The `Authorization` line is synthesized from the message's authentication
//! while encoding; it never exists in the stored headers.

use std::borrow::Cow;

use crate::ensure;
use crate::protocol::{BuildError, HttpMessage};

/// Leading character that turns off camel-case conversion for a header key.
pub const ESCAPE_MARKER: char = '_';

/// Header key of the synthesized authorization entry.
const AUTHORIZATION_KEY: &str = "Authorization";

/// Encoder for the header block of a request.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderEncoder;

impl HeaderEncoder {
    /// Appends one `Name: value\r\n` line per header to `dst`.
    ///
    /// When the message carries authentication, its value replaces a stored
    /// `Authorization` entry at that entry's position, or is appended last.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::HeaderNameConversion`] for a key that is neither
    /// camel-case nor escaped. Nothing is written to `dst` in that case.
    pub fn encode(&self, message: &HttpMessage, dst: &mut String) -> Result<(), BuildError> {
        let authorization = message.auth().map(|auth| auth.header_value());
        let mut authorization_written = false;

        let mut block = String::new();
        for (key, value) in message.headers() {
            let value = match &authorization {
                Some(auth_value) if key == AUTHORIZATION_KEY => {
                    authorization_written = true;
                    auth_value.as_str()
                }
                _ => value,
            };
            write_line(&mut block, &wire_header_name(key)?, value);
        }

        if let Some(auth_value) = &authorization
            && !authorization_written
        {
            write_line(&mut block, AUTHORIZATION_KEY, auth_value);
        }

        dst.push_str(&block);
        Ok(())
    }
}

fn write_line(dst: &mut String, name: &str, value: &str) {
    dst.push_str(name);
    dst.push_str(": ");
    dst.push_str(value);
    dst.push_str("\r\n");
}

/// Converts a header key to the name written on the wire.
///
/// Every capitalized word (an ASCII upper-case letter followed by one or more
/// lower-case letters) is extracted and the words are joined with `-`.
/// Characters outside those words are dropped, so `ETag` becomes `Tag`; escape
/// such names instead.
///
/// # Errors
///
/// Returns [`BuildError::HeaderNameConversion`] when an unescaped key contains
/// no capitalized word.
pub fn wire_header_name(key: &str) -> Result<Cow<'_, str>, BuildError> {
    if let Some(raw) = key.strip_prefix(ESCAPE_MARKER) {
        return Ok(Cow::Borrowed(raw));
    }

    let words = capitalized_words(key);
    ensure!(!words.is_empty(), BuildError::header_name_conversion(key));

    Ok(match words.as_slice() {
        [single] if single.len() == key.len() => Cow::Borrowed(key),
        _ => Cow::Owned(words.join("-")),
    })
}

fn capitalized_words(key: &str) -> Vec<&str> {
    let bytes = key.as_bytes();
    let mut words = Vec::new();

    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_uppercase() {
            let end = bytes[i + 1..].iter().position(|b| !b.is_ascii_lowercase()).map_or(bytes.len(), |n| i + 1 + n);
            if end > i + 1 {
                words.push(&key[i..end]);
                i = end;
                continue;
            }
        }
        i += 1;
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Authentication;

    #[test]
    fn camel_case_names() {
        assert_eq!(wire_header_name("ContentType").unwrap(), "Content-Type");
        assert_eq!(wire_header_name("Host").unwrap(), "Host");
        assert_eq!(wire_header_name("XForwardedFor").unwrap(), "Forwarded-For");
        assert_eq!(wire_header_name("UpgradeInsecureRequests").unwrap(), "Upgrade-Insecure-Requests");
        assert_eq!(wire_header_name("ETag").unwrap(), "Tag");
        assert_eq!(wire_header_name("contentLength").unwrap(), "Length");
        assert_eq!(wire_header_name("Content-Type").unwrap(), "Content-Type");
    }

    #[test]
    fn escaped_names_are_verbatim() {
        assert_eq!(wire_header_name("_X-Custom").unwrap(), "X-Custom");
        assert_eq!(wire_header_name("_sec-ch-ua").unwrap(), "sec-ch-ua");
        assert_eq!(wire_header_name("_").unwrap(), "");
    }

    #[test]
    fn names_without_words_are_rejected() {
        for key in ["accept", "DNT", "X", "123", ""] {
            let err = wire_header_name(key).unwrap_err();
            assert!(matches!(err, BuildError::HeaderNameConversion { ref name } if name == key));
        }
    }

    #[test]
    fn non_ascii_is_skipped() {
        assert_eq!(wire_header_name("\u{e9}T\u{e9}Value").unwrap(), "Value");
    }

    #[test]
    fn encode_header_block() {
        let message = HttpMessage::builder()
            .url("http://example.com")
            .header("AcceptLanguage", "en")
            .header("_X-Trace-Id", "abc")
            .auth(Authentication::basic("u", "p"))
            .build()
            .unwrap();

        let mut dst = String::new();
        HeaderEncoder.encode(&message, &mut dst).unwrap();

        assert_eq!(dst, "Host: example.com\r\nAccept-Language: en\r\nX-Trace-Id: abc\r\nAuthorization: Basic dTpw\r\n");
    }

    #[test]
    fn authentication_replaces_stored_authorization_in_place() {
        let message = HttpMessage::builder()
            .url("http://example.com")
            .header("Authorization", "stale")
            .header("Accept", "*/*")
            .auth(Authentication::bearer("fresh"))
            .build()
            .unwrap();

        let mut dst = String::new();
        HeaderEncoder.encode(&message, &mut dst).unwrap();

        assert_eq!(dst, "Host: example.com\r\nAuthorization: Bearer fresh\r\nAccept: */*\r\n");
    }

    #[test]
    fn failed_conversion_writes_nothing() {
        let message = HttpMessage::builder().url("http://example.com").header("accept", "*/*").build().unwrap();

        let mut dst = String::from("GET / HTTP/1.1\r\n");
        let err = HeaderEncoder.encode(&message, &mut dst).unwrap_err();

        assert!(matches!(err, BuildError::HeaderNameConversion { .. }));
        assert_eq!(dst, "GET / HTTP/1.1\r\n");
    }
}
