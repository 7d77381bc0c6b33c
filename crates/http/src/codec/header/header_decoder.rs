//! HTTP header decoder for parsing the head of a response
//!
//! The head is the text before the first blank line, with line endings already
//! normalized to `\n`. Decoding works in two passes over its lines:
//!
//! 1. Find the status line: the first line containing
//!    `HTTP/<digit>.<digit> <digits> <description>`. The match does not have to
//!    start at the beginning of the line and the description runs to the end
//!    of it.
//! 2. Every other line containing `": "` is a header. The name is everything
//!    before the first `": "`, the value everything after it. Lines without a
//!    separator are skipped. A repeated name keeps its first position and its
//!    last value.

use tracing::trace;

use crate::protocol::{Params, ParseError, Status};

const VERSION_PREFIX: &str = "HTTP/";
const HEADER_SEPARATOR: &str = ": ";

/// Version and status extracted from a status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub version: String,
    pub status: Status,
}

/// Decoder for a normalized response head.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderDecoder;

impl HeaderDecoder {
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedStatusLine`] carrying `head` when no line
    /// holds a status line.
    pub fn decode(&self, head: &str) -> Result<(StatusLine, Params), ParseError> {
        let (status_index, status_line) = head
            .split('\n')
            .enumerate()
            .find_map(|(index, line)| match_status_line(line).map(|status_line| (index, status_line)))
            .ok_or_else(|| ParseError::malformed_status_line(head))?;

        let mut headers = Params::new();
        for (index, line) in head.split('\n').enumerate() {
            if index == status_index {
                continue;
            }
            if let Some((name, value)) = line.split_once(HEADER_SEPARATOR) {
                headers.insert(name, value);
            }
        }

        trace!(version = %status_line.version, code = status_line.status.code, header_num = headers.len(), "decoded response head");
        Ok((status_line, headers))
    }
}

/// Tries every `HTTP/` occurrence in `line` and returns the first that forms a status line.
fn match_status_line(line: &str) -> Option<StatusLine> {
    line.match_indices(VERSION_PREFIX).find_map(|(start, _)| match_status_at(&line[start + VERSION_PREFIX.len()..]))
}

fn match_status_at(rest: &str) -> Option<StatusLine> {
    let bytes = rest.as_bytes();

    // <digit>.<digit>
    let [major, b'.', minor, ..] = bytes else {
        return None;
    };
    if !major.is_ascii_digit() || !minor.is_ascii_digit() {
        return None;
    }
    let version = &rest[..3];

    let rest = skip_blank(&rest[3..])?;

    let code_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if code_len == 0 {
        return None;
    }
    let (code, rest) = rest.split_at(code_len);
    // more digits than u32 can hold is not a status code
    let code = code.parse::<u32>().ok()?;

    let description = skip_blank(rest)?;

    Some(StatusLine { version: version.to_string(), status: Status { code, description: description.to_string() } })
}

/// Consumes exactly one space or tab.
fn skip_blank(text: &str) -> Option<&str> {
    text.strip_prefix([' ', '\t'])
}
