use url::Url;

use crate::protocol::{BuildError, Params};

/// Host, path and decoded query extracted from an absolute url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RequestTarget {
    pub(crate) host: String,
    pub(crate) path: String,
    pub(crate) query: Params,
}

impl RequestTarget {
    /// Splits `raw` into host (with the port when it is not the scheme default),
    /// path (`/` when empty) and percent-decoded query parameters.
    ///
    /// Repeated query keys keep the last value. The fragment is dropped.
    ///
    /// The path is the WHATWG-normalized path of `raw`: `.` and `..` segments
    /// are resolved and characters outside the path set (spaces, non-ASCII)
    /// are percent-encoded, so `http://h/a/../b c` targets `/b%20c`.
    pub(crate) fn parse(raw: &str) -> Result<Self, BuildError> {
        let url = Url::parse(raw).map_err(|e| BuildError::invalid_url(raw, e))?;

        let host = url.host_str().ok_or_else(|| BuildError::missing_host(raw))?;
        let host = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };

        let path = match url.path() {
            "" => "/".to_string(),
            path => path.to_string(),
        };

        let query = url.query_pairs().into_owned().collect();

        Ok(Self { host, path, query })
    }
}
