//! Ordered string-to-string mapping with unique keys.
//!
//! [`Params`] backs the query parameters, the request header bag, url-encoded
//! form bodies and the headers of a parsed response. Keys keep the position of
//! their first insertion; inserting an existing key replaces its value in place.

use std::slice;

/// An insertion-ordered map of string keys to string values.
///
/// Keys are compared case-sensitively, so `ContentType` and `contentType` are
/// distinct entries. Use [`Params::get_ignore_case`] for wire-level lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    /// Inserts `value` under `key`, returning the replaced value if the key was present.
    ///
    /// A replaced entry stays at its original position.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Looks up the first entry whose key matches `key` ignoring ASCII case.
    pub fn get_ignore_case(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k.eq_ignore_ascii_case(key)).map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.entries.iter() }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Renders the entries as `key=value` pairs joined with `&`.
    ///
    /// Keys and values are written as they are, without percent-escaping.
    pub fn to_urlencoded(&self) -> String {
        let mut out = String::new();
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
        out
    }
}

/// Borrowing iterator over the entries of a [`Params`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Params {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Params::new();
        params.extend(iter);
        params
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Params {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let mut params = Params::from([("a", "1"), ("b", "2")]);

        assert_eq!(params.insert("a", "3"), Some("1".to_string()));
        assert_eq!(params.insert("c", "4"), None);

        let entries: Vec<_> = params.iter().collect();
        assert_eq!(entries, vec![("a", "3"), ("b", "2"), ("c", "4")]);
    }

    #[test]
    fn lookups() {
        let mut params = Params::from([("Content-Type", "text/plain")]);

        assert_eq!(params.get("Content-Type"), Some("text/plain"));
        assert_eq!(params.get("content-type"), None);
        assert_eq!(params.get_ignore_case("content-type"), Some("text/plain"));
        assert!(params.contains_key("Content-Type"));

        assert_eq!(params.remove("Content-Type"), Some("text/plain".to_string()));
        assert!(params.is_empty());
    }

    #[test]
    fn urlencoded_keeps_order_and_raw_text() {
        let params = Params::from([("b", "x y"), ("a", "1&2")]);
        assert_eq!(params.to_urlencoded(), "b=x y&a=1&2");
        assert_eq!(Params::new().to_urlencoded(), "");
    }
}
