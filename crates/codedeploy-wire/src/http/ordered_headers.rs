//! Ordered headers

use crate::error::{WireError, WireResult};

use std::borrow::Cow;

use ::http::HeaderMap;
use ::http::header::{HeaderName, HeaderValue};

/// Request headers in insertion order
///
/// Header names are stored lowercase.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OrderedHeaders {
    headers: Vec<(Cow<'static, str>, String)>,
}

impl OrderedHeaders {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a header. Existing headers with the same name are kept.
    pub fn push(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) {
        let mut name = name.into();
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            name = Cow::Owned(name.to_ascii_lowercase());
        }
        self.headers.push((name, value.into()));
    }

    fn get_all_pairs<'a>(&'a self, name: &str) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.iter_pairs().filter(move |(n, _)| n.eq_ignore_ascii_case(name))
    }

    pub fn get_all<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> {
        self.get_all_pairs(name).map(|x| x.1)
    }

    /// Gets the value of a header that appears exactly once.
    #[must_use]
    pub fn get_unique(&self, name: &str) -> Option<&str> {
        let mut iter = self.get_all(name);
        let value = iter.next()?;
        iter.next().is_none().then_some(value)
    }

    /// Returns an iterator over (name, value) pairs as (&str, &str)
    pub fn iter_pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.headers.iter().map(|(n, v)| (n.as_ref(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Converts into a [`HeaderMap`] for the transport layer.
    ///
    /// # Errors
    /// Returns [`WireError::InvalidHeader`] if a name or value is not a valid http header.
    pub fn to_header_map(&self) -> WireResult<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in self.iter_pairs() {
            let invalid = |source: ::http::Error| WireError::InvalidHeader {
                name: name.to_owned(),
                source,
            };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.into()))?;
            let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.into()))?;
            map.append(header_name, header_value);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut hs = OrderedHeaders::new();
        hs.push("x-amz-target", "CodeDeploy_20141006.ListApplications");
        hs.push("content-type", "application/x-amz-json-1.1");

        let names: Vec<&str> = hs.iter_pairs().map(|(n, _)| n).collect();
        assert_eq!(names, ["x-amz-target", "content-type"]);
        assert_eq!(hs.len(), 2);
    }

    #[test]
    fn names_are_lowercased() {
        let mut hs = OrderedHeaders::new();
        hs.push(String::from("X-Amz-Target"), "t");
        assert_eq!(hs.iter_pairs().next(), Some(("x-amz-target", "t")));
        assert_eq!(hs.get_unique("X-AMZ-TARGET"), Some("t"));
    }

    #[test]
    fn get_unique_rejects_duplicates() {
        let mut hs = OrderedHeaders::new();
        hs.push("a", "1");
        hs.push("b", "2");
        hs.push("a", "3");

        assert_eq!(hs.get_unique("a"), None);
        assert_eq!(hs.get_unique("b"), Some("2"));
        assert_eq!(hs.get_unique("c"), None);
        assert_eq!(hs.get_all("a").collect::<Vec<_>>(), ["1", "3"]);
    }

    #[test]
    fn to_header_map() {
        let mut hs = OrderedHeaders::new();
        hs.push("content-type", "application/x-amz-json-1.1");
        let map = hs.to_header_map().unwrap();
        assert_eq!(map.get(::http::header::CONTENT_TYPE).unwrap(), "application/x-amz-json-1.1");

        let mut bad = OrderedHeaders::new();
        bad.push("x-bad", "line\nbreak");
        assert!(matches!(
            bad.to_header_map(),
            Err(WireError::InvalidHeader { name, .. }) if name == "x-bad"
        ));
    }
}
