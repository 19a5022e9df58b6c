//! Response artifacts handed over by the HTTP client.
//!
//! Load-test clients come with their own response types. This module defines
//! the one seam the extractors need from them, header lookup by name, and an
//! owned snapshot type for clients that do not map onto it directly.

use std::collections::{BTreeMap, HashMap};

/// Looks up response header values by name.
///
/// Header names are matched ASCII case-insensitively, as HTTP requires.
/// Values are returned in the order the collection yields them; a header
/// that appears several times (`Set-Cookie` commonly does) yields several
/// values.
///
/// # Examples
///
/// ```
/// use uidl_extract::HeaderLookup;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("set-cookie".to_string(), "JSESSIONID=abc; Path=/".to_string());
///
/// assert_eq!(headers.header_values("Set-Cookie"), vec!["JSESSIONID=abc; Path=/"]);
/// assert!(headers.header_values("Location").is_empty());
/// ```
pub trait HeaderLookup {
    /// Returns every value stored under `name`.
    fn header_values(&self, name: &str) -> Vec<&str>;
}

fn matching<'a, I>(pairs: I, name: &str) -> Vec<&'a str>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    pairs
        .into_iter()
        .filter(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
        .collect()
}

impl HeaderLookup for HashMap<String, String> {
    fn header_values(&self, name: &str) -> Vec<&str> {
        matching(self, name)
    }
}

impl HeaderLookup for BTreeMap<String, String> {
    fn header_values(&self, name: &str) -> Vec<&str> {
        matching(self, name)
    }
}

impl HeaderLookup for [(String, String)] {
    fn header_values(&self, name: &str) -> Vec<&str> {
        matching(self.iter().map(|(k, v)| (k, v)), name)
    }
}

impl HeaderLookup for Vec<(String, String)> {
    fn header_values(&self, name: &str) -> Vec<&str> {
        self.as_slice().header_values(name)
    }
}

/// An owned snapshot of one HTTP response: its headers and body text.
///
/// Header order and duplicates are preserved.
///
/// # Examples
///
/// ```
/// use uidl_extract::{ResponseParts, HeaderLookup};
///
/// let mut response = ResponseParts::new("<html></html>");
/// response.add_header("Set-Cookie", "JSESSIONID=abc; Path=/");
/// response.add_header("Set-Cookie", "theme=dark");
///
/// assert_eq!(response.header_values("set-cookie").len(), 2);
/// assert_eq!(response.body(), "<html></html>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseParts {
    headers: Vec<(String, String)>,
    body: String,
}

impl ResponseParts {
    /// Creates a snapshot with the given body and no headers.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Appends a header. Existing values under the same name are kept.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push((name.into(), value.into()));
    }

    /// Builder-style variant of [`add_header`](Self::add_header).
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_header(name, value);
        self
    }

    /// Returns the body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the headers in insertion order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

impl HeaderLookup for ResponseParts {
    fn header_values(&self, name: &str) -> Vec<&str> {
        self.headers.header_values(name)
    }
}
