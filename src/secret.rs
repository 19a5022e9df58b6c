use std::fmt;

/// A wrapper that keeps session credentials out of logs and debug output.
///
/// The session cookie and the security key together are enough to drive a
/// user's UI from another client, so [`SessionBootstrap`](crate::SessionBootstrap)
/// stores them as `Secret<String>`. Formatting prints `[REDACTED]`; the value
/// is only reachable through [`expose_secret`](Self::expose_secret), which a
/// test script calls when it builds the next request.
///
/// # Examples
///
/// ```
/// use uidl_extract::Secret;
///
/// let key = Secret::new("550e8400-e29b-41d4-a716-446655440000".to_string());
///
/// assert_eq!(format!("{:?}", key), "[REDACTED]");
/// assert_eq!(format!("{}", key), "[REDACTED]");
/// assert_eq!(key.expose_secret(), "550e8400-e29b-41d4-a716-446655440000");
/// ```
// Do NOT derive Debug or implement Deref/AsRef: either would print or leak the credential.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret<T> {
    // Must stay private; access goes through expose_secret().
    inner: T,
}

impl<T> Secret<T> {
    /// Wraps a credential value.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Returns the wrapped value.
    ///
    /// The name is deliberately loud. Do not pass the result to a logger.
    pub fn expose_secret(&self) -> &T {
        &self.inner
    }

    /// Consumes the wrapper and returns the value.
    pub fn into_exposed(self) -> T {
        self.inner
    }
}

impl<T> fmt::Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl<T> fmt::Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
