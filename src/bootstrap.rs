//! All four identifiers pulled from one bootstrap response.

use crate::error::{Error, Field};
use crate::extract;
use crate::response::{HeaderLookup, ResponseParts};
use crate::secret::Secret;

/// The identifiers a UIDL page bootstrap hands to the client.
///
/// `SessionBootstrap` is a plain value: it runs the extractors once and
/// stores whatever they found. The caller keeps it for the rest of the
/// virtual user's session and threads the values into later requests.
/// Credentials are held as [`Secret`] so the whole struct can be logged
/// with `{:?}`.
///
/// # Examples
///
/// ```
/// use uidl_extract::{ResponseParts, SessionBootstrap, Field};
///
/// let response = ResponseParts::new(
///     r#"{"Vaadin-Security-Key":"550e8400-e29b-41d4-a716-446655440000","v-uiId":0}"#,
/// )
/// .with_header("Set-Cookie", "JSESSIONID=ABC123XYZ; Path=/app; HttpOnly");
///
/// let boot = SessionBootstrap::from_response(&response);
///
/// assert_eq!(boot.cookie_header().as_deref(), Some("JSESSIONID=ABC123XYZ"));
/// assert_eq!(boot.ui_id(), Some(0));
/// assert_eq!(boot.missing(), vec![Field::PushId]);
/// assert!(boot.require_push_id().is_err());
/// assert!(!format!("{:?}", boot).contains("ABC123XYZ"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionBootstrap {
    session_id: Option<Secret<String>>,
    security_key: Option<Secret<String>>,
    push_id: Option<String>,
    ui_id: Option<u32>,
}

impl SessionBootstrap {
    /// Runs every extractor over the given headers and body.
    pub fn extract<H>(headers: &H, body: &str) -> Self
    where
        H: HeaderLookup + ?Sized,
    {
        let boot = Self {
            session_id: extract::session_id(headers).map(Secret::new),
            security_key: extract::security_key(body).map(Secret::new),
            push_id: extract::push_id(body),
            ui_id: extract::ui_id(body),
        };

        // Presence only; credential values never reach the log.
        tracing::debug!(
            target: "uidl_extract",
            session_id = boot.session_id.is_some(),
            security_key = boot.security_key.is_some(),
            push_id = boot.push_id.is_some(),
            ui_id = ?boot.ui_id,
            "extracted session bootstrap"
        );

        boot
    }

    /// Runs every extractor over a response snapshot.
    pub fn from_response(response: &ResponseParts) -> Self {
        Self::extract(response, response.body())
    }

    /// Returns the `JSESSIONID` value, if the response set one.
    pub fn session_id(&self) -> Option<&Secret<String>> {
        self.session_id.as_ref()
    }

    /// Returns the security key, if the page carried one.
    pub fn security_key(&self) -> Option<&Secret<String>> {
        self.security_key.as_ref()
    }

    /// Returns the push id, if the page has push enabled.
    pub fn push_id(&self) -> Option<&str> {
        self.push_id.as_deref()
    }

    /// Returns the UI id, if present.
    pub fn ui_id(&self) -> Option<u32> {
        self.ui_id
    }

    /// Returns the session id or [`Error::Missing`].
    ///
    /// # Errors
    ///
    /// Fails when the response did not set `JSESSIONID`.
    pub fn require_session_id(&self) -> Result<&Secret<String>, Error> {
        self.session_id().ok_or(Error::Missing(Field::SessionId))
    }

    /// Returns the security key or [`Error::Missing`].
    ///
    /// # Errors
    ///
    /// Fails when the page carried no `Vaadin-Security-Key`.
    pub fn require_security_key(&self) -> Result<&Secret<String>, Error> {
        self.security_key().ok_or(Error::Missing(Field::SecurityKey))
    }

    /// Returns the push id or [`Error::Missing`].
    ///
    /// # Errors
    ///
    /// Fails when the page carried no `Vaadin-Push-ID`.
    pub fn require_push_id(&self) -> Result<&str, Error> {
        self.push_id().ok_or(Error::Missing(Field::PushId))
    }

    /// Returns the UI id or [`Error::Missing`].
    ///
    /// # Errors
    ///
    /// Fails when the page carried no `v-uiId`.
    pub fn require_ui_id(&self) -> Result<u32, Error> {
        self.ui_id().ok_or(Error::Missing(Field::UiId))
    }

    /// Reports whether `field` was found.
    pub fn has(&self, field: Field) -> bool {
        match field {
            Field::SessionId => self.session_id.is_some(),
            Field::SecurityKey => self.security_key.is_some(),
            Field::PushId => self.push_id.is_some(),
            Field::UiId => self.ui_id.is_some(),
        }
    }

    /// Lists the fields the response did not carry, in [`Field::ALL`] order.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| !self.has(*field))
            .collect()
    }

    /// Renders the `Cookie` header value for the next request.
    pub fn cookie_header(&self) -> Option<String> {
        self.session_id
            .as_ref()
            .map(|id| format!("{}={}", Field::SessionId.wire_name(), id.expose_secret()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "11111111-2222-4333-8444-555555555555";
    const PUSH: &str = "aaaaaaaa-bbbb-4ccc-8ddd-eeeeeeeeeeee";

    fn full_page() -> ResponseParts {
        ResponseParts::new(format!(
            r#"<script>window.Vaadin = {{"Vaadin-Security-Key":"{}","Vaadin-Push-ID":"{}","v-uiId":5}};</script>"#,
            KEY, PUSH
        ))
        .with_header("Set-Cookie", "JSESSIONID=S3SS10N; Path=/; HttpOnly")
    }

    #[test]
    fn extracts_every_field() {
        let boot = SessionBootstrap::from_response(&full_page());

        assert_eq!(
            boot.session_id().map(|s| s.expose_secret().as_str()),
            Some("S3SS10N")
        );
        assert_eq!(
            boot.security_key().map(|s| s.expose_secret().as_str()),
            Some(KEY)
        );
        assert_eq!(boot.push_id(), Some(PUSH));
        assert_eq!(boot.ui_id(), Some(5));
        assert!(boot.missing().is_empty());
    }

    #[test]
    fn empty_response_misses_everything() {
        let boot = SessionBootstrap::from_response(&ResponseParts::default());

        assert_eq!(boot, SessionBootstrap::default());
        assert_eq!(boot.missing(), Field::ALL.to_vec());
        assert_eq!(boot.cookie_header(), None);
    }

    #[test]
    fn require_reports_the_missing_field() {
        let boot = SessionBootstrap::default();

        assert_eq!(
            boot.require_session_id().unwrap_err(),
            Error::Missing(Field::SessionId)
        );
        assert_eq!(
            boot.require_security_key().unwrap_err(),
            Error::Missing(Field::SecurityKey)
        );
        assert_eq!(
            boot.require_push_id().unwrap_err(),
            Error::Missing(Field::PushId)
        );
        assert_eq!(boot.require_ui_id().unwrap_err(), Error::Missing(Field::UiId));
    }

    #[test]
    fn require_succeeds_when_present() {
        let boot = SessionBootstrap::from_response(&full_page());

        assert_eq!(boot.require_ui_id(), Ok(5));
        assert_eq!(boot.require_push_id(), Ok(PUSH));
        assert_eq!(
            boot.require_security_key().map(|s| s.expose_secret().clone()),
            Ok(KEY.to_string())
        );
    }

    #[test]
    fn cookie_header_renders_session_cookie() {
        let boot = SessionBootstrap::from_response(&full_page());
        assert_eq!(boot.cookie_header().as_deref(), Some("JSESSIONID=S3SS10N"));
    }

    #[test]
    fn debug_output_hides_credentials() {
        let boot = SessionBootstrap::from_response(&full_page());
        let out = format!("{:?}", boot);

        assert!(!out.contains("S3SS10N"));
        assert!(!out.contains(KEY));
        assert!(out.contains(PUSH));
        assert!(out.contains("[REDACTED]"));
    }

    #[test]
    fn page_without_push_keeps_other_fields() {
        let response = ResponseParts::new(format!(r#"'Vaadin-Security-Key':'{}', 'v-uiId': 0"#, KEY));
        let boot = SessionBootstrap::from_response(&response);

        assert!(boot.has(Field::SecurityKey));
        assert!(boot.has(Field::UiId));
        assert_eq!(boot.missing(), vec![Field::SessionId, Field::PushId]);
    }

    #[test]
    fn extract_accepts_plain_header_maps() {
        let mut headers = std::collections::HashMap::new();
        headers.insert(
            "set-cookie".to_string(),
            "JSESSIONID=map-token; Path=/".to_string(),
        );

        let boot = SessionBootstrap::extract(&headers, "");
        assert_eq!(boot.cookie_header().as_deref(), Some("JSESSIONID=map-token"));
        assert_eq!(boot.missing().len(), 3);
    }
}
