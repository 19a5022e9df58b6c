//! Extractors for the identifiers a UIDL client has to carry between requests.
//!
//! Every function here is pure: it applies one precompiled pattern to its
//! input and returns the first captured group, or `None` when the input does
//! not carry the identifier. Absence is an ordinary outcome. Nothing here
//! logs, allocates state, or panics on odd input.

use std::sync::LazyLock;

use regex::Regex;

use crate::response::HeaderLookup;

const SET_COOKIE: &str = "Set-Cookie";
const SECURITY_KEY_LABEL: &str = "Vaadin-Security-Key";
const PUSH_ID_LABEL: &str = "Vaadin-Push-ID";

const UUID: &str =
    "[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}";

// The cookie name must start a segment so `XJSESSIONID=` does not match.
static SESSION_COOKIE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[;,\s])JSESSIONID=([^;]+)").expect("session cookie regex")
});

static SECURITY_KEY_RE: LazyLock<Regex> = LazyLock::new(|| labeled_uuid_regex(SECURITY_KEY_LABEL));

static PUSH_ID_RE: LazyLock<Regex> = LazyLock::new(|| labeled_uuid_regex(PUSH_ID_LABEL));

// `\d` would accept any Unicode digit; the protocol only ever emits ASCII.
static UI_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["']v-uiId["']\s*:\s*([0-9]+)"#).expect("ui id regex"));

/// Builds the `'<label>' : '<uuid>'` pattern shared by the UUID-valued fields.
fn labeled_uuid_regex(label: &str) -> Regex {
    let pattern = format!(
        r#"["']{}["']\s*:\s*["']({})["']"#,
        regex::escape(label),
        UUID
    );
    Regex::new(&pattern).expect("labeled uuid regex")
}

fn first_capture<'h>(re: &Regex, haystack: &'h str) -> Option<&'h str> {
    re.captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extracts the `JSESSIONID` cookie value from a response's headers.
///
/// Every `Set-Cookie` value is scanned in order and the first one carrying
/// the cookie wins. Returns `None` when there is no `Set-Cookie` header or
/// none of them sets `JSESSIONID`.
///
/// # Examples
///
/// ```
/// use uidl_extract::session_id;
///
/// let headers = vec![(
///     "Set-Cookie".to_string(),
///     "JSESSIONID=ABC123XYZ; Path=/app; HttpOnly".to_string(),
/// )];
/// assert_eq!(session_id(&headers).as_deref(), Some("ABC123XYZ"));
///
/// let no_cookies: Vec<(String, String)> = Vec::new();
/// assert_eq!(session_id(&no_cookies), None);
/// ```
pub fn session_id<H>(headers: &H) -> Option<String>
where
    H: HeaderLookup + ?Sized,
{
    headers
        .header_values(SET_COOKIE)
        .into_iter()
        .find_map(session_id_from_cookie)
}

/// Extracts the `JSESSIONID` value from a single cookie-bearing header value.
///
/// The value runs up to the next `;` or the end of the string. The cookie
/// name is case-sensitive.
///
/// ```
/// use uidl_extract::session_id_from_cookie;
///
/// assert_eq!(
///     session_id_from_cookie("JSESSIONID=ABC123XYZ; Path=/app; HttpOnly").as_deref(),
///     Some("ABC123XYZ")
/// );
/// assert_eq!(session_id_from_cookie("jsessionid=abc"), None);
/// ```
pub fn session_id_from_cookie(value: &str) -> Option<String> {
    first_capture(&SESSION_COOKIE_RE, value).map(str::to_owned)
}

/// Extracts the `Vaadin-Security-Key` UUID from a page body.
///
/// Either quoting style is accepted for both key and value, with any
/// whitespace around the colon. The UUID is returned exactly as written.
///
/// ```
/// use uidl_extract::security_key;
///
/// let body = r#"{"Vaadin-Security-Key" : "A1B2C3D4-0000-4000-8000-00000000ABCD"}"#;
/// assert_eq!(
///     security_key(body).as_deref(),
///     Some("A1B2C3D4-0000-4000-8000-00000000ABCD")
/// );
/// assert_eq!(security_key(""), None);
/// ```
pub fn security_key(body: &str) -> Option<String> {
    first_capture(&SECURITY_KEY_RE, body).map(str::to_owned)
}

/// Extracts the `Vaadin-Push-ID` UUID from a page body.
///
/// Matches exactly like [`security_key`], keyed on `Vaadin-Push-ID`. Pages
/// served without push have no such field and yield `None`.
///
/// ```
/// use uidl_extract::push_id;
///
/// let body = "'Vaadin-Push-ID': '550e8400-e29b-41d4-a716-446655440000'";
/// assert_eq!(
///     push_id(body).as_deref(),
///     Some("550e8400-e29b-41d4-a716-446655440000")
/// );
/// ```
pub fn push_id(body: &str) -> Option<String> {
    first_capture(&PUSH_ID_RE, body).map(str::to_owned)
}

/// Extracts the numeric `v-uiId` from a page body.
///
/// Returns `None` when the key is missing or its digits do not fit in a
/// `u32`. A UI id of `0` is a present value.
///
/// ```
/// use uidl_extract::ui_id;
///
/// assert_eq!(ui_id(r#""v-uiId": 42"#), Some(42));
/// assert_eq!(ui_id(r#""v-uiId": 0"#), Some(0));
/// assert_eq!(ui_id("no ui here"), None);
/// ```
pub fn ui_id(body: &str) -> Option<u32> {
    first_capture(&UI_ID_RE, body).and_then(|digits| digits.parse().ok())
}
