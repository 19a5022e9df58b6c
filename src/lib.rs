//! Session identifier extraction for UIDL load-test clients.
//!
//! A client replaying a Vaadin-style UIDL session has to carry four
//! server-issued values from the page bootstrap into every later request.
//! This crate finds them in the raw response:
//!
//! - [`session_id`]: the `JSESSIONID` cookie from `Set-Cookie`
//! - [`security_key`]: the `Vaadin-Security-Key` anti-forgery UUID
//! - [`push_id`]: the `Vaadin-Push-ID` push-channel UUID
//! - [`ui_id`]: the numeric `v-uiId`
//!
//! Each extractor is a pure function that returns `None` when the value is
//! not there. Deciding what a missing value means (retry, fail the
//! iteration, carry on) is left to the calling script. The crate performs no
//! I/O and keeps no state.
//!
//! # Core Types
//!
//! - [`HeaderLookup`]: the header seam any HTTP client's response can implement
//! - [`ResponseParts`]: an owned headers-plus-body snapshot
//! - [`SessionBootstrap`]: all four values from one response, credentials redacted
//! - [`Secret<T>`]: wrapper that prints `[REDACTED]`
//! - [`Error`]: returned only by the opt-in `require_*` accessors
//!
//! # Examples
//!
//! ```
//! use uidl_extract::{push_id, security_key, session_id_from_cookie, ui_id};
//!
//! let body = r#"{"Vaadin-Security-Key":"550e8400-e29b-41d4-a716-446655440000","v-uiId":1}"#;
//!
//! assert_eq!(
//!     session_id_from_cookie("JSESSIONID=ABC123XYZ; Path=/app; HttpOnly").as_deref(),
//!     Some("ABC123XYZ")
//! );
//! assert_eq!(
//!     security_key(body).as_deref(),
//!     Some("550e8400-e29b-41d4-a716-446655440000")
//! );
//! assert_eq!(push_id(body), None);
//! assert_eq!(ui_id(body), Some(1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bootstrap;
mod error;
mod extract;
mod response;
mod secret;

pub use bootstrap::SessionBootstrap;
pub use error::{Error, Field};
pub use extract::{push_id, security_key, session_id, session_id_from_cookie, ui_id};
pub use response::{HeaderLookup, ResponseParts};
pub use secret::Secret;
