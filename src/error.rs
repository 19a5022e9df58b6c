use std::fmt;

/// Errors returned when a caller insists on an identifier being present.
///
/// The extractors themselves never produce this type: they report absence as
/// `None`. Only the `require_*` accessors on
/// [`SessionBootstrap`](crate::SessionBootstrap) turn a `None` into an error
/// so test scripts can short-circuit with `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The response did not carry the named identifier
    Missing(Field),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Missing(field) => write!(f, "{} not found in response", field),
        }
    }
}

impl std::error::Error for Error {}

/// One of the identifiers issued during a UIDL page bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The `JSESSIONID` cookie
    SessionId,
    /// The `Vaadin-Security-Key` anti-forgery token
    SecurityKey,
    /// The `Vaadin-Push-ID` push-channel token
    PushId,
    /// The numeric `v-uiId`
    UiId,
}

impl Field {
    /// All fields, in the order a bootstrap reports them.
    pub const ALL: [Field; 4] = [
        Field::SessionId,
        Field::SecurityKey,
        Field::PushId,
        Field::UiId,
    ];

    /// Returns the label the server uses for this field on the wire.
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::SessionId => "JSESSIONID",
            Field::SecurityKey => "Vaadin-Security-Key",
            Field::PushId => "Vaadin-Push-ID",
            Field::UiId => "v-uiId",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_error_names_the_wire_label() {
        let err = Error::Missing(Field::PushId);
        assert_eq!(err.to_string(), "Vaadin-Push-ID not found in response");
    }

    #[test]
    fn field_display_matches_wire_name() {
        for field in Field::ALL {
            assert_eq!(format!("{}", field), field.wire_name());
        }
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&Error::Missing(Field::UiId));
    }
}
