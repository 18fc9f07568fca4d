//! Errors from building or reading a theme.

use pa_color::ColorError;

/// Everything that can go wrong turning input into a [`Theme`](crate::Theme).
///
/// Construction is all-or-nothing: when one of these is returned, no theme
/// was produced.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A required document entry is absent or has the wrong JSON type.
    #[error("missing field `{field}`")]
    MissingField {
        /// Key path of the entry, e.g. `name` or `players[2]`.
        field: String,
    },

    /// A color group does not hold exactly the expected number of entries.
    #[error("`{field}` must hold exactly {expected} colors, found {found}")]
    WrongArity {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// A color entry could not be decoded.
    #[error("invalid color in `{field}`")]
    InvalidColorFormat {
        /// Key path of the entry, e.g. `gui` or `players[2]`.
        field: String,
        #[source]
        source: ColorError,
    },

    /// The document text is not JSON.
    #[error("invalid theme JSON")]
    Json(#[from] serde_json::Error),

    /// Reading the document failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pa_color::Color;

    #[test]
    fn missing_field_display() {
        let e = ThemeError::MissingField {
            field: "gui".into(),
        };
        assert_eq!(e.to_string(), "missing field `gui`");
    }

    #[test]
    fn wrong_arity_display() {
        let e = ThemeError::WrongArity {
            field: "players",
            expected: 4,
            found: 3,
        };
        assert_eq!(e.to_string(), "`players` must hold exactly 4 colors, found 3");
    }

    #[test]
    fn invalid_color_keeps_source() {
        let source = Color::from_hex("12345").unwrap_err();
        let e = ThemeError::InvalidColorFormat {
            field: "objs[3]".into(),
            source,
        };
        assert_eq!(e.to_string(), "invalid color in `objs[3]`");
        let source = std::error::Error::source(&e).map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("invalid color format \"12345\": expected 6 hex digits, found 5")
        );
    }

    #[test]
    fn io_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such theme");
        let e = ThemeError::from(io);
        assert_eq!(e.to_string(), "no such theme");
    }
}
