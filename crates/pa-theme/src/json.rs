//! JSON mapping for theme documents.
//!
//! # Document shape
//!
//! | Key       | JSON type           | Theme field          |
//! |-----------|---------------------|----------------------|
//! | `id`      | string, 6 digits    | `id` (ignored on read) |
//! | `name`    | string              | `name`               |
//! | `gui`     | string `RRGGBB`     | `gui`                |
//! | `bg`      | string `RRGGBB`     | `background`         |
//! | `players` | array of 4 strings  | `players`            |
//! | `objs`    | array of 9 strings  | `objects`            |
//! | `bgs`     | array of 9 strings  | `background_objects` |
//!
//! Colors are written as uppercase hex without `#`. On read they are
//! case-insensitive and may carry a `#`.
//!
//! Reading always mints a new ID: a theme that goes through
//! `to_json` → `from_json` keeps its name and colors but not its identity.

use std::fmt;

use pa_color::Color;
use serde_json::{Value, json};

use crate::error::ThemeError;
use crate::id::IdSource;
use crate::theme::Theme;

/// Theme ID, written but ignored on read.
pub const KEY_ID: &str = "id";
/// Theme name.
pub const KEY_NAME: &str = "name";
/// GUI color.
pub const KEY_GUI: &str = "gui";
/// Background color.
pub const KEY_BACKGROUND: &str = "bg";
/// Player colors, 4 entries.
pub const KEY_PLAYERS: &str = "players";
/// Object colors, 9 entries.
pub const KEY_OBJECTS: &str = "objs";
/// Background-object colors, 9 entries.
pub const KEY_BACKGROUND_OBJECTS: &str = "bgs";

impl Theme {
    /// Build the JSON tree for this theme.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            KEY_ID: self.id().as_str(),
            KEY_NAME: self.name,
            KEY_GUI: self.gui,
            KEY_BACKGROUND: self.background,
            KEY_PLAYERS: self.players,
            KEY_OBJECTS: self.objects,
            KEY_BACKGROUND_OBJECTS: self.background_objects,
        })
    }

    /// Compact JSON text. Same as `to_string()`.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    /// Indented JSON text, for people.
    #[must_use]
    pub fn to_json_pretty(&self) -> String {
        // Serializing a `Value` to a `String` cannot fail.
        serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
    }

    /// Rebuild a theme from a parsed document. A fresh ID is drawn from
    /// `ids`; any `id` in the document is ignored.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::MissingField`] if a key is absent or has the wrong
    ///   JSON type (the entry path is named, e.g. `players[1]`).
    /// - [`ThemeError::WrongArity`] if `players`, `objs` or `bgs` do not hold
    ///   exactly 4, 9 and 9 entries.
    /// - [`ThemeError::InvalidColorFormat`] if any color string is not a
    ///   valid hex triple.
    pub fn from_json(doc: &Value, ids: &mut impl IdSource) -> Result<Self, ThemeError> {
        let name = doc
            .get(KEY_NAME)
            .and_then(Value::as_str)
            .ok_or_else(|| missing(KEY_NAME))?;
        let gui = color_field(doc, KEY_GUI)?;
        let background = color_field(doc, KEY_BACKGROUND)?;
        let players = color_group(doc, KEY_PLAYERS)?;
        let objects = color_group(doc, KEY_OBJECTS)?;
        let background_objects = color_group(doc, KEY_BACKGROUND_OBJECTS)?;

        if let Some(old) = doc.get(KEY_ID).and_then(Value::as_str) {
            tracing::trace!(document_id = old, "ignoring document id");
        }

        Ok(Self::new(
            name,
            background,
            gui,
            players,
            objects,
            background_objects,
            ids,
        ))
    }

    /// Parse JSON text, then [`Theme::from_json`].
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Json`] if `text` is not JSON, and otherwise
    /// anything [`Theme::from_json`] returns.
    pub fn from_json_str(text: &str, ids: &mut impl IdSource) -> Result<Self, ThemeError> {
        let doc: Value = serde_json::from_str(text)?;
        Self::from_json(&doc, ids)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

// ---------------------------------------------------------------------------
// Decoding helpers
// ---------------------------------------------------------------------------

fn missing(field: impl Into<String>) -> ThemeError {
    ThemeError::MissingField {
        field: field.into(),
    }
}

/// Decode one color value; `path` names it in errors.
fn decode_color(value: &Value, path: &str) -> Result<Color, ThemeError> {
    let text = value.as_str().ok_or_else(|| missing(path))?;
    let color = Color::from_hex(text).map_err(|source| ThemeError::InvalidColorFormat {
        field: path.to_owned(),
        source,
    })?;
    tracing::trace!(field = path, hex = text, "decoded color");
    Ok(color)
}

fn color_field(doc: &Value, key: &'static str) -> Result<Color, ThemeError> {
    let value = doc.get(key).ok_or_else(|| missing(key))?;
    decode_color(value, key)
}

fn color_group<const N: usize>(doc: &Value, key: &'static str) -> Result<[Color; N], ThemeError> {
    let entries = doc
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| missing(key))?;
    if entries.len() != N {
        return Err(ThemeError::WrongArity {
            field: key,
            expected: N,
            found: entries.len(),
        });
    }

    let mut group = [Color::BLACK; N];
    for (i, (slot, entry)) in group.iter_mut().zip(entries).enumerate() {
        *slot = decode_color(entry, &format!("{key}[{i}]"))?;
    }
    Ok(group)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
