//! Theme — one name, one ID, and five fixed-shape color groups.
//!
//! ```text
//! Theme
//! ├── id                  six digits, minted at construction, read-only
//! ├── name                free text
//! ├── gui                 1 color
//! ├── background          1 color
//! ├── players             4 colors   (slot::PLAYER_1 ..= slot::PLAYER_4)
//! ├── objects             9 colors   (slot::OBJECT_1 ..= slot::OBJECT_9)
//! └── background_objects  9 colors   (slot::BG_OBJECT_1 ..= slot::BG_OBJECT_9)
//! ```
//!
//! Group sizes are part of the type. Slot order is meaningful: index N is
//! the color the game assigns to player / object / background-object N+1.
//! Unassigned slots are black.

use std::fs;
use std::io;
use std::path::Path;

use pa_color::Color;

use crate::error::ThemeError;
use crate::id::{IdSource, ThemeId};

/// Name given to themes created without one.
pub const UNTITLED: &str = "Untitled";

/// Number of player color slots.
pub const PLAYER_COUNT: usize = 4;
/// Number of object color slots.
pub const OBJECT_COUNT: usize = 9;
/// Number of background-object color slots.
pub const BACKGROUND_OBJECT_COUNT: usize = 9;

/// Named slot indices into the color groups.
pub mod slot {
    pub const PLAYER_1: usize = 0;
    pub const PLAYER_2: usize = 1;
    pub const PLAYER_3: usize = 2;
    pub const PLAYER_4: usize = 3;

    pub const OBJECT_1: usize = 0;
    pub const OBJECT_2: usize = 1;
    pub const OBJECT_3: usize = 2;
    pub const OBJECT_4: usize = 3;
    pub const OBJECT_5: usize = 4;
    pub const OBJECT_6: usize = 5;
    pub const OBJECT_7: usize = 6;
    pub const OBJECT_8: usize = 7;
    pub const OBJECT_9: usize = 8;

    pub const BG_OBJECT_1: usize = 0;
    pub const BG_OBJECT_2: usize = 1;
    pub const BG_OBJECT_3: usize = 2;
    pub const BG_OBJECT_4: usize = 3;
    pub const BG_OBJECT_5: usize = 4;
    pub const BG_OBJECT_6: usize = 5;
    pub const BG_OBJECT_7: usize = 6;
    pub const BG_OBJECT_8: usize = 7;
    pub const BG_OBJECT_9: usize = 8;
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// A complete theme document.
///
/// The ID is fixed for the lifetime of the value. Everything else is a
/// plain public field.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    id: ThemeId,

    /// Display name, shown in the level editor.
    pub name: String,
    /// GUI color.
    pub gui: Color,
    /// Background color.
    pub background: Color,
    /// Player colors, indexed by `slot::PLAYER_*`.
    pub players: [Color; PLAYER_COUNT],
    /// Object colors, indexed by `slot::OBJECT_*`.
    pub objects: [Color; OBJECT_COUNT],
    /// Background-object colors, indexed by `slot::BG_OBJECT_*`.
    pub background_objects: [Color; BACKGROUND_OBJECT_COUNT],
}

impl Theme {
    // -- Construction -------------------------------------------------------

    /// An empty theme named [`UNTITLED`], every slot black.
    pub fn untitled(ids: &mut impl IdSource) -> Self {
        Self::named(UNTITLED, ids)
    }

    /// An empty theme with the given name, every slot black.
    pub fn named(name: impl Into<String>, ids: &mut impl IdSource) -> Self {
        Self::filled(name, Color::BLACK, ids)
    }

    /// A theme with every slot set to `color`.
    pub fn filled(name: impl Into<String>, color: Color, ids: &mut impl IdSource) -> Self {
        Self::new(
            name,
            color,
            color,
            [color; PLAYER_COUNT],
            [color; OBJECT_COUNT],
            [color; BACKGROUND_OBJECT_COUNT],
            ids,
        )
    }

    /// A fully specified theme. The ID still comes from `ids`.
    pub fn new(
        name: impl Into<String>,
        background: Color,
        gui: Color,
        players: [Color; PLAYER_COUNT],
        objects: [Color; OBJECT_COUNT],
        background_objects: [Color; BACKGROUND_OBJECT_COUNT],
        ids: &mut impl IdSource,
    ) -> Self {
        let theme = Self {
            id: ids.next_id(),
            name: name.into(),
            gui,
            background,
            players,
            objects,
            background_objects,
        };
        tracing::debug!(id = %theme.id, name = %theme.name, "theme created");
        theme
    }

    /// Like [`Theme::new`], but takes the groups as slices.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::WrongArity`] if `players` does not hold exactly
    /// 4 colors, or `objects` / `background_objects` do not hold exactly 9.
    /// Nothing is truncated or padded.
    pub fn from_slices(
        name: impl Into<String>,
        background: Color,
        gui: Color,
        players: &[Color],
        objects: &[Color],
        background_objects: &[Color],
        ids: &mut impl IdSource,
    ) -> Result<Self, ThemeError> {
        Ok(Self::new(
            name,
            background,
            gui,
            fixed(players, "players")?,
            fixed(objects, "objects")?,
            fixed(background_objects, "background_objects")?,
            ids,
        ))
    }

    // -- Identity -----------------------------------------------------------

    /// This theme's ID.
    #[must_use]
    pub const fn id(&self) -> ThemeId {
        self.id
    }

    // -- Files --------------------------------------------------------------

    /// Write the compact JSON document to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error unchanged if the write fails.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json_string())?;
        tracing::debug!(id = %self.id, path = %path.display(), "theme exported");
        Ok(())
    }

    /// Read and decode a theme document from `path`. A fresh ID is minted.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Io`] if the file cannot be read, and otherwise
    /// anything [`Theme::from_json_str`] returns.
    pub fn import_from_file(
        path: impl AsRef<Path>,
        ids: &mut impl IdSource,
    ) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let theme = Self::from_json_str(&text, ids)?;
        tracing::debug!(id = %theme.id, path = %path.display(), "theme imported");
        Ok(theme)
    }
}

/// Convert a slice into a fixed-size group, refusing any other length.
fn fixed<const N: usize>(colors: &[Color], field: &'static str) -> Result<[Color; N], ThemeError> {
    <[Color; N]>::try_from(colors).map_err(|_| ThemeError::WrongArity {
        field,
        expected: N,
        found: colors.len(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
