//! # pa-theme — theme documents with fixed color slots
//!
//! Builds, serializes and reads back level-editor color themes.
//!
//! # Architecture
//!
//! ```text
//! pa_color::Color        float / 8-bit / hex views of one RGB triple
//!     │
//!     ▼
//! theme.rs:  Theme { name, gui, background, players[4], objects[9], background_objects[9] }
//!     │             ▲
//!     │             └── id.rs: IdSource mints a fresh six-digit ThemeId per construction
//!     ▼
//! json.rs:   Theme ⇄ serde_json::Value ⇄ text (hex strings only at this boundary)
//! ```
//!
//! # Example
//!
//! ```
//! use pa_color::Color;
//! use pa_theme::{RandomIds, Theme};
//!
//! let mut ids = RandomIds::new();
//! let theme = Theme::filled("Full Gray", Color::rgb8(127, 127, 127), &mut ids);
//!
//! let text = theme.to_json_string();
//! let back = Theme::from_json_str(&text, &mut ids).unwrap();
//!
//! assert_eq!(back.name, "Full Gray");
//! assert_eq!(back.players, theme.players);
//! ```

pub mod error;
pub mod id;
pub mod json;
pub mod theme;

pub use error::ThemeError;
pub use id::{IdSource, RandomIds, SequentialIds, ThemeId};
pub use theme::{BACKGROUND_OBJECT_COUNT, OBJECT_COUNT, PLAYER_COUNT, Theme, UNTITLED, slot};
