//! # pa-color — RGB color value for theme documents
//!
//! One [`Color`] type with three views of the same triple:
//!
//! | View        | Type              | Range        |
//! |-------------|-------------------|--------------|
//! | float       | `(f32, f32, f32)` | `0.0..=1.0`  |
//! | 8-bit       | `(u8, u8, u8)`    | `0..=255`    |
//! | hex string  | `String`          | `"RRGGBB"`   |
//!
//! The float triple is the stored form. Hex strings are only produced and
//! consumed at serialization boundaries; malformed hex input is rejected with
//! [`ColorError::InvalidColorFormat`].

pub mod color;
pub mod error;

pub use color::Color;
pub use error::{ColorError, HexFault};
