// SPDX-License-Identifier: MIT
//
// pa-color color value — one RGB triple with three interchangeable views.
//
// Single-character variable names (r, g, b) are the standard convention for
// color channels.
#![allow(clippy::many_single_char_names)]
//
// Storage is always the normalized float triple. The 8-bit and hex views are
// derived on demand:
//
//   f32 [0, 1]  ──×255, truncate──▶  u8 [0, 255]  ──%02X──▶  "RRGGBB"
//   f32 [0, 1]  ◀──────÷255───────  u8 [0, 255]  ◀──parse──  "#rrggbb"
//
// Decoding an 8-bit value is exact; encoding a float truncates toward zero,
// so float → u8 → float is lossy (0.5 → 127 → 0.498…). No gamma, no alpha:
// channel values pass through numerically untouched.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::{ColorError, HexFault};

/// Number of hex digits in an encoded color (`RRGGBB`).
pub const HEX_DIGITS: usize = 6;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An RGB color stored as three normalized float channels.
///
/// Values are expected in `0.0..=1.0`, but float construction neither clamps
/// nor rejects out-of-range input. The 8-bit view saturates such values.
///
/// # Examples
///
/// ```
/// use pa_color::Color;
///
/// let a = Color::rgb(0.5, 0.5, 0.5);
/// let b = Color::rgb8(127, 127, 127);
/// let c: Color = "#7f7f7f".parse().unwrap();
///
/// assert_eq!(a.to_hex(), "7F7F7F");
/// assert_eq!(b.to_hex(), "7F7F7F");
/// assert_eq!(c.to_rgb8(), (127, 127, 127));
/// ```
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red channel, 0.0 to 1.0.
    pub r: f32,
    /// Green channel, 0.0 to 1.0.
    pub g: f32,
    /// Blue channel, 0.0 to 1.0.
    pub b: f32,
}

impl Color {
    /// Pure black. Also the value of an unassigned theme slot.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from float channels. Stored as-is.
    #[inline]
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channels (0 to 255).
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(from_u8(r), from_u8(g), from_u8(b))
    }

    /// Create a gray with every channel set to `v`.
    #[inline]
    #[must_use]
    pub const fn gray(v: f32) -> Self {
        Self::rgb(v, v, v)
    }

    /// Create a color from a hex string.
    ///
    /// Accepts exactly six hex digits, in either case, with or without a
    /// leading `#`: `"#7F7F7F"`, `"7f7f7f"`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] if the digit count is not
    /// six or any character is outside `[0-9a-fA-F]`.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s)
    }

    // ─── Views ───────────────────────────────────────────────────────────

    /// The float triple.
    #[inline]
    #[must_use]
    pub const fn to_rgb(self) -> (f32, f32, f32) {
        (self.r, self.g, self.b)
    }

    /// The 8-bit triple, each channel `trunc(channel * 255)`.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Encode as `RRGGBB`: uppercase, zero-padded, no `#`.
    ///
    /// This is the form written into theme documents.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("{r:02X}{g:02X}{b:02X}")
    }

    // ─── Per-channel 8-bit access ────────────────────────────────────────

    /// Red as 0–255.
    #[must_use]
    pub fn r_u8(self) -> u8 {
        to_u8(self.r)
    }

    /// Green as 0–255.
    #[must_use]
    pub fn g_u8(self) -> u8 {
        to_u8(self.g)
    }

    /// Blue as 0–255.
    #[must_use]
    pub fn b_u8(self) -> u8 {
        to_u8(self.b)
    }

    /// Set red from 0–255.
    pub fn set_r_u8(&mut self, v: u8) {
        self.r = from_u8(v);
    }

    /// Set green from 0–255.
    pub fn set_g_u8(&mut self, v: u8) {
        self.g = from_u8(v);
    }

    /// Set blue from 0–255.
    pub fn set_b_u8(&mut self, v: u8) {
        self.b = from_u8(v);
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::rgb({:.4}, {:.4}, {:.4})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb8(r, g, b)
    }
}

impl From<(f32, f32, f32)> for Color {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Self::rgb(r, g, b)
    }
}

// ─── Serde ───────────────────────────────────────────────────────────────────
//
// Colors cross every serialization boundary as their hex string.

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_hex(&s).map_err(de::Error::custom)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(input: &str) -> Result<Color, ColorError> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    let fail = |fault| ColorError::InvalidColorFormat {
        input: input.to_owned(),
        fault,
    };

    let count = digits.chars().count();
    if count != HEX_DIGITS {
        return Err(fail(HexFault::Length(count)));
    }

    let mut chars = ['0'; HEX_DIGITS];
    for (slot, c) in chars.iter_mut().zip(digits.chars()) {
        *slot = c;
    }

    // Channels decode left to right, so the first bad digit is the one reported.
    let channel = |at: usize| {
        parse_hex_byte(chars[at], chars[at + 1]).ok_or_else(|| {
            let position = if parse_hex_digit(chars[at]).is_none() { at } else { at + 1 };
            fail(HexFault::Digit {
                position,
                found: chars[position],
            })
        })
    };
    Ok(Color::rgb8(channel(0)?, channel(2)?, channel(4)?))
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn parse_hex_digit(c: char) -> Option<u8> {
    // Each arm only matches ASCII, so `as u8` is lossless.
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(hi: char, lo: char) -> Option<u8> {
    let hi = parse_hex_digit(hi)?;
    let lo = parse_hex_digit(lo)?;
    Some((hi << 4) | lo)
}

// ─── Channel Conversion ──────────────────────────────────────────────────────

/// Convert an 8-bit channel to 0.0–1.0.
#[inline]
fn from_u8(v: u8) -> f32 {
    f32::from(v) / 255.0
}

/// Convert a float channel to 0–255, truncating toward zero.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f32) -> u8 {
    // `as` saturates: negatives and NaN become 0, anything past 1.0 becomes 255.
    (v * 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    // ── Construction ─────────────────────────────────────────────────────

    #[test]
    fn float_channels_are_stored_verbatim() {
        let c = Color::rgb(0.25, 0.5, 0.75);
        assert_eq!(c.to_rgb(), (0.25, 0.5, 0.75));
    }

    #[test]
    fn float_channels_are_not_clamped() {
        let c = Color::rgb(-0.5, 1.5, 2.0);
        assert_eq!(c.to_rgb(), (-0.5, 1.5, 2.0));
        assert_eq!(c.to_rgb8(), (0, 255, 255));
    }

    #[test]
    fn rgb8_divides_by_255() {
        let c = Color::rgb8(0, 51, 255);
        assert_eq!(c.r, 0.0);
        assert_eq!(c.g, 51.0 / 255.0);
        assert_eq!(c.b, 1.0);
    }

    #[test]
    fn default_is_black() {
        assert_eq!(Color::default(), Color::BLACK);
        assert_eq!(Color::default().to_hex(), "000000");
    }

    #[test]
    fn tuple_conversions() {
        assert_eq!(Color::from((127u8, 0u8, 255u8)), Color::rgb8(127, 0, 255));
        assert_eq!(Color::from((0.5f32, 0.5f32, 0.5f32)), Color::gray(0.5));
    }

    // ── Lossy float round trip ───────────────────────────────────────────

    #[test]
    fn half_truncates_to_127() {
        let c = Color::rgb(0.5, 0.5, 0.5);
        assert_eq!(c.to_rgb8(), (127, 127, 127));
        assert_eq!(c.to_hex(), "7F7F7F");
    }

    #[test]
    fn half_does_not_survive_u8_round_trip() {
        let (r, g, b) = Color::rgb(0.5, 0.5, 0.5).to_rgb8();
        let back = Color::rgb8(r, g, b);
        assert_eq!(back.r, 127.0 / 255.0);
        assert!(back.r < 0.5);
        assert!((0.5 - back.r - 0.001_96).abs() < 1e-5, "delta was {}", 0.5 - back.r);
    }

    #[test]
    fn truncation_not_rounding() {
        // 0.999 * 255 = 254.745 → 254, not 255.
        assert_eq!(Color::gray(0.999).r_u8(), 254);
    }

    // ── Per-channel access ───────────────────────────────────────────────

    #[test]
    fn channel_setters() {
        let mut c = Color::BLACK;
        c.set_r_u8(255);
        c.set_g_u8(128);
        c.set_b_u8(1);
        assert_eq!((c.r_u8(), c.g_u8(), c.b_u8()), (255, 128, 1));
        assert_eq!(c.r, 1.0);

        c.b = 1.0;
        assert_eq!(c.b_u8(), 255);
    }

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_with_and_without_hash() {
        assert_eq!(Color::from_hex("#ff8000").unwrap().to_rgb8(), (255, 128, 0));
        assert_eq!(Color::from_hex("FF8000").unwrap().to_rgb8(), (255, 128, 0));
    }

    #[test]
    fn hex_is_case_insensitive() {
        let lower = Color::from_hex("c86432").unwrap();
        let upper = Color::from_hex("C86432").unwrap();
        let mixed = Color::from_hex("#c8643A").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(mixed.to_hex(), "C8643A");
    }

    #[test]
    fn hex_encodes_uppercase_zero_padded() {
        assert_eq!(Color::rgb8(1, 10, 171).to_hex(), "010AAB");
        assert_eq!(Color::WHITE.to_string(), "FFFFFF");
    }

    #[test]
    fn hex_wrong_length_is_rejected() {
        for input in ["12345", "#12345", "1234567", "", "#", "#fff"] {
            let err = Color::from_hex(input).unwrap_err();
            assert!(
                matches!(err, ColorError::InvalidColorFormat { fault: HexFault::Length(_), .. }),
                "{input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn hex_bad_digit_is_rejected() {
        let err = Color::from_hex("GGGGGG").unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidColorFormat {
                input: "GGGGGG".into(),
                fault: HexFault::Digit { position: 0, found: 'G' },
            }
        );

        let err = Color::from_hex("#12z456").unwrap_err();
        assert!(matches!(
            err,
            ColorError::InvalidColorFormat {
                fault: HexFault::Digit { position: 2, found: 'z' },
                ..
            }
        ));
    }

    #[test]
    fn hex_byte_helpers_reject_non_digits() {
        assert_eq!(parse_hex_byte('7', 'F'), Some(0x7F));
        assert_eq!(parse_hex_byte('a', '0'), Some(0xA0));
        assert_eq!(parse_hex_byte('f', 'g'), None);
        assert_eq!(parse_hex_byte('é', '0'), None);
        assert_eq!(parse_hex_digit('G'), None);
        assert_eq!(parse_hex_digit('#'), None);
    }

    #[test]
    fn hex_reports_first_bad_digit() {
        let err = Color::from_hex("1234x6").unwrap_err();
        assert!(matches!(
            err,
            ColorError::InvalidColorFormat {
                fault: HexFault::Digit { position: 4, found: 'x' },
                ..
            }
        ));

        let err = Color::from_hex("#12345q").unwrap_err();
        assert!(matches!(
            err,
            ColorError::InvalidColorFormat {
                fault: HexFault::Digit { position: 5, found: 'q' },
                ..
            }
        ));
    }

    #[test]
    fn hex_double_hash_is_rejected() {
        assert!(Color::from_hex("##123456").is_err());
    }

    #[test]
    fn hex_non_ascii_is_rejected_without_panicking() {
        // Six chars but multi-byte; must not slice mid-codepoint.
        assert!(Color::from_hex("ééééé1").is_err());
        // Six bytes but three chars.
        assert!(Color::from_hex("ééé").is_err());
    }

    #[test]
    fn from_str_matches_from_hex() {
        let parsed: Color = "#7F7F7F".parse().unwrap();
        assert_eq!(parsed, Color::from_hex("7f7f7f").unwrap());
    }

    // ── Serde ────────────────────────────────────────────────────────────

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb8(127, 127, 127)).unwrap();
        assert_eq!(json, "\"7F7F7F\"");
    }

    #[test]
    fn deserializes_from_hex_string() {
        let c: Color = serde_json::from_str("\"#00ff7f\"").unwrap();
        assert_eq!(c.to_rgb8(), (0, 255, 127));

        let err = serde_json::from_str::<Color>("\"nothex\"").unwrap_err();
        assert!(err.to_string().contains("invalid color format"), "got: {err}");
    }

    // ── Properties ───────────────────────────────────────────────────────

    #[test]
    fn every_u8_triple_survives() {
        for v in 0..=255u8 {
            let c = Color::rgb8(v, 255 - v, v / 2);
            assert_eq!(c.to_rgb8(), (v, 255 - v, v / 2));
        }
    }

    proptest! {
        #[test]
        fn rgb8_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            prop_assert_eq!(Color::rgb8(r, g, b).to_rgb8(), (r, g, b));
        }

        #[test]
        fn hex_round_trip_normalizes_case(s in "#?[0-9a-fA-F]{6}") {
            let digits = s.trim_start_matches('#').to_ascii_uppercase();
            prop_assert_eq!(Color::from_hex(&s).unwrap().to_hex(), digits);
        }
    }
}
