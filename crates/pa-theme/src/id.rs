//! Theme identity — six-digit IDs and the sources that mint them.
//!
//! Every theme gets a fresh [`ThemeId`] when it is constructed, including
//! when it is rebuilt from a document. IDs are drawn from an [`IdSource`]
//! passed in by the caller, so tests can swap the random source for a
//! deterministic one.

use std::fmt;

use rand::Rng;
use rand::rngs::ThreadRng;

/// Number of digits in a theme ID.
pub const ID_LEN: usize = 6;

// ---------------------------------------------------------------------------
// ThemeId
// ---------------------------------------------------------------------------

/// A theme identifier: exactly six ASCII digits, e.g. `"042917"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThemeId([u8; ID_LEN]);

impl ThemeId {
    /// Parse a six-digit ID string.
    ///
    /// Returns `None` unless `s` is exactly six ASCII digits.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let bytes: [u8; ID_LEN] = s.as_bytes().try_into().ok()?;
        bytes.iter().all(u8::is_ascii_digit).then_some(Self(bytes))
    }

    /// The ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ever holds ASCII digits.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// Something that hands out theme IDs.
pub trait IdSource {
    /// Mint the next ID.
    fn next_id(&mut self) -> ThemeId;
}

impl<T: IdSource + ?Sized> IdSource for &mut T {
    fn next_id(&mut self) -> ThemeId {
        (**self).next_id()
    }
}

/// Uniformly random IDs, each digit drawn independently from `0-9`.
///
/// The default generator is the thread-local RNG, so independent threads
/// each own their state and need no locking.
#[derive(Debug, Clone)]
pub struct RandomIds<R = ThreadRng> {
    rng: R,
}

impl RandomIds<ThreadRng> {
    /// Random IDs from [`rand::thread_rng`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomIds<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomIds<R> {
    /// Random IDs from a caller-supplied generator (e.g. a seeded `StdRng`).
    pub const fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> IdSource for RandomIds<R> {
    fn next_id(&mut self) -> ThemeId {
        ThemeId(std::array::from_fn(|_| b'0' + self.rng.gen_range(0..10u8)))
    }
}

/// Deterministic IDs counting up from `000000`, wrapping after `999999`.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u32,
}

impl SequentialIds {
    const MODULUS: u32 = 1_000_000;

    /// Start counting at `start` (taken modulo one million).
    #[must_use]
    pub const fn starting_at(start: u32) -> Self {
        Self {
            next: start % Self::MODULUS,
        }
    }
}

impl IdSource for SequentialIds {
    #[allow(clippy::cast_possible_truncation)]
    fn next_id(&mut self) -> ThemeId {
        let mut n = self.next;
        self.next = (self.next + 1) % Self::MODULUS;

        let mut digits = [0u8; ID_LEN];
        for slot in digits.iter_mut().rev() {
            // n % 10 < 10, always fits.
            *slot = b'0' + (n % 10) as u8;
            n /= 10;
        }
        ThemeId(digits)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
