// SPDX-License-Identifier: MIT
//
// Color parsing errors.

use std::fmt;

/// Errors produced when decoding a color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The input is not six hex digits with an optional `#` prefix.
    #[error("invalid color format {input:?}: {fault}")]
    InvalidColorFormat { input: String, fault: HexFault },
}

/// What exactly was wrong with a hex color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexFault {
    /// Digit count after stripping `#` was not six.
    Length(usize),
    /// A character outside `[0-9a-fA-F]`, at a position counted after `#`.
    Digit { position: usize, found: char },
}

impl fmt::Display for HexFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(n) => write!(f, "expected 6 hex digits, found {n}"),
            Self::Digit { position, found } => {
                write!(f, "{found:?} at position {position} is not a hex digit")
            }
        }
    }
}
