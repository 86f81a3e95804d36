//! Severity bands derived from a code's sign and its distance to the catalog edges.
//!
//! | Condition (checked in order)       | Band              |
//! |------------------------------------|-------------------|
//! | `code > len - offset - 1`          | `FatalHigh`       |
//! | `code > 0`                         | `Warning`         |
//! | `code < -offset`                   | `FatalLow`        |
//! | `code < 0`                         | `Error`           |
//! | `code == 0`                        | `NeedsEscalation` |
//!
//! The fatal bands refine the ordinary warning/error bands at the catalog
//! boundaries, so they must be tested first.
//!
//! # Copy Semantics
//!
//! `Severity` is a small metadata enum and is `Copy`.

use std::fmt;

/// Severity band of an enumerated error value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Index beyond the last catalog message.
    FatalHigh,
    /// Positive code inside the catalog.
    Warning,
    /// Code zero: the condition is not classified and must be escalated.
    NeedsEscalation,
    /// Negative code inside the catalog.
    Error,
    /// Index below the first catalog message.
    FatalLow,
}

impl Severity {
    /// Classify `code` against a catalog of `len` messages shifted by `offset`.
    pub const fn classify(code: i64, offset: usize, len: usize) -> Self {
        let offset = clamp_to_i64(offset);
        let len = clamp_to_i64(len);

        if code > len - offset - 1 {
            Self::FatalHigh
        } else if code > 0 {
            Self::Warning
        } else if code < -offset {
            Self::FatalLow
        } else if code < 0 {
            Self::Error
        } else {
            Self::NeedsEscalation
        }
    }

    /// Prefix written in front of the catalog message when rendering.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::FatalHigh => "err.Error(): value of 'n' too high: ",
            Self::Warning => "warning: ",
            Self::NeedsEscalation => "please contact package administration: ",
            Self::Error => "error: ",
            Self::FatalLow => "err.Error(): value of 'n' too low: ",
        }
    }

    /// True for the two boundary bands.
    #[inline]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::FatalHigh | Self::FatalLow)
    }

    /// Short lowercase label for structured logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FatalHigh => "fatal-high",
            Self::Warning => "warning",
            Self::NeedsEscalation => "needs-escalation",
            Self::Error => "error",
            Self::FatalLow => "fatal-low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Catalog sizes and offsets beyond `i64::MAX` are not representable as codes.
#[inline]
pub(crate) const fn clamp_to_i64(n: usize) -> i64 {
    if n > i64::MAX as usize {
        i64::MAX
    } else {
        n as i64
    }
}
