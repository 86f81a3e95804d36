//! Bounds violations raised while constructing or deriving enumerated errors.
//!
//! Two kinds, kept distinct all the way to the process exit status:
//!
//! - **CatalogMisconfigured**: the offset handed to construction exceeds the
//!   catalog length. This is an integrator mistake in the catalog wiring.
//! - **CodeOutOfRange**: an assigned or composed code selects a message
//!   outside `[-offset, len - offset)`.
//!
//! The fallible API (`checked_new`, `try_set`, `try_add`) returns these as
//! values. The terminating API reports them on stderr and exits with
//! [`CatalogViolation::exit_status`].

use std::fmt;

/// Exit status for a misconfigured catalog (`EX_CONFIG`).
pub const EXIT_CATALOG_MISCONFIGURED: i32 = 78;

/// Exit status for an out-of-range code (`EX_DATAERR`).
pub const EXIT_CODE_OUT_OF_RANGE: i32 = 65;

/// Which edge of the catalog a rejected code fell past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// `code >= len - offset`
    TooHigh,
    /// `code < -offset`
    TooLow,
}

impl Bound {
    /// Lowercase label used in diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TooHigh => "too high",
            Self::TooLow => "too low",
        }
    }
}

/// A rejected catalog configuration or code.
///
/// **Contains catalog geometry.** For untrusted boundaries, use
/// [`to_public`](Self::to_public).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CatalogViolation {
    /// Offset exceeds catalog length at construction.
    CatalogMisconfigured {
        /// Requested offset.
        offset: usize,
        /// Catalog length.
        len: usize,
    },
    /// Code outside `[-offset, len - offset)`.
    CodeOutOfRange {
        /// Rejected code.
        code: i64,
        /// Offset of the value the code was applied to.
        offset: usize,
        /// Catalog length.
        len: usize,
        /// Which edge was crossed.
        bound: Bound,
    },
}

impl CatalogViolation {
    /// Exit status used when this violation terminates the process.
    pub const fn exit_status(&self) -> i32 {
        match self {
            Self::CatalogMisconfigured { .. } => EXIT_CATALOG_MISCONFIGURED,
            Self::CodeOutOfRange { .. } => EXIT_CODE_OUT_OF_RANGE,
        }
    }

    /// Stable kind name for structured logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::CatalogMisconfigured { .. } => "CatalogMisconfigured",
            Self::CodeOutOfRange { .. } => "CodeOutOfRange",
        }
    }

    /// Sanitized message that omits offsets, lengths and codes.
    pub const fn to_public(&self) -> &'static str {
        match self {
            Self::CatalogMisconfigured { .. } => "Invalid error catalog configuration",
            Self::CodeOutOfRange { .. } => "Invalid error code",
        }
    }
}

impl fmt::Display for CatalogViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CatalogMisconfigured { offset, len } => write!(
                f,
                "offset {} exceeds catalog length {}",
                offset, len
            ),
            Self::CodeOutOfRange {
                code,
                offset,
                len,
                bound,
            } => write!(
                f,
                "code {} is {} for catalog of {} messages at offset {}",
                code,
                bound.as_str(),
                len,
                offset
            ),
        }
    }
}

impl std::error::Error for CatalogViolation {}
