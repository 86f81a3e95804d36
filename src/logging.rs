//! Structured diagnostic view over an enumerated error or a bounds violation.
//!
//! # Properties
//!
//! - Borrows from the value with an explicit lifetime and cannot outlive it
//! - NO heap allocations in accessors
//! - `write_to` streams into any `fmt::Write` and truncates each free-text
//!   field so a pathological name or message cannot flood the log
//!
//! The terminating API writes this view to stderr before exiting. Callers
//! with their own logging pipeline read the fields directly instead.

use crate::{CatalogViolation, ContextName, Severity};
use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

/// Maximum length for any individual field in formatted output (DoS prevention)
const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Truncation indicator appended to truncated strings
const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Borrowed, structured description of an enumerated error condition.
///
/// # Example
///
/// ```rust
/// # use palisade_enum_errors::{EnumError, MessageCatalog};
/// let err = EnumError::new(6, "test", MessageCatalog::numbered(-6, 3, "err")).set(3);
/// let log = err.diagnostic_log();
///
/// let mut buffer = String::new();
/// log.write_to(&mut buffer).unwrap();
/// assert_eq!(buffer, "[warning] name='test' code=3 offset=6 len=10 message='err 3'");
/// ```
#[derive(Debug)]
pub struct DiagnosticLog<'a> {
    pub name: &'a ContextName,
    pub code: i64,
    pub offset: usize,
    pub catalog_len: usize,
    pub severity: Severity,
    pub message: Option<&'a str>,
    pub violation: Option<&'a CatalogViolation>,
    pub location: Option<&'static Location<'static>>,
}

impl<'a> DiagnosticLog<'a> {
    /// Write the log line to a formatter without materializing fields.
    ///
    /// Format:
    /// `[<kind or band>] name='..' code=N offset=N len=N [message='..'] [detail='..'] [at=file:line:col]`
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        let tag = match self.violation {
            Some(violation) => violation.kind(),
            None => self.severity.label(),
        };

        f.write_char('[')?;
        f.write_str(tag)?;
        f.write_str("] name='")?;
        write_name_truncated(self.name, f)?;
        write!(
            f,
            "' code={} offset={} len={}",
            self.code, self.offset, self.catalog_len
        )?;

        if let Some(message) = self.message {
            write!(f, " message='{}'", truncate_with_indicator(message))?;
        }

        if let Some(violation) = self.violation {
            write!(f, " detail='{}'", violation)?;
        }

        if let Some(location) = self.location {
            write!(f, " at={}", location)?;
        }

        Ok(())
    }

    /// Format into an owned string for trusted debug contexts.
    ///
    /// Only available with BOTH the `trusted_debug` feature AND debug
    /// assertions, so it cannot leak into release logging paths.
    #[cfg(all(feature = "trusted_debug", debug_assertions))]
    pub fn format_for_trusted_debug(&self) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut output);
        output
    }

    #[inline]
    pub const fn name(&self) -> &ContextName {
        self.name
    }

    #[inline]
    pub const fn code(&self) -> i64 {
        self.code
    }

    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub const fn catalog_len(&self) -> usize {
        self.catalog_len
    }

    #[inline]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    #[inline]
    pub const fn message(&self) -> Option<&str> {
        self.message
    }

    #[inline]
    pub const fn violation(&self) -> Option<&CatalogViolation> {
        self.violation
    }

    #[inline]
    pub const fn location(&self) -> Option<&'static Location<'static>> {
        self.location
    }
}

/// Chained names are capped as a whole, not per frame.
fn write_name_truncated(name: &ContextName, f: &mut impl fmt::Write) -> fmt::Result {
    f.write_str(&truncate_with_indicator(&name.joined()))
}

/// Truncate a string for display to prevent DoS via extremely long fields.
///
/// Returns a `Cow<str>` to avoid allocation when no truncation is needed.
fn truncate_with_indicator(s: &str) -> Cow<'_, str> {
    if s.len() <= MAX_FIELD_OUTPUT_LEN {
        return Cow::Borrowed(s);
    }

    let max_content_len = MAX_FIELD_OUTPUT_LEN.saturating_sub(TRUNCATION_INDICATOR.len());

    let mut idx = max_content_len;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }

    if idx == 0 {
        return Cow::Borrowed(TRUNCATION_INDICATOR);
    }

    let mut result = String::with_capacity(idx + TRUNCATION_INDICATOR.len());
    result.push_str(&s[..idx]);
    result.push_str(TRUNCATION_INDICATOR);
    Cow::Owned(result)
}
