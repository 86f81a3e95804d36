//! The enumerated error value.
//!
//! An [`EnumError`] is a signed code that selects a message from a shared
//! [`MessageCatalog`]. The code is shifted by a fixed offset into the
//! catalog's zero-based index space, so negative codes can address the low
//! end of the catalog. The sign and the distance to the catalog edges decide
//! the [`Severity`] band used when rendering.
//!
//! # Algebra
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | [`set`](EnumError::set) | replace the code |
//! | [`add`](EnumError::add) | fold another value's code plus a delta into this one |
//! | [`wrap`](EnumError::wrap) | prepend another value's name as outer context |
//!
//! `add` composes severity, `wrap` composes naming. Neither touches what the
//! other changes.
//!
//! Every operation borrows the receiver and returns a new value. Values
//! derived from one construction call share the catalog storage.
//!
//! # Fallible and terminating variants
//!
//! `checked_new`, `try_set` and `try_add` return [`CatalogViolation`].
//! `new`, `set` and `add` terminate the process on violation, reporting the
//! caller's location on stderr and exiting with
//! [`CatalogViolation::exit_status`].
//!
//! # Example
//!
//! ```rust
//! use palisade_enum_errors::{EnumError, MessageCatalog};
//!
//! let base = EnumError::new(6, "test", MessageCatalog::numbered(-6, 3, "err"));
//!
//! assert_eq!(base.set(-6).to_string(), "test error: err -6");
//! assert_eq!(base.set(0).to_string(), "test please contact package administration: err 0");
//! assert_eq!(base.set(3).to_string(), "test warning: err 3");
//! ```

use crate::fatal;
use crate::severity::clamp_to_i64;
use crate::{Bound, CatalogViolation, ContextName, DiagnosticLog, MessageCatalog, Result, Severity};
use std::borrow::Cow;
use std::fmt::{self, Write};
use std::panic::Location;

/// Rendered in place of a message when the index falls outside the catalog.
const NO_MESSAGE: &str = "<no message>";

/// Bounded, severity-classified error code backed by a shared message catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "enumerated errors are values; operations return a new one"]
pub struct EnumError {
    code: i64,
    offset: usize,
    name: ContextName,
    catalog: MessageCatalog,
}

impl EnumError {
    /// Create a value with code 0.
    ///
    /// # Errors
    ///
    /// [`CatalogViolation::CatalogMisconfigured`] if `offset > catalog.len()`.
    pub fn checked_new(
        offset: usize,
        name: impl Into<Cow<'static, str>>,
        catalog: impl Into<MessageCatalog>,
    ) -> Result<Self> {
        let catalog = catalog.into();
        if offset > catalog.len() {
            return Err(CatalogViolation::CatalogMisconfigured {
                offset,
                len: catalog.len(),
            });
        }

        Ok(Self {
            code: 0,
            offset,
            name: ContextName::new(name),
            catalog,
        })
    }

    /// Create a value with code 0, terminating the process if
    /// `offset > catalog.len()`.
    ///
    /// A misconfigured catalog is an integration mistake, not a runtime
    /// condition. Use [`checked_new`](Self::checked_new) for catalogs that
    /// come from configuration.
    #[track_caller]
    pub fn new(
        offset: usize,
        name: impl Into<Cow<'static, str>>,
        catalog: impl Into<MessageCatalog>,
    ) -> Self {
        let location = Location::caller();
        let name = ContextName::new(name);
        let catalog = catalog.into();

        if offset > catalog.len() {
            let violation = CatalogViolation::CatalogMisconfigured {
                offset,
                len: catalog.len(),
            };
            fatal::terminate(&violation, &name, 0, offset, catalog.len(), location);
        }

        Self {
            code: 0,
            offset,
            name,
            catalog,
        }
    }

    /// Return a copy with `code` selected.
    ///
    /// # Errors
    ///
    /// [`CatalogViolation::CodeOutOfRange`] unless
    /// `-offset <= code < len - offset`.
    pub fn try_set(&self, code: i64) -> Result<Self> {
        self.check(code)?;
        Ok(self.with_code(code))
    }

    /// Return a copy with `code` selected, terminating the process if the
    /// code falls outside the catalog.
    #[track_caller]
    pub fn set(&self, code: i64) -> Self {
        let location = Location::caller();
        self.try_set(code)
            .unwrap_or_else(|violation| self.die(&violation, code, location))
    }

    /// Combine another value's code and a delta into this one.
    ///
    /// With `other` absent this is [`try_set(delta)`](Self::try_set).
    /// Otherwise the new code is `self.code + other.code + delta`. Only the
    /// numeric codes combine; `other`'s name and catalog are ignored.
    ///
    /// # Errors
    ///
    /// [`CatalogViolation::CodeOutOfRange`] if the combined code is out of
    /// bounds. Sums that overflow `i64` saturate and are rejected the same way.
    pub fn try_add(&self, other: Option<&EnumError>, delta: i64) -> Result<Self> {
        let code = self.combined(other, delta);
        self.check(code)?;
        Ok(self.with_code(code))
    }

    /// Terminating counterpart of [`try_add`](Self::try_add).
    #[track_caller]
    pub fn add(&self, other: Option<&EnumError>, delta: i64) -> Self {
        let location = Location::caller();
        self.try_add(other, delta).unwrap_or_else(|violation| {
            self.die(&violation, self.combined(other, delta), location)
        })
    }

    /// Return a copy whose name is `inner.name + ": " + self.name`.
    ///
    /// Code, offset and catalog are unchanged. Never fails.
    pub fn wrap(&self, inner: &EnumError) -> Self {
        let mut wrapped = self.clone();
        wrapped.name.prepend(&inner.name);
        wrapped
    }

    /// Current code.
    #[inline]
    pub const fn code(&self) -> i64 {
        self.code
    }

    /// Offset shifting codes into catalog indices.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Full context name, frames joined by `": "`.
    #[inline]
    pub fn name(&self) -> Cow<'_, str> {
        self.name.joined()
    }

    /// Structured context name.
    #[inline]
    pub const fn context_name(&self) -> &ContextName {
        &self.name
    }

    /// Name frames from outermost to innermost.
    #[inline]
    pub fn frames(&self) -> impl Iterator<Item = &str> {
        self.name.frames()
    }

    /// Shared message catalog.
    #[inline]
    pub const fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Severity band of the current code.
    #[inline]
    pub fn severity(&self) -> Severity {
        Severity::classify(self.code, self.offset, self.catalog.len())
    }

    /// Catalog index selected by the current code, if it is inside the catalog.
    pub fn index(&self) -> Option<usize> {
        let index = self.code.checked_add(clamp_to_i64(self.offset))?;
        usize::try_from(index)
            .ok()
            .filter(|&index| index < self.catalog.len())
    }

    /// Catalog message selected by the current code.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.index().and_then(|index| self.catalog.get(index))
    }

    /// Borrowed structured view for logging pipelines.
    pub fn diagnostic_log(&self) -> DiagnosticLog<'_> {
        DiagnosticLog {
            name: &self.name,
            code: self.code,
            offset: self.offset,
            catalog_len: self.catalog.len(),
            severity: self.severity(),
            message: self.message(),
            violation: None,
            location: None,
        }
    }

    fn with_code(&self, code: i64) -> Self {
        let mut value = self.clone();
        value.code = code;
        value
    }

    #[inline]
    fn combined(&self, other: Option<&EnumError>, delta: i64) -> i64 {
        match other {
            None => delta,
            Some(other) => self.code.saturating_add(other.code()).saturating_add(delta),
        }
    }

    /// Valid iff `-offset <= code < len - offset`.
    fn check(&self, code: i64) -> Result<()> {
        let offset = clamp_to_i64(self.offset);
        let len = clamp_to_i64(self.catalog.len());

        let bound = if code < -offset {
            Bound::TooLow
        } else if code >= len - offset {
            Bound::TooHigh
        } else {
            return Ok(());
        };

        Err(CatalogViolation::CodeOutOfRange {
            code,
            offset: self.offset,
            len: self.catalog.len(),
            bound,
        })
    }

    fn die(
        &self,
        violation: &CatalogViolation,
        code: i64,
        location: &'static Location<'static>,
    ) -> ! {
        fatal::terminate(
            violation,
            &self.name,
            code,
            self.offset,
            self.catalog.len(),
            location,
        )
    }
}

impl fmt::Display for EnumError {
    /// `"<name> <severity prefix><message>"`, name and space omitted when blank.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.name.is_empty() {
            self.name.write_to(f)?;
            f.write_char(' ')?;
        }
        f.write_str(self.severity().prefix())?;
        f.write_str(self.message().unwrap_or(NO_MESSAGE))
    }
}

impl std::error::Error for EnumError {}
