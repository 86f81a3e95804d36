//! # Palisade Enum Errors
//!
//! Bounded, severity-classified error codes backed by a shared message catalog.
//!
//! ## Design Philosophy
//!
//! 1. **Codes select messages**: a signed code plus a fixed offset indexes a
//!    catalog frozen at construction, instead of ad-hoc strings per call site
//! 2. **Sign carries severity**: positive codes warn, negative codes error,
//!    zero asks for escalation, and codes past either catalog edge are fatal
//! 3. **Values, not mutation**: `set`, `add` and `wrap` return new values and
//!    leave the receiver untouched
//! 4. **Bounds are enforced on every derivation**, so a rendered value always
//!    points inside its catalog
//! 5. **Two failure kinds stay distinct**: a misconfigured catalog and an
//!    out-of-range code never collapse into one error
//!
//! ## Quick Start
//!
//! ```rust
//! use palisade_enum_errors::{EnumError, MessageCatalog, Severity};
//!
//! let catalog = MessageCatalog::numbered(-6, 3, "err");
//! let base = EnumError::new(6, "test", catalog);
//!
//! let err = base.set(-6);
//! assert_eq!(err.to_string(), "test error: err -6");
//! assert_eq!(err.severity(), Severity::Error);
//!
//! // Fold a sub-operation's code into the running one
//! let sub = base.set(2);
//! let total = base.set(1).add(Some(&sub), -1);
//! assert_eq!(total.code(), 2);
//!
//! // Prefix the name with outer context
//! let outer = EnumError::new(0, "load_config", ["unused"]);
//! assert_eq!(total.wrap(&outer).name(), "load_config: test");
//! ```
//!
//! ## Choosing an Escalation Policy
//!
//! ```rust
//! use palisade_enum_errors::{CatalogViolation, EnumError, Result};
//!
//! fn pick(code: i64) -> Result<EnumError> {
//!     let base = EnumError::checked_new(1, "pick", ["low", "zero", "high"])?;
//!     base.try_set(code)
//! }
//!
//! assert!(pick(1).is_ok());
//! assert!(matches!(pick(2), Err(CatalogViolation::CodeOutOfRange { .. })));
//! ```
//!
//! `EnumError::new`, `set` and `add` are the terminating counterparts: on a
//! violation they report the caller's location on stderr and exit the process
//! with a status specific to the violation kind.
//!
//! ## Features
//!
//! - `trusted_debug`: Enable `DiagnosticLog::format_for_trusted_debug` (debug builds only)

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::result;

pub mod catalog;
pub mod context;
pub mod convenience;
pub mod enumerated;
mod fatal;
pub mod logging;
pub mod severity;
pub mod violation;

pub use catalog::*;
pub use context::*;
pub use enumerated::*;
pub use logging::*;
pub use severity::*;
pub use violation::*;

/// Type alias for Results using our violation type.
pub type Result<T> = result::Result<T, CatalogViolation>;
