//! Terminate-on-violation policy.
//!
//! The terminating constructors and operations (`EnumError::new`, `set`,
//! `add`) treat a bounds violation as a programming mistake in the caller:
//! the violation is reported on stderr with the offending call site and the
//! process exits with the violation's status code. Nothing unwinds, so the
//! failure cannot be caught by `catch_unwind`.
//!
//! Use the fallible API (`checked_new`, `try_set`, `try_add`) to choose a
//! different escalation policy.

use crate::{CatalogViolation, ContextName, DiagnosticLog, Severity};
use std::io::{self, Write};
use std::panic::Location;
use std::process;

/// Report a violation on stderr and exit with its status.
///
/// `name`, `code`, `offset` and `catalog_len` describe the value the
/// violation was raised against.
#[cold]
#[inline(never)]
pub(crate) fn terminate(
    violation: &CatalogViolation,
    name: &ContextName,
    code: i64,
    offset: usize,
    catalog_len: usize,
    location: &'static Location<'static>,
) -> ! {
    let log = DiagnosticLog {
        name,
        code,
        offset,
        catalog_len,
        severity: Severity::classify(code, offset, catalog_len),
        message: None,
        violation: Some(violation),
        location: Some(location),
    };

    report(&log);
    process::exit(violation.exit_status())
}

/// Best effort: a closed stderr must not stop the exit.
fn report(log: &DiagnosticLog<'_>) {
    let mut line = String::with_capacity(256);
    if log.write_to(&mut line).is_err() {
        return;
    }

    let stderr = io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(handle, "palisade_enum_errors: fatal: {}", line);
    let _ = handle.flush();
}
