//! Property-based tests for palisade_enum_errors
//!
//! These tests use proptest to generate random inputs and verify invariants hold.

use palisade_enum_errors::{Bound, CatalogViolation, EnumError, MessageCatalog, Severity};
use proptest::prelude::*;

/// A catalog of `len` messages and an offset in `0..=len`.
fn geometry() -> impl Strategy<Value = (usize, usize)> {
    (1usize..40).prop_flat_map(|len| (Just(len), 0..=len))
}

fn base(len: usize, offset: usize) -> EnumError {
    EnumError::new(offset, "prop", MessageCatalog::numbered(0, len as i64 - 1, "msg"))
}

fn in_range(len: usize, offset: usize) -> std::ops::Range<i64> {
    -(offset as i64)..(len as i64 - offset as i64)
}

// ============================================================================
// ASSIGNMENT PROPERTIES
// ============================================================================

proptest! {
    /// Every in-range code round-trips through set/code
    #[test]
    fn set_then_code_returns_code(
        ((len, offset), pick) in (geometry(), any::<prop::sample::Index>())
    ) {
        let range = in_range(len, offset);
        prop_assume!(!range.is_empty());
        let code = range.start + pick.index((range.end - range.start) as usize) as i64;

        let err = base(len, offset).set(code);
        prop_assert_eq!(err.code(), code);
        prop_assert_eq!(err.index(), Some((code + offset as i64) as usize));
        prop_assert!(!err.severity().is_fatal());
    }

    /// Codes outside the catalog are rejected with the right bound
    #[test]
    fn try_set_rejects_out_of_range(
        (len, offset) in geometry(),
        beyond in 0i64..1000,
    ) {
        let err = base(len, offset);
        let range = in_range(len, offset);

        let high = range.end + beyond;
        prop_assert_eq!(
            err.try_set(high),
            Err(CatalogViolation::CodeOutOfRange { code: high, offset, len, bound: Bound::TooHigh })
        );

        let low = range.start - 1 - beyond;
        prop_assert_eq!(
            err.try_set(low),
            Err(CatalogViolation::CodeOutOfRange { code: low, offset, len, bound: Bound::TooLow })
        );
    }

    /// Construction rejects exactly the offsets past the catalog end
    #[test]
    fn checked_new_bounds(len in 0usize..40, offset in 0usize..80) {
        let result = EnumError::checked_new(offset, "prop", MessageCatalog::numbered(0, len as i64 - 1, "m"));
        if offset > len {
            prop_assert_eq!(result, Err(CatalogViolation::CatalogMisconfigured { offset, len }));
        } else {
            prop_assert!(result.is_ok());
        }
    }
}

// ============================================================================
// COMPOSITION PROPERTIES
// ============================================================================

proptest! {
    /// add(None, d) behaves exactly like set(d)
    #[test]
    fn add_absent_equals_set(
        (len, offset) in geometry(),
        start in -50i64..50,
        delta in -60i64..60,
    ) {
        let root = base(len, offset);
        let running = root.try_set(start).unwrap_or(root);
        prop_assert_eq!(running.try_add(None, delta), running.try_set(delta));
    }

    /// add(Some(other), d) equals set(self + other + d)
    #[test]
    fn add_present_sums_codes(
        (len, offset) in geometry(),
        a in -50i64..50,
        b in -50i64..50,
        delta in -60i64..60,
    ) {
        let root = base(len, offset);
        let running = root.try_set(a).unwrap_or_else(|_| root.clone());
        let other = root.try_set(b).unwrap_or_else(|_| root.clone());

        let expected = running.try_set(running.code() + other.code() + delta);
        prop_assert_eq!(running.try_add(Some(&other), delta), expected);
    }

    /// add never takes over the other value's identity
    #[test]
    fn add_keeps_own_name(
        other_name in "[a-z]{1,12}",
        delta in -3i64..4,
    ) {
        let running = EnumError::new(3, "running", MessageCatalog::numbered(-3, 3, "m"));
        let other = EnumError::new(0, other_name, MessageCatalog::from(["x"]));
        let combined = running.add(Some(&other), delta);
        prop_assert_eq!(combined.name(), "running");
        prop_assert!(combined.catalog().shares_storage_with(running.catalog()));
    }
}

// ============================================================================
// CHAINING PROPERTIES
// ============================================================================

proptest! {
    /// outer.wrap(inner) yields "inner: outer" and keeps the numeric state
    #[test]
    fn wrap_prefixes_inner_name(
        outer_name in "[a-z_]{0,16}",
        inner_name in "[a-z_]{0,16}",
        code in -2i64..3,
    ) {
        let outer = EnumError::new(2, outer_name.clone(), MessageCatalog::numbered(-2, 2, "m")).set(code);
        let inner = EnumError::new(0, inner_name.clone(), MessageCatalog::from(["x"]));

        let wrapped = outer.wrap(&inner);
        prop_assert_eq!(wrapped.name(), format!("{}: {}", inner_name, outer_name));
        prop_assert_eq!(wrapped.code(), outer.code());
        prop_assert_eq!(wrapped.message(), outer.message());
        prop_assert_eq!(wrapped.severity(), outer.severity());
    }

    /// Repeated wrapping nests by the single-application rule
    #[test]
    fn wrap_nests_consistently(names in prop::collection::vec("[a-z]{1,8}", 1..8)) {
        let mut value = EnumError::new(0, names[0].clone(), MessageCatalog::from(["x"]));
        let mut expected = names[0].clone();

        for name in &names[1..] {
            let inner = EnumError::new(0, name.clone(), MessageCatalog::from(["x"]));
            value = value.wrap(&inner);
            expected = format!("{}: {}", name, expected);
        }

        prop_assert_eq!(value.name(), expected);
        prop_assert_eq!(value.frames().count(), names.len());
    }
}

// ============================================================================
// RENDERING PROPERTIES
// ============================================================================

proptest! {
    /// Rendering is name, prefix and selected message, in that order
    #[test]
    fn rendering_layout(
        (len, offset) in geometry(),
        pick in any::<prop::sample::Index>(),
        name in "[a-z]{0,10}",
    ) {
        let range = in_range(len, offset);
        prop_assume!(!range.is_empty());
        let code = range.start + pick.index((range.end - range.start) as usize) as i64;

        let err = EnumError::new(offset, name.clone(), MessageCatalog::numbered(0, len as i64 - 1, "msg")).set(code);
        let body = format!("{}msg {}", err.severity().prefix(), code + offset as i64);
        let expected = if name.is_empty() { body } else { format!("{} {}", name, body) };
        prop_assert_eq!(err.to_string(), expected);
    }

    /// In-range codes only ever land in the three ordinary bands, by sign
    #[test]
    fn band_follows_sign(
        (len, offset) in geometry(),
        pick in any::<prop::sample::Index>(),
    ) {
        let range = in_range(len, offset);
        prop_assume!(!range.is_empty());
        let code = range.start + pick.index((range.end - range.start) as usize) as i64;

        let expected = match code.signum() {
            1 => Severity::Warning,
            -1 => Severity::Error,
            _ => Severity::NeedsEscalation,
        };
        prop_assert_eq!(Severity::classify(code, offset, len), expected);
    }

    /// Rendering never panics, even for names of arbitrary text
    #[test]
    fn rendering_never_panics(name in "\\PC{0,200}", offset in 0usize..4) {
        let err = EnumError::new(offset, name, MessageCatalog::from(["a", "b", "c"]));
        let _ = err.to_string();
        let mut buffer = String::new();
        err.diagnostic_log().write_to(&mut buffer).unwrap();
        prop_assert!(std::str::from_utf8(buffer.as_bytes()).is_ok());
    }
}
