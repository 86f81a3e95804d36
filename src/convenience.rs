//! Convenience macros for building catalogs.
//!
//! # Usage
//!
//! ```rust
//! use palisade_enum_errors::{catalog, EnumError};
//!
//! let parse = EnumError::new(
//!     2,
//!     "parse",
//!     catalog![
//!         "unterminated string",
//!         "unexpected token",
//!         "ok",
//!         "trailing comma",
//!     ],
//! );
//!
//! assert_eq!(parse.set(-2).to_string(), "parse error: unterminated string");
//! assert_eq!(parse.set(1).to_string(), "parse warning: trailing comma");
//! ```

/// Build a [`MessageCatalog`](crate::MessageCatalog) from message expressions.
///
/// Each message may be a `&'static str`, a `String` or a `Cow<'static, str>`.
#[macro_export]
macro_rules! catalog {
    () => {
        $crate::MessageCatalog::new(::std::iter::empty::<&'static str>())
    };
    ($($message:expr),+ $(,)?) => {
        $crate::MessageCatalog::new([
            $(::std::borrow::Cow::<'static, str>::from($message)),+
        ])
    };
}
