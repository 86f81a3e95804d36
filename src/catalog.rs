//! Shared message catalog.
//!
//! A catalog is the ordered list of messages an [`EnumError`](crate::EnumError)
//! can select from. It is frozen at construction: every value derived from the
//! same construction call holds the same `Arc`, so cloning a value or the
//! catalog itself never copies the messages.
//!
//! # Example
//!
//! ```rust
//! use palisade_enum_errors::{catalog, MessageCatalog};
//!
//! let io = catalog!["read failed", "ok", "short read"];
//! assert_eq!(io.len(), 3);
//! assert_eq!(io.get(2), Some("short read"));
//!
//! let numbered = MessageCatalog::numbered(-6, 3, "err");
//! assert_eq!(numbered.get(0), Some("err -6"));
//! assert_eq!(numbered.get(9), Some("err 3"));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Immutable, reference-counted sequence of messages.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MessageCatalog {
    messages: Arc<[Cow<'static, str>]>,
}

impl MessageCatalog {
    /// Build a catalog from any sequence of message strings.
    pub fn new<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            messages: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// Build the catalog `"{prefix} {low}"` .. `"{prefix} {high}"` (inclusive).
    ///
    /// Paired with an offset of `-low`, code `n` selects message `"{prefix} n"`.
    /// An empty catalog is returned when `low > high`.
    pub fn numbered(low: i64, high: i64, prefix: &str) -> Self {
        Self::new((low..=high).map(|n| format!("{prefix} {n}")))
    }

    /// Number of messages.
    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when the catalog holds no messages.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Message at a zero-based index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.messages.get(index).map(Cow::as_ref)
    }

    /// Iterate messages in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(Cow::as_ref)
    }

    /// True when both handles point at the same shared storage.
    #[inline]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.messages, &other.messages)
    }
}

impl fmt::Debug for MessageCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageCatalog")
            .field("len", &self.len())
            .finish()
    }
}

impl From<Vec<String>> for MessageCatalog {
    fn from(messages: Vec<String>) -> Self {
        Self::new(messages)
    }
}

impl From<Vec<&'static str>> for MessageCatalog {
    fn from(messages: Vec<&'static str>) -> Self {
        Self::new(messages)
    }
}

impl From<&[&'static str]> for MessageCatalog {
    fn from(messages: &[&'static str]) -> Self {
        Self::new(messages.iter().copied())
    }
}

impl<const N: usize> From<[&'static str; N]> for MessageCatalog {
    fn from(messages: [&'static str; N]) -> Self {
        Self::new(messages)
    }
}
