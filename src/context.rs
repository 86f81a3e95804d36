//! Context names built up by chaining.
//!
//! A [`ContextName`] is the label attached to an enumerated error, normally
//! the name of the operation that produced it. Chaining prepends the inner
//! value's name as outer context, giving a breadcrumb such as
//! `"load: parse: read_header"`.
//!
//! Frames are stored separately rather than as one concatenated string, so the
//! breadcrumb can be walked frame by frame and chaining only copies frame
//! handles (static frames are never reallocated).
//!
//! # Security
//!
//! Owned frames are zeroized on drop, like every other piece of context in
//! this crate. [`ContextName::joined`] on a multi-frame name returns a fresh
//! `String` that is NOT zeroized; use [`ContextName::write_to`] to stream the
//! name into a sink without making that copy.
//!
//! # Example
//!
//! ```rust
//! use palisade_enum_errors::ContextName;
//!
//! let mut name = ContextName::new("read_header");
//! name.prepend(&ContextName::new("parse"));
//! name.prepend(&ContextName::new("load"));
//!
//! assert_eq!(name.joined(), "load: parse: read_header");
//! assert_eq!(name.depth(), 3);
//! ```

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;
use zeroize::Zeroize;

/// Separator written between frames.
pub const FRAME_SEPARATOR: &str = ": ";

/// Ordered breadcrumb of context frames, outermost first.
///
/// # Capacity Choice
///
/// `SmallVec<[_; 4]>`: call chains deeper than four wraps are rare, and the
/// inline buffer keeps single-frame names allocation-free.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ContextName {
    /// Never empty. A blank name is a single empty frame.
    frames: SmallVec<[Cow<'static, str>; 4]>,
}

impl ContextName {
    /// Create a single-frame name.
    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        let mut frames = SmallVec::new();
        frames.push(name.into());
        Self { frames }
    }

    /// Prepend every frame of `outer` in front of this name.
    ///
    /// Blank frames are kept, so chaining onto a blank name still inserts the
    /// separator: `"" + ": " + "op"`.
    pub fn prepend(&mut self, outer: &ContextName) {
        self.frames.insert_many(0, outer.frames.iter().cloned());
    }

    /// Number of frames.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Iterate frames from outermost to innermost.
    #[inline]
    pub fn frames(&self) -> impl Iterator<Item = &str> {
        self.frames.iter().map(Cow::as_ref)
    }

    /// True when the joined name renders as the empty string.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.len() == 1 && self.frames[0].is_empty()
    }

    /// Full name with frames joined by [`FRAME_SEPARATOR`].
    ///
    /// Borrows when there is a single frame. Otherwise pre-calculates the
    /// capacity and allocates once. The owned copy is not zeroized on drop;
    /// prefer [`write_to`](Self::write_to) for sensitive frames.
    pub fn joined(&self) -> Cow<'_, str> {
        if let [only] = self.frames.as_slice() {
            return Cow::Borrowed(only.as_ref());
        }

        let capacity = self.frames.iter().map(|f| f.len()).sum::<usize>()
            + self.frames.len().saturating_sub(1) * FRAME_SEPARATOR.len();

        let mut result = String::with_capacity(capacity);
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                result.push_str(FRAME_SEPARATOR);
            }
            result.push_str(frame);
        }
        Cow::Owned(result)
    }

    /// Write the joined name without allocating.
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                f.write_str(FRAME_SEPARATOR)?;
            }
            f.write_str(frame)?;
        }
        Ok(())
    }
}

impl fmt::Display for ContextName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl fmt::Debug for ContextName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.frames()).finish()
    }
}

impl Zeroize for ContextName {
    fn zeroize(&mut self) {
        for frame in &mut self.frames {
            // Borrowed frames live in static memory and cannot be cleared.
            if let Cow::Owned(s) = frame {
                s.zeroize();
            }
        }
    }
}

impl Drop for ContextName {
    fn drop(&mut self) {
        self.zeroize();
    }
}
