// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Grapheme cluster aware operations for [`ZString`].
//!
//! A grapheme cluster is a user-perceived character. The actual grapheme cluster
//! parsing is done using [`unicode_segmentation::UnicodeSegmentation`]. This is far
//! more sophisticated than just using [`str::chars()`], since it handles compound
//! clusters and not just code points / Unicode scalar values — jumbo emoji like `🙏🏽`
//! are two [char]s but one cluster.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::ZString;
use crate::{TinyInlineString, ZStringError};

/// Whether a string contains any grapheme cluster wider than one display column, eg:
/// `📦` or `🙏🏽`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainsWideGraphemes {
    Yes,
    No,
}

impl ZString {
    /// Number of grapheme clusters in the content. This is the "logical length" as a
    /// user perceives it, and is usually smaller than [`Self::len`] (bytes) for
    /// non-ASCII content.
    #[must_use]
    pub fn grapheme_count(&self) -> usize { self.as_str().graphemes(true).count() }

    /// The last grapheme cluster of the content, or [None] when empty.
    #[must_use]
    pub fn last_grapheme(&self) -> Option<&str> {
        self.as_str().graphemes(true).next_back()
    }

    /// Terminal display width of the content in columns, calculated using
    /// [`unicode_width::UnicodeWidthStr`]. The display width may not be the same as
    /// either the byte size or the grapheme count.
    #[must_use]
    pub fn display_width(&self) -> usize { UnicodeWidthStr::width(self.as_str()) }

    /// Utility function to calculate the display width of any string slice.
    pub fn width(arg_str: impl AsRef<str>) -> usize {
        UnicodeWidthStr::width(arg_str.as_ref())
    }

    /// Checks if the content contains any wide grapheme clusters.
    #[must_use]
    pub fn contains_wide_graphemes(&self) -> ContainsWideGraphemes {
        if self
            .as_str()
            .graphemes(true)
            .any(|seg| UnicodeWidthStr::width(seg) > 1)
        {
            ContainsWideGraphemes::Yes
        } else {
            ContainsWideGraphemes::No
        }
    }

    /// Append exactly one user-perceived character. This is the grapheme-level
    /// counterpart of [`Self::try_push`]: it accepts compound clusters that no single
    /// [char] can represent.
    ///
    /// ```
    /// use r3bl_zstring::ZString;
    ///
    /// let mut s = ZString::try_from_str("Hi")?;
    /// s.try_push_grapheme("🙏🏽")?;
    /// assert_eq!(s.as_str(), "Hi🙏🏽");
    /// assert_eq!(s.grapheme_count(), 3);
    /// # Ok::<(), r3bl_zstring::ZStringError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ZStringError::NotSingleGrapheme`] when the input holds zero or more
    /// than one cluster, and [`ZStringError::InteriorNul`] for `"\0"` (a `NUL` is a
    /// cluster the buffer cannot represent).
    pub fn try_push_grapheme(
        &mut self,
        arg_str: impl AsRef<str>,
    ) -> Result<(), ZStringError> {
        let str = arg_str.as_ref();
        let count = str.graphemes(true).count();
        if count != 1 {
            return Err(ZStringError::NotSingleGrapheme { count });
        }
        self.try_push_str(str)
    }

    /// Remove and return the last grapheme cluster. Returns [None] when empty.
    ///
    /// Unlike [`Self::pop`], this removes the whole user-perceived character: popping
    /// `"x🙏🏽"` yields `"🙏🏽"` (both code points), not just the skin tone modifier.
    pub fn pop_grapheme(&mut self) -> Option<TinyInlineString> {
        let last = self.as_str().graphemes(true).next_back()?;
        let removed: TinyInlineString = last.into();
        let new_len = self.len() - last.len();
        self.truncate(new_len);
        Some(removed)
    }
}
