// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::smallvec;

use crate::{InlineByteBuf, NUL_BYTE, ZStringError};

/// `ZString` represents an owned, growable, `NUL` terminated `UTF-8` string.
///
/// See the [module documentation](crate::zstr) for the buffer layout and the reasoning
/// behind the fallible API. The invariant maintained by every operation is:
///
/// 1. The buffer is never empty and its final byte is [`NUL_BYTE`].
/// 2. The bytes before the terminator are valid `UTF-8`.
/// 3. No byte before the terminator is [`NUL_BYTE`].
///
/// # Key Design Notes
///
/// - **Ownership**: This struct owns its string data. Content lives inline on the stack
///   until it outgrows [`crate::DEFAULT_ZSTRING_STORAGE_SIZE`] bytes (terminator
///   included), then spills to the heap.
/// - **Comparison**: Equality, ordering, and hashing observe content only — never
///   capacity or spill state. See [`mod@super::compare`].
/// - **Views**: [`Self::as_str`] and [`Self::as_c_str`] are both zero-cost; neither
///   allocates nor scans.
///
/// # Example
///
/// ```
/// use r3bl_zstring::ZString;
///
/// let mut s = ZString::try_from_str("asd")?;
/// s.try_assign("abc")?;
/// s.try_push('x')?;
///
/// assert_eq!(s.as_str(), "abcx");
/// assert_eq!(s.len(), 4);
/// assert_eq!(s.as_bytes_with_nul(), b"abcx\0");
/// # Ok::<(), r3bl_zstring::ZStringError>(())
/// ```
#[derive(Clone)]
pub struct ZString {
    /// Content bytes followed by exactly one [`NUL_BYTE`]. Private so the invariant
    /// cannot be broken from outside this module.
    buf: InlineByteBuf,
}

/// Scan `content` for a `NUL` byte. Every byte of incoming content passes through this
/// check exactly once, on the way into the buffer.
pub(crate) fn scan_for_nul(content: &str) -> Result<(), ZStringError> {
    match content.bytes().position(|byte| byte == NUL_BYTE) {
        Some(pos) => Err(ZStringError::InteriorNul { pos }),
        None => Ok(()),
    }
}

mod construct {
    use super::{InlineByteBuf, NUL_BYTE, ZString, ZStringError, scan_for_nul, smallvec};

    impl ZString {
        /// Create an empty `ZString`. The buffer holds just the terminator and lives
        /// entirely on the stack.
        #[must_use]
        pub fn new() -> ZString {
            ZString {
                buf: smallvec![NUL_BYTE],
            }
        }

        /// Create an empty `ZString` with room for `capacity` content bytes before any
        /// reallocation.
        #[must_use]
        pub fn with_capacity(capacity: usize) -> ZString {
            let mut buf = InlineByteBuf::with_capacity(capacity + 1);
            buf.push(NUL_BYTE);
            ZString { buf }
        }

        /// Constructor function that creates a [`ZString`] from a string slice,
        /// validating the no-interior-`NUL` invariant. This is the workhorse behind
        /// [`TryFrom`] and [`std::str::FromStr`].
        ///
        /// ```
        /// use r3bl_zstring::{ZString, ZStringError};
        ///
        /// let ok = ZString::try_from_str("hello");
        /// assert!(ok.is_ok());
        ///
        /// let err = ZString::try_from_str("he\0llo");
        /// assert_eq!(err.unwrap_err(), ZStringError::InteriorNul { pos: 2 });
        /// ```
        ///
        /// # Errors
        ///
        /// Returns [`ZStringError::InteriorNul`] if the input contains a `NUL` byte.
        pub fn try_from_str(arg_str: impl AsRef<str>) -> Result<ZString, ZStringError> {
            let str = arg_str.as_ref();
            scan_for_nul(str)?;
            Ok(ZString::from_validated_str(str))
        }

        /// Build directly from content already known to contain no `NUL` byte (eg: the
        /// content of a [`std::ffi::CStr`], which cannot contain one by construction).
        pub(crate) fn from_validated_str(str: &str) -> ZString {
            let mut buf = InlineByteBuf::with_capacity(str.len() + 1);
            buf.extend_from_slice(str.as_bytes());
            buf.push(NUL_BYTE);
            ZString { buf }
        }

        /// Replace the stored content in place, reusing the existing allocation where
        /// possible. On error the existing content is left untouched.
        ///
        /// ```
        /// use r3bl_zstring::ZString;
        ///
        /// let mut s = ZString::try_from_str("abc")?;
        /// s.try_assign("12312312")?;
        /// assert_eq!(s.as_str(), "12312312");
        /// # Ok::<(), r3bl_zstring::ZStringError>(())
        /// ```
        ///
        /// # Errors
        ///
        /// Returns [`ZStringError::InteriorNul`] if the input contains a `NUL` byte.
        pub fn try_assign(
            &mut self,
            arg_str: impl AsRef<str>,
        ) -> Result<(), ZStringError> {
            let str = arg_str.as_ref();
            scan_for_nul(str)?;
            self.buf.clear();
            self.buf.extend_from_slice(str.as_bytes());
            self.buf.push(NUL_BYTE);
            Ok(())
        }
    }
}

mod mutate {
    use super::{NUL_BYTE, ZString, ZStringError, scan_for_nul};

    impl ZString {
        /// Splice `bytes` (already validated: `UTF-8`, no `NUL`) in front of the
        /// terminator.
        fn splice_before_nul(&mut self, bytes: &[u8]) {
            let content_len = self.len();
            self.buf.truncate(content_len);
            self.buf.extend_from_slice(bytes);
            self.buf.push(NUL_BYTE);
        }

        /// Append one [char], preserving prior content and keeping the terminator after
        /// the new character. A [char] encodes to 1 to 4 bytes of `UTF-8`.
        ///
        /// ```
        /// use r3bl_zstring::ZString;
        ///
        /// let mut s = ZString::try_from_str("abc")?;
        /// s.try_push('x')?;
        /// s.try_push('📦')?;
        /// assert_eq!(s.as_str(), "abcx📦");
        /// # Ok::<(), r3bl_zstring::ZStringError>(())
        /// ```
        ///
        /// # Errors
        ///
        /// Returns [`ZStringError::InteriorNul`] for `'\0'`, which the buffer cannot
        /// represent.
        pub fn try_push(&mut self, character: char) -> Result<(), ZStringError> {
            if character == '\0' {
                return Err(ZStringError::InteriorNul { pos: 0 });
            }
            let mut utf8_buf = [0u8; 4];
            let encoded = character.encode_utf8(&mut utf8_buf);
            self.splice_before_nul(encoded.as_bytes());
            Ok(())
        }

        /// Append a whole string slice.
        ///
        /// # Errors
        ///
        /// Returns [`ZStringError::InteriorNul`] if the input contains a `NUL` byte
        /// (position relative to the appended content). Nothing is appended on error.
        pub fn try_push_str(
            &mut self,
            arg_str: impl AsRef<str>,
        ) -> Result<(), ZStringError> {
            let str = arg_str.as_ref();
            scan_for_nul(str)?;
            self.splice_before_nul(str.as_bytes());
            Ok(())
        }

        /// Remove and return the last [char]. Returns [None] when empty.
        ///
        /// Note that for compound grapheme clusters this removes only the final scalar
        /// value; use [`Self::pop_grapheme`] to remove a whole user-perceived character.
        pub fn pop(&mut self) -> Option<char> {
            let last = self.as_str().chars().next_back()?;
            let new_len = self.len() - last.len_utf8();
            self.buf.truncate(new_len);
            self.buf.push(NUL_BYTE);
            Some(last)
        }

        /// Empty the content. Keeps the allocation (inline or spilled) for reuse.
        pub fn clear(&mut self) {
            self.buf.clear();
            self.buf.push(NUL_BYTE);
        }

        /// Shorten the content to `new_len` bytes. No-op when `new_len >= len()`.
        ///
        /// # Panics
        ///
        /// Panics if `new_len` does not lie on a [char] boundary, matching
        /// [`String::truncate`] semantics.
        pub fn truncate(&mut self, new_len: usize) {
            if new_len >= self.len() {
                return;
            }
            assert!(
                self.as_str().is_char_boundary(new_len),
                "truncate: new_len {new_len} is not a char boundary"
            );
            self.buf.truncate(new_len);
            self.buf.push(NUL_BYTE);
        }
    }
}

mod access {
    use super::{NUL_BYTE, ZString};

    impl ZString {
        /// Length of the content in bytes, excluding the terminator.
        #[must_use]
        pub fn len(&self) -> usize {
            debug_assert!(!self.buf.is_empty());
            debug_assert_eq!(self.buf.last(), Some(&NUL_BYTE));
            self.buf.len() - 1
        }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.len() == 0 }

        /// Read-only view of the content, excluding the terminator. Zero-cost.
        #[must_use]
        pub fn as_str(&self) -> &str {
            // SAFETY: invariant (2) — the bytes before the terminator are valid UTF-8.
            // Every byte enters the buffer either from a `&str` or a checked `CStr`.
            unsafe { std::str::from_utf8_unchecked(self.as_bytes()) }
        }

        /// Content bytes, without the terminator.
        #[must_use]
        pub fn as_bytes(&self) -> &[u8] { &self.buf[..self.buf.len() - 1] }

        /// The full buffer, terminator included. The last byte is always
        /// [`crate::NUL_BYTE`].
        #[must_use]
        pub fn as_bytes_with_nul(&self) -> &[u8] { &self.buf }

        /// Move the buffer out as a [Vec], terminator included.
        #[must_use]
        pub fn into_bytes_with_nul(self) -> Vec<u8> { self.buf.into_vec() }
    }
}

mod capacity {
    use super::ZString;

    impl ZString {
        /// How many content bytes fit before the next reallocation (the terminator's
        /// slot is accounted for internally).
        #[must_use]
        pub fn capacity(&self) -> usize { self.buf.capacity() - 1 }

        /// Reserve room for at least `additional` more content bytes.
        pub fn reserve(&mut self, additional: usize) { self.buf.reserve(additional); }

        /// Shrink the buffer to exactly fit content plus terminator. If the shrunken
        /// size fits inline, the data moves back onto the stack.
        pub fn shrink_to_fit(&mut self) { self.buf.shrink_to_fit(); }

        /// Whether the buffer has spilled onto the heap.
        #[must_use]
        pub fn spilled(&self) -> bool { self.buf.spilled() }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::DEFAULT_ZSTRING_STORAGE_SIZE;

    #[test]
    fn test_new_is_empty() {
        let s = ZString::new();
        assert_eq!(s.as_str(), "");
        assert_eq!(s.len(), 0);
        assert!(s.is_empty());
        assert_eq!(s.as_bytes_with_nul(), &[NUL_BYTE]);
        assert!(!s.spilled());
    }

    #[test]
    fn test_construct_from_literal() {
        let s = ZString::try_from_str("asd").unwrap();
        assert_eq!(s.as_str(), "asd");
        assert_eq!(s.len(), 3);
        assert_eq!(s.as_bytes(), b"asd");
        assert_eq!(s.as_bytes_with_nul(), b"asd\0");
    }

    #[test]
    fn test_construct_rejects_interior_nul() {
        let test_cases = [
            ("\0", 0),
            ("a\0", 1),
            ("a\0b", 1),
            ("abc\0", 3),
        ];
        for (input, exp_pos) in test_cases {
            let result = ZString::try_from_str(input);
            assert_eq!(result.unwrap_err(), ZStringError::InteriorNul { pos: exp_pos });
        }
    }

    #[test]
    fn test_assign_replaces_content() {
        let mut s = ZString::try_from_str("asd").unwrap();

        s.try_assign("abc").unwrap();
        assert_eq!(s.as_str(), "abc");

        s.try_assign("12312312").unwrap();
        assert_eq!(s.as_str(), "12312312");
    }

    #[test]
    fn test_assign_shorter_longer_empty() {
        let mut s = ZString::try_from_str("longer content").unwrap();

        s.try_assign("ab").unwrap();
        assert_eq!(s.as_str(), "ab");
        assert_eq!(s.as_bytes_with_nul(), b"ab\0");

        s.try_assign("now much longer than before").unwrap();
        assert_eq!(s.as_str(), "now much longer than before");

        s.try_assign("").unwrap();
        assert_eq!(s.as_str(), "");
        assert_eq!(s.as_bytes_with_nul(), &[NUL_BYTE]);
    }

    #[test]
    fn test_assign_failure_leaves_content_untouched() {
        let mut s = ZString::try_from_str("keep me").unwrap();
        let result = s.try_assign("bad\0input");
        assert!(result.is_err());
        assert_eq!(s.as_str(), "keep me");
    }

    #[test]
    fn test_push_appends_single_char() {
        let mut s = ZString::try_from_str("abc").unwrap();
        s.try_push('x').unwrap();
        assert_eq!(s.as_str(), "abcx");
        assert_eq!(s.as_bytes_with_nul(), b"abcx\0");
    }

    #[test]
    fn test_push_multi_byte_chars() {
        let mut s = ZString::new();
        s.try_push('é').unwrap(); /* 2 bytes */
        s.try_push('∞').unwrap(); /* 3 bytes */
        s.try_push('📦').unwrap(); /* 4 bytes */
        assert_eq!(s.as_str(), "é∞📦");
        assert_eq!(s.len(), 2 + 3 + 4);
    }

    #[test]
    fn test_push_rejects_nul_char() {
        let mut s = ZString::try_from_str("abc").unwrap();
        let result = s.try_push('\0');
        assert_eq!(result.unwrap_err(), ZStringError::InteriorNul { pos: 0 });
        assert_eq!(s.as_str(), "abc");
    }

    #[test]
    fn test_push_str() {
        let mut s = ZString::try_from_str("Hi").unwrap();
        s.try_push_str("📦Bye").unwrap();
        assert_eq!(s.as_str(), "Hi📦Bye");

        let result = s.try_push_str("x\0y");
        assert_eq!(result.unwrap_err(), ZStringError::InteriorNul { pos: 1 });
        assert_eq!(s.as_str(), "Hi📦Bye");
    }

    #[test]
    fn test_pop() {
        let mut s = ZString::try_from_str("ab📦").unwrap();
        assert_eq!(s.pop(), Some('📦'));
        assert_eq!(s.pop(), Some('b'));
        assert_eq!(s.pop(), Some('a'));
        assert_eq!(s.pop(), None);
        assert_eq!(s.as_bytes_with_nul(), &[NUL_BYTE]);
    }

    #[test]
    fn test_clear_keeps_allocation() {
        let mut s = ZString::try_from_str("some content here, long enough to spill")
            .unwrap();
        assert!(s.spilled());
        let cap_before = s.capacity();
        s.clear();
        assert_eq!(s.as_str(), "");
        assert_eq!(s.capacity(), cap_before);
    }

    #[test]
    fn test_truncate() {
        let mut s = ZString::try_from_str("hello").unwrap();

        s.truncate(10); /* no-op past the end */
        assert_eq!(s.as_str(), "hello");

        s.truncate(2);
        assert_eq!(s.as_str(), "he");
        assert_eq!(s.as_bytes_with_nul(), b"he\0");

        s.truncate(0);
        assert_eq!(s.as_str(), "");
    }

    #[test]
    #[should_panic(expected = "not a char boundary")]
    fn test_truncate_panics_inside_char() {
        let mut s = ZString::try_from_str("📦").unwrap();
        s.truncate(2); /* inside the 4 byte emoji */
    }

    #[test]
    fn test_inline_until_storage_size_then_spill() {
        /* content + terminator fit the inline buffer exactly */
        let at_limit = "a".repeat(DEFAULT_ZSTRING_STORAGE_SIZE - 1);
        let s = ZString::try_from_str(&at_limit).unwrap();
        assert!(!s.spilled());

        /* one more byte of content forces the spill */
        let mut s = s;
        s.try_push('b').unwrap();
        assert!(s.spilled());
        assert_eq!(s.len(), DEFAULT_ZSTRING_STORAGE_SIZE);
    }

    #[test]
    fn test_shrink_to_fit_returns_inline() {
        let mut s = ZString::try_from_str("this content is long enough to spill")
            .unwrap();
        assert!(s.spilled());
        s.try_assign("tiny").unwrap();
        s.shrink_to_fit();
        assert!(!s.spilled());
        assert_eq!(s.as_str(), "tiny");
    }

    #[test]
    fn test_with_capacity_no_realloc_observable() {
        let mut s = ZString::with_capacity(64);
        assert!(s.capacity() >= 64);
        s.try_push_str("fits without growing").unwrap();
        assert_eq!(s.as_str(), "fits without growing");
    }

    #[test]
    fn test_reserve() {
        let mut s = ZString::new();
        s.reserve(100);
        assert!(s.capacity() >= 100);
    }

    #[test]
    fn test_into_bytes_with_nul() {
        let s = ZString::try_from_str("abc").unwrap();
        assert_eq!(s.into_bytes_with_nul(), b"abc\0".to_vec());
    }
}
