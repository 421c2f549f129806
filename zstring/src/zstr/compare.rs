// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Equality, ordering, and hashing for [`ZString`]. All of these observe content only —
//! capacity and spill state never participate, so two strings with equal content
//! compare (and hash) equal even when one is inline and the other has spilled.

use std::{borrow::Borrow,
          cmp::Ordering,
          ffi::CStr,
          hash::{Hash, Hasher}};

use super::ZString;

impl PartialEq for ZString {
    fn eq(&self, other: &Self) -> bool { self.as_str() == other.as_str() }
}

impl Eq for ZString {}

impl PartialOrd for ZString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

/// Byte-lexicographic on content, consistent with [str] ordering.
impl Ord for ZString {
    fn cmp(&self, other: &Self) -> Ordering { self.as_str().cmp(other.as_str()) }
}

/// Hashes exactly the bytes of [`ZString::as_str`]. Together with [`Borrow<str>`] this
/// lets a `HashMap<ZString, V>` be queried with a plain `&str` key.
impl Hash for ZString {
    fn hash<H: Hasher>(&self, state: &mut H) { self.as_str().hash(state); }
}

impl Borrow<str> for ZString {
    fn borrow(&self) -> &str { self.as_str() }
}

mod cross_type_eq {
    use super::{CStr, ZString};

    impl PartialEq<str> for ZString {
        fn eq(&self, other: &str) -> bool { self.as_str() == other }
    }

    impl PartialEq<&str> for ZString {
        fn eq(&self, other: &&str) -> bool { self.as_str() == *other }
    }

    impl PartialEq<String> for ZString {
        fn eq(&self, other: &String) -> bool { self.as_str() == other.as_str() }
    }

    impl PartialEq<&CStr> for ZString {
        fn eq(&self, other: &&CStr) -> bool { self.as_c_str() == *other }
    }

    impl PartialEq<ZString> for str {
        fn eq(&self, other: &ZString) -> bool { self == other.as_str() }
    }

    impl PartialEq<ZString> for &str {
        fn eq(&self, other: &ZString) -> bool { *self == other.as_str() }
    }

    impl PartialEq<ZString> for String {
        fn eq(&self, other: &ZString) -> bool { self.as_str() == other.as_str() }
    }

    impl PartialEq<ZString> for &CStr {
        fn eq(&self, other: &ZString) -> bool { *self == other.as_c_str() }
    }
}
