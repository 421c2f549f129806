// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Conversions and std trait impls for [`ZString`]. Construction from string data is
//! fallible (the no-interior-`NUL` invariant must be checked), so the ladder here is
//! [`TryFrom`] and [`std::str::FromStr`] rather than [From].

use std::{fmt::{Debug, Display},
          ops::Deref,
          str::FromStr};

use super::ZString;
use crate::ZStringError;

impl Default for ZString {
    fn default() -> Self { ZString::new() }
}

impl Display for ZString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compact debug output for [`ZString`]. The derived implementation would dump the raw
/// byte buffer, which is noisy and hides the content.
impl Debug for ZString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ZString {{ str: {:?} ┆ bytes: {} ┆ spilled: {} }}",
            self.as_str(),
            self.len(),
            self.spilled(),
        )
    }
}

/// Derefs to the content [str]. This gives `ZString` the whole read-only [str] surface
/// (`starts_with`, `contains`, `chars`, ...) for free.
impl Deref for ZString {
    type Target = str;

    fn deref(&self) -> &Self::Target { self.as_str() }
}

impl AsRef<str> for ZString {
    fn as_ref(&self) -> &str { self.as_str() }
}

/// Content bytes, without the terminator. Use [`ZString::as_bytes_with_nul`] when the
/// terminator matters.
impl AsRef<[u8]> for ZString {
    fn as_ref(&self) -> &[u8] { self.as_bytes() }
}

mod fallible_from {
    use super::{FromStr, ZString, ZStringError};

    impl TryFrom<&str> for ZString {
        type Error = ZStringError;

        fn try_from(value: &str) -> Result<Self, Self::Error> {
            ZString::try_from_str(value)
        }
    }

    impl TryFrom<String> for ZString {
        type Error = ZStringError;

        fn try_from(value: String) -> Result<Self, Self::Error> {
            ZString::try_from_str(&value)
        }
    }

    impl FromStr for ZString {
        type Err = ZStringError;

        fn from_str(s: &str) -> Result<Self, Self::Err> { ZString::try_from_str(s) }
    }
}

impl From<ZString> for String {
    fn from(value: ZString) -> Self {
        let mut bytes = value.into_bytes_with_nul();
        bytes.pop(); /* drop the terminator */
        // SAFETY: invariant — the bytes before the terminator are valid UTF-8.
        unsafe { String::from_utf8_unchecked(bytes) }
    }
}
