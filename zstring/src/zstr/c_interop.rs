// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The C string face of [`ZString`]. Because the terminator is always materialized at
//! the end of the buffer, handing the content to C is free: no copy, no scan, no
//! allocation. Coming back the other way ([`std::ffi::CStr`] → [`ZString`]) only has to
//! validate `UTF-8` — a `CStr` cannot contain an interior `NUL` by construction.

use std::ffi::{CStr, CString, c_char};

use super::ZString;
use crate::ZStringError;

impl ZString {
    /// View the full buffer as a borrowed C string. Zero-cost.
    ///
    /// ```
    /// use r3bl_zstring::ZString;
    ///
    /// let s = ZString::try_from_str("abc")?;
    /// assert_eq!(s.as_c_str(), c"abc");
    /// # Ok::<(), r3bl_zstring::ZStringError>(())
    /// ```
    #[must_use]
    pub fn as_c_str(&self) -> &CStr {
        // SAFETY: invariant (1) and (3) — exactly one NUL, at the end of the buffer.
        unsafe { CStr::from_bytes_with_nul_unchecked(self.as_bytes_with_nul()) }
    }

    /// Raw pointer to the `NUL` terminated buffer, for FFI calls. Valid only while
    /// `self` is alive and unmodified.
    #[must_use]
    pub fn as_ptr(&self) -> *const c_char { self.as_c_str().as_ptr() }

    /// Constructor function that creates a [`ZString`] by copying the content of a
    /// borrowed C string.
    ///
    /// # Errors
    ///
    /// Returns [`ZStringError::InvalidUtf8`] if the C data is not valid `UTF-8`.
    pub fn try_from_c_str(c_str: &CStr) -> Result<ZString, ZStringError> {
        let str = c_str.to_str().map_err(ZStringError::InvalidUtf8)?;
        Ok(ZString::from_validated_str(str))
    }
}

impl TryFrom<&CStr> for ZString {
    type Error = ZStringError;

    fn try_from(value: &CStr) -> Result<Self, Self::Error> {
        ZString::try_from_c_str(value)
    }
}

impl TryFrom<CString> for ZString {
    type Error = ZStringError;

    fn try_from(value: CString) -> Result<Self, Self::Error> {
        ZString::try_from_c_str(value.as_c_str())
    }
}

/// Moves the buffer out without copying or re-scanning. Infallible by invariant.
impl From<ZString> for CString {
    fn from(value: ZString) -> Self {
        // SAFETY: invariant — valid UTF-8 content (hence no interior NUL) followed by
        // exactly one NUL.
        unsafe { CString::from_vec_with_nul_unchecked(value.into_bytes_with_nul()) }
    }
}

impl AsRef<CStr> for ZString {
    fn as_ref(&self) -> &CStr { self.as_c_str() }
}
