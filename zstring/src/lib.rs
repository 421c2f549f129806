// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words zstring smallstr smallvec

//! # `r3bl_zstring`
//!
//! A growable, owned, `NUL` terminated, `UTF-8` string value type with inline (stack)
//! storage: [`ZString`].
//!
//! Rust and C disagree about what a string is. Rust wants valid `UTF-8` with an
//! explicit length; C wants a pointer to bytes that end at the first `NUL`. Code that
//! lives on that boundary usually pays for the disagreement on every call — a copy and
//! a scan in one direction ([`std::ffi::CString::new`]), or a scan and a validation in
//! the other ([`std::ffi::CStr::to_str`]).
//!
//! [`ZString`] maintains one buffer that satisfies both sides at all times, so both
//! views are zero-cost:
//!
//! - [`ZString::as_str`] → `&str` (content, excluding the terminator)
//! - [`ZString::as_c_str`] / [`ZString::as_ptr`] → `&CStr` / `*const c_char`
//!
//! The buffer is stack allocated for small contents and spills to the heap past
//! [`DEFAULT_ZSTRING_STORAGE_SIZE`] bytes, the same storage discipline as the rest of
//! the r3bl string types (see [`mod@sizes`]).
//!
//! The price of the dual view is one rule: content may never contain an interior `NUL`
//! byte, so everything that brings content in is fallible and returns
//! [`ZStringError`]:
//!
//! ```
//! use r3bl_zstring::{ZString, ZStringError};
//!
//! let mut s = ZString::try_from_str("asd")?;
//! s.try_assign("abc")?;
//! s.try_push('x')?;
//!
//! assert_eq!(s.as_str(), "abcx");
//! assert_eq!(s.as_c_str(), c"abcx");
//! assert_eq!(ZString::try_from_str("a\0b"), Err(ZStringError::InteriorNul { pos: 1 }));
//! # Ok::<(), r3bl_zstring::ZStringError>(())
//! ```
//!
//! Appends come in two granularities, because "one character" means different things
//! at different layers:
//!
//! - [`ZString::try_push`] appends one [char] (one Unicode scalar value);
//! - [`ZString::try_push_grapheme`] appends one grapheme cluster, ie, one
//!   user-perceived character (`🙏🏽` is two [char]s but one cluster). Grapheme parsing
//!   is done with [`unicode_segmentation::UnicodeSegmentation`], display widths with
//!   [`unicode_width`].
//!
//! Equality, ordering, and hashing observe content only — never capacity or spill
//! state — and cross-type comparisons against [str], [String], and [`std::ffi::CStr`]
//! work in both directions.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it). The cfg_attr ensures test
// code within the library can also use .unwrap() freely.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod error;
pub mod sizes;
pub mod zstr;

// Re-export.
pub use error::*;
pub use sizes::*;
pub use zstr::*;
