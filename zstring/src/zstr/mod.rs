// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`ZString`] value type: one owned buffer, two zero-cost views.
//!
//! Rust uses `UTF-8` to represent text in [String], and C represents text as a pointer
//! to a `NUL` terminated run of bytes. A [`ZString`] holds a single owned buffer that
//! satisfies both at once:
//!
//! ```text
//! content bytes (valid UTF-8, no NUL)          terminator
//! ┌──────────────────────────────────┐         ┌─┐
//! │ H  i  📦 ...                     │         │0│
//! └──────────────────────────────────┘         └─┘
//!  ← as_str() / as_bytes() ──────────→
//!  ← as_c_str() / as_bytes_with_nul() ─────────────→
//! ```
//!
//! The buffer is stack allocated for small contents and spills to the heap past
//! [`crate::DEFAULT_ZSTRING_STORAGE_SIZE`] bytes (terminator included).
//!
//! Holding both views imposes one rule: content may never contain an interior `NUL`
//! byte. Every operation that brings new content into the buffer is therefore fallible
//! and returns [`crate::ZStringError`] — see [`ZString::try_from_str`],
//! [`ZString::try_assign`], [`ZString::try_push`], and friends.
//!
//! Appending "one character" comes in two granularities:
//! - [`ZString::try_push`] appends one [char] (one Unicode scalar value);
//! - [`ZString::try_push_grapheme`] appends one grapheme cluster, ie, one
//!   user-perceived character. The two differ for compound clusters: `🙏🏽` is two
//!   [char]s but a single grapheme cluster.

// Attach sources.
pub mod c_interop;
pub mod compare;
pub mod convert;
pub mod graphemes;
pub mod serde_impl;
pub mod z_string;

// Re-export.
pub use graphemes::*;
pub use z_string::*;
