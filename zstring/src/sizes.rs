// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Be very careful when adjusting these tuning parameters. The rule of thumb is that
//! smaller static allocation sizes are better than larger. There is a tradeoff between
//! pre-allocating large amounts of memory and allocating small amounts (on the heap) as
//! you need it. Huge stack allocations can also cause stack overflow errors.

use smallstr::SmallString;
use smallvec::SmallVec;

/// Inline capacity of the [`ZString`] backing buffer in bytes, terminator included. A
/// [`ZString`] whose content plus terminator fits in this many bytes lives entirely on
/// the stack; anything larger is [`smallvec::SmallVec::spilled`] onto the heap.
///
/// [`ZString`]: crate::ZString
pub const DEFAULT_ZSTRING_STORAGE_SIZE: usize = 16;

/// Backing store for [`crate::ZString`]. This is a raw byte buffer (not a
/// [`smallstr::SmallString`]) since it carries the trailing [`NUL_BYTE`] in addition to
/// the `UTF-8` content.
pub type InlineByteBuf = SmallVec<[u8; DEFAULT_ZSTRING_STORAGE_SIZE]>;

/// Stack allocated tiny string storage for a single grapheme cluster. Most clusters fit
/// in 4 bytes; jumbo emoji (eg: `👨🏾‍🤝‍👨🏿`) will be [`smallvec::SmallVec::spilled`] on the
/// heap.
pub type TinyInlineString = SmallString<[u8; DEFAULT_GRAPHEME_STORAGE_SIZE]>;
pub const DEFAULT_GRAPHEME_STORAGE_SIZE: usize = 4;

/// The C string terminator byte. This never appears in [`crate::ZString`] content.
pub const NUL_BYTE: u8 = 0;
