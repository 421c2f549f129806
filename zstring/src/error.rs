// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error type for every fallible [`crate::ZString`] operation. See [`ZStringError`].

/// Errors from [`crate::ZString`] construction and mutation.
///
/// Each variant represents a distinct failure mode with a dedicated [diagnostic code]
/// and actionable help text. The three failure modes are:
///
/// | Variant               | Cause                                                        |
/// | :-------------------- | :----------------------------------------------------------- |
/// | [`InteriorNul`]       | Input content contains a `NUL` byte                          |
/// | [`InvalidUtf8`]       | C string data is not valid `UTF-8`                           |
/// | [`NotSingleGrapheme`] | Grapheme append got zero or more than one grapheme cluster   |
///
/// [`InteriorNul`]: Self::InteriorNul
/// [`InvalidUtf8`]: Self::InvalidUtf8
/// [`NotSingleGrapheme`]: Self::NotSingleGrapheme
/// [diagnostic code]: miette::Diagnostic::code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ZStringError {
    /// The input contains a `NUL` byte before the end. A `NUL` terminated buffer cannot
    /// represent interior `NUL`s, so the content is rejected rather than silently
    /// truncated.
    #[error("interior NUL byte found at byte position {pos}")]
    #[diagnostic(
        code(r3bl_zstring::interior_nul),
        help(
            "NUL terminated strings cannot contain the NUL byte. \
             Strip or replace `\\0` in the input before storing it."
        )
    )]
    InteriorNul {
        /// Byte position of the offending `NUL` in the input (for appends, relative to
        /// the appended content, not to the existing content).
        pos: usize,
    },

    /// C string data is not valid `UTF-8`.
    #[error("C string data is not valid UTF-8")]
    #[diagnostic(
        code(r3bl_zstring::invalid_utf8),
        help(
            "The bytes between the start of the C string and its terminator must be \
             valid UTF-8. Use `String::from_utf8_lossy` first if lossy conversion is \
             acceptable."
        )
    )]
    InvalidUtf8(#[source] std::str::Utf8Error),

    /// [`crate::ZString::try_push_grapheme`] expects exactly one user-perceived
    /// character.
    #[error("expected exactly one grapheme cluster, found {count}")]
    #[diagnostic(
        code(r3bl_zstring::not_single_grapheme),
        help(
            "Pass a single user-perceived character, eg: \"a\", \"é\", or \"🙏🏽\". \
             Use `try_push_str` to append longer content."
        )
    )]
    NotSingleGrapheme {
        /// How many grapheme clusters the input actually contained.
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ZStringError::InteriorNul { pos: 3 }.to_string(),
            "interior NUL byte found at byte position 3"
        );
        assert_eq!(
            ZStringError::NotSingleGrapheme { count: 2 }.to_string(),
            "expected exactly one grapheme cluster, found 2"
        );
    }
}
