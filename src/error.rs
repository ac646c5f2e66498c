//! Utility module with prettypretty's errors.

/// An out-of-bounds error.
///
/// This error indicates an index value that is out of bounds for some range.
/// The ranges used by this crate include:
///
///   * `0..=5` for coordinates of [`EmbeddedRgb`](crate::termco::EmbeddedRgb);
///   * `0..=15` for index values of [`AnsiColor`](crate::termco::AnsiColor);
///   * `0..=23` for the gray levels of [`GrayGradient`](crate::termco::GrayGradient);
///   * `16..=231` for index values of [`EmbeddedRgb`](crate::termco::EmbeddedRgb);
///   * `232..=255` for index values of [`GrayGradient`](crate::termco::GrayGradient);
///   * `0..=17` for [`ThemeEntry`](crate::theme::ThemeEntry) indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: std::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new(value: impl Into<usize>, expected: std::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl std::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

// ====================================================================================================================

/// An erroneous color format.
///
/// Unlike a simple unit enum, each variant carries the offending substring or
/// index, so that callers can point at exactly what went wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A color format that does not start with a known prefix such as `#` or
    /// `rgb:`.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    UnexpectedCharacters(String),

    /// A parenthesized color format without the opening parenthesis. For
    /// example, `color display-p3 0 0 0)` is missing the opening parenthesis.
    NoOpeningParenthesis,

    /// A parenthesized color format without the closing parenthesis. For
    /// example, `oklab(1 2 3` is missing the closing parenthesis.
    NoClosingParenthesis,

    /// A color format that is using an unknown color space. For example,
    /// `color(unknown 1 1 1)` uses an unknown color space.
    UnknownColorSpace(String),

    /// A color format that is missing the coordinate with the given index.
    /// For example, `rgb:0` is missing the second and third coordinate,
    /// whereas `rgb:0//0` is missing the second coordinate only.
    MissingCoordinate(usize),

    /// A color format that has too many digits in the coordinate with the
    /// given index. For example, `rgb:12345/1/22` has too many digits in the
    /// first coordinate.
    OversizedCoordinate(usize, String),

    /// A color format that has a malformed hexadecimal number as the
    /// coordinate with the given index. For example, `#efg` has a malformed
    /// third coordinate.
    MalformedHex(usize, String),

    /// A color format that has a malformed floating point number as the
    /// coordinate with the given index. For example, `color(srgb 1.0 0..1
    /// 0.0)` has a malformed second coordinate.
    MalformedFloat(usize, String),

    /// A color format with more than three coordinates. For example,
    /// `rgb:1/2/3/4` has one coordinate too many.
    TooManyCoordinates,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ParseError::*;

        match self {
            UnknownFormat => f.write_str(
                "color format should start with `#`, `color()`, `oklab()`, `oklch()`, or `rgb:`",
            ),
            UnexpectedCharacters(s) => f.write_fmt(format_args!(
                "color format should contain only valid ASCII characters but has \"{s}\""
            )),
            NoOpeningParenthesis => {
                f.write_str("color format should include an opening parenthesis but has none")
            }
            NoClosingParenthesis => {
                f.write_str("color format should include a closing parenthesis but has none")
            }
            UnknownColorSpace(s) => f.write_fmt(format_args!(
                "color format should have a known color space but \"{s}\" is not one"
            )),
            MissingCoordinate(index) => f.write_fmt(format_args!(
                "color format should have 3 coordinates but is missing coordinate {index}"
            )),
            OversizedCoordinate(index, s) => f.write_fmt(format_args!(
                "color format coordinate {index} should have 1-4 hex digits but \"{s}\" has more"
            )),
            MalformedHex(index, s) => f.write_fmt(format_args!(
                "color format coordinate {index} should be a hexadecimal integer but \"{s}\" is not"
            )),
            MalformedFloat(index, s) => f.write_fmt(format_args!(
                "color format coordinate {index} should be a floating point number but \"{s}\" is not"
            )),
            TooManyCoordinates => {
                f.write_str("color format should have 3 coordinates but has more")
            }
        }
    }
}

impl std::error::Error for ParseError {}

// ====================================================================================================================

/// An error indicating a colorant wrapping a high-resolution color.
///
/// No standard exists for displaying high-resolution colors in terminals.
/// Hence colorants wrapping high-resolution colors cannot be displayed as
/// ANSI escape sequences.
#[derive(Clone, Copy, Debug)]
pub struct HiResColorantError;

impl std::fmt::Display for HiResColorantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("unable to format high-resolution colorant as ANSI escape sequence")
    }
}

impl std::error::Error for HiResColorantError {}

// ====================================================================================================================

/// An error indicating that a theme was built from the wrong number of
/// colors.
///
/// A [`Theme`](crate::theme::Theme) always has exactly
/// [`ThemeEntry::COUNT`](crate::theme::ThemeEntry::COUNT) entries. This error
/// reports the actual length supplied instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadThemeLength {
    pub actual: usize,
}

impl BadThemeLength {
    pub fn new(actual: usize) -> Self {
        Self { actual }
    }
}

impl std::fmt::Display for BadThemeLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "theme should have {} colors but has {}",
            crate::theme::ThemeEntry::COUNT,
            self.actual
        ))
    }
}

impl std::error::Error for BadThemeLength {}
