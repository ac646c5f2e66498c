//! Utility module implementing terminal color themes.
use crate::error::{BadThemeLength, OutOfBoundsError};
use crate::style::Layer;
use crate::termco::AnsiColor;
use crate::{rgb, Color};

/// A color theme.
///
/// A color theme is a container with [`ThemeEntry::COUNT`] colors, one each
/// for the default foreground and background colors followed by the 16 ANSI
/// colors (in that order). The public interface is a compromise between struct and
/// array, a straurray if you will, to make the primary use case, processing the
/// colors in a theme, safer than when using numeric indices. Hence, you index a
/// color theme with semantic values, i.e., [`ThemeEntry`], [`Layer`], or
/// [`AnsiColor`]. At the same time, you can still access the underlying array
/// storage through [`AsRef<[Color]> for
/// Theme`](struct.Theme.html#impl-AsRef%3C%5BColor%5D%3E-for-Theme), albeit
/// read-only.
#[derive(Clone, PartialEq, Eq)]
pub struct Theme {
    inner: [Color; ThemeEntry::COUNT],
}

impl Theme {
    /// Create a new color theme with [`ThemeEntry::COUNT`] times the default color.
    pub fn new() -> Self {
        Self {
            inner: <[Color; ThemeEntry::COUNT]>::default(),
        }
    }

    /// Create a new color theme with the given colors.
    pub const fn with_array(colors: [Color; ThemeEntry::COUNT]) -> Self {
        Self { inner: colors }
    }

    /// Create a new color theme with the given colors.
    ///
    /// The given slice must have length [`ThemeEntry::COUNT`]. Otherwise, this
    /// method returns [`BadThemeLength`].
    pub fn with_slice(colors: &[Color]) -> Result<Self, BadThemeLength> {
        if colors.len() != ThemeEntry::COUNT {
            Err(BadThemeLength::new(colors.len()))
        } else {
            let mut inner = <[Color; ThemeEntry::COUNT]>::default();
            inner.clone_from_slice(colors);
            Ok(Self { inner })
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[Color]> for Theme {
    fn as_ref(&self) -> &[Color] {
        &self.inner
    }
}

impl std::ops::Index<ThemeEntry> for Theme {
    type Output = Color;

    fn index(&self, index: ThemeEntry) -> &Self::Output {
        match index {
            ThemeEntry::DefaultForeground() => &self.inner[0],
            ThemeEntry::DefaultBackground() => &self.inner[1],
            ThemeEntry::Ansi(color) => &self.inner[u8::from(color) as usize + 2],
        }
    }
}

impl std::ops::IndexMut<ThemeEntry> for Theme {
    fn index_mut(&mut self, index: ThemeEntry) -> &mut Self::Output {
        match index {
            ThemeEntry::DefaultForeground() => &mut self.inner[0],
            ThemeEntry::DefaultBackground() => &mut self.inner[1],
            ThemeEntry::Ansi(color) => &mut self.inner[u8::from(color) as usize + 2],
        }
    }
}

impl std::ops::Index<AnsiColor> for Theme {
    type Output = Color;

    fn index(&self, index: AnsiColor) -> &Self::Output {
        &self.inner[u8::from(index) as usize + 2]
    }
}

impl std::ops::IndexMut<AnsiColor> for Theme {
    fn index_mut(&mut self, index: AnsiColor) -> &mut Self::Output {
        &mut self.inner[u8::from(index) as usize + 2]
    }
}

impl std::ops::Index<Layer> for Theme {
    type Output = Color;

    fn index(&self, index: Layer) -> &Self::Output {
        match index {
            Layer::Foreground => &self.inner[0],
            Layer::Background => &self.inner[1],
        }
    }
}

impl std::fmt::Debug for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debugger = f.debug_struct("Theme");
        for entry in ThemeEntry::all() {
            debugger.field(&entry.name().replace(" ", "_"), &self[entry]);
        }
        debugger.finish()
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color theme entry.
///
/// This enumeration combines a variant wrapping an [`AnsiColor`] with two more
/// variants for the default foreground and background colors to identify the
/// [`ThemeEntry::COUNT`] entries of a color theme.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeEntry {
    Ansi(AnsiColor),
    DefaultForeground(),
    DefaultBackground(),
}

impl ThemeEntry {
    /// The total number of theme entries.
    pub const COUNT: usize = 18;

    /// Create a new iterator over all theme entries in canonical order.
    pub fn all() -> ThemeEntryIterator {
        ThemeEntryIterator::new()
    }

    /// Try getting the theme entry for the given index.
    pub fn try_from_index(value: usize) -> Result<ThemeEntry, OutOfBoundsError> {
        ThemeEntry::try_from(value)
    }

    /// Get the theme entry for the given ANSI color.
    ///
    /// The default foreground and background occupy indices 0 and 1, so an
    /// ANSI color's entry sits at `color.to_8bit() + 2`.
    pub fn from_ansi_color(color: AnsiColor) -> ThemeEntry {
        let index = u8::from(color) as usize + 2;
        ThemeEntry::try_from(index).expect("ANSI color index is always within 2..=17")
    }

    /// Get this theme entry's human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ansi(color) => color.name(),
            Self::DefaultForeground() => "default foreground",
            Self::DefaultBackground() => "default background",
        }
    }

    /// Get an abbreviation for this theme entry's name.
    ///
    /// This method returns a two-letter abbreviations for this theme entry. See
    /// [`AnsiColor::abbr`] for a description of the abbreviations for ANSI
    /// colors.
    pub fn abbr(&self) -> &'static str {
        match self {
            Self::Ansi(color) => color.abbr(),
            Self::DefaultForeground() => "fg",
            Self::DefaultBackground() => "bg",
        }
    }
}

impl From<AnsiColor> for ThemeEntry {
    fn from(value: AnsiColor) -> Self {
        ThemeEntry::Ansi(value)
    }
}

impl TryFrom<usize> for ThemeEntry {
    type Error = OutOfBoundsError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value == 0 {
            Ok(ThemeEntry::DefaultForeground())
        } else if value == 1 {
            Ok(ThemeEntry::DefaultBackground())
        } else if value <= 17 {
            Ok(ThemeEntry::Ansi(AnsiColor::try_from((value - 2) as u8)?))
        } else {
            Err(OutOfBoundsError::new(value, 0..=17))
        }
    }
}

/// An iterator over theme entries.
///
/// [`ThemeEntry::all`] returns this iterator, which produces all theme entries
/// in the canonical order. It is fused, i.e., after returning `None` once, it
/// will keep returning `None`. It also is exact, i.e., its `size_hint()`
/// returns the exact number of remaining items.
#[derive(Debug)]
pub struct ThemeEntryIterator {
    index: usize,
}

impl ThemeEntryIterator {
    fn new() -> Self {
        Self { index: 0 }
    }
}

impl Iterator for ThemeEntryIterator {
    type Item = ThemeEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if ThemeEntry::COUNT <= self.index {
            None
        } else {
            let item =
                ThemeEntry::try_from(self.index).expect("index should be smaller than count");
            self.index += 1;
            Some(item)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = ThemeEntry::COUNT - self.index;
        (remaining, Some(remaining))
    }
}

impl std::iter::ExactSizeIterator for ThemeEntryIterator {
    fn len(&self) -> usize {
        ThemeEntry::COUNT - self.index
    }
}

impl std::iter::FusedIterator for ThemeEntryIterator {}

// --------------------------------------------------------------------------------------------------------------------

/// The color theme with the 2+16 colors of [VGA text
/// mode](https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit).
pub const VGA_COLORS: Theme = Theme::with_array([
    rgb!(0, 0, 0),       // Default Foreground
    rgb!(255, 255, 255), // Default Background
    rgb!(0, 0, 0),       // Black
    rgb!(170, 0, 0),     // Red
    rgb!(0, 170, 0),     // Green
    rgb!(170, 85, 0),    // Yellow(ish)
    rgb!(0, 0, 170),     // Blue
    rgb!(170, 0, 170),   // Magenta
    rgb!(0, 170, 170),   // Cyan
    rgb!(170, 170, 170), // White
    rgb!(85, 85, 85),    // Bright Black
    rgb!(255, 85, 85),   // Bright Red
    rgb!(85, 255, 85),   // Bright Green
    rgb!(255, 255, 85),  // Bright Yellow
    rgb!(85, 85, 255),   // Bright Blue
    rgb!(255, 85, 255),  // Bright Magenta
    rgb!(85, 255, 255),  // Bright Cyan
    rgb!(255, 255, 255), // Bright White
]);

#[cfg(test)]
mod test {
    use super::{Theme, ThemeEntry, VGA_COLORS};
    use crate::termco::AnsiColor;

    #[test]
    fn test_theme_entry() {
        assert_eq!(ThemeEntry::DefaultForeground().name(), "default foreground");
        assert_eq!(ThemeEntry::Ansi(AnsiColor::BrightGreen).abbr(), "GN");
    }

    #[test]
    fn test_theme_with_slice() {
        let colors: Vec<_> = VGA_COLORS.as_ref().to_vec();
        let theme = Theme::with_slice(&colors).unwrap();
        assert_eq!(theme, VGA_COLORS);

        let err = Theme::with_slice(&colors[0..5]).unwrap_err();
        assert_eq!(err.actual, 5);
    }

    #[test]
    fn test_theme_with_slice_documented_order() {
        use crate::Color;

        let colors = vec![
            Color::srgb(0.0, 0.0, 0.0),   // Foreground
            Color::srgb(1.0, 1.0, 1.0),   // Background
            Color::srgb(0.0, 0.0, 0.0),   // Black
            Color::srgb(170.0 / 255.0, 0.0, 0.0), // Red
            Color::srgb(0.0, 170.0 / 255.0, 0.0), // Green
            Color::srgb(170.0 / 255.0, 85.0 / 255.0, 0.0), // Yellow
            Color::srgb(0.0, 0.0, 170.0 / 255.0), // Blue
            Color::srgb(170.0 / 255.0, 0.0, 170.0 / 255.0), // Magenta
            Color::srgb(0.0, 170.0 / 255.0, 170.0 / 255.0), // Cyan
            Color::srgb(170.0 / 255.0, 170.0 / 255.0, 170.0 / 255.0), // White
            Color::srgb(85.0 / 255.0, 85.0 / 255.0, 85.0 / 255.0), // BrightBlack
            Color::srgb(1.0, 85.0 / 255.0, 85.0 / 255.0), // BrightRed
            Color::srgb(85.0 / 255.0, 1.0, 85.0 / 255.0), // BrightGreen
            Color::srgb(1.0, 1.0, 85.0 / 255.0), // BrightYellow
            Color::srgb(85.0 / 255.0, 85.0 / 255.0, 1.0), // BrightBlue
            Color::srgb(1.0, 85.0 / 255.0, 1.0), // BrightMagenta
            Color::srgb(85.0 / 255.0, 1.0, 1.0), // BrightCyan
            Color::srgb(1.0, 1.0, 1.0),  // BrightWhite
        ];

        let theme = Theme::with_slice(&colors).unwrap();

        assert_eq!(theme[ThemeEntry::DefaultForeground()], colors[0]);
        assert_eq!(theme[ThemeEntry::DefaultBackground()], colors[1]);
        assert_eq!(theme[AnsiColor::Black], colors[2]);
        assert_eq!(theme[AnsiColor::Red], colors[3]);
        assert_eq!(theme[AnsiColor::BrightWhite], colors[17]);
    }

    #[test]
    fn test_theme_index() {
        assert_eq!(VGA_COLORS[AnsiColor::Red], VGA_COLORS[ThemeEntry::Ansi(AnsiColor::Red)]);
    }
}
