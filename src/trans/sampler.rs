use crate::core::{delta_e_ok, find_closest};
use crate::style::{Fidelity, Layer};
use crate::termco::{AnsiColor, Colorant, EightBitColor, EmbeddedRgb, GrayGradient};
use crate::theme::Theme;
use crate::{Color, ColorSpace, Float, OkVersion};

/// A color sampler.
///
/// Instances of this struct translate between [`Color`] and terminal color
/// representations. They also maintain the state for doing so efficiently. The
/// [user
/// guide](https://apparebit.github.io/prettypretty/overview/integration.html)
/// includes a detailed discussion of challenges posed by translation, solution
/// approaches, and this struct's interface.
///
/// Since a sampler incorporates theme colors, an application should
/// regenerate its sampler if the current theme changes.
pub struct Sampler {
    /// The theme colors. For converting *to* high-resolution colors.
    theme: Theme,
    /// The color space for the ANSI and 8-bit color coordinates.
    space: ColorSpace,
    /// The ANSI color coordinates for matching to closest color.
    ansi: [[Float; 3]; 16],
    /// The ANSI color coordinates in sRGB, for the alternate hue-preserving match.
    ansi_srgb: [[Float; 3]; 16],
    /// The 8-bit color coordinates for matching to closest color.
    eight_bit: [[Float; 3]; 256],
    /// The 8-bit color coordinates in sRGB, for matching embedded/gray colors.
    eight_bit_srgb: [[Float; 3]; 256],
}

/// Create the coordinates for the 16 extended ANSI colors in the given color
/// space.
fn ansi_coordinates(space: ColorSpace, theme: &Theme) -> [[Float; 3]; 16] {
    let mut coordinates: [[Float; 3]; 16] = [[0.0; 3]; 16];
    for index in AnsiColor::all() {
        coordinates[index as usize] = *theme[index].to(space).as_ref();
    }

    coordinates
}

/// Create the coordinates for the 8-bit colors in the given color space.
#[allow(clippy::needless_range_loop)]
fn eight_bit_coordinates(space: ColorSpace, theme: &Theme) -> [[Float; 3]; 256] {
    let mut coordinates: [[Float; 3]; 256] = [[0.0; 3]; 256];
    for index in AnsiColor::all() {
        coordinates[index as usize] = *theme[index].to(space).as_ref();
    }
    for index in 16..=231 {
        // Unwrap is safe b/c we are iterating over EmbeddedRgb's index range.
        coordinates[index] = *Color::from(EmbeddedRgb::try_from(index as u8).unwrap())
            .to(space)
            .as_ref();
    }
    for index in 232..=255 {
        // Unwrap is safe b/c we are iterating over GrayGradient's index range.
        coordinates[index] = *Color::from(GrayGradient::try_from(index as u8).unwrap())
            .to(space)
            .as_ref();
    }

    coordinates
}

impl Sampler {
    /// Create a new sampler for the given Oklab version and theme colors.
    pub fn new(version: OkVersion, theme: Theme) -> Self {
        let space = version.cartesian_space();
        let ansi = ansi_coordinates(space, &theme);
        let ansi_srgb = ansi_coordinates(ColorSpace::Srgb, &theme);
        let eight_bit = eight_bit_coordinates(space, &theme);
        let eight_bit_srgb = eight_bit_coordinates(ColorSpace::Srgb, &theme);

        Self {
            theme,
            space,
            ansi,
            ansi_srgb,
            eight_bit,
            eight_bit_srgb,
        }
    }

    /// Determine whether this sampler's color theme is a dark theme.
    ///
    /// The Y component of a color in XYZ represents its luminance. This method
    /// exploits that property of XYZ and checks whether the default foreground
    /// color has a larger luminance than the default background color.
    pub fn is_dark_theme(&self) -> bool {
        let yf = self.theme[Layer::Foreground].to(ColorSpace::Xyz)[1];
        let yb = self.theme[Layer::Background].to(ColorSpace::Xyz)[1];
        yb < yf
    }

    /// Resolve an 8-bit color code to a high-resolution color.
    ///
    /// ANSI codes `0..=15` resolve through this sampler's theme. Codes
    /// `16..=231` resolve to the embedded RGB cube and codes `232..=255`
    /// resolve to the gray ramp, both in sRGB.
    pub fn to_high_res_8bit(&self, code: u8) -> Color {
        match EightBitColor::from(code) {
            EightBitColor::Ansi(c) => self.theme[c].clone(),
            EightBitColor::Embedded(c) => Color::from(c),
            EightBitColor::Gray(c) => Color::from(c),
        }
    }

    /// Resolve a colorant other than the default to a high-resolution color.
    ///
    /// This method returns `None` for [`Colorant::Default`]. Use
    /// [`Sampler::to_high_res`] if the default colorant needs to resolve to a
    /// concrete theme entry instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prettypretty::{Color, OkVersion, Sampler};
    /// # use prettypretty::termco::{AnsiColor, Rgb};
    /// # use prettypretty::theme::VGA_COLORS;
    /// let sampler = Sampler::new(OkVersion::Revised, VGA_COLORS.clone());
    /// let blue = sampler.try_high_res(AnsiColor::Blue).unwrap();
    /// assert_eq!(blue, Color::srgb(0.0, 0.0, 0.666666666666667));
    ///
    /// let maroon = sampler.try_high_res(Rgb::new(148, 23, 81)).unwrap();
    /// assert_eq!(maroon, Color::srgb(
    ///     0.5803921568627451, 0.09019607843137255, 0.3176470588235294
    /// ));
    /// ```
    pub fn try_high_res(&self, colorant: impl Into<Colorant>) -> Option<Color> {
        match colorant.into() {
            Colorant::Default() => None,
            Colorant::Ansi(c) => Some(self.theme[c].clone()),
            Colorant::Embedded(c) => Some(c.into()),
            Colorant::Gray(c) => Some(c.into()),
            Colorant::Rgb(c) => Some(c.into()),
            Colorant::HiRes(c) => Some(c),
        }
    }

    /// Resolve any colorant to a high-resolution color.
    ///
    /// Unlike [`Sampler::try_high_res`], this method also resolves
    /// [`Colorant::Default`] to the theme entry for the given layer.
    pub fn to_high_res(&self, colorant: impl Into<Colorant>, layer: Layer) -> Color {
        let colorant = colorant.into();
        if matches!(colorant, Colorant::Default()) {
            self.theme[layer].clone()
        } else {
            // Unwrap is safe: we just excluded the only `None`-producing case.
            self.try_high_res(colorant).unwrap()
        }
    }

    /// Find the ANSI color that comes closest to the given color.
    ///
    /// This method converts the color to this sampler's color space and then
    /// searches the precomputed ANSI lookup table for the entry with the
    /// smallest Euclidean distance, breaking ties toward the lowest slot
    /// index.
    ///
    /// # Examples
    ///
    /// The example code below matches the shades of orange `#ffa563` and
    /// `#ff9600` to ANSI colors under the default VGA theme. The first orange
    /// matches ANSI white and the second matches bright red.
    ///
    /// ```
    /// # use prettypretty::{Color, OkVersion, Sampler};
    /// # use prettypretty::termco::AnsiColor;
    /// # use prettypretty::theme::VGA_COLORS;
    /// # use prettypretty::error::ParseError;
    /// # use std::str::FromStr;
    /// let sampler = Sampler::new(OkVersion::Revised, VGA_COLORS.clone());
    ///
    /// let orange1 = Color::from_str("#ffa563")?;
    /// assert_eq!(sampler.to_closest_ansi(&orange1), AnsiColor::White);
    ///
    /// let orange2 = Color::from_str("#ff9600")?;
    /// assert_eq!(sampler.to_closest_ansi(&orange2), AnsiColor::BrightRed);
    /// # Ok::<(), ParseError>(())
    /// ```
    pub fn to_closest_ansi(&self, color: &Color) -> AnsiColor {
        let color = color.to(self.space);
        find_closest(color.as_ref(), &self.ansi, delta_e_ok)
            .map(|idx| AnsiColor::try_from(idx as u8).unwrap())
            .unwrap()
    }

    /// Find the ANSI color closest to the given color in sRGB.
    ///
    /// This method offers an alternate to [`Sampler::to_closest_ansi`] for
    /// users who prefer hue fidelity over perceptual proximity. It clips the
    /// query color to the sRGB gamut and then picks the ANSI slot whose theme
    /// color has the smallest Euclidean distance in (clipped, gamma-corrected)
    /// sRGB. The theme's own colors are assumed to already be in-gamut and are
    /// not reclipped.
    pub fn to_ansi_in_rgb(&self, color: &Color) -> AnsiColor {
        let color = color.to(ColorSpace::Srgb).clip();
        find_closest(color.as_ref(), &self.ansi_srgb, delta_e_ok)
            .map(|idx| AnsiColor::try_from(idx as u8).unwrap())
            .unwrap()
    }

    /// Find the index of the 8-bit color that comes closest to the given
    /// color.
    ///
    /// This method only compares to embedded RGB and gray gradient colors, not
    /// ANSI colors, because ANSI colors are theme-dependent and can be visually
    /// disruptive when using several, graduated colors. It clips the query
    /// color to the sRGB gamut before comparing.
    pub fn to_closest_8bit_raw(&self, color: &Color) -> u8 {
        let color = color.to(ColorSpace::Srgb).clip();
        find_closest(
            color.as_ref(),
            self.eight_bit_srgb.last_chunk::<240>().unwrap(),
            delta_e_ok,
        )
        .map(|idx| idx as u8 + 16)
        .unwrap()
    }

    /// Find the 8-bit color that comes closest to the given color.
    ///
    /// This method wraps [`Sampler::to_closest_8bit_raw`] in the matching
    /// [`EightBitColor`] variant.
    ///
    /// # Examples
    ///
    /// The example below converts every color of the RGB cube embedded in
    /// 8-bit colors to a high-resolution color in sRGB and then uses a
    /// sampler to convert that color back to an embedded RGB color. The
    /// result is the original color, demonstrating that the 216 colors in the
    /// embedded RGB cube remain closest to themselves.
    ///
    /// ```
    /// # use prettypretty::{Color, ColorSpace, OkVersion, Sampler};
    /// # use prettypretty::error::OutOfBoundsError;
    /// # use prettypretty::termco::{EightBitColor, EmbeddedRgb};
    /// # use prettypretty::theme::VGA_COLORS;
    /// let sampler = Sampler::new(OkVersion::Revised, VGA_COLORS.clone());
    ///
    /// for r in 0..5 {
    ///     for g in 0..5 {
    ///         for b in 0..5 {
    ///             let embedded = EmbeddedRgb::new(r, g, b)?;
    ///             let color = Color::from(embedded);
    ///             assert_eq!(color.space(), ColorSpace::Srgb);
    ///
    ///             let result = sampler.to_closest_8bit(&color);
    ///             assert_eq!(result, EightBitColor::Embedded(embedded));
    ///         }
    ///     }
    /// }
    /// # Ok::<(), OutOfBoundsError>(())
    /// ```
    pub fn to_closest_8bit(&self, color: &Color) -> EightBitColor {
        EightBitColor::from(self.to_closest_8bit_raw(color))
    }

    /// Downgrade a high-resolution color to the highest-fidelity
    /// representation that does not exceed `fidelity`.
    ///
    /// This method borrows the high-resolution color and clones it only when
    /// the fidelity is high enough to preserve it as is. Prefer this method
    /// over [`Sampler::adjust`] when the colorant already is known to be a
    /// high-resolution color.
    pub fn adjust_hires(&self, color: &Color, fidelity: Fidelity) -> Option<Colorant> {
        match fidelity {
            Fidelity::Plain | Fidelity::NoColor => None,
            Fidelity::Ansi => Some(Colorant::Ansi(self.to_closest_ansi(color))),
            Fidelity::EightBit => Some(self.to_closest_8bit(color).into()),
            Fidelity::TwentyFourBit => Some(Colorant::Rgb(color.into())),
            Fidelity::HiRes => Some(Colorant::HiRes(color.clone())),
        }
    }

    /// Downgrade a colorant to the highest-fidelity representation that does
    /// not exceed `fidelity`.
    ///
    /// This method borrows the colorant. It only clones when no conversion is
    /// necessary, which includes the uncommon case that the fidelity level is
    /// high enough to keep a high-resolution color as is.
    pub fn adjust_colorant(&self, colorant: &Colorant, fidelity: Fidelity) -> Option<Colorant> {
        match fidelity {
            Fidelity::Plain | Fidelity::NoColor => None,
            Fidelity::Ansi => {
                let hires_color = match colorant {
                    Colorant::Default() | Colorant::Ansi(_) => return Some(colorant.clone()),
                    Colorant::Embedded(embedded_rgb) => Color::from(embedded_rgb),
                    Colorant::Gray(gray_gradient) => Color::from(gray_gradient),
                    Colorant::Rgb(true_color) => Color::from(true_color),
                    Colorant::HiRes(hires_color) => hires_color.clone(),
                };

                Some(Colorant::Ansi(self.to_closest_ansi(&hires_color)))
            }
            Fidelity::EightBit => {
                let hires_color = match colorant {
                    Colorant::Rgb(true_color) => Color::from(true_color),
                    Colorant::HiRes(hires_color) => hires_color.clone(),
                    _ => return Some(colorant.clone()),
                };

                Some(self.to_closest_8bit(&hires_color).into())
            }
            Fidelity::TwentyFourBit => {
                if let Colorant::HiRes(hires_color) = colorant {
                    Some(Colorant::Rgb(hires_color.into()))
                } else {
                    Some(colorant.clone())
                }
            }
            Fidelity::HiRes => Some(colorant.clone()),
        }
    }

    /// Downgrade a colorant to the highest-fidelity representation that does
    /// not exceed `fidelity`.
    ///
    /// This method ensures that a terminal with the given fidelity level can
    /// render the resulting color:
    ///
    ///   * `Plain`, `NoColor` (fidelity)
    ///       * `None` (result)
    ///   * `Ansi`
    ///       * Unmodified ANSI colors
    ///       * Downsampled 8-bit, 24-bit, and high-resolution colors
    ///   * `EightBit`
    ///       * Unmodified ANSI and 8-bit colors
    ///       * Downsampled 24-bit and high-resolution colors
    ///   * `TwentyFourBit`
    ///       * Unmodified ANSI, 8-bit, and 24-bit colors
    ///       * Downsampled high-resolution colors
    ///   * `HiRes`
    ///       * Unmodified colors
    ///
    /// Instead of calling this method, whenever possible, prefer
    /// [`Sampler::adjust_hires`] or [`Sampler::adjust_colorant`].
    pub fn adjust(&self, colorant: impl Into<Colorant>, fidelity: Fidelity) -> Option<Colorant> {
        self.adjust_colorant(&colorant.into(), fidelity)
    }
}

impl std::fmt::Debug for Sampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let version = if self.space == ColorSpace::Oklab {
            "OkVersion.Original"
        } else {
            "OkVersion.Revised"
        };

        f.debug_struct("Sampler")
            .field("version", &version)
            .field("theme", &self.theme)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::Sampler;
    use crate::error::OutOfBoundsError;
    use crate::style::Fidelity;
    use crate::termco::{AnsiColor, Colorant};
    use crate::theme::VGA_COLORS;
    use crate::{Color, OkVersion};

    #[test]
    fn test_to_closest_ansi() -> Result<(), OutOfBoundsError> {
        let sampler = Sampler::new(OkVersion::Revised, VGA_COLORS.clone());

        let result = sampler.to_closest_ansi(&Color::srgb(1.0, 1.0, 0.0));
        assert_eq!(result, AnsiColor::BrightYellow);

        Ok(())
    }

    #[test]
    fn test_to_ansi_in_rgb() {
        let sampler = Sampler::new(OkVersion::Revised, VGA_COLORS.clone());
        let red = Color::srgb(1.0, 0.0, 0.0);
        assert_eq!(sampler.to_ansi_in_rgb(&red), AnsiColor::Red);
    }

    #[test]
    fn test_high_res_roundtrip() {
        let sampler = Sampler::new(OkVersion::Revised, VGA_COLORS.clone());
        assert_eq!(sampler.try_high_res(Colorant::Default()), None);
        assert!(sampler.try_high_res(AnsiColor::Blue).is_some());
    }

    #[test]
    fn test_adjust() {
        let sampler = Sampler::new(OkVersion::Revised, VGA_COLORS.clone());
        let rgb256 = Colorant::Rgb(crate::termco::Rgb::new(1, 2, 3));

        assert_eq!(sampler.adjust(rgb256.clone(), Fidelity::NoColor), None);
        assert_eq!(sampler.adjust(rgb256.clone(), Fidelity::HiRes), Some(rgb256));
    }
}
