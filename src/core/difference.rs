use super::{convert, is_achromatic_chroma_hue, normalize, ColorSpace};
use crate::Float;

/// A strategy for interpolating the hue of polar color spaces.
///
/// CSS Color 4 recognizes four strategies for resolving the hue angles of two
/// colors into a single arc along which to interpolate. Only
/// [`Shorter`](HueInterpolation::Shorter) and
/// [`Longer`](HueInterpolation::Longer) consider the shorter or longer arc
/// between the two hues; [`Increasing`](HueInterpolation::Increasing) and
/// [`Decreasing`](HueInterpolation::Decreasing) simply fix the direction of
/// travel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HueInterpolation {
    /// Interpolate along the shorter arc between the two hues.
    Shorter,
    /// Interpolate along the longer arc between the two hues.
    Longer,
    /// Interpolate with monotonically increasing hue, adding 360° as needed.
    Increasing,
    /// Interpolate with monotonically decreasing hue, subtracting 360° as needed.
    Decreasing,
}

/// Compute the color difference Delta E OK between two colors in Oklab or
/// Oklrab, i.e., the Euclidian distance between their coordinates.
pub(crate) fn delta_e_ok(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [l1, a1, b1] = *coordinates1;
    let [l2, a2, b2] = *coordinates2;

    let dl = l1 - l2;
    let da = a1 - a2;
    let db = b1 - b2;

    (dl * dl + da * da + db * db).sqrt()
}

/// Find the index position of the table entry closest to the query.
///
/// This function compares the query to every entry in the table using the
/// given distance function and returns the index position of the entry with
/// smallest distance. If the table is empty, it returns `None`. The distance
/// metric is declared `mut` to allow for stateful comparisons.
pub(crate) fn find_closest<const N: usize>(
    query: &[Float; 3],
    table: &[[Float; 3]; N],
    mut distance_fn: impl FnMut(&[Float; 3], &[Float; 3]) -> Float,
) -> Option<usize> {
    let mut min_distance = Float::INFINITY;
    let mut min_index = None;

    for (index, candidate) in table.iter().enumerate() {
        let distance = distance_fn(query, candidate);
        if distance < min_distance {
            min_distance = distance;
            min_index = Some(index);
        }
    }

    min_index
}

/// Linearly interpolate between two sets of already-prepared coordinates.
///
/// The coordinates must have been prepared with [`prepare_to_interpolate`] for
/// the same color space and hue interpolation strategy. `fraction` is not
/// clamped, so that extrapolation beyond the two source colors is possible.
pub(crate) fn interpolate(
    fraction: Float,
    coordinates1: &[Float; 3],
    coordinates2: &[Float; 3],
) -> [Float; 3] {
    let mut result = [0.0; 3];
    for index in 0..3 {
        let c1 = coordinates1[index];
        let c2 = coordinates2[index];
        result[index] = if c1.is_nan() {
            c2
        } else if c2.is_nan() {
            c1
        } else {
            c1 + fraction * (c2 - c1)
        };
    }
    result
}

/// Prepare two colors for repeated interpolation in the given color space.
///
/// Following [CSS Color 4](https://www.w3.org/TR/css-color-4/#interpolation),
/// this function converts both colors to the interpolation color space,
/// normalizes them, carries forward a missing (not-a-number) component from
/// one color to the corresponding component of the other, and, for polar color
/// spaces, adjusts the hue angles according to the given strategy. The
/// adjusted hue angles may fall outside `0..360` by design, so that plain
/// linear interpolation produces the intended arc.
pub(crate) fn prepare_to_interpolate(
    space1: ColorSpace,
    coordinates1: &[Float; 3],
    space2: ColorSpace,
    coordinates2: &[Float; 3],
    space: ColorSpace,
    strategy: HueInterpolation,
) -> ([Float; 3], [Float; 3]) {
    let mut c1 = normalize(space, &convert(space1, space, coordinates1));
    let mut c2 = normalize(space, &convert(space2, space, coordinates2));

    // Carry forward missing (not-a-number) components between the two colors.
    for index in 0..3 {
        if c1[index].is_nan() && !c2[index].is_nan() {
            c1[index] = c2[index];
        } else if c2[index].is_nan() && !c1[index].is_nan() {
            c2[index] = c1[index];
        }
    }

    if space.is_polar() {
        // An achromatic color's hue is powerless; adopt the other's hue so
        // that the interpolation arc is well-defined.
        if is_achromatic_chroma_hue(c1[1], c1[2], 0.0) && !c2[2].is_nan() {
            c1[2] = c2[2];
        }
        if is_achromatic_chroma_hue(c2[1], c2[2], 0.0) && !c1[2].is_nan() {
            c2[2] = c1[2];
        }

        let h1 = c1[2].rem_euclid(360.0);
        let h2 = c2[2].rem_euclid(360.0);

        let (h1, h2) = match strategy {
            HueInterpolation::Shorter => {
                let delta = h2 - h1;
                if 180.0 < delta {
                    (h1 + 360.0, h2)
                } else if delta < -180.0 {
                    (h1, h2 + 360.0)
                } else {
                    (h1, h2)
                }
            }
            HueInterpolation::Longer => {
                let delta = h2 - h1;
                if 0.0 < delta && delta < 180.0 {
                    (h1 + 360.0, h2)
                } else if -180.0 < delta && delta <= 0.0 {
                    (h1, h2 + 360.0)
                } else {
                    (h1, h2)
                }
            }
            HueInterpolation::Increasing => {
                if h2 < h1 {
                    (h1, h2 + 360.0)
                } else {
                    (h1, h2)
                }
            }
            HueInterpolation::Decreasing => {
                if h1 < h2 {
                    (h1, h2 + 360.0)
                } else {
                    (h1, h2)
                }
            }
        };

        c1[2] = h1;
        c2[2] = h2;
    }

    (c1, c2)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{delta_e_ok, find_closest, interpolate, prepare_to_interpolate, HueInterpolation};
    use crate::core::ColorSpace;
    use crate::assert_close_enough;
    use crate::Float;

    #[test]
    fn test_delta_e_ok() {
        let c1 = [0.5, 0.1, -0.1];
        let c2 = [0.5, 0.1, -0.1];
        assert_close_enough!(delta_e_ok(&c1, &c2), 0.0);

        let c3 = [0.6, 0.0, 0.0];
        assert_close_enough!(delta_e_ok(&c1, &c3), (0.1_f64.powi(2) + 0.1_f64.powi(2) + 0.1_f64.powi(2)).sqrt());
    }

    #[test]
    fn test_find_closest() {
        let table = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let query = [0.9, 0.1, 0.0];
        assert_eq!(find_closest(&query, &table, delta_e_ok), Some(1));

        let empty: [[crate::Float; 3]; 0] = [];
        assert_eq!(find_closest(&query, &empty, delta_e_ok), None);
    }

    #[test]
    fn test_interpolate() {
        let c1 = [0.0, 0.0, 0.0];
        let c2 = [1.0, 2.0, -2.0];
        assert_close_enough!(interpolate(0.5, &c1, &c2)[0], 0.5);
        assert_close_enough!(interpolate(0.5, &c1, &c2)[1], 1.0);
        assert_close_enough!(interpolate(0.5, &c1, &c2)[2], -1.0);

        let c3 = [Float::NAN, 1.0, 2.0];
        assert_close_enough!(interpolate(0.5, &c3, &c2)[0], 1.0);
    }

    #[test]
    fn test_prepare_to_interpolate_shorter_longer() {
        let (c1, c2) = prepare_to_interpolate(
            ColorSpace::Oklch,
            &[0.5, 0.1, 10.0],
            ColorSpace::Oklch,
            &[0.5, 0.1, 350.0],
            ColorSpace::Oklch,
            HueInterpolation::Shorter,
        );
        // Shorter arc: 350 should wrap to -10 relative to 10.
        assert_close_enough!(c1[2], 10.0);
        assert_close_enough!(c2[2], -10.0);

        let (c1, c2) = prepare_to_interpolate(
            ColorSpace::Oklch,
            &[0.5, 0.1, 10.0],
            ColorSpace::Oklch,
            &[0.5, 0.1, 350.0],
            ColorSpace::Oklch,
            HueInterpolation::Longer,
        );
        assert_close_enough!(c1[2], 370.0);
        assert_close_enough!(c2[2], 350.0);
    }
}
