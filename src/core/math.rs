/// Extension trait providing floating-point constants that depend on the
/// crate's [`Float`](crate::Float) type alias.
pub(crate) trait FloatExt: Sized {
    /// The factor used to round a coordinate down to the significant digits
    /// that matter for equality testing and hashing.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e10;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e5;
}

#[cfg(test)]
mod test {
    use super::FloatExt;

    #[test]
    fn test_rounding_factor() {
        assert_eq!(<f64 as FloatExt>::ROUNDING_FACTOR, 1e10);
        assert_eq!(<f32 as FloatExt>::ROUNDING_FACTOR, 1e5);
    }
}
