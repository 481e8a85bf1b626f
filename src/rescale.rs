/// Linear map of `value` from `[min_value, max_value]` onto
/// `[min_output, max_output]`.
///
/// A fixed output range, or a domain with no spread, returns `min_output`.
pub fn rescale(value: f64, min_value: f64, max_value: f64, min_output: f64, max_output: f64) -> f64 {
    if max_output == min_output || max_value == min_value {
        return min_output;
    }

    min_output + (value - min_value) / (max_value - min_value) * (max_output - min_output)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualRange {
    pub min: f32,
    pub max: f32,
}

impl VisualRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn map(self, value: f64, min_value: f64, max_value: f64) -> f32 {
        rescale(
            value,
            min_value,
            max_value,
            f64::from(self.min),
            f64::from(self.max),
        ) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn interpolates_linearly() {
        assert_eq!(rescale(1.0, 1.0, 3.0, 2.0, 4.0), 2.0);
        assert_eq!(rescale(2.0, 1.0, 3.0, 2.0, 4.0), 3.0);
        assert_eq!(rescale(3.0, 1.0, 3.0, 2.0, 4.0), 4.0);
    }

    #[test]
    fn fixed_output_ignores_the_domain() {
        assert_eq!(rescale(42.0, 0.0, 10.0, 5.0, 5.0), 5.0);
        assert_eq!(rescale(42.0, 3.0, 3.0, 5.0, 5.0), 5.0);
    }

    #[test]
    fn visual_range_maps_into_f32() {
        let range = VisualRange::new(60.0, 300.0);
        assert_eq!(range.map(1.0, 1.0, 5.0), 60.0);
        assert_eq!(range.map(5.0, 1.0, 5.0), 300.0);
        assert_eq!(range.map(3.0, 1.0, 5.0), 180.0);
    }

    proptest! {
        #[test]
        fn endpoints_map_to_output_bounds(
            min_value in -1.0e3f64..1.0e3,
            spread in 1.0e-3f64..1.0e3,
            min_output in 0.0f64..50.0,
            output_spread in 0.0f64..50.0,
        ) {
            let max_value = min_value + spread;
            let max_output = min_output + output_spread;
            let low = rescale(min_value, min_value, max_value, min_output, max_output);
            let high = rescale(max_value, min_value, max_value, min_output, max_output);
            prop_assert!((low - min_output).abs() < 1e-9);
            prop_assert!((high - max_output).abs() < 1e-6 * (1.0 + max_output.abs()));
        }

        #[test]
        fn monotonic_for_increasing_output(
            min_value in -1.0e3f64..1.0e3,
            spread in 1.0e-3f64..1.0e3,
            a in 0.0f64..1.0,
            b in 0.0f64..1.0,
            min_output in 0.0f64..50.0,
            output_spread in 0.0f64..50.0,
        ) {
            let max_value = min_value + spread;
            let max_output = min_output + output_spread;
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let lo_value = min_value + lo * spread;
            let hi_value = min_value + hi * spread;
            prop_assert!(
                rescale(lo_value, min_value, max_value, min_output, max_output)
                    <= rescale(hi_value, min_value, max_value, min_output, max_output)
            );
        }

        #[test]
        fn degenerate_domain_returns_min_output(
            value in -1.0e6f64..1.0e6,
            domain in -1.0e6f64..1.0e6,
            min_output in -50.0f64..50.0,
            max_output in -50.0f64..50.0,
        ) {
            let result = rescale(value, domain, domain, min_output, max_output);
            prop_assert!(!result.is_nan());
            prop_assert_eq!(result, min_output);
        }
    }
}
