//! Scalar math helpers not provided by the standard library.

/// Error function approximation (Abramowitz & Stegun 7.1.26).
///
/// Maximum absolute error is below 1.5e-7, far tighter than the success
/// curve it feeds needs. Odd symmetry is applied explicitly so negative
/// arguments are as accurate as positive ones.
pub fn erf(x: f32) -> f32 {
    const A1: f32 = 0.254829592;
    const A2: f32 = -0.284496736;
    const A3: f32 = 1.421413741;
    const A4: f32 = -1.453152027;
    const A5: f32 = 1.061405429;
    const P: f32 = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    let y = 1.0 - poly * (-x * x).exp();

    sign * y
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    #[test]
    fn test_erf_known_values() {
        // Reference values from standard tables
        let cases = [
            (0.0, 0.0),
            (0.5, 0.5204999),
            (1.0, 0.8427008),
            (2.0, 0.9953223),
            (3.0, 0.9999779),
        ];

        for (x, expected) in cases {
            let got = erf(x);
            assert!(
                (got - expected).abs() < TOLERANCE,
                "erf({}) = {}, expected {}",
                x,
                got,
                expected
            );
        }
    }

    #[test]
    fn test_erf_odd_symmetry() {
        for x in [0.1, 0.7, 1.3, 2.5] {
            assert!((erf(-x) + erf(x)).abs() < TOLERANCE, "erf not odd at {}", x);
        }
    }

    #[test]
    fn test_erf_saturates() {
        assert!(erf(5.0) > 0.999_999);
        assert!(erf(-5.0) < -0.999_999);
    }

    #[test]
    fn test_erf_monotonic() {
        let mut prev = erf(-4.0);
        let mut x = -4.0;
        while x < 4.0 {
            x += 0.05;
            let cur = erf(x);
            assert!(cur >= prev, "erf decreases at {}", x);
            prev = cur;
        }
    }
}
