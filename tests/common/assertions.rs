//! Assertion helpers

/// Assert two tonnages agree to within `1e-9` (or a given tolerance)
#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr) => {
        $crate::assert_close!($left, $right, 1e-9)
    };
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let (left, right): (f64, f64) = ($left, $right);
        assert!(
            (left - right).abs() <= $tolerance,
            "expected {} to be within {} of {}",
            left,
            $tolerance,
            right
        );
    }};
}
