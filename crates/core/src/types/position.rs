use super::Point;

/// A single pointer reading, valid only at the instant it was taken.
///
/// Values are never cached: every query produces a fresh `CursorPosition`
/// that is rendered and dropped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorPosition {
    point: Point,
}

impl CursorPosition {
    /// Wraps a reading. Returns `None` when either coordinate is NaN,
    /// infinite, or rounds to a value outside the `i64` range.
    pub fn new(point: Point) -> Option<Self> {
        let representable = fits_whole_unit(point.x()) && fits_whole_unit(point.y());
        representable.then_some(Self { point })
    }

    pub const fn point(&self) -> Point {
        self.point
    }

    pub const fn x(&self) -> f64 {
        self.point.x()
    }

    pub const fn y(&self) -> f64 {
        self.point.y()
    }

    /// Rounds both coordinates to the nearest whole display unit, ties to even.
    ///
    /// This is what a zero-precision `%.0f` conversion produces under the
    /// default rounding mode, except that negative zero collapses to `0`.
    pub fn to_whole_units(&self) -> (i64, i64) {
        (whole_unit(self.x()), whole_unit(self.y()))
    }
}

// `i64::MIN` and `i64::MAX + 1` are exact powers of two in f64; NaN fails both bounds.
#[allow(clippy::cast_precision_loss)]
fn fits_whole_unit(value: f64) -> bool {
    let rounded = value.round_ties_even();
    rounded >= i64::MIN as f64 && rounded < i64::MAX as f64
}

// Callers only pass coordinates accepted by `fits_whole_unit`.
#[allow(clippy::cast_possible_truncation)]
fn whole_unit(value: f64) -> i64 {
    value.round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn position(x: f64, y: f64) -> CursorPosition {
        CursorPosition::new(Point::new(x, y)).expect("finite reading")
    }

    #[rstest]
    #[case(0.0, 0.0, (0, 0))]
    #[case(123.7, 45.2, (124, 45))]
    #[case(0.5, 1.5, (0, 2))]
    #[case(2.5, -2.5, (2, -2))]
    #[case(-0.4, -0.0, (0, 0))]
    #[case(-2560.0, -1.6, (-2560, -2))]
    #[case(5119.49, 2879.51, (5119, 2880))]
    fn whole_units_round_to_nearest_even(
        #[case] x: f64,
        #[case] y: f64,
        #[case] expected: (i64, i64),
    ) {
        assert_eq!(position(x, y).to_whole_units(), expected);
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(0.0, f64::INFINITY)]
    #[case(1e300, 0.0)]
    #[case(0.0, -1e19)]
    #[case(9_223_372_036_854_775_808.0, 0.0)]
    fn unrepresentable_readings_are_rejected(#[case] x: f64, #[case] y: f64) {
        assert!(CursorPosition::new(Point::new(x, y)).is_none());
    }

    #[rstest]
    fn accepts_largest_representable_reading() {
        let reading = position(-9_223_372_036_854_775_808.0, 4.0e18);
        assert_eq!(reading.to_whole_units(), (i64::MIN, 4_000_000_000_000_000_000));
    }

    #[rstest]
    fn keeps_raw_point() {
        let reading = position(10.25, 20.75);
        assert_eq!(reading.point(), Point::new(10.25, 20.75));
        assert_eq!(reading.x(), 10.25);
        assert_eq!(reading.y(), 20.75);
    }
}
