//! Momentum strategy — N-period price difference.
//!
//! `momentum[t] = close[t] - close[t-window]`. Long while momentum is
//! strictly positive, short otherwise. An exact zero resolves to short,
//! a consequence of the strict-greater-than comparison (arguably a tie
//! should be flat).

use crate::indicators::diff;

use super::Signal;

/// Full-length indicator columns and raw signal column.
///
/// The first `window` rows carry a NaN momentum and are dropped during
/// frame alignment.
pub(super) fn columns(
    closes: &[f64],
    window: usize,
) -> (Vec<(&'static str, Vec<f64>)>, Vec<Signal>) {
    let momentum = diff(closes, window);
    let signals = momentum
        .iter()
        .map(|&m| if m > 0.0 { Signal::Long } else { Signal::Short })
        .collect();
    (vec![("momentum", momentum)], signals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn momentum_signs() {
        let closes = [10.0, 11.0, 12.0, 11.0, 10.0, 9.0];
        let (cols, signals) = columns(&closes, 3);
        let momentum = &cols[0].1;

        // momentum[3] = 11 - 10 = 1 → long
        assert_approx(momentum[3], 1.0, DEFAULT_EPSILON);
        assert_eq!(signals[3], Signal::Long);
        // momentum[5] = 9 - 12 = -3 → short
        assert_approx(momentum[5], -3.0, DEFAULT_EPSILON);
        assert_eq!(signals[5], Signal::Short);
    }

    #[test]
    fn zero_momentum_tie_is_short() {
        // close[3] == close[0] → momentum exactly 0 → short, never flat.
        let closes = [10.0, 11.0, 12.0, 10.0];
        let (cols, signals) = columns(&closes, 3);
        assert_approx(cols[0].1[3], 0.0, DEFAULT_EPSILON);
        assert_eq!(signals[3], Signal::Short);
    }

    #[test]
    fn warmup_rows_are_nan() {
        let closes = [10.0, 11.0, 12.0, 13.0, 14.0];
        let (cols, _) = columns(&closes, 3);
        for i in 0..3 {
            assert!(cols[0].1[i].is_nan(), "expected NaN at index {i}");
        }
    }
}
