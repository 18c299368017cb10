//! # Unit Conversion
//!
//! QBT is the display denomination; sats are what the protocol actually
//! moves. `1 QBT = 10^8 sats`. The protocol never touches floating point —
//! these helpers exist only at the human boundary (CLI arguments, display
//! formatting), which is the one place an `f64` is tolerable.

use crate::config::SATS_PER_QBT;

/// Convert a fractional QBT amount to integer sats, truncating anything
/// below one sat.
///
/// Only finite, non-negative inputs are meaningful. Negative, NaN, and
/// infinite values map to `0` sats, so callers that validate amounts
/// (a zero amount is never sendable) reject them uniformly.
///
/// # Examples
///
/// ```
/// use qubit_sdk::units::qbt_to_sats;
///
/// assert_eq!(qbt_to_sats(1.0), 100_000_000);
/// assert_eq!(qbt_to_sats(0.5), 50_000_000);
/// assert_eq!(qbt_to_sats(-2.0), 0);
/// ```
pub fn qbt_to_sats(qbt: f64) -> u64 {
    if !qbt.is_finite() || qbt <= 0.0 {
        return 0;
    }
    (qbt * SATS_PER_QBT as f64) as u64
}

/// Convert integer sats back to a fractional QBT value for display.
pub fn sats_to_qbt(sats: u64) -> f64 {
    sats as f64 / SATS_PER_QBT as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_and_fractional_conversion() {
        assert_eq!(qbt_to_sats(1.0), 100_000_000);
        assert_eq!(qbt_to_sats(1.5), 150_000_000);
        assert_eq!(sats_to_qbt(100_000_000), 1.0);
        assert_eq!(sats_to_qbt(50_000_000), 0.5);
    }

    #[test]
    fn zero_is_zero() {
        assert_eq!(qbt_to_sats(0.0), 0);
        assert_eq!(sats_to_qbt(0), 0.0);
    }

    #[test]
    fn negative_and_non_finite_inputs_yield_zero() {
        assert_eq!(qbt_to_sats(-1.5), 0);
        assert_eq!(qbt_to_sats(-0.000_000_01), 0);
        assert_eq!(qbt_to_sats(f64::NAN), 0);
        assert_eq!(qbt_to_sats(f64::INFINITY), 0);
        assert_eq!(qbt_to_sats(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn round_trip_within_one_sat() {
        // f64 has 53 bits of mantissa, so amounts up to ~90M QBT round-trip
        // with at most one sat of truncation error.
        for &qbt in &[0.1, 0.123_456_78, 2.5, 1_000.0, 12_345.678_9] {
            let sats = qbt_to_sats(qbt);
            let back = qbt_to_sats(sats_to_qbt(sats));
            assert!(back.abs_diff(sats) <= 1, "qbt={qbt} sats={sats} back={back}");
        }
    }
}
