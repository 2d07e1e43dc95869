use tracing::warn;

/// Keeps NaN and infinities out of comparison results
///
/// Every arithmetic step of the generator runs through one of these
/// helpers. A replaced value is logged with the name of the quantity.
pub struct FiniteGuard;

impl FiniteGuard {
    /// Returns `value` when finite, otherwise 0
    pub fn or_zero(value: f64, quantity: &str) -> f64 {
        Self::or(value, 0.0, quantity)
    }

    /// Returns `value` when finite, otherwise `fallback`
    pub fn or(value: f64, fallback: f64, quantity: &str) -> f64 {
        if value.is_finite() {
            value
        } else {
            warn!(quantity, %value, fallback, "Non-finite intermediate value replaced");
            fallback
        }
    }

    /// Divides, yielding 0 when the divisor is zero or the quotient is not finite
    pub fn ratio(numerator: f64, denominator: f64, quantity: &str) -> f64 {
        if denominator == 0.0 {
            return 0.0;
        }
        Self::or_zero(numerator / denominator, quantity)
    }

    /// Rounds a score into the 0..=100 range
    pub fn score(value: f64) -> u8 {
        if value.is_finite() {
            value.round().clamp(0.0, 100.0) as u8
        } else {
            0
        }
    }
}
