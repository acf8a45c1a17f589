//! Grid power balance and stability rules.

use super::report::Stability;

/// Largest absolute balance (MW, exclusive) still considered stable.
pub const STABILITY_MARGIN_MW: f64 = 50.0;

/// Rounds a megawatt value to two decimal places.
///
/// Exact ties go to the even hundredth, so `1.125` becomes `1.12`.
pub fn round_mw(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Generation minus consumption. Positive means surplus.
pub fn balance_mw(total_generation_mw: f64, total_consumption_mw: f64) -> f64 {
    total_generation_mw - total_consumption_mw
}

/// Classifies a balance. The margin is strict: exactly ±50 MW is unstable.
pub fn classify(balance_mw: f64) -> Stability {
    if balance_mw.abs() < STABILITY_MARGIN_MW {
        Stability::Stable
    } else {
        Stability::Unstable
    }
}
