//! Advisory deviation bounds
//!
//! The deviation curve is only meaningful on a sub-interval of `(-t/2, t/2)`,
//! and the protocol clamps tighter still. These bounds are advisory: the raw
//! stage functions do not apply them, but any caller settling a fee must.

use super::TransactionMode;

/// Inclusive deviation clamp bounds, expressed in absolute deviation units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviationBounds {
    pub lower: f64,
    pub upper: f64,
}

/// Lower bound coefficient for deposits
const DEPOSIT_LOWER: f64 = -0.4;
/// Lower bound coefficient for redemptions, kept a hair above the curve's
/// zero at -target/2 so the logit stays defined at the bound itself
const REDEMPTION_LOWER: f64 = -0.4999;
/// Upper bound coefficient, shared by both modes
const UPPER: f64 = 0.4;

impl DeviationBounds {
    /// Bounds for a token with the given target proportion
    pub fn for_mode(target: f64, mode: TransactionMode) -> Self {
        let k_low = match mode {
            TransactionMode::Deposit => DEPOSIT_LOWER,
            TransactionMode::Redemption => REDEMPTION_LOWER,
        };
        Self {
            lower: k_low * target,
            upper: UPPER * target,
        }
    }

    /// Whether a deviation may be priced. Non-finite deviations never pass.
    pub fn contains(&self, deviation: f64) -> bool {
        deviation >= self.lower && deviation <= self.upper
    }
}
