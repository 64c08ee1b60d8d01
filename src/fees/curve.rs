//! Fee curve stage functions
//!
//! The pipeline is a chain of four pure transforms:
//! proportion -> deviation -> deviation curve -> deviation logit,
//! combined with the base fee by [`fee`]. Each stage is exposed on its own so
//! it can be tested and inspected independently; none of them retains state.

use super::{FeeError, TransactionMode};

/// Basket share of the token once the transaction completes.
///
/// Deposits add the transaction amount to both the token leg and the basket
/// total; redemptions remove it from both.
pub fn proportion(basket: f64, token: f64, transaction: f64, mode: TransactionMode) -> f64 {
    match mode {
        TransactionMode::Deposit => (token + transaction) / (basket + transaction),
        TransactionMode::Redemption => (token - transaction) / (basket - transaction),
    }
}

/// Signed distance of a basket share from its target.
///
/// Positive means the transaction pushes the token's share above target.
pub fn deviation(proportion: f64, target: f64) -> f64 {
    proportion - target
}

/// Rational remap of deviation onto a strictly positive domain.
///
/// `(d + t/2) / (t/2 - d)` maps `(-t/2, t/2)` onto `(0, +inf)` with a pole at
/// `d = t/2`. Outside that interval the value is zero or negative and the
/// logit stage will reject it, so callers must bound-check deviations first
/// (see [`DeviationBounds`](super::DeviationBounds)).
pub fn deviation_curve(deviation: f64, target: f64) -> f64 {
    (deviation + target / 2.0) / (target / 2.0 - deviation)
}

/// Base-10 logarithm of the deviation curve.
///
/// The one failure point of the pipeline: a non-positive (or non-finite)
/// curve value has no logarithm and surfaces as [`FeeError::Domain`].
pub fn deviation_logit(curve: f64) -> Result<f64, FeeError> {
    if curve <= 0.0 || !curve.is_finite() {
        return Err(FeeError::Domain { curve });
    }
    Ok(curve.log10())
}

/// Combine the base fee with the scaled deviation logit.
///
/// The sign flips between modes: deposits are penalized for pushing a token's
/// share up, redemptions for pushing it down.
pub fn fee(base_fee: f64, scaling_factor: f64, deviation_logit: f64, mode: TransactionMode) -> f64 {
    match mode {
        TransactionMode::Deposit => base_fee + base_fee * scaling_factor * deviation_logit,
        TransactionMode::Redemption => base_fee - base_fee * scaling_factor * deviation_logit,
    }
}
