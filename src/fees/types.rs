//! Fee engine types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Direction of the proposed basket transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionMode {
    Deposit,
    Redemption,
}

/// Fee engine errors
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FeeError {
    /// Deviation curve value is not strictly positive, so its logarithm is undefined
    #[error("deviation curve {curve} is outside the logarithm domain")]
    Domain { curve: f64 },
    /// Post-transaction deviation falls outside the advisory bounds;
    /// the transaction should be rejected, not priced
    #[error("deviation {deviation} outside [{lower}, {upper}]")]
    Range {
        deviation: f64,
        lower: f64,
        upper: f64,
    },
}

/// Per-token fee parameters
///
/// Passed explicitly into every engine call so that concurrent baskets with
/// different targets never share state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeParams {
    /// Target equilibrium proportion of the token in the basket (0 < target < 1)
    pub target: f64,
    /// Flat fee charged on a deposit at zero deviation
    pub deposit_fee: f64,
    /// Flat fee charged on a redemption at zero deviation
    pub redemption_fee: f64,
    /// Multiplier converting the deviation logit into a fee adjustment
    pub scaling_factor: f64,
    /// Floor applied to validated transaction fees
    #[serde(default)]
    pub minimum_fee: f64,
}

impl FeeParams {
    /// Base fee for the given transaction mode
    pub fn base_fee(&self, mode: TransactionMode) -> f64 {
        match mode {
            TransactionMode::Deposit => self.deposit_fee,
            TransactionMode::Redemption => self.redemption_fee,
        }
    }
}

/// Stage-by-stage breakdown of a priced transaction
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeeQuote {
    pub mode: TransactionMode,
    /// Basket share of the token after the transaction completes
    pub proportion: f64,
    /// Signed distance of that share from the target
    pub deviation: f64,
    /// Rational remap of deviation onto the positive domain
    pub deviation_curve: f64,
    /// Base-10 logarithm of the curve value
    pub deviation_logit: f64,
    /// Final fee, in the same units as the base fee
    pub fee: f64,
}
