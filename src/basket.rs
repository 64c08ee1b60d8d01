//! Basket snapshot
//!
//! A point-in-time view of the pooled token balances and their target
//! weights. The snapshot is a plain value: the ledger that produced it owns
//! the live state, and the fee engine only ever reads `(basket, token)`
//! totals out of it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tolerance when checking that target weights sum to one
const TARGET_SUM_TOLERANCE: f64 = 1e-9;

/// Basket construction and lookup errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BasketError {
    #[error("token {0} is not registered in the basket")]
    UnknownToken(String),
    #[error("target {target} for token {symbol} must lie in (0, 1)")]
    InvalidTarget { symbol: String, target: f64 },
    #[error("token {symbol} has negative balance {balance}")]
    NegativeBalance { symbol: String, balance: f64 },
    #[error("target weights sum to {0}, expected 1")]
    UnbalancedTargets(f64),
}

/// One registered token: symbol, held balance, target weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSlot {
    pub symbol: String,
    pub balance: f64,
    pub target: f64,
}

/// Inputs the fee engine needs for one token: the basket total and the
/// token's own held amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeInputs {
    pub basket: f64,
    pub token: f64,
}

/// Immutable snapshot of basket composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Basket {
    tokens: Vec<TokenSlot>,
}

impl Basket {
    /// Build a snapshot, validating balances and target weights.
    ///
    /// Every target must lie strictly between 0 and 1 and the targets must
    /// sum to 1, so that the per-token equilibria are mutually consistent.
    pub fn new(tokens: Vec<TokenSlot>) -> Result<Self, BasketError> {
        for slot in &tokens {
            if !(slot.target > 0.0 && slot.target < 1.0) {
                return Err(BasketError::InvalidTarget {
                    symbol: slot.symbol.clone(),
                    target: slot.target,
                });
            }
            if !(slot.balance >= 0.0) {
                return Err(BasketError::NegativeBalance {
                    symbol: slot.symbol.clone(),
                    balance: slot.balance,
                });
            }
        }
        let sum: f64 = tokens.iter().map(|s| s.target).sum();
        if (sum - 1.0).abs() > TARGET_SUM_TOLERANCE {
            return Err(BasketError::UnbalancedTargets(sum));
        }
        Ok(Self { tokens })
    }

    /// Total value held across all tokens
    pub fn total_value(&self) -> f64 {
        self.tokens.iter().map(|s| s.balance).sum()
    }

    pub fn token(&self, symbol: &str) -> Option<&TokenSlot> {
        self.tokens.iter().find(|s| s.symbol == symbol)
    }

    pub fn tokens(&self) -> &[TokenSlot] {
        &self.tokens
    }

    /// Resolve the `(basket, token)` pair the fee pipeline consumes for a
    /// transaction against the named token. Deposits and redemptions both
    /// read the same snapshot totals; the pipeline itself adds or removes
    /// the transaction leg.
    pub fn fee_inputs(&self, symbol: &str) -> Result<FeeInputs, BasketError> {
        let slot = self
            .token(symbol)
            .ok_or_else(|| BasketError::UnknownToken(symbol.to_string()))?;
        Ok(FeeInputs {
            basket: self.total_value(),
            token: slot.balance,
        })
    }
}
