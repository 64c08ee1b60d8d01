//! Fee curve engine
//!
//! Prices basket deposits and redemptions from how far they push a token's
//! basket share away from its target weight. The pipeline is
//! proportion -> deviation -> deviation curve -> deviation logit -> fee,
//! with mode-dependent sign and bound conventions.

pub mod curve;

mod bounds;
mod engine;
mod types;

pub use bounds::DeviationBounds;
pub use engine::FeeCurveEngine;
pub use types::{FeeError, FeeParams, FeeQuote, TransactionMode};
