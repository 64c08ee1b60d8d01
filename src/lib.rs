//! basket-fees: deterministic fee-curve engine for a token-basket protocol
//!
//! This library provides the core components for:
//! - The fee curve pipeline (proportion, deviation, curve, logit, fee)
//! - Advisory deviation bounds per transaction mode
//! - Basket composition snapshots feeding the engine
//! - Per-token fee parameter configuration
//! - A CLI for quoting transactions and tabulating curves

pub mod basket;
pub mod cli;
pub mod config;
pub mod fees;
pub mod telemetry;
