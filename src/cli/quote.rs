//! Quote command implementation

use anyhow::Context;
use clap::Args;
use rust_decimal::Decimal;

use super::ModeArg;
use crate::config::Config;
use crate::fees::{FeeCurveEngine, TransactionMode};

#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Token symbol (must be configured)
    #[arg(short, long)]
    pub token: String,
    /// Transaction direction
    #[arg(short, long, value_enum)]
    pub mode: ModeArg,
    /// Total basket value before the transaction
    #[arg(long)]
    pub basket_value: f64,
    /// Held amount of the token before the transaction
    #[arg(long)]
    pub token_value: f64,
    /// Transaction size
    #[arg(short, long)]
    pub amount: f64,
    /// Decimal places the settled fee is rounded to
    #[arg(long, default_value_t = 6)]
    pub scale: u32,
    /// Emit the quote as JSON
    #[arg(long)]
    pub json: bool,
}

impl QuoteArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let params = config
            .fee_params(&self.token)
            .with_context(|| format!("token {} is not configured", self.token))?;
        let mode: TransactionMode = self.mode.into();

        let quote = FeeCurveEngine::new().transaction_fee(
            self.basket_value,
            self.token_value,
            self.amount,
            mode,
            &params,
        )?;

        // The engine works in raw doubles; rounding to settlement precision
        // happens only here at the output edge.
        let settled = Decimal::try_from(quote.fee)
            .context("fee is not representable as a decimal")?
            .round_dp(self.scale);

        if self.json {
            let mut value = serde_json::to_value(quote)?;
            value["settled_fee"] = serde_json::Value::String(settled.to_string());
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            println!("Quote for {} {:?}", self.token, mode);
            println!("  proportion:      {:.10}", quote.proportion);
            println!("  deviation:       {:.10}", quote.deviation);
            println!("  deviation curve: {:.10}", quote.deviation_curve);
            println!("  deviation logit: {:.10}", quote.deviation_logit);
            println!("  fee:             {:.10}", quote.fee);
            println!("  settled fee:     {}", settled);
        }

        Ok(())
    }
}
