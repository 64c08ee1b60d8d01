//! Sweep command implementation
//!
//! Tabulates the fee curve over the valid deviation range for one token,
//! the CLI analogue of the protocol's fee simulation tables.

use anyhow::Context;
use clap::Args;

use super::ModeArg;
use crate::config::Config;
use crate::fees::{curve, DeviationBounds, TransactionMode};

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Token symbol (must be configured)
    #[arg(short, long)]
    pub token: String,
    /// Transaction direction
    #[arg(short, long, value_enum)]
    pub mode: ModeArg,
    /// Number of rows in the table
    #[arg(short, long, default_value_t = 21)]
    pub steps: u32,
}

impl SweepArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let params = config
            .fee_params(&self.token)
            .with_context(|| format!("token {} is not configured", self.token))?;
        let mode: TransactionMode = self.mode.into();
        let bounds = DeviationBounds::for_mode(params.target, mode);
        let base_fee = params.base_fee(mode);

        println!(
            "Fee curve for {} {:?} (target {}, base fee {}, scaling {})",
            self.token, mode, params.target, base_fee, params.scaling_factor
        );
        println!(
            "{:>12} {:>14} {:>14} {:>14}",
            "deviation", "curve", "logit", "fee"
        );

        let span = bounds.upper - bounds.lower;
        for i in 0..=self.steps {
            let deviation = bounds.lower + span * f64::from(i) / f64::from(self.steps);
            let curve_value = curve::deviation_curve(deviation, params.target);
            let logit = curve::deviation_logit(curve_value)?;
            let fee = curve::fee(base_fee, params.scaling_factor, logit, mode);
            println!(
                "{:>12.7} {:>14.7} {:>14.7} {:>14.7}",
                deviation, curve_value, logit, fee
            );
        }

        Ok(())
    }
}
