//! Fee curve engine
//!
//! Composes the stage functions in [`curve`](super::curve) into two entry
//! points: [`FeeCurveEngine::compute_fee`], the raw pipeline, and
//! [`FeeCurveEngine::transaction_fee`], the validated path that settlement
//! code should use.

use super::curve;
use super::{DeviationBounds, FeeError, FeeParams, FeeQuote, TransactionMode};

/// Stateless fee calculator
///
/// Every call is a pure function of its arguments, so a single engine value
/// can be shared freely across threads and baskets.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeeCurveEngine;

impl FeeCurveEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run the raw fee pipeline without bound checks.
    ///
    /// Returns [`FeeError::Domain`] when the post-transaction deviation lands
    /// outside the curve's logarithm domain. Callers settling against the
    /// result must still apply [`DeviationBounds`]; `transaction_fee` does
    /// both in one step.
    pub fn compute_fee(
        &self,
        basket: f64,
        token: f64,
        transaction: f64,
        mode: TransactionMode,
        params: &FeeParams,
    ) -> Result<FeeQuote, FeeError> {
        let proportion = curve::proportion(basket, token, transaction, mode);
        let deviation = curve::deviation(proportion, params.target);
        let deviation_curve = curve::deviation_curve(deviation, params.target);
        let deviation_logit = curve::deviation_logit(deviation_curve)?;
        let fee = curve::fee(params.base_fee(mode), params.scaling_factor, deviation_logit, mode);

        Ok(FeeQuote {
            mode,
            proportion,
            deviation,
            deviation_curve,
            deviation_logit,
            fee,
        })
    }

    /// Price a transaction for settlement.
    ///
    /// Rejects with [`FeeError::Range`] any transaction whose resulting
    /// deviation falls outside the advisory bounds, then applies the
    /// minimum-fee floor from `params`. A redemption that exhausts the token
    /// or the basket produces an out-of-bound (or non-finite) deviation and
    /// is rejected the same way.
    pub fn transaction_fee(
        &self,
        basket: f64,
        token: f64,
        transaction: f64,
        mode: TransactionMode,
        params: &FeeParams,
    ) -> Result<FeeQuote, FeeError> {
        let proportion = curve::proportion(basket, token, transaction, mode);
        let deviation = curve::deviation(proportion, params.target);
        let bounds = DeviationBounds::for_mode(params.target, mode);
        if !bounds.contains(deviation) {
            return Err(FeeError::Range {
                deviation,
                lower: bounds.lower,
                upper: bounds.upper,
            });
        }

        let mut quote = self.compute_fee(basket, token, transaction, mode, params)?;
        quote.fee = quote.fee.max(params.minimum_fee);

        tracing::debug!(
            ?mode,
            proportion = quote.proportion,
            deviation = quote.deviation,
            fee = quote.fee,
            "priced transaction"
        );
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> FeeParams {
        FeeParams {
            target: 0.5,
            deposit_fee: 0.1,
            redemption_fee: 0.1,
            scaling_factor: 0.5,
            minimum_fee: 0.0,
        }
    }

    const EPS: f64 = 1e-12;

    #[test]
    fn test_deposit_above_target() {
        let quote = FeeCurveEngine::new()
            .compute_fee(30.0, 0.0, 70.0, TransactionMode::Deposit, &params())
            .unwrap();
        assert_eq!(quote.proportion, 0.7);
        assert!((quote.deviation - 0.2).abs() < EPS);
        assert!((quote.deviation_curve - 9.0).abs() < 1e-9);
        assert!((quote.deviation_logit - 0.9542425094393243).abs() < 1e-9);
        assert!((quote.fee - 0.14771212547196622).abs() < 1e-9);
    }

    #[test]
    fn test_deposit_below_target() {
        let quote = FeeCurveEngine::new()
            .compute_fee(70.0, 0.0, 30.0, TransactionMode::Deposit, &params())
            .unwrap();
        assert_eq!(quote.proportion, 0.3);
        assert!((quote.deviation_curve - 1.0 / 9.0).abs() < 1e-9);
        assert!((quote.fee - 0.05228787452803376).abs() < 1e-9);
    }

    #[test]
    fn test_redemption_below_target() {
        let quote = FeeCurveEngine::new()
            .compute_fee(150.0, 120.0, 109.0, TransactionMode::Redemption, &params())
            .unwrap();
        assert!((quote.proportion - 0.2682926829268293).abs() < EPS);
        assert!((quote.deviation_curve - 0.03797468354430383).abs() < 1e-9);
        assert!((quote.deviation_logit - -1.4205058365707786).abs() < 1e-9);
        assert!((quote.fee - 0.17102529182853893).abs() < 1e-9);
    }

    #[test]
    fn test_fee_equals_base_at_target() {
        let quote = FeeCurveEngine::new()
            .compute_fee(50.0, 0.0, 50.0, TransactionMode::Deposit, &params())
            .unwrap();
        assert_eq!(quote.deviation, 0.0);
        assert_eq!(quote.fee, 0.1);
    }

    #[test]
    fn test_idempotent() {
        let engine = FeeCurveEngine::new();
        let a = engine
            .transaction_fee(150.0, 120.0, 109.0, TransactionMode::Redemption, &params())
            .unwrap();
        let b = engine
            .transaction_fee(150.0, 120.0, 109.0, TransactionMode::Redemption, &params())
            .unwrap();
        assert_eq!(a.fee.to_bits(), b.fee.to_bits());
    }

    #[test]
    fn test_monotone_in_deviation() {
        let engine = FeeCurveEngine::new();
        // Growing deposits into the same basket push deviation up; the fee
        // must rise strictly with it
        let mut last = f64::NEG_INFINITY;
        for transaction in [30.0, 40.0, 50.0, 60.0, 70.0] {
            let quote = engine
                .transaction_fee(100.0 - transaction, 0.0, transaction, TransactionMode::Deposit, &params())
                .unwrap();
            assert!(quote.fee > last);
            last = quote.fee;
        }
        // Redemption fees fall as the deviation rises
        let mut last = f64::INFINITY;
        for transaction in [109.0, 90.0, 70.0, 51.0] {
            let quote = engine
                .transaction_fee(150.0, 120.0, transaction, TransactionMode::Redemption, &params())
                .unwrap();
            assert!(quote.fee < last);
            last = quote.fee;
        }
    }

    #[test]
    fn test_deposit_past_ceiling_rejected() {
        // 71 into 29 lands at deviation 0.21, past the 0.2 ceiling
        let err = FeeCurveEngine::new()
            .transaction_fee(29.0, 0.0, 71.0, TransactionMode::Deposit, &params())
            .unwrap_err();
        assert!(matches!(err, FeeError::Range { upper, .. } if upper == 0.2));
        // 70 into 30 sits exactly at the ceiling and is accepted
        assert!(FeeCurveEngine::new()
            .transaction_fee(30.0, 0.0, 70.0, TransactionMode::Deposit, &params())
            .is_ok());
    }

    #[test]
    fn test_redemption_past_floor_rejected() {
        // Redeeming 111 of 120 held pushes deviation below -0.24995
        let err = FeeCurveEngine::new()
            .transaction_fee(150.0, 120.0, 111.0, TransactionMode::Redemption, &params())
            .unwrap_err();
        assert!(matches!(err, FeeError::Range { .. }));
        // 109 stays above the floor
        assert!(FeeCurveEngine::new()
            .transaction_fee(150.0, 120.0, 109.0, TransactionMode::Redemption, &params())
            .is_ok());
    }

    #[test]
    fn test_redemption_exhausting_basket_rejected() {
        let engine = FeeCurveEngine::new();
        assert!(matches!(
            engine.transaction_fee(150.0, 120.0, 150.0, TransactionMode::Redemption, &params()),
            Err(FeeError::Range { .. })
        ));
        assert!(matches!(
            engine.transaction_fee(150.0, 120.0, 120.0, TransactionMode::Redemption, &params()),
            Err(FeeError::Range { .. })
        ));
    }

    #[test]
    fn test_minimum_fee_floor() {
        let mut p = params();
        p.minimum_fee = 0.1;
        // Below-target deposit earns a discount on the raw curve, but the
        // validated path floors it back to the minimum
        let quote = FeeCurveEngine::new()
            .transaction_fee(70.0, 0.0, 30.0, TransactionMode::Deposit, &p)
            .unwrap();
        assert_eq!(quote.fee, 0.1);
    }

    #[test]
    fn test_raw_pipeline_surfaces_domain_error() {
        // Out-of-bound redemption from the unvalidated entry point: the curve
        // goes negative and the logit stage refuses it
        let err = FeeCurveEngine::new()
            .compute_fee(150.0, 120.0, 111.0, TransactionMode::Redemption, &params())
            .unwrap_err();
        assert!(matches!(err, FeeError::Domain { curve } if curve < 0.0));
    }
}
