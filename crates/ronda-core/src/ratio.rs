//! Null-propagating ratio arithmetic.
//!
//! Every derived valuation ratio is built from [`divide`]: a missing or
//! zero denominator makes the result undefined, and undefined propagates
//! through chained ratios (EV/EBITDA feeding the EV-based PEG, EV/GP
//! feeding EV/GP/RevGrowth). Nothing in this module panics or substitutes
//! zero for missing data.

use crate::fundamentals::RawFundamentals;
use serde::{Deserialize, Serialize};

/// Safe division over possibly-missing values.
///
/// Returns `None` when either operand is absent, the denominator is zero,
/// or either operand is non-finite; otherwise `Some(a / b)`.
#[must_use]
pub fn divide(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) if a.is_finite() && b.is_finite() && b != 0.0 => Some(a / b),
        _ => None,
    }
}

/// Round a possibly-missing value to two decimal digits.
///
/// Presentation helper only; internal computation keeps full precision.
/// `None` stays `None`, and a non-finite value becomes `None` rather
/// than rendering as "inf" or "NaN" downstream.
#[must_use]
pub fn round2(value: Option<f64>) -> Option<f64> {
    value
        .filter(|v| v.is_finite())
        .map(|v| (v * 100.0).round() / 100.0)
}

/// Derived valuation ratios for one ticker.
///
/// Each field is either a finite number or `None` when any of its inputs
/// was missing or its denominator was zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedRatios {
    /// Percent upside from current price to the analyst target.
    pub upside_pct: Option<f64>,
    /// Enterprise value over EBITDA.
    pub ev_to_ebitda: Option<f64>,
    /// EV/EBITDA over forward EPS growth percent.
    pub ev_peg: Option<f64>,
    /// Enterprise value over gross profit.
    pub ev_to_gross_profit: Option<f64>,
    /// EV/GP over revenue growth percent.
    pub ev_gp_to_rev_growth: Option<f64>,
    /// Trailing P/E over forward EPS growth percent.
    pub trailing_peg: Option<f64>,
    /// Forward P/E over forward EPS growth percent.
    pub forward_peg: Option<f64>,
}

impl DerivedRatios {
    /// All ratios rounded to two decimal digits for display.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            upside_pct: round2(self.upside_pct),
            ev_to_ebitda: round2(self.ev_to_ebitda),
            ev_peg: round2(self.ev_peg),
            ev_to_gross_profit: round2(self.ev_to_gross_profit),
            ev_gp_to_rev_growth: round2(self.ev_gp_to_rev_growth),
            trailing_peg: round2(self.trailing_peg),
            forward_peg: round2(self.forward_peg),
        }
    }
}

/// Compute every derived ratio for one raw record.
///
/// Pure function of its input: no side effects, no errors. Missing inputs
/// surface as `None` in the corresponding outputs.
#[must_use]
pub fn compute_ratios(raw: &RawFundamentals) -> DerivedRatios {
    let ev_to_ebitda = divide(raw.enterprise_value, raw.ebitda);
    let ev_to_gross_profit = divide(raw.enterprise_value, raw.gross_profit);

    DerivedRatios {
        upside_pct: divide(raw.target_price, raw.price).map(|r| (r - 1.0) * 100.0),
        ev_to_ebitda,
        ev_peg: divide(ev_to_ebitda, raw.eps_growth_pct),
        ev_to_gross_profit,
        ev_gp_to_rev_growth: divide(ev_to_gross_profit, raw.revenue_growth_pct),
        trailing_peg: divide(raw.trailing_pe, raw.eps_growth_pct),
        forward_peg: divide(raw.forward_pe, raw.eps_growth_pct),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_divide_defined() {
        assert_relative_eq!(divide(Some(10.0), Some(4.0)).unwrap(), 2.5);
    }

    #[test]
    fn test_divide_missing_operands() {
        assert_eq!(divide(None, Some(4.0)), None);
        assert_eq!(divide(Some(10.0), None), None);
        assert_eq!(divide(None, None), None);
    }

    #[test]
    fn test_divide_zero_denominator() {
        assert_eq!(divide(Some(10.0), Some(0.0)), None);
        assert_eq!(divide(Some(0.0), Some(0.0)), None);
        // Zero numerator over a defined denominator is a defined zero.
        assert_eq!(divide(Some(0.0), Some(4.0)), Some(0.0));
    }

    #[test]
    fn test_divide_non_finite() {
        assert_eq!(divide(Some(f64::NAN), Some(4.0)), None);
        assert_eq!(divide(Some(10.0), Some(f64::INFINITY)), None);
    }

    #[test]
    fn test_round2() {
        assert_relative_eq!(round2(Some(1.005)).unwrap(), 1.0, epsilon = 0.02);
        assert_relative_eq!(round2(Some(20.004)).unwrap(), 20.0);
        assert_eq!(round2(None), None);
    }

    #[test]
    fn test_round2_non_finite() {
        assert_eq!(round2(Some(f64::INFINITY)), None);
        assert_eq!(round2(Some(f64::NEG_INFINITY)), None);
        assert_eq!(round2(Some(f64::NAN)), None);
    }

    #[test]
    fn test_upside_formula() {
        let raw = RawFundamentals {
            price: Some(100.0),
            target_price: Some(120.0),
            ..RawFundamentals::missing("Y")
        };
        let ratios = compute_ratios(&raw);
        assert_relative_eq!(ratios.upside_pct.unwrap(), 20.0, epsilon = 1e-9);
        assert_relative_eq!(round2(ratios.upside_pct).unwrap(), 20.0);
    }

    #[test]
    fn test_zero_ebitda_propagates() {
        let raw = RawFundamentals {
            enterprise_value: Some(1000.0),
            ebitda: Some(0.0),
            eps_growth_pct: Some(15.0),
            ..RawFundamentals::missing("X")
        };
        let ratios = compute_ratios(&raw);
        // Zero-denominator rule, then propagation into the chained ratio.
        assert_eq!(ratios.ev_to_ebitda, None);
        assert_eq!(ratios.ev_peg, None);
    }

    #[test]
    fn test_ev_ratio_chain() {
        let raw = RawFundamentals {
            enterprise_value: Some(1.0e12),
            ebitda: Some(1.0e11),
            gross_profit: Some(2.0e11),
            revenue_growth_pct: Some(10.0),
            eps_growth_pct: Some(20.0),
            ..RawFundamentals::missing("AMZN")
        };
        let ratios = compute_ratios(&raw);
        assert_relative_eq!(ratios.ev_to_ebitda.unwrap(), 10.0);
        assert_relative_eq!(ratios.ev_peg.unwrap(), 0.5);
        assert_relative_eq!(ratios.ev_to_gross_profit.unwrap(), 5.0);
        assert_relative_eq!(ratios.ev_gp_to_rev_growth.unwrap(), 0.5);
    }

    #[test]
    fn test_peg_variants() {
        let raw = RawFundamentals {
            trailing_pe: Some(30.0),
            forward_pe: Some(24.0),
            eps_growth_pct: Some(12.0),
            ..RawFundamentals::missing("PLTR")
        };
        let ratios = compute_ratios(&raw);
        assert_relative_eq!(ratios.trailing_peg.unwrap(), 2.5);
        assert_relative_eq!(ratios.forward_peg.unwrap(), 2.0);
    }

    #[test]
    fn test_peg_missing_growth() {
        let raw = RawFundamentals {
            trailing_pe: Some(30.0),
            forward_pe: Some(24.0),
            ..RawFundamentals::missing("PLTR")
        };
        let ratios = compute_ratios(&raw);
        assert_eq!(ratios.trailing_peg, None);
        assert_eq!(ratios.forward_peg, None);
    }

    #[test]
    fn test_all_missing_input() {
        let ratios = compute_ratios(&RawFundamentals::missing("Z"));
        assert_eq!(ratios, ratios.rounded());
        assert_eq!(ratios.upside_pct, None);
        assert_eq!(ratios.ev_to_ebitda, None);
        assert_eq!(ratios.trailing_peg, None);
    }
}
