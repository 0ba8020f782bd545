use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{ComparisonBaseline, PaymentOption};

/// cash wins only when the installments are worth strictly more today
pub fn recommend(total_present_value: Money, baseline: Money) -> PaymentOption {
    if total_present_value > baseline {
        PaymentOption::Cash
    } else {
        PaymentOption::Installments
    }
}

/// outcome of comparing the installment plan against a cash figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub option: PaymentOption,
    pub baseline: ComparisonBaseline,
    pub baseline_amount: Money,
    pub total_present_value: Money,
    /// baseline minus present value; positive when installments are cheaper
    pub savings: Money,
}

impl Recommendation {
    pub fn against(
        total_present_value: Money,
        baseline: ComparisonBaseline,
        cash_price: Money,
        discounted_cash_price: Money,
    ) -> Self {
        let baseline_amount = match baseline {
            ComparisonBaseline::CashPrice => cash_price,
            ComparisonBaseline::DiscountedCashPrice => discounted_cash_price,
        };

        Self {
            option: recommend(total_present_value, baseline_amount),
            baseline,
            baseline_amount,
            total_present_value,
            savings: baseline_amount - total_present_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cash_when_present_value_exceeds_price() {
        let cash = Money::from_major(1000);
        assert_eq!(recommend(Money::from_major(1001), cash), PaymentOption::Cash);
    }

    #[test]
    fn test_installments_when_cheaper() {
        let cash = Money::from_major(1000);
        assert_eq!(recommend(Money::from_major(683), cash), PaymentOption::Installments);
    }

    #[test]
    fn test_tie_goes_to_installments() {
        let cash = Money::from_major(1000);
        assert_eq!(recommend(cash, cash), PaymentOption::Installments);
    }

    #[test]
    fn test_baseline_selection() {
        let pv = Money::from_major(950);
        let cash = Money::from_major(1000);
        let discounted = Money::from_major(900);

        let raw = Recommendation::against(pv, ComparisonBaseline::CashPrice, cash, discounted);
        assert_eq!(raw.option, PaymentOption::Installments);
        assert_eq!(raw.baseline_amount, cash);
        assert_eq!(raw.savings, Money::from_major(50));

        let adjusted =
            Recommendation::against(pv, ComparisonBaseline::DiscountedCashPrice, cash, discounted);
        assert_eq!(adjusted.option, PaymentOption::Cash);
        assert_eq!(adjusted.baseline_amount, discounted);
        assert_eq!(adjusted.savings, Money::from_major(-50));
    }
}
