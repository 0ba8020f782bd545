use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{QuoteError, Result};
use crate::valuation::discount::DiscountedSchedule;

/// summary figures derived from a discounted schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    pub total_present_value: Money,
    /// `None` when the cash price is not positive or the ratio is out of range
    pub recharge_percentage: Option<Decimal>,
    pub discounted_cash_price: Money,
}

impl Aggregate {
    pub fn from_schedule(
        schedule: &DiscountedSchedule,
        installment_price: Money,
        cash_price: Money,
        discount_percentage: Decimal,
        dp: u32,
    ) -> Result<Self> {
        Ok(Self {
            total_present_value: total_present_value(schedule, dp)?,
            recharge_percentage: recharge_percentage(installment_price, cash_price),
            discounted_cash_price: discounted_cash_price(installment_price, discount_percentage),
        })
    }
}

/// sum of the present values, each rounded to `dp` places first
///
/// Rounding happens per term, before the addition, so the total equals the
/// sum of the itemised figures rather than the rounded exact sum.
///
/// # Errors
///
/// Returns `CalculationError` when the total exceeds the decimal range.
pub fn total_present_value(schedule: &DiscountedSchedule, dp: u32) -> Result<Money> {
    schedule
        .installments
        .iter()
        .try_fold(Money::ZERO, |total, i| total.checked_add(i.present_value.round_dp(dp)))
        .ok_or_else(|| QuoteError::CalculationError {
            message: format!(
                "total present value of {} installments exceeds the decimal range",
                schedule.len()
            ),
        })
}

/// premium of the installment price over the cash price, in percent
///
/// Returns `None` when `cash_price` is zero or negative, or when the
/// percentage does not fit in a `Decimal`.
pub fn recharge_percentage(installment_price: Money, cash_price: Money) -> Option<Decimal> {
    if !cash_price.is_positive() {
        return None;
    }
    installment_price
        .as_decimal()
        .checked_div(cash_price.as_decimal())?
        .checked_mul(Decimal::ONE_HUNDRED)?
        .checked_sub(Decimal::ONE_HUNDRED)
}

/// installment price less an early-payment discount percentage
pub fn discounted_cash_price(installment_price: Money, discount_percentage: Decimal) -> Money {
    installment_price.less_percentage(discount_percentage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use crate::schedule::NominalSchedule;
    use crate::valuation::discount::discount;
    use rust_decimal_macros::dec;

    fn discounted(price: i64, count: u32, rate: Decimal, elapsed: Decimal) -> DiscountedSchedule {
        let nominal = NominalSchedule::generate(Money::from_major(price), count).unwrap();
        discount(&nominal, Rate::from_percent(rate), elapsed).unwrap()
    }

    fn cents(s: &str) -> Money {
        Money::from_str_exact(s).unwrap()
    }

    #[test]
    fn test_total_rounds_each_term_before_summing() {
        let schedule = discounted(1200, 12, dec!(12.4), Decimal::ZERO);
        assert_eq!(total_present_value(&schedule, 2), Ok(cents("683.52")));
    }

    #[test]
    fn test_round_then_sum_differs_from_sum_then_round() {
        // three payments of 0.3333... each round to 0.33
        let schedule = discounted(1, 3, Decimal::ZERO, Decimal::ZERO);

        let per_term = total_present_value(&schedule, 2).unwrap();
        let exact: Money = schedule.present_values().into_iter().sum();

        assert_eq!(per_term, cents("0.99"));
        assert_eq!(exact.round_cents(), cents("1.00"));
    }

    #[test]
    fn test_zero_rate_total_matches_price() {
        let schedule = discounted(1200, 12, Decimal::ZERO, dec!(3.25));
        assert_eq!(total_present_value(&schedule, 2), Ok(Money::from_major(1200)));
    }

    #[test]
    fn test_total_non_increasing_in_rate() {
        let totals: Vec<Money> = [dec!(0), dec!(1), dec!(5), dec!(12.4), dec!(25), dec!(80)]
            .iter()
            .map(|rate| {
                let schedule = discounted(1200, 12, *rate, Decimal::ZERO);
                total_present_value(&schedule, 2).unwrap()
            })
            .collect();

        assert!(totals.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_total_beyond_decimal_range_is_an_error() {
        // each late installment of 1200 / 93 is worth about 1e27 at -50%
        let schedule = discounted(1200, 93, dec!(-50), Decimal::ZERO);
        let result = total_present_value(&schedule, 2);

        assert!(matches!(result, Err(QuoteError::CalculationError { .. })));
    }

    #[test]
    fn test_long_horizon_total() {
        let schedule = discounted(1200, 600, dec!(12.4), Decimal::ZERO);
        assert_eq!(total_present_value(&schedule, 2), Ok(cents("18.10")));

        let schedule = discounted(1200, 100, dec!(100), Decimal::ZERO);
        assert_eq!(total_present_value(&schedule, 2), Ok(cents("24.00")));
    }

    #[test]
    fn test_recharge_percentage() {
        let cash = Money::from_major(1000);

        assert_eq!(recharge_percentage(Money::from_major(1200), cash), Some(dec!(20)));
        assert_eq!(recharge_percentage(Money::from_major(900), cash), Some(dec!(-10)));
        assert_eq!(recharge_percentage(Money::from_major(1000), cash), Some(Decimal::ZERO));
    }

    #[test]
    fn test_recharge_not_computable_without_cash_price() {
        let installments = Money::from_major(500);

        assert_eq!(recharge_percentage(installments, Money::ZERO), None);
        assert_eq!(recharge_percentage(installments, Money::from_major(-10)), None);
    }

    #[test]
    fn test_recharge_beyond_decimal_range_not_computable() {
        let installments = Decimal::from_i128_with_scale(10_i128.pow(26), 0);
        let cash = cents("0.10");

        assert_eq!(recharge_percentage(Money::from_decimal(installments), cash), None);
    }

    #[test]
    fn test_discounted_cash_price() {
        let price = Money::from_major(1200);

        assert_eq!(discounted_cash_price(price, dec!(15)), Money::from_major(1020));
        assert_eq!(discounted_cash_price(price, Decimal::ZERO), price);
    }

    #[test]
    fn test_aggregate_from_schedule() {
        let schedule = discounted(1200, 12, dec!(12.4), Decimal::ZERO);
        let aggregate = Aggregate::from_schedule(
            &schedule,
            Money::from_major(1200),
            Money::from_major(1000),
            dec!(10),
            2,
        )
        .unwrap();

        assert_eq!(aggregate.total_present_value, cents("683.52"));
        assert_eq!(aggregate.recharge_percentage, Some(dec!(20)));
        assert_eq!(aggregate.discounted_cash_price, Money::from_major(1080));
    }
}
