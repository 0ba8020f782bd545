use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::quote::Quote;
use crate::types::{CalculationId, ComparisonBaseline, PaymentOption};
use crate::valuation::{DiscountedSchedule, Recommendation};

/// everything a caller needs to present a cash-versus-installments decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub calculation_id: CalculationId,
    /// the single "now" every derived value was computed against
    pub calculated_at: DateTime<Utc>,
    pub quote: Quote,
    pub elapsed_periods: Decimal,
    /// face value of each installment
    pub installment_amount: Money,
    pub discounted_schedule: DiscountedSchedule,
    /// decimal places each present value was rounded to before summing
    pub display_decimals: u32,
    pub total_present_value: Money,
    pub recharge_percentage: Decimal,
    /// installment price after the early-payment discount, equal to it when none
    pub total_cash_price: Money,
    pub recommendation: Recommendation,
}

impl Comparison {
    pub fn recommended_option(&self) -> PaymentOption {
        self.recommendation.option
    }

    /// discounted cash price, only when a discount was requested
    pub fn discounted_cash_price(&self) -> Option<Money> {
        self.quote.has_discount().then_some(self.total_cash_price)
    }

    /// rounded present value of each installment, from #1 onwards
    pub fn present_values(&self) -> Vec<Money> {
        self.discounted_schedule.rounded_present_values(self.display_decimals)
    }

    /// re-run the decision against another cash figure without recomputing
    pub fn recommend_against(&self, baseline: ComparisonBaseline) -> Recommendation {
        Recommendation::against(
            self.total_present_value,
            baseline,
            self.quote.cash_price,
            self.total_cash_price,
        )
    }

    /// exact present value minus the per-term rounded total
    ///
    /// `None` when the exact sum does not fit in a `Decimal`.
    pub fn rounding_drift(&self) -> Option<Money> {
        self.discounted_schedule
            .installments
            .iter()
            .try_fold(Money::ZERO, |exact, i| exact.checked_add(i.present_value))?
            .checked_sub(self.total_present_value)
    }
}
