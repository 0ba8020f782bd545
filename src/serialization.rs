//! serialization support for comparison results

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::comparison::Comparison;
use crate::decimal::Money;
use crate::types::{CalculationId, PaymentOption};

/// display-ready view of a comparison
#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonView {
    pub calculation_id: CalculationId,
    pub calculated_at: DateTime<Utc>,
    pub recommended_option: PaymentOption,
    pub summary: SummaryView,
    pub installments: Vec<InstallmentLine>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryView {
    pub cash_price: Money,
    pub installment_price: Money,
    pub installment_amount: Money,
    pub installment_count: u32,
    pub monthly_inflation_rate_percent: Decimal,
    pub elapsed_periods: Decimal,
    pub total_present_value: Money,
    pub recharge_percentage: Decimal,
    pub total_cash_price: Money,
    pub discounted_cash_price: Option<Money>,
    pub baseline_amount: Money,
    pub savings: Money,
}

/// one row of the per-installment breakdown
#[derive(Debug, Serialize, Deserialize)]
pub struct InstallmentLine {
    pub number: u32,
    pub nominal_amount: Money,
    pub present_value: Money,
}

impl ComparisonView {
    pub fn from_comparison(comparison: &Comparison) -> Self {
        let dp = comparison.display_decimals;

        ComparisonView {
            calculation_id: comparison.calculation_id,
            calculated_at: comparison.calculated_at,
            recommended_option: comparison.recommended_option(),
            summary: SummaryView {
                cash_price: comparison.quote.cash_price,
                installment_price: comparison.quote.installment_price,
                installment_amount: comparison.installment_amount.round_dp(dp),
                installment_count: comparison.quote.installment_count,
                monthly_inflation_rate_percent: comparison.quote.monthly_inflation_rate_percent,
                elapsed_periods: comparison.elapsed_periods.round_dp(4),
                total_present_value: comparison.total_present_value.round_dp(dp),
                recharge_percentage: comparison.recharge_percentage.round_dp(dp),
                total_cash_price: comparison.total_cash_price.round_dp(dp),
                discounted_cash_price: comparison.discounted_cash_price().map(|m| m.round_dp(dp)),
                baseline_amount: comparison.recommendation.baseline_amount,
                savings: comparison.recommendation.savings.round_dp(dp),
            },
            installments: comparison
                .discounted_schedule
                .installments
                .iter()
                .map(|i| InstallmentLine {
                    number: i.installment_number,
                    nominal_amount: i.nominal_amount.round_dp(dp),
                    present_value: i.present_value.round_dp(dp),
                })
                .collect(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Comparison {
    pub fn view(&self) -> ComparisonView {
        ComparisonView::from_comparison(self)
    }

    pub fn json(&self) -> String {
        self.view()
            .to_json_pretty()
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}
