use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, Result};
use crate::types::ComparisonBaseline;

/// days in one discounting period under the fixed-length approximation
pub const DEFAULT_DAYS_PER_PERIOD: u32 = 30;

/// decimal places each discounted installment is rounded to before summing
pub const DEFAULT_DISPLAY_DECIMALS: u32 = 2;

/// engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub days_per_period: u32,
    pub display_decimals: u32,
    pub comparison_baseline: ComparisonBaseline,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl EngineConfig {
    /// 30-day periods, cents, compared against the quoted cash price
    pub fn standard() -> Self {
        Self {
            days_per_period: DEFAULT_DAYS_PER_PERIOD,
            display_decimals: DEFAULT_DISPLAY_DECIMALS,
            comparison_baseline: ComparisonBaseline::CashPrice,
        }
    }

    /// same as standard but decides against the discounted cash price
    pub fn with_discounted_baseline() -> Self {
        Self {
            comparison_baseline: ComparisonBaseline::DiscountedCashPrice,
            ..Self::standard()
        }
    }

    /// parse a json document; missing fields take standard values
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.days_per_period == 0 {
            return Err(QuoteError::InvalidConfiguration {
                message: "days_per_period must be at least 1".to_string(),
            });
        }
        if self.display_decimals > 8 {
            return Err(QuoteError::InvalidConfiguration {
                message: format!("display_decimals {} exceeds 8", self.display_decimals),
            });
        }
        Ok(())
    }
}
