use rust_decimal::Decimal;
use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
    #[error("invalid installment count: {count}, at least one installment is required")]
    NonPositiveInstallmentCount {
        count: u32,
    },

    #[error("invalid cash price: {cash_price}, must be greater than zero")]
    NonPositiveCashPrice {
        cash_price: Money,
    },

    #[error("invalid installment price: {installment_price}, must be greater than zero")]
    NonPositiveInstallmentPrice {
        installment_price: Money,
    },

    /// `1 + r` must stay positive for fractional exponents to be defined
    #[error("inflation rate out of domain: {rate_percent}% must be greater than -100%")]
    InflationRateOutOfDomain {
        rate_percent: Decimal,
    },

    #[error("invalid discount percentage: {percentage}, expected a value in [0, 100)")]
    InvalidDiscountPercentage {
        percentage: Decimal,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },
}

impl QuoteError {
    /// true for errors caused by the quote itself rather than config or arithmetic
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            QuoteError::NonPositiveInstallmentCount { .. }
                | QuoteError::NonPositiveCashPrice { .. }
                | QuoteError::NonPositiveInstallmentPrice { .. }
                | QuoteError::InflationRateOutOfDomain { .. }
                | QuoteError::InvalidDiscountPercentage { .. }
        )
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(e: serde_json::Error) -> Self {
        QuoteError::InvalidConfiguration {
            message: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_invalid_input_classification() {
        assert!(QuoteError::NonPositiveInstallmentCount { count: 0 }.is_invalid_input());
        assert!(QuoteError::InflationRateOutOfDomain {
            rate_percent: dec!(-100)
        }
        .is_invalid_input());
        assert!(!QuoteError::CalculationError {
            message: "overflow".to_string()
        }
        .is_invalid_input());
    }

    #[test]
    fn test_messages() {
        let err = QuoteError::NonPositiveCashPrice { cash_price: Money::ZERO };
        assert_eq!(err.to_string(), "invalid cash price: 0, must be greater than zero");

        let err = QuoteError::InflationRateOutOfDomain { rate_percent: dec!(-150) };
        assert_eq!(
            err.to_string(),
            "inflation rate out of domain: -150% must be greater than -100%"
        );
    }
}
