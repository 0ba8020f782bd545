use chrono::{DateTime, Utc};
use hourglass_rs::{SafeTimeProvider, TimeSource};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{QuoteError, Result};

pub const DEFAULT_MONTHLY_INFLATION_PERCENT: Decimal = dec!(12.4);
pub const DEFAULT_INSTALLMENT_COUNT: u32 = 12;

/// a purchase offered either for cash today or in periodic installments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub cash_price: Money,
    /// total paid across all installments
    pub installment_price: Money,
    /// estimated inflation per period as a percent figure (12.4 means 12.4%)
    pub monthly_inflation_rate_percent: Decimal,
    pub installment_count: u32,
    pub first_payment_date: DateTime<Utc>,
    /// early-payment discount in percent, in [0, 100)
    #[serde(default)]
    pub discount_percentage: Decimal,
}

impl Quote {
    pub fn builder() -> QuoteBuilder {
        QuoteBuilder::new()
    }

    /// periodic inflation as a decimal fraction
    pub fn inflation_rate(&self) -> Rate {
        Rate::from_percent(self.monthly_inflation_rate_percent)
    }

    pub fn has_discount(&self) -> bool {
        !self.discount_percentage.is_zero()
    }

    /// check every input the engine relies on
    pub fn validate(&self) -> Result<()> {
        if self.installment_count == 0 {
            return Err(QuoteError::NonPositiveInstallmentCount {
                count: self.installment_count,
            });
        }

        if !self.cash_price.is_positive() {
            return Err(QuoteError::NonPositiveCashPrice {
                cash_price: self.cash_price,
            });
        }

        if !self.installment_price.is_positive() {
            return Err(QuoteError::NonPositiveInstallmentPrice {
                installment_price: self.installment_price,
            });
        }

        if self.inflation_rate().growth_base() <= Decimal::ZERO {
            return Err(QuoteError::InflationRateOutOfDomain {
                rate_percent: self.monthly_inflation_rate_percent,
            });
        }

        if self.discount_percentage < Decimal::ZERO
            || self.discount_percentage >= Decimal::ONE_HUNDRED
        {
            return Err(QuoteError::InvalidDiscountPercentage {
                percentage: self.discount_percentage,
            });
        }

        Ok(())
    }
}

/// builder for quotes, defaulting to 12.4% over 12 installments starting now
#[derive(Debug, Clone, Default)]
pub struct QuoteBuilder {
    cash_price: Option<Money>,
    installment_price: Option<Money>,
    monthly_inflation_rate_percent: Option<Decimal>,
    installment_count: Option<u32>,
    first_payment_date: Option<DateTime<Utc>>,
    discount_percentage: Option<Decimal>,
}

impl QuoteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cash_price(mut self, price: Money) -> Self {
        self.cash_price = Some(price);
        self
    }

    pub fn installment_price(mut self, price: Money) -> Self {
        self.installment_price = Some(price);
        self
    }

    pub fn monthly_inflation_percent(mut self, percent: Decimal) -> Self {
        self.monthly_inflation_rate_percent = Some(percent);
        self
    }

    pub fn installments(mut self, count: u32) -> Self {
        self.installment_count = Some(count);
        self
    }

    pub fn first_payment_date(mut self, date: DateTime<Utc>) -> Self {
        self.first_payment_date = Some(date);
        self
    }

    pub fn discount_percentage(mut self, percent: Decimal) -> Self {
        self.discount_percentage = Some(percent);
        self
    }

    /// build with system time for the default first payment date
    pub fn build(self) -> Result<Quote> {
        let time = SafeTimeProvider::new(TimeSource::System);
        self.build_with_time(&time)
    }

    pub fn build_with_time(self, time_provider: &SafeTimeProvider) -> Result<Quote> {
        let cash_price = self.cash_price.ok_or(QuoteError::InvalidConfiguration {
            message: "Cash price required".to_string(),
        })?;

        let installment_price = self.installment_price.ok_or(QuoteError::InvalidConfiguration {
            message: "Installment price required".to_string(),
        })?;

        let quote = Quote {
            cash_price,
            installment_price,
            monthly_inflation_rate_percent: self
                .monthly_inflation_rate_percent
                .unwrap_or(DEFAULT_MONTHLY_INFLATION_PERCENT),
            installment_count: self.installment_count.unwrap_or(DEFAULT_INSTALLMENT_COUNT),
            first_payment_date: self.first_payment_date.unwrap_or_else(|| time_provider.now()),
            discount_percentage: self.discount_percentage.unwrap_or(Decimal::ZERO),
        };

        quote.validate()?;
        Ok(quote)
    }
}
