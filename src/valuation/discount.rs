use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{QuoteError, Result};
use crate::schedule::NominalSchedule;

/// one installment brought back to today's value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountedInstallment {
    pub installment_number: u32,
    pub nominal_amount: Money,
    /// exponent `i + elapsed_periods`
    pub period_offset: Decimal,
    /// `(1 + r)^period_offset`
    pub discount_factor: Decimal,
    /// full-precision present value
    pub present_value: Money,
}

impl DiscountedInstallment {
    /// present value rounded to cents, as shown to the buyer
    pub fn rounded_present_value(&self) -> Money {
        self.present_value.round_cents()
    }
}

/// nominal schedule discounted at a periodic inflation rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountedSchedule {
    pub rate: Rate,
    pub elapsed_periods: Decimal,
    pub installments: Vec<DiscountedInstallment>,
}

impl DiscountedSchedule {
    pub fn len(&self) -> usize {
        self.installments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installments.is_empty()
    }

    /// full-precision present values in installment order
    pub fn present_values(&self) -> Vec<Money> {
        self.installments.iter().map(|i| i.present_value).collect()
    }

    /// present values rounded to `dp` places in installment order
    pub fn rounded_present_values(&self, dp: u32) -> Vec<Money> {
        self.installments.iter().map(|i| i.present_value.round_dp(dp)).collect()
    }
}

/// rejects rates whose growth base `1 + r` is not positive
pub fn ensure_rate_in_domain(rate: Rate) -> Result<()> {
    if rate.growth_base() <= Decimal::ZERO {
        return Err(QuoteError::InflationRateOutOfDomain {
            rate_percent: rate.as_percentage(),
        });
    }
    Ok(())
}

/// `(1 + r)^exponent`, `None` once the power leaves the decimal range
fn checked_growth(rate: Rate, exponent: Decimal) -> Option<Decimal> {
    if rate.as_decimal().is_zero() || exponent.is_zero() {
        return Some(Decimal::ONE);
    }

    // whole exponents stay exact; fractional ones go through ln/exp
    let base = rate.growth_base();
    let exponent = exponent.normalize();
    if exponent.fract().is_zero() {
        exponent.to_i64().and_then(|n| base.checked_powi(n))
    } else {
        base.checked_powd(exponent)
    }
}

/// true when `(1 + r)^exponent` is above one
fn grows(rate: Rate, exponent: Decimal) -> bool {
    (rate.as_decimal() > Decimal::ZERO) == (exponent > Decimal::ZERO)
}

fn factor_below_range(rate: Rate, exponent: Decimal) -> QuoteError {
    QuoteError::CalculationError {
        message: format!(
            "discount factor (1 + {})^{} is too small to represent",
            rate.as_decimal(),
            exponent.normalize()
        ),
    }
}

/// `(1 + r)^exponent` for any real exponent
///
/// A factor too large for `Decimal` saturates at `Decimal::MAX`. A factor too
/// small to represent is an error, since the present value it implies is not
/// representable either.
pub fn discount_factor(rate: Rate, exponent: Decimal) -> Result<Decimal> {
    ensure_rate_in_domain(rate)?;

    match checked_growth(rate, exponent) {
        Some(factor) if factor > Decimal::ZERO => Ok(factor),
        None if grows(rate, exponent) => Ok(Decimal::MAX),
        _ => Err(factor_below_range(rate, exponent)),
    }
}

/// discount factor and present value of `amount` due `exponent` periods out
///
/// Past the decimal range the payment is worth less than `1e-28` of itself and
/// counts as zero.
fn discount_amount(amount: Money, rate: Rate, exponent: Decimal) -> Result<(Decimal, Money)> {
    ensure_rate_in_domain(rate)?;

    match checked_growth(rate, exponent) {
        Some(factor) if factor > Decimal::ZERO => {
            let present_value =
                amount
                    .checked_div(factor)
                    .ok_or_else(|| QuoteError::CalculationError {
                        message: format!("present value of {} overflowed", amount),
                    })?;
            Ok((factor, present_value))
        }
        None if grows(rate, exponent) => Ok((Decimal::MAX, Money::ZERO)),
        _ => Err(factor_below_range(rate, exponent)),
    }
}

/// discount every nominal payment back to present value
///
/// Installment `i` (0-based) is divided by `(1 + r)^(i + elapsed_periods)`,
/// so the first payment is discounted by the time until it falls due and each
/// later payment by one more period. A negative `elapsed_periods` inflates
/// rather than discounts; it is applied as-is.
///
/// The schedule always has one entry per nominal installment. The only error
/// past the rate check is a present value beyond the decimal range.
pub fn discount(
    schedule: &NominalSchedule,
    rate: Rate,
    elapsed_periods: Decimal,
) -> Result<DiscountedSchedule> {
    ensure_rate_in_domain(rate)?;

    let installments = schedule
        .installments
        .iter()
        .map(|nominal| -> Result<DiscountedInstallment> {
            let period_offset = Decimal::from(nominal.period_index()) + elapsed_periods;
            let (factor, present_value) = discount_amount(nominal.amount, rate, period_offset)?;

            Ok(DiscountedInstallment {
                installment_number: nominal.installment_number,
                nominal_amount: nominal.amount,
                period_offset,
                discount_factor: factor,
                present_value,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(DiscountedSchedule {
        rate,
        elapsed_periods,
        installments,
    })
}

/// engine for present-value discounting at a fixed periodic rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountEngine {
    pub rate: Rate,
}

impl DiscountEngine {
    /// # Errors
    ///
    /// Returns `InflationRateOutOfDomain` when the rate is -100% or lower.
    pub fn new(rate: Rate) -> Result<Self> {
        ensure_rate_in_domain(rate)?;
        Ok(Self { rate })
    }

    /// from a percent figure such as 12.4
    pub fn from_percent(rate_percent: Decimal) -> Result<Self> {
        Self::new(Rate::from_percent(rate_percent))
    }

    pub fn discount_schedule(
        &self,
        schedule: &NominalSchedule,
        elapsed_periods: Decimal,
    ) -> Result<DiscountedSchedule> {
        discount(schedule, self.rate, elapsed_periods)
    }

    /// present value of a single amount due `periods` from now
    pub fn present_value(&self, amount: Money, periods: Decimal) -> Result<Money> {
        discount_amount(amount, self.rate, periods).map(|(_, present_value)| present_value)
    }
}
