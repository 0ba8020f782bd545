use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{QuoteError, Result};

/// one undiscounted installment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NominalInstallment {
    /// 1-based position in the plan
    pub installment_number: u32,
    pub amount: Money,
}

impl NominalInstallment {
    /// 0-based period index used as the discounting exponent offset
    pub fn period_index(&self) -> u32 {
        self.installment_number - 1
    }
}

/// installment price split into equal face-value payments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NominalSchedule {
    pub installment_price: Money,
    pub installment_count: u32,
    pub installments: Vec<NominalInstallment>,
}

impl NominalSchedule {
    /// split `installment_price` into `installment_count` equal payments
    ///
    /// Amounts keep full precision; no rounding is applied so the payments
    /// add back up to the installment price.
    ///
    /// # Errors
    ///
    /// Returns `NonPositiveInstallmentCount` when `installment_count` is zero.
    pub fn generate(installment_price: Money, installment_count: u32) -> Result<Self> {
        if installment_count == 0 {
            return Err(QuoteError::NonPositiveInstallmentCount {
                count: installment_count,
            });
        }

        let amount = installment_price / Decimal::from(installment_count);
        let installments = (1..=installment_count)
            .map(|installment_number| NominalInstallment {
                installment_number,
                amount,
            })
            .collect();

        Ok(Self {
            installment_price,
            installment_count,
            installments,
        })
    }

    /// face value of each installment
    pub fn installment_amount(&self) -> Money {
        self.installment_price / Decimal::from(self.installment_count)
    }

    /// sum of all nominal payments
    pub fn total(&self) -> Money {
        self.installments.iter().map(|i| i.amount).sum()
    }

    pub fn len(&self) -> usize {
        self.installments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installments.is_empty()
    }

    pub fn get(&self, installment_number: u32) -> Option<&NominalInstallment> {
        installment_number
            .checked_sub(1)
            .and_then(|idx| self.installments.get(idx as usize))
    }
}
