use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// unique identifier for a single calculation run
pub type CalculationId = Uuid;

/// the cheaper way to pay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentOption {
    /// pay the full price today
    Cash,
    /// pay the periodic installments
    Installments,
}

impl fmt::Display for PaymentOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentOption::Cash => write!(f, "cash"),
            PaymentOption::Installments => write!(f, "installments"),
        }
    }
}

/// which cash figure the present value is compared against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ComparisonBaseline {
    /// the quoted cash price
    #[default]
    CashPrice,
    /// installment price less the early-payment discount
    DiscountedCashPrice,
}
