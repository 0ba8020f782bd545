//! Decide whether to pay cash today or in installments, once each future
//! installment is discounted back to today's value at an estimated periodic
//! inflation rate.
//!
//! ```rust
//! use installment_pv_rs::{compute_at, Money, PaymentOption, Quote};
//! use installment_pv_rs::chrono::{TimeZone, Utc};
//! use rust_decimal_macros::dec;
//!
//! let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let quote = Quote {
//!     cash_price: Money::from_major(1000),
//!     installment_price: Money::from_major(1200),
//!     monthly_inflation_rate_percent: dec!(12.4),
//!     installment_count: 12,
//!     first_payment_date: now,
//!     discount_percentage: dec!(0),
//! };
//!
//! let comparison = compute_at(&quote, now).unwrap();
//! assert_eq!(comparison.total_present_value, Money::from_str_exact("683.52").unwrap());
//! assert_eq!(comparison.recommended_option(), PaymentOption::Installments);
//! ```

pub mod calculator;
pub mod comparison;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod quote;
pub mod schedule;
pub mod serialization;
pub mod types;
pub mod valuation;

// re-export key types
pub use calculator::{compute, compute_at, InstallmentCalculator};
pub use comparison::Comparison;
pub use config::EngineConfig;
pub use decimal::{Money, Rate};
pub use errors::{QuoteError, Result};
pub use events::{Event, EventStore};
pub use quote::{Quote, QuoteBuilder};
pub use schedule::{NominalInstallment, NominalSchedule};
pub use serialization::ComparisonView;
pub use types::{CalculationId, ComparisonBaseline, PaymentOption};
pub use valuation::{
    DiscountEngine, DiscountedInstallment, DiscountedSchedule, FixedDayPeriods, PeriodCounter,
    Recommendation,
};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
