pub mod aggregate;
pub mod decision;
pub mod discount;
pub mod periods;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

pub use aggregate::{discounted_cash_price, recharge_percentage, total_present_value, Aggregate};
pub use decision::{recommend, Recommendation};
pub use discount::{
    discount, discount_factor, DiscountEngine, DiscountedInstallment, DiscountedSchedule,
};
pub use periods::{elapsed_periods, elapsed_periods_with_time, FixedDayPeriods};

/// strategy for measuring time between two instants in discounting periods
pub trait PeriodCounter {
    /// real-valued periods from `from` to `to`, negative when `to` is earlier
    fn periods_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Decimal;

    fn name(&self) -> String;
}
