use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;

use crate::config::DEFAULT_DAYS_PER_PERIOD;
use crate::errors::{QuoteError, Result};
use crate::valuation::PeriodCounter;

pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// fixed-length periods of `days_per_period` days, ignoring the calendar
///
/// With the default of 30 a period stands in for a month. Results are
/// fractional and negative when `to` precedes `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDayPeriods {
    days_per_period: u32,
}

impl FixedDayPeriods {
    pub fn new(days_per_period: u32) -> Result<Self> {
        if days_per_period == 0 {
            return Err(QuoteError::InvalidConfiguration {
                message: "a period must span at least one day".to_string(),
            });
        }
        Ok(Self { days_per_period })
    }

    /// 30-day month approximation
    pub const fn thirty_day() -> Self {
        Self {
            days_per_period: DEFAULT_DAYS_PER_PERIOD,
        }
    }

    pub fn days_per_period(&self) -> u32 {
        self.days_per_period
    }
}

impl Default for FixedDayPeriods {
    fn default() -> Self {
        Self::thirty_day()
    }
}

impl PeriodCounter for FixedDayPeriods {
    fn periods_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Decimal {
        let millis = (to - from).num_milliseconds();
        Decimal::from(millis) / Decimal::from(MILLIS_PER_DAY) / Decimal::from(self.days_per_period)
    }

    fn name(&self) -> String {
        format!("fixed {}-day periods", self.days_per_period)
    }
}

/// 30-day periods from `now` until `first_payment_date`
pub fn elapsed_periods(first_payment_date: DateTime<Utc>, now: DateTime<Utc>) -> Decimal {
    FixedDayPeriods::thirty_day().periods_between(now, first_payment_date)
}

/// elapsed periods against the provider's current instant
pub fn elapsed_periods_with_time(
    first_payment_date: DateTime<Utc>,
    time_provider: &SafeTimeProvider,
) -> Decimal {
    elapsed_periods(first_payment_date, time_provider.now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use hourglass_rs::TimeSource;
    use rust_decimal_macros::dec;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_same_instant_is_zero() {
        assert_eq!(elapsed_periods(start(), start()), Decimal::ZERO);
    }

    #[test]
    fn test_whole_and_fractional_periods() {
        assert_eq!(elapsed_periods(start() + Duration::days(60), start()), dec!(2));
        assert_eq!(elapsed_periods(start() + Duration::days(45), start()), dec!(1.5));
        assert_eq!(elapsed_periods(start() + Duration::days(3), start()), dec!(0.1));
    }

    #[test]
    fn test_calendar_months_are_not_used() {
        // jan 1 -> mar 1 is two calendar months but 60 days in a leap year
        let march = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(elapsed_periods(march, start()), dec!(2));

        // jan 1 -> feb 1 is 31 days
        let february = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        assert!(elapsed_periods(february, start()) > Decimal::ONE);
    }

    #[test]
    fn test_past_date_is_negative() {
        assert_eq!(elapsed_periods(start() - Duration::days(30), start()), dec!(-1));
    }

    #[test]
    fn test_sub_day_precision() {
        let periods = elapsed_periods(start() + Duration::hours(12), start());
        assert_eq!(periods.round_dp(6), dec!(0.016667));
    }

    #[test]
    fn test_custom_period_length() {
        let weekly = FixedDayPeriods::new(7).unwrap();
        assert_eq!(weekly.periods_between(start(), start() + Duration::days(21)), dec!(3));
        assert_eq!(weekly.name(), "fixed 7-day periods");
    }

    #[test]
    fn test_zero_day_period_rejected() {
        assert!(matches!(
            FixedDayPeriods::new(0),
            Err(QuoteError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_with_time_provider() {
        let time = SafeTimeProvider::new(TimeSource::Test(start()));
        let control = time.test_control().unwrap();
        let first_payment = start() + Duration::days(90);

        assert_eq!(elapsed_periods_with_time(first_payment, &time), dec!(3));

        control.advance(Duration::days(30));
        assert_eq!(elapsed_periods_with_time(first_payment, &time), dec!(2));

        control.advance(Duration::days(90));
        assert_eq!(elapsed_periods_with_time(first_payment, &time), dec!(-1));
    }
}
