use chrono::{DateTime, Utc};
use hourglass_rs::{SafeTimeProvider, TimeSource};
use uuid::Uuid;

use crate::comparison::Comparison;
use crate::config::EngineConfig;
use crate::errors::{QuoteError, Result};
use crate::events::{Event, EventStore};
use crate::quote::Quote;
use crate::schedule::NominalSchedule;
use crate::types::CalculationId;
use crate::valuation::{discount, Aggregate, FixedDayPeriods, PeriodCounter, Recommendation};

/// present-value engine comparing a cash price against an installment plan
///
/// Holds configuration and an audit trail only; every calculation starts
/// from scratch.
pub struct InstallmentCalculator {
    config: EngineConfig,
    periods: Box<dyn PeriodCounter>,
    events: EventStore,
}

impl InstallmentCalculator {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let periods = FixedDayPeriods::new(config.days_per_period)?;

        Ok(Self {
            config,
            periods: Box::new(periods),
            events: EventStore::new(),
        })
    }

    /// 30-day periods, cents, raw cash price baseline
    pub fn standard() -> Self {
        Self {
            config: EngineConfig::standard(),
            periods: Box::new(FixedDayPeriods::thirty_day()),
            events: EventStore::new(),
        }
    }

    /// replace the period-counting strategy
    pub fn with_period_counter(mut self, periods: Box<dyn PeriodCounter>) -> Self {
        self.periods = periods;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn period_counter_name(&self) -> String {
        self.periods.name()
    }

    /// evaluate against the system clock
    pub fn compute(&mut self, quote: &Quote) -> Result<Comparison> {
        let time = SafeTimeProvider::new(TimeSource::System);
        self.compute_with_time(quote, &time)
    }

    /// evaluate against the provider's clock, read exactly once
    pub fn compute_with_time(
        &mut self,
        quote: &Quote,
        time_provider: &SafeTimeProvider,
    ) -> Result<Comparison> {
        let now = time_provider.now();
        self.compute_at(quote, now)
    }

    /// evaluate with an explicit reference instant
    pub fn compute_at(&mut self, quote: &Quote, now: DateTime<Utc>) -> Result<Comparison> {
        let calculation_id = Uuid::new_v4();

        self.events.emit(Event::CalculationStarted {
            calculation_id,
            installment_count: quote.installment_count,
            first_payment_date: quote.first_payment_date,
            timestamp: now,
        });

        match self.evaluate(calculation_id, quote, now) {
            Ok(comparison) => {
                tracing::debug!(
                    %calculation_id,
                    elapsed_periods = %comparison.elapsed_periods,
                    total_present_value = %comparison.total_present_value,
                    option = %comparison.recommended_option(),
                    "quote evaluated"
                );

                self.events.emit(Event::ScheduleDiscounted {
                    calculation_id,
                    elapsed_periods: comparison.elapsed_periods,
                    total_present_value: comparison.total_present_value,
                    timestamp: now,
                });
                self.events.emit(Event::RecommendationIssued {
                    calculation_id,
                    option: comparison.recommendation.option,
                    baseline: comparison.recommendation.baseline,
                    baseline_amount: comparison.recommendation.baseline_amount,
                    total_present_value: comparison.total_present_value,
                    timestamp: now,
                });

                Ok(comparison)
            }
            Err(error) => {
                tracing::warn!(%calculation_id, %error, "quote rejected");
                self.events.emit(Event::rejected(calculation_id, &error, now));
                Err(error)
            }
        }
    }

    fn evaluate(
        &self,
        calculation_id: CalculationId,
        quote: &Quote,
        now: DateTime<Utc>,
    ) -> Result<Comparison> {
        quote.validate()?;

        let elapsed_periods = self.periods.periods_between(now, quote.first_payment_date);
        let nominal = NominalSchedule::generate(quote.installment_price, quote.installment_count)?;
        let discounted = discount(&nominal, quote.inflation_rate(), elapsed_periods)?;

        let aggregate = Aggregate::from_schedule(
            &discounted,
            quote.installment_price,
            quote.cash_price,
            quote.discount_percentage,
            self.config.display_decimals,
        )?;
        // cash price is already known to be positive here
        let recharge_percentage =
            aggregate
                .recharge_percentage
                .ok_or_else(|| QuoteError::CalculationError {
                    message: format!(
                        "recharge of {} over {} exceeds the decimal range",
                        quote.installment_price, quote.cash_price
                    ),
                })?;

        let recommendation = Recommendation::against(
            aggregate.total_present_value,
            self.config.comparison_baseline,
            quote.cash_price,
            aggregate.discounted_cash_price,
        );

        Ok(Comparison {
            calculation_id,
            calculated_at: now,
            quote: quote.clone(),
            elapsed_periods,
            installment_amount: nominal.installment_amount(),
            discounted_schedule: discounted,
            display_decimals: self.config.display_decimals,
            total_present_value: aggregate.total_present_value,
            recharge_percentage,
            total_cash_price: aggregate.discounted_cash_price,
            recommendation,
        })
    }

    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }
}

impl Default for InstallmentCalculator {
    fn default() -> Self {
        Self::standard()
    }
}

/// one-shot evaluation with the standard configuration and system clock
pub fn compute(quote: &Quote) -> Result<Comparison> {
    InstallmentCalculator::standard().compute(quote)
}

/// one-shot evaluation with the standard configuration at a fixed instant
pub fn compute_at(quote: &Quote, now: DateTime<Utc>) -> Result<Comparison> {
    InstallmentCalculator::standard().compute_at(quote, now)
}
