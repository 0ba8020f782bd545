use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::QuoteError;
use crate::types::{CalculationId, ComparisonBaseline, PaymentOption};

/// all events that can be emitted during a calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    CalculationStarted {
        calculation_id: CalculationId,
        installment_count: u32,
        first_payment_date: DateTime<Utc>,
        timestamp: DateTime<Utc>,
    },
    QuoteRejected {
        calculation_id: CalculationId,
        reason: String,
        invalid_input: bool,
        timestamp: DateTime<Utc>,
    },
    ScheduleDiscounted {
        calculation_id: CalculationId,
        elapsed_periods: Decimal,
        total_present_value: Money,
        timestamp: DateTime<Utc>,
    },
    RecommendationIssued {
        calculation_id: CalculationId,
        option: PaymentOption,
        baseline: ComparisonBaseline,
        baseline_amount: Money,
        total_present_value: Money,
        timestamp: DateTime<Utc>,
    },
}

impl Event {
    pub fn calculation_id(&self) -> CalculationId {
        match self {
            Event::CalculationStarted { calculation_id, .. }
            | Event::QuoteRejected { calculation_id, .. }
            | Event::ScheduleDiscounted { calculation_id, .. }
            | Event::RecommendationIssued { calculation_id, .. } => *calculation_id,
        }
    }

    pub fn rejected(
        calculation_id: CalculationId,
        error: &QuoteError,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Event::QuoteRejected {
            calculation_id,
            reason: error.to_string(),
            invalid_input: error.is_invalid_input(),
            timestamp,
        }
    }
}

/// event store for collecting events during calculations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// events belonging to one calculation, in emission order
    pub fn for_calculation(&self, calculation_id: CalculationId) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.calculation_id() == calculation_id)
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    #[test]
    fn test_emit_and_take() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        let mut store = EventStore::new();
        store.emit(Event::CalculationStarted {
            calculation_id: first,
            installment_count: 12,
            first_payment_date: now,
            timestamp: now,
        });
        store.emit(Event::rejected(
            second,
            &QuoteError::NonPositiveInstallmentCount { count: 0 },
            now,
        ));

        assert_eq!(store.events().len(), 2);
        assert_eq!(store.for_calculation(second).len(), 1);
        assert!(matches!(
            store.for_calculation(second)[0],
            Event::QuoteRejected { invalid_input: true, .. }
        ));

        let taken = store.take_events();
        assert_eq!(taken.len(), 2);
        assert_eq!(taken[0].calculation_id(), first);
        assert!(store.events().is_empty());
    }
}
