/// time control - deterministic results with a controlled clock
use chrono::{Duration, TimeZone, Utc};
use installment_pv_rs::{InstallmentCalculator, Money, Quote, SafeTimeProvider, TimeSource};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== time control example ===\n");

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    ));
    let controller = time.test_control().unwrap();

    // first installment due in 60 days
    let quote = Quote::builder()
        .cash_price(Money::from_major(100))
        .installment_price(Money::from_major(110))
        .monthly_inflation_percent(dec!(10))
        .installments(1)
        .first_payment_date(time.now() + Duration::days(60))
        .build_with_time(&time)?;

    let mut calculator = InstallmentCalculator::standard();

    for _ in 0..4 {
        let comparison = calculator.compute_with_time(&quote, &time)?;
        println!(
            "{}: {} periods to first payment, present value ${}, {} wins",
            time.now().format("%Y-%m-%d"),
            comparison.elapsed_periods.round_dp(2),
            comparison.total_present_value,
            comparison.recommended_option(),
        );
        controller.advance(Duration::days(30));
    }

    println!("\n{} events recorded", calculator.take_events().len());

    Ok(())
}
