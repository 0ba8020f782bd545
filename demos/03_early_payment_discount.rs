/// early payment discount - compare against both cash figures
use installment_pv_rs::{compute, ComparisonBaseline, Money, Quote};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let quote = Quote::builder()
        .cash_price(Money::from_major(950))
        .installment_price(Money::from_major(1_000))
        .monthly_inflation_percent(dec!(2.5))
        .installments(10)
        .discount_percentage(dec!(15))
        .build()?;

    let comparison = compute(&quote)?;

    println!("present value of installments: ${}", comparison.total_present_value);
    println!("recharge over cash: {}%", comparison.recharge_percentage.round_dp(2));

    for baseline in [ComparisonBaseline::CashPrice, ComparisonBaseline::DiscountedCashPrice] {
        let recommendation = comparison.recommend_against(baseline);
        println!(
            "against {:?} of ${}: {} (saves ${})",
            baseline,
            recommendation.baseline_amount.round_cents(),
            recommendation.option,
            recommendation.savings.round_cents(),
        );
    }

    Ok(())
}
