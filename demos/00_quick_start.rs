/// quick start - minimal example to get started
use installment_pv_rs::{compute, Money, Quote};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // $1,000 cash or $1,200 in 12 monthly installments starting today
    let quote = Quote::builder()
        .cash_price(Money::from_major(1_000))
        .installment_price(Money::from_major(1_200))
        .monthly_inflation_percent(dec!(12.4))
        .installments(12)
        .build()?;

    let comparison = compute(&quote)?;

    println!("{} is cheaper", comparison.recommended_option());
    println!("{}", comparison.json());

    Ok(())
}
