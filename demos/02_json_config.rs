/// json config - load engine settings and quotes from json
use installment_pv_rs::{EngineConfig, InstallmentCalculator, Quote};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = EngineConfig::from_json(
        r#"{
            "days_per_period": 30,
            "comparison_baseline": "CashPrice"
        }"#,
    )?;
    println!("config:\n{}\n", config.to_json()?);

    let quote: Quote = serde_json::from_str(
        r#"{
            "cash_price": "45000",
            "installment_price": "54000",
            "monthly_inflation_rate_percent": "4.2",
            "installment_count": 6,
            "first_payment_date": "2024-02-15T00:00:00Z"
        }"#,
    )?;

    let now =
        chrono::DateTime::parse_from_rfc3339("2024-01-15T00:00:00Z")?.with_timezone(&chrono::Utc);
    let mut calculator = InstallmentCalculator::new(config)?;
    let comparison = calculator.compute_at(&quote, now)?;

    println!("{}", comparison.json());

    Ok(())
}
