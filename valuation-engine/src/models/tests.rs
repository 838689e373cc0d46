use super::*;
use std::io::Write;

#[test]
fn test_seeded_portfolio() {
    let p = Portfolio::seeded();
    assert_eq!(p.total_value(), 250_000.0);
    assert_eq!(p.cumulative_change(), 7_500.0);
    assert_eq!(p.distribution().len(), 5);
    assert!((p.change_percent() - 3.0).abs() < 1e-9);
}

#[test]
fn test_distribution_is_independent_of_total() {
    let p = Portfolio::seeded();
    assert!((p.distribution().total() - 14_300.0).abs() < 1e-9);
    assert_ne!(p.distribution().total(), p.total_value());

    let next = p.with_totals(1.0, -1.0);
    assert_eq!(next.distribution(), p.distribution());
}

#[test]
fn test_distribution_shares_sum_to_hundred() {
    let distribution = Distribution::film_sectors();
    let shares = distribution.shares();
    let sum: f64 = shares.iter().map(|(_, pct)| pct).sum();
    assert!((sum - 100.0).abs() < 1e-9, "Shares sum: {}", sum);
    assert_eq!(shares[0].0, "Bollywood Action");
    assert!(Distribution::default().shares().is_empty());
}

#[test]
fn test_investment_value() {
    let intent = TransactionIntent::buy(50.0);
    assert!((intent.investment_value(25.50) - 12.75).abs() < 1e-9);
    assert_eq!(TransactionIntent::sell(0.0).investment_value(99.0), 0.0);
}

#[test]
fn test_allocation_bounds() {
    assert!(is_valid_allocation(0.0));
    assert!(is_valid_allocation(100.0));
    assert!(!is_valid_allocation(-0.1));
    assert!(!is_valid_allocation(100.01));
    assert!(!is_valid_allocation(f64::NAN));
}

#[test]
fn test_presets() {
    let default = EngineConfig::default();
    assert_eq!(default, Preset::ProfitAndTax.config());
    assert_eq!(default.profit_rate(), 0.05);
    assert_eq!(default.tax_rate(), 0.15);
    assert_eq!(default.depreciation_rate(), 0.02);
    assert!(default.allow_negative_balance());

    assert_eq!(default.tax_rate(), crate::tax::LONG_TERM_GAINS_RATE);

    let flat = Preset::FlatMultiplier.config();
    assert_eq!(flat.profit_rate(), 0.03);
    assert_eq!(flat.tax_rate(), 0.0);
}

#[test]
fn test_load_config_file_overrides_preset() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "tax_rate = 0.2")?;
    writeln!(file, "allow_negative_balance = false")?;

    let config = EngineConfig::load(Preset::ProfitAndTax, Some(file.path()))?;
    assert_eq!(config.tax_rate(), 0.2);
    assert_eq!(config.profit_rate(), 0.05);
    assert!(!config.allow_negative_balance());
    Ok(())
}

#[test]
fn test_load_env_override() -> anyhow::Result<()> {
    let vars = ::config::Map::from([
        ("REEL_DEPRECIATION_RATE".to_string(), "0.04".to_string()),
        ("REEL_ALLOW_NEGATIVE_BALANCE".to_string(), "false".to_string()),
        ("OTHER_TAX_RATE".to_string(), "0.9".to_string()),
    ]);
    let env = ::config::Environment::with_prefix(ENV_PREFIX).source(Some(vars));

    let config = EngineConfig::load_with_env(Preset::FlatMultiplier, None, env)?;
    assert_eq!(config.depreciation_rate(), 0.04);
    assert!(!config.allow_negative_balance());
    assert_eq!(config.profit_rate(), 0.03);
    assert_eq!(config.tax_rate(), 0.0);
    Ok(())
}

#[test]
fn test_receipt_serialization() {
    let receipt = Receipt::new(reel::Side::Buy, 1, "Pathaan", 50.0);
    let json = serde_json::to_string(&receipt).unwrap();
    assert!(json.contains("\"side\":\"Buy\""));
    assert!(json.contains("\"title\":\"Pathaan\""));
}
