use reel::PriceSeries;
use reel::{PricePoint, SeriesGenerator};
use reel_core::model::{StaticCatalog, WatchlistStore};
use std::io::Write;
use tempfile::tempdir;
use valuation_engine::io::{Console, Flow};
use valuation_engine::models::{EngineConfig, Portfolio, Preset};
use valuation_engine::{Engine, Session};

struct Steady;

impl SeriesGenerator for Steady {
    fn generate(&mut self) -> PriceSeries {
        PriceSeries::new((1..=30).map(|d| PricePoint::new(d, 15.0, 1000.0)).collect())
    }
}

fn feed(console: &mut Console<Steady>, lines: &[&str]) -> String {
    let mut out = Vec::new();
    for line in lines {
        if console.handle_line(line, &mut out).unwrap() == Flow::Quit {
            break;
        }
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn test_flat_preset_from_file_drives_console_trades() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("engine.toml");
    let mut file = std::fs::File::create(&config_path).unwrap();
    writeln!(file, "allow_negative_balance = false").unwrap();

    let config = EngineConfig::load(Preset::FlatMultiplier, Some(&config_path)).unwrap();
    assert!(!config.allow_negative_balance());

    let store = WatchlistStore::open_in(dir.path()).unwrap();
    let session = Session::new(Engine::new(config), Portfolio::seeded());
    let mut console = Console::new(session, store, StaticCatalog::default(), Steady);

    feed(&mut console, &["add Dangal"]);
    let id = console.store().entries()[0].id;
    let out = feed(
        &mut console,
        &[&format!("select {}", id), "alloc 100", "buy", "quit", "sell"],
    );

    // Dangal is 13.99 in the catalog; 3% of a full allocation, untaxed.
    assert!(out.contains("[Investment Successful]"));
    let p = console.session().portfolio();
    assert!((p.total_value() - 250_013.99).abs() < 1e-9);
    assert!((p.cumulative_change() - (7500.0 + 13.99 * 0.03)).abs() < 1e-9);

    // Entry survives a reopen of the same data dir.
    let reopened = WatchlistStore::open_in(dir.path()).unwrap();
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.entries()[0].title, "Dangal");
}

#[test]
fn test_oversell_rejected_when_negative_balance_disallowed() {
    let config = EngineConfig::default().with_allow_negative_balance(false);
    let session = Session::new(
        Engine::new(config),
        Portfolio::new(5.0, 0.0, Default::default()),
    );
    let mut console = Console::new(
        session,
        WatchlistStore::seeded_dashboard(),
        StaticCatalog::default(),
        Steady,
    );

    let out = feed(&mut console, &["select 3", "alloc 100", "sell"]);
    assert!(out.contains("[Transaction Rejected]"));
    assert_eq!(console.session().portfolio().total_value(), 5.0);
}
