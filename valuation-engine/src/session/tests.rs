use super::*;
use crate::models::EngineConfig;
use chrono::NaiveDate;
use reel::{PricePoint, PriceSeries};
use reel_core::model::WatchlistStore;
use std::time::Duration;
use tokio::time::Instant;

struct FlatSeries;
impl SeriesGenerator for FlatSeries {
    fn generate(&mut self) -> PriceSeries {
        PriceSeries::new((1..=30).map(|d| PricePoint::new(d, 15.0, 1000.0)).collect())
    }
}

fn entry(id: u64, title: &str, price: f64) -> WatchlistEntry {
    WatchlistEntry::new(
        id,
        title,
        price,
        0.0,
        "Action",
        NaiveDate::from_ymd_opt(2024, 1, 25).unwrap(),
    )
}

fn session() -> Session {
    Session::new(Engine::default(), Portfolio::seeded())
}

#[test]
fn test_buy_without_selection_is_rejected_with_feedback() {
    let mut s = session();
    assert_eq!(s.buy().unwrap_err(), EngineError::NoInstrumentSelected);
    assert_eq!(s.portfolio(), &Portfolio::seeded());

    let n = s.notification().unwrap();
    assert_eq!(n.title, "Transaction Rejected");
    assert_eq!(n.description, "No instrument selected");
}

#[tokio::test(start_paused = true)]
async fn test_buy_updates_state_and_notification() {
    let mut s = session();
    s.select(&entry(1, "Pathaan", 25.50), &mut FlatSeries);

    let receipt = s.buy().unwrap();
    assert!((receipt.investment_value - 12.75).abs() < 1e-9);
    assert!((s.portfolio().total_value() - 250_012.75).abs() < 1e-9);
    assert_eq!(s.notification().unwrap().title, "Investment Successful");
}

#[tokio::test(start_paused = true)]
async fn test_failed_sell_leaves_portfolio_untouched() {
    let config = EngineConfig::default().with_allow_negative_balance(false);
    let mut s = Session::new(
        Engine::new(config),
        Portfolio::new(1.0, 0.0, Distribution::default()),
    );
    s.select(&entry(2, "KGF Chapter 3", 30.75), &mut FlatSeries);
    s.set_allocation(100.0).unwrap();

    let before = s.portfolio().clone();
    assert!(matches!(
        s.sell(),
        Err(EngineError::NegativeBalance { .. })
    ));
    assert_eq!(s.portfolio(), &before);
    assert_eq!(s.notification().unwrap().title, "Transaction Rejected");
}

#[test]
fn test_allocation_setter_bounds() {
    let mut s = session();
    assert_eq!(s.allocation(), DEFAULT_ALLOCATION);

    s.set_allocation(0.0).unwrap();
    s.set_allocation(100.0).unwrap();
    assert_eq!(
        s.set_allocation(150.0),
        Err(EngineError::InvalidAllocation(150.0))
    );
    assert_eq!(s.allocation(), 100.0);
}

#[tokio::test(start_paused = true)]
async fn test_selection_generates_history() {
    let mut s = session();
    let selected = s.select(&entry(3, "Liger", 18.40), &mut FlatSeries);
    assert_eq!(selected.history().len(), 30);
    assert_eq!(selected.price(), 18.40);
}

#[tokio::test(start_paused = true)]
async fn test_breaking_news_follows_latest_selection() {
    let mut s = session();
    s.select(&entry(1, "Pathaan", 25.50), &mut FlatSeries);
    tokio::time::sleep(Duration::from_secs(2)).await;

    let start = Instant::now();
    s.select(&entry(3, "Liger", 18.40), &mut FlatSeries);

    let alert = s.next_alert().await.unwrap();
    assert_eq!(alert.description, "Liger director announces surprise cameo!");
    assert!(start.elapsed() >= Duration::from_secs(5));
    assert_eq!(s.notification(), Some(&alert));

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(s.poll_alert().is_none());
    assert!(!s.has_pending_alert());
}

#[tokio::test(start_paused = true)]
async fn test_trade_notification_is_overwritten_by_news() {
    let mut s = session();
    s.select(&entry(1, "Pathaan", 25.50), &mut FlatSeries);
    s.sell().unwrap();
    assert_eq!(s.notification().unwrap().title, "Sale Successful");

    tokio::time::sleep(Duration::from_secs(6)).await;
    assert_eq!(s.poll_alert().unwrap().title, "Breaking News");
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_cancels_pending_alert() {
    let mut s = session();
    s.select(&entry(1, "Pathaan", 25.50), &mut FlatSeries);
    assert!(s.has_pending_alert());

    s.shutdown();
    tokio::time::sleep(Duration::from_secs(6)).await;
    assert!(s.poll_alert().is_none());
    assert!(s.notification().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_removing_selected_entry_keeps_snapshot() {
    let mut store = WatchlistStore::seeded_dashboard();
    let mut s = session();

    let pathaan = store.get(1).cloned().unwrap();
    s.select(&pathaan, &mut FlatSeries);
    store.remove(1).unwrap();

    assert!(store.get(1).is_none());
    assert_eq!(s.selected().unwrap().title(), "Pathaan");
    assert!(s.buy().is_ok());
}
