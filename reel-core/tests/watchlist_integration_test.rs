use anyhow::Result;
use reel::{Instrument, SeriesGenerator};
use reel_core::feed::RandomSeries;
use reel_core::model::{StaticCatalog, WatchlistStore};

#[test]
fn test_catalog_to_watchlist_to_selection() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir()?;
    let catalog = StaticCatalog::default();
    let mut store = WatchlistStore::open_in(dir.path())?;

    let entry = store.add_from_catalog(&catalog, "3 Idiots")?;
    assert_eq!(entry.price, 12.99);

    let mut generator = RandomSeries::seeded(3);
    let selected = Instrument::from_entry(&entry, generator.generate());

    // Removing the selected entry leaves the snapshot intact.
    store.remove(entry.id)?;
    assert!(store.get(entry.id).is_none());
    assert_eq!(selected.title(), "3 Idiots");
    assert_eq!(selected.history().len(), 30);

    let reloaded = WatchlistStore::open_in(dir.path())?;
    assert!(reloaded.is_empty());
    Ok(())
}
