use crate::error::CatalogError;
use crate::fs::{load_state, save_state};
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use log::{debug, info};
use reel::{Catalog, InstrumentId, WatchlistEntry};
use std::path::{Path, PathBuf};

/// File name used inside the data directory.
pub const WATCHLIST_FILE_NAME: &str = "watchlist.json";

/// Ordered, user-curated list of tracked movies.
///
/// When backed by a file, the whole list is written back after every mutation. An in-memory
/// store (no file) behaves the same minus the writes.
#[derive(Debug)]
pub struct WatchlistStore {
    entries: Vec<WatchlistEntry>,
    file_path: Option<PathBuf>,
}

impl WatchlistStore {
    /// Loads the store from `path`. A missing file starts an empty list.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = path.into();
        let entries = if file_path.exists() {
            load_state(&file_path)
                .with_context(|| format!("Failed to load watchlist from {:?}", file_path))?
        } else {
            Vec::new()
        };
        info!(
            "Watchlist loaded from {:?} ({} entries)",
            file_path,
            entries.len()
        );
        Ok(Self {
            entries,
            file_path: Some(file_path),
        })
    }

    /// Loads `watchlist.json` from the given data directory.
    pub fn open_in(data_dir: &Path) -> Result<Self> {
        Self::open(data_dir.join(WATCHLIST_FILE_NAME))
    }

    pub fn in_memory(entries: Vec<WatchlistEntry>) -> Self {
        Self {
            entries,
            file_path: None,
        }
    }

    /// The four movies the dashboard ships with.
    pub fn seeded_dashboard() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN);
        Self::in_memory(vec![
            WatchlistEntry::new(1, "Pathaan", 25.50, 3.2, "Action", date(2024, 1, 25)),
            WatchlistEntry::new(2, "KGF Chapter 3", 30.75, -0.8, "Action", date(2024, 5, 10)),
            WatchlistEntry::new(3, "Liger", 18.40, 1.5, "Sports Drama", date(2023, 12, 15)),
            WatchlistEntry::new(
                4,
                "Gangubai Kathiawadi",
                22.10,
                2.0,
                "Biographical",
                date(2023, 11, 5),
            ),
        ])
    }

    pub fn entries(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: InstrumentId) -> Option<&WatchlistEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Appends a new entry with neutral metadata and persists the list.
    pub fn add(&mut self, title: &str, price: f64) -> Result<WatchlistEntry> {
        if title.trim().is_empty() || !(price > 0.0) {
            return Err(CatalogError::InvalidEntry {
                title: title.to_string(),
                price,
            }
            .into());
        }

        let now = Utc::now();
        let entry = WatchlistEntry::new(
            self.next_id(now.timestamp_millis().max(0) as InstrumentId),
            title,
            price,
            0.0,
            "Unknown",
            now.date_naive(),
        );
        debug!("Adding '{}' to watchlist as id {}", entry.title, entry.id);
        let mut next = self.entries.clone();
        next.push(entry.clone());
        self.commit(next)?;
        Ok(entry)
    }

    /// Adds a catalog title at its listed base price.
    pub fn add_from_catalog(
        &mut self,
        catalog: &impl Catalog,
        title: &str,
    ) -> Result<WatchlistEntry> {
        let price = catalog
            .lookup(title)
            .ok_or_else(|| CatalogError::UnknownInstrument(title.to_string()))?;
        self.add(title, price)
    }

    /// Removes the entry with `id`. Persists only if something was removed.
    pub fn remove(&mut self, id: InstrumentId) -> Result<Option<WatchlistEntry>> {
        let Some(index) = self.entries.iter().position(|e| e.id == id) else {
            return Ok(None);
        };
        let mut next = self.entries.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        debug!("Removed '{}' (id {}) from watchlist", removed.title, id);
        Ok(Some(removed))
    }

    /// Entries sorted by percent change, best first.
    pub fn top_movers(&self, n: usize) -> Vec<&WatchlistEntry> {
        let mut sorted: Vec<&WatchlistEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.change.total_cmp(&a.change));
        sorted.truncate(n);
        sorted
    }

    // Millisecond ids can collide when entries are added in quick succession.
    fn next_id(&self, candidate: InstrumentId) -> InstrumentId {
        match self.entries.iter().map(|e| e.id).max() {
            Some(max) if max >= candidate => max + 1,
            _ => candidate,
        }
    }

    /// Writes `next` first and only then adopts it, so a failed save leaves memory and
    /// file in agreement.
    fn commit(&mut self, next: Vec<WatchlistEntry>) -> Result<()> {
        if let Some(path) = &self.file_path {
            save_state(path, &next)
                .with_context(|| format!("Failed to save watchlist to {:?}", path))?;
        }
        self.entries = next;
        Ok(())
    }
}
