use serde::{Deserialize, Serialize};

/// One slice of the sector breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorAllocation {
    name: String,
    value: f64,
}

impl SectorAllocation {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Display-only breakdown of notional value by sector.
///
/// Independent of `Portfolio::total_value`: nothing ties the sum of the slices to the total,
/// and transactions never touch it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    sectors: Vec<SectorAllocation>,
}

impl Distribution {
    pub fn new(sectors: Vec<SectorAllocation>) -> Self {
        Self { sectors }
    }

    /// The film sector breakdown the dashboard opens with.
    pub fn film_sectors() -> Self {
        Self::new(vec![
            SectorAllocation::new("Bollywood Action", 5000.0),
            SectorAllocation::new("Romance", 3500.0),
            SectorAllocation::new("Drama", 2500.0),
            SectorAllocation::new("Thriller", 1800.0),
            SectorAllocation::new("Comedy", 1500.0),
        ])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SectorAllocation> {
        self.sectors.iter()
    }

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.sectors.iter().map(|s| s.value).sum()
    }

    /// Each sector's share of the breakdown's own total, as a percentage (chart labels).
    pub fn shares(&self) -> Vec<(&str, f64)> {
        let total = self.total();
        self.sectors
            .iter()
            .map(|s| {
                let pct = if total > 0.0 {
                    s.value / total * 100.0
                } else {
                    0.0
                };
                (s.name.as_str(), pct)
            })
            .collect()
    }
}

/// Aggregate session holdings.
///
/// There is no position ledger: buys and sells only move the two scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    total_value: f64,
    cumulative_change: f64,
    distribution: Distribution,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Portfolio {
    pub fn new(total_value: f64, cumulative_change: f64, distribution: Distribution) -> Self {
        Self {
            total_value,
            cumulative_change,
            distribution,
        }
    }

    /// Session-start values.
    pub fn seeded() -> Self {
        Self::new(250_000.0, 7_500.0, Distribution::film_sectors())
    }

    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    pub fn cumulative_change(&self) -> f64 {
        self.cumulative_change
    }

    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    /// Cumulative change as a percentage of the current total value.
    pub fn change_percent(&self) -> f64 {
        if self.total_value == 0.0 {
            0.0
        } else {
            self.cumulative_change / self.total_value * 100.0
        }
    }

    /// Copy of `self` with new scalars. The distribution is carried over untouched.
    pub(crate) fn with_totals(&self, total_value: f64, cumulative_change: f64) -> Self {
        Self {
            total_value,
            cumulative_change,
            distribution: self.distribution.clone(),
        }
    }
}
