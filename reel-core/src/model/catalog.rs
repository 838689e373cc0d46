use reel::Catalog;

use crate::error::CatalogError;

const MOVIES: &[(&str, f64)] = &[
    ("The Avengers", 15.99),
    ("Inception", 12.99),
    ("The Shawshank Redemption", 9.99),
    ("Pulp Fiction", 11.99),
    ("The Dark Knight", 14.99),
    ("Forrest Gump", 10.99),
    ("The Matrix", 13.99),
    ("Goodfellas", 11.99),
    ("The Silence of the Lambs", 10.99),
    ("Schindler's List", 12.99),
    ("Lagaan", 10.99),
    ("3 Idiots", 12.99),
    ("Dangal", 13.99),
    ("Baahubali: The Beginning", 14.99),
    ("PK", 11.99),
    ("Sholay", 9.99),
    ("Dilwale Dulhania Le Jayenge", 10.99),
    ("Andhadhun", 12.99),
    ("Gangs of Wasseypur", 13.99),
    ("Mughal-e-Azam", 11.99),
    ("Kabhi Khushi Kabhie Gham", 12.99),
    ("Drishyam", 11.99),
    ("Bajrangi Bhaijaan", 13.99),
    ("Gully Boy", 12.99),
    ("Padmaavat", 14.99),
];

/// The built-in movie price list.
///
/// Can also be built from arbitrary pairs for tests.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    movies: Vec<(String, f64)>,
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::from_pairs(MOVIES.iter().map(|(t, p)| (t.to_string(), *p)))
    }
}

impl StaticCatalog {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            movies: pairs.into_iter().collect(),
        }
    }

    /// Same as [`Catalog::lookup`] but a miss is an error rather than a silent zero.
    pub fn price_of(&self, title: &str) -> Result<f64, CatalogError> {
        self.lookup(title)
            .ok_or_else(|| CatalogError::UnknownInstrument(title.to_string()))
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl Catalog for StaticCatalog {
    fn lookup(&self, title: &str) -> Option<f64> {
        self.movies
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, price)| *price)
    }

    fn titles(&self) -> Vec<&str> {
        self.movies.iter().map(|(t, _)| t.as_str()).collect()
    }
}
