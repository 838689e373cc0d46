use thiserror::Error;

/// Failures raised by the catalog and the watchlist store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The title is not listed in the catalog.
    #[error("Unknown instrument: '{0}' is not in the catalog")]
    UnknownInstrument(String),

    /// A watchlist entry needs a title and a positive price.
    #[error("Cannot track '{title}' at price {price}: a title and a positive price are required")]
    InvalidEntry { title: String, price: f64 },
}
