pub mod model;
pub mod traits;

pub use model::instrument::{Instrument, InstrumentId, Profile};
pub use model::market_data::{PricePoint, PriceSeries};
pub use model::notification::Notification;
pub use model::side::Side;
pub use model::watchlist::WatchlistEntry;
pub use traits::catalog::Catalog;
pub use traits::series_generator::SeriesGenerator;
