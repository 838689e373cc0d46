//! Defines the `Catalog` trait for base price lookups.

/// A read-only mapping from movie title to base price.
///
/// # Examples
///
/// ```
/// use reel::traits::catalog::Catalog;
///
/// struct OneMovie;
///
/// impl Catalog for OneMovie {
///     fn lookup(&self, title: &str) -> Option<f64> {
///         (title == "Sholay").then_some(9.99)
///     }
///
///     fn titles(&self) -> Vec<&str> {
///         vec!["Sholay"]
///     }
/// }
///
/// assert_eq!(OneMovie.lookup("Sholay"), Some(9.99));
/// assert_eq!(OneMovie.lookup("PK"), None);
/// ```
pub trait Catalog {
    /// Returns the base price for `title`, or `None` when the title is not listed.
    fn lookup(&self, title: &str) -> Option<f64>;

    /// All listed titles, in display order.
    fn titles(&self) -> Vec<&str>;
}
