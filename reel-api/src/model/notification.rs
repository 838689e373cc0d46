//! User-facing feedback.
//!
//! Only the most recent notification is ever shown; each new one replaces the last.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn bought(movie: &str, invested: f64, net_profit: f64) -> Self {
        Self::new(
            "Investment Successful",
            format!(
                "You have invested ₹{:.2} in {}. Profit after tax: ₹{:.2}.",
                invested, movie, net_profit
            ),
        )
    }

    pub fn sold(movie: &str, amount: f64) -> Self {
        Self::new(
            "Sale Successful",
            format!("You have sold ₹{:.2} worth of shares in {}.", amount, movie),
        )
    }

    pub fn rejected(reason: impl fmt::Display) -> Self {
        Self::new("Transaction Rejected", reason.to_string())
    }

    pub fn breaking_news(movie: &str) -> Self {
        Self::new(
            "Breaking News",
            format!("{} director announces surprise cameo!", movie),
        )
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}
