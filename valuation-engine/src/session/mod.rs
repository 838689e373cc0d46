//! The per-user session.
//!
//! All mutable dashboard state lives here and changes only through the methods below: a
//! selection replaces the instrument snapshot and reschedules the breaking-news alert; a
//! transaction swaps in the engine's next portfolio or, on refusal, leaves it as it was and
//! explains why in the notification slot.

use crate::alerts::AlertScheduler;
use crate::engine::Engine;
use crate::error::EngineError;
use crate::models::{is_valid_allocation, Distribution, Portfolio, Receipt};
use log::{info, warn};
use reel::{Instrument, Notification, SeriesGenerator, Side, WatchlistEntry};

/// Allocation the slider starts at.
pub const DEFAULT_ALLOCATION: f64 = 50.0;

pub struct Session {
    engine: Engine,
    portfolio: Portfolio,
    selected: Option<Instrument>,
    allocation_percent: f64,
    notification: Option<Notification>,
    alerts: AlertScheduler,
}

impl Session {
    pub fn new(engine: Engine, portfolio: Portfolio) -> Self {
        let alerts = AlertScheduler::new(engine.config().news_delay());
        Self {
            engine,
            portfolio,
            selected: None,
            allocation_percent: DEFAULT_ALLOCATION,
            notification: None,
            alerts,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn distribution(&self) -> &Distribution {
        self.portfolio.distribution()
    }

    pub fn selected(&self) -> Option<&Instrument> {
        self.selected.as_ref()
    }

    pub fn allocation(&self) -> f64 {
        self.allocation_percent
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Selects a watchlist entry, generating a fresh history for it.
    pub fn select(
        &mut self,
        entry: &WatchlistEntry,
        generator: &mut impl SeriesGenerator,
    ) -> &Instrument {
        self.select_instrument(Instrument::from_entry(entry, generator.generate()))
    }

    /// Replaces the selection wholesale and restarts the breaking-news timer for it.
    pub fn select_instrument(&mut self, instrument: Instrument) -> &Instrument {
        info!("Selected '{}' @ {:.2}", instrument.title(), instrument.price());
        self.alerts
            .schedule(Notification::breaking_news(instrument.title()));
        self.selected.insert(instrument)
    }

    pub fn set_allocation(&mut self, percent: f64) -> Result<(), EngineError> {
        if !is_valid_allocation(percent) {
            return Err(EngineError::InvalidAllocation(percent));
        }
        self.allocation_percent = percent;
        Ok(())
    }

    pub fn buy(&mut self) -> Result<Receipt, EngineError> {
        self.transact(Side::Buy)
    }

    pub fn sell(&mut self) -> Result<Receipt, EngineError> {
        self.transact(Side::Sell)
    }

    fn transact(&mut self, side: Side) -> Result<Receipt, EngineError> {
        let result = match &self.selected {
            Some(instrument) => match side {
                Side::Buy => self
                    .engine
                    .buy(&self.portfolio, instrument, self.allocation_percent),
                Side::Sell => self
                    .engine
                    .sell(&self.portfolio, instrument, self.allocation_percent),
            },
            None => Err(EngineError::NoInstrumentSelected),
        };

        match result {
            Ok(trade) => {
                self.portfolio = trade.portfolio;
                self.notification = Some(trade.notification);
                Ok(trade.receipt)
            }
            Err(e) => {
                warn!("{} refused: {}", side, e);
                self.notify(Notification::rejected(&e));
                Err(e)
            }
        }
    }

    /// Overwrites the notification slot.
    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub fn has_pending_alert(&self) -> bool {
        self.alerts.has_pending()
    }

    /// Waits for the breaking-news alert of the current selection and shows it.
    pub async fn next_alert(&mut self) -> Option<Notification> {
        let alert = self.alerts.next().await?;
        self.notification = Some(alert.clone());
        Some(alert)
    }

    /// Shows the breaking-news alert if it has already fired.
    pub fn poll_alert(&mut self) -> Option<&Notification> {
        let alert = self.alerts.try_next()?;
        self.notification = Some(alert);
        self.notification.as_ref()
    }

    /// Teardown: cancels any pending alert.
    pub fn shutdown(&mut self) {
        if self.alerts.cancel() {
            info!("Pending alert cancelled on shutdown");
        }
    }
}

#[cfg(test)]
mod tests;
