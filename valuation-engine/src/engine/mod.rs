use crate::error::EngineError;
use crate::guard::{GuardContext, TransactionGuard};
use crate::models::{EngineConfig, Portfolio, Receipt, Trade, TransactionIntent};
use crate::tax;
use log::info;
use reel::{Instrument, Notification, Side};

/// Applies buy/sell intents to a portfolio.
///
/// Stateless apart from its configuration: every call takes the current portfolio by
/// reference and hands back the next one, so a rejected intent leaves nothing half-applied.
pub struct Engine {
    config: EngineConfig,
    guard: TransactionGuard,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let guard = TransactionGuard::for_config(&config);
        Self { config, guard }
    }

    pub fn with_guard(config: EngineConfig, guard: TransactionGuard) -> Self {
        Self { config, guard }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn buy(
        &self,
        portfolio: &Portfolio,
        instrument: &Instrument,
        allocation_percent: f64,
    ) -> Result<Trade, EngineError> {
        self.execute(portfolio, instrument, TransactionIntent::buy(allocation_percent))
    }

    pub fn sell(
        &self,
        portfolio: &Portfolio,
        instrument: &Instrument,
        allocation_percent: f64,
    ) -> Result<Trade, EngineError> {
        self.execute(portfolio, instrument, TransactionIntent::sell(allocation_percent))
    }

    pub fn execute(
        &self,
        portfolio: &Portfolio,
        instrument: &Instrument,
        intent: TransactionIntent,
    ) -> Result<Trade, EngineError> {
        let ctx = GuardContext {
            portfolio,
            instrument,
        };
        self.guard.check(&intent, &ctx)?;

        let mut receipt = Receipt::new(
            intent.side(),
            instrument.id(),
            instrument.title(),
            intent.allocation_percent(),
        );
        let investment_value = intent.investment_value(instrument.price());
        receipt.investment_value = investment_value;

        let (next, notification) = match intent.side() {
            Side::Buy => {
                let gross_profit = investment_value * self.config.profit_rate();
                let tax = tax::tax(gross_profit, self.config.tax_rate());
                receipt.gross_profit = gross_profit;
                receipt.tax = tax;
                receipt.net_change = gross_profit - tax;

                (
                    portfolio.with_totals(
                        portfolio.total_value() + investment_value,
                        portfolio.cumulative_change() + receipt.net_change,
                    ),
                    Notification::bought(instrument.title(), investment_value, receipt.net_change),
                )
            }
            Side::Sell => {
                receipt.net_change = -(investment_value * self.config.depreciation_rate());

                (
                    portfolio.with_totals(
                        portfolio.total_value() - investment_value,
                        portfolio.cumulative_change() + receipt.net_change,
                    ),
                    Notification::sold(instrument.title(), investment_value),
                )
            }
        };

        info!(
            "{} {:.0}% of '{}' @ {:.2}: value {:.2} -> {:.2}, change {:+.4}",
            intent.side(),
            intent.allocation_percent(),
            instrument.title(),
            instrument.price(),
            portfolio.total_value(),
            next.total_value(),
            receipt.net_change
        );

        Ok(Trade {
            portfolio: next,
            notification,
            receipt,
        })
    }
}
