use crate::error::EngineError;
use crate::models::{EngineConfig, Portfolio, TransactionIntent};
use log::warn;
use reel::Instrument;

pub mod allocation_range;
pub mod non_negative_balance;
pub mod price;

pub use allocation_range::AllocationRangePolicy;
pub use non_negative_balance::NonNegativeBalancePolicy;
pub use price::PricePolicy;

#[derive(Debug, PartialEq)]
pub enum GuardDecision {
    Approved,
    Rejected(EngineError),
}

/// Everything a policy may look at. Policies never mutate.
pub struct GuardContext<'a> {
    pub portfolio: &'a Portfolio,
    pub instrument: &'a Instrument,
}

pub trait Policy: Send + Sync {
    fn name(&self) -> &str;
    fn check(&self, intent: &TransactionIntent, ctx: &GuardContext) -> GuardDecision;
}

/// Ordered list of policies. The first rejection wins.
pub struct TransactionGuard {
    policies: Vec<Box<dyn Policy>>,
}

impl Default for TransactionGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionGuard {
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
        }
    }

    /// Standard policy set for `config`.
    pub fn for_config(config: &EngineConfig) -> Self {
        let mut guard = Self::new();
        guard.add_policy(Box::new(AllocationRangePolicy));
        guard.add_policy(Box::new(PricePolicy));
        if !config.allow_negative_balance() {
            guard.add_policy(Box::new(NonNegativeBalancePolicy));
        }
        guard
    }

    pub fn add_policy(&mut self, policy: Box<dyn Policy>) {
        self.policies.push(policy);
    }

    pub fn policy_names(&self) -> Vec<&str> {
        self.policies.iter().map(|p| p.name()).collect()
    }

    pub fn check(&self, intent: &TransactionIntent, ctx: &GuardContext) -> Result<(), EngineError> {
        for policy in &self.policies {
            match policy.check(intent, ctx) {
                GuardDecision::Rejected(reason) => {
                    warn!(
                        "{} of '{}' rejected by policy {}: {}",
                        intent.side(),
                        ctx.instrument.title(),
                        policy.name(),
                        reason
                    );
                    return Err(reason);
                }
                GuardDecision::Approved => continue,
            }
        }
        Ok(())
    }
}
