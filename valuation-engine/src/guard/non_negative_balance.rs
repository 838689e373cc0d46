use super::{GuardContext, GuardDecision, Policy};
use crate::error::EngineError;
use crate::models::TransactionIntent;
use reel::Side;

/// Refuses sells that would leave the portfolio total below zero.
///
/// Only installed when `allow_negative_balance` is off.
pub struct NonNegativeBalancePolicy;

impl Policy for NonNegativeBalancePolicy {
    fn name(&self) -> &str {
        "NonNegativeBalance"
    }

    fn check(&self, intent: &TransactionIntent, ctx: &GuardContext) -> GuardDecision {
        if intent.side() == Side::Buy {
            return GuardDecision::Approved;
        }

        let balance = ctx.portfolio.total_value();
        let requested = intent.investment_value(ctx.instrument.price());
        if balance - requested < 0.0 {
            return GuardDecision::Rejected(EngineError::NegativeBalance { balance, requested });
        }

        GuardDecision::Approved
    }
}
