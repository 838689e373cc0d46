use super::{GuardContext, GuardDecision, Policy};
use crate::error::EngineError;
use crate::models::TransactionIntent;

pub struct PricePolicy;

impl Policy for PricePolicy {
    fn name(&self) -> &str {
        "Price"
    }

    fn check(&self, _intent: &TransactionIntent, ctx: &GuardContext) -> GuardDecision {
        let price = ctx.instrument.price();
        if price.is_finite() && price >= 0.0 {
            GuardDecision::Approved
        } else {
            GuardDecision::Rejected(EngineError::InvalidPrice(price))
        }
    }
}
