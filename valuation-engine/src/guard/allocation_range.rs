use super::{GuardContext, GuardDecision, Policy};
use crate::error::EngineError;
use crate::models::TransactionIntent;

/// Allocation must be a finite percentage in `[0, 100]`. Out-of-range input is refused,
/// never clamped.
pub struct AllocationRangePolicy;

impl Policy for AllocationRangePolicy {
    fn name(&self) -> &str {
        "AllocationRange"
    }

    fn check(&self, intent: &TransactionIntent, _ctx: &GuardContext) -> GuardDecision {
        if intent.is_within_bounds() {
            GuardDecision::Approved
        } else {
            GuardDecision::Rejected(EngineError::InvalidAllocation(intent.allocation_percent()))
        }
    }
}
