//! Deduction plan produced by the FEFO allocator

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One per-batch deduction within a plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeductionEntry {
    pub batch_id: Uuid,
    pub quantity: i64,
}

/// Ordered per-batch deductions satisfying (part of) one sale line.
///
/// Built against a fresh snapshot at checkout time, handed to the
/// persistence layer to apply as atomic per-batch decrements, then
/// discarded. A plan that deducts less than requested is not an error;
/// the checkout flow decides whether partial fulfillment is acceptable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeductionPlan {
    /// Deductions in ascending expiry order
    pub entries: Vec<DeductionEntry>,
    /// Sum of entry quantities; at most the requested quantity
    pub total_deducted: i64,
    /// Receipt fragments ("{qty}x exp {month}/{year}"), one per entry.
    /// Kept separate from `entries` so consumers that only need the plan
    /// never parse display strings.
    pub batch_expiry_info: Vec<String>,
    /// True when the sale spans more than one batch; the cashier UI uses
    /// this to show a "split across lots" notice
    pub used_multiple_batches: bool,
}

impl DeductionPlan {
    /// Receipt-ready expiry breakdown
    pub fn expiry_summary(&self) -> String {
        self.batch_expiry_info.join(", ")
    }
}
