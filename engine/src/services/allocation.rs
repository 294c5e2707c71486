//! FEFO deduction planning for checkout
//!
//! Walks a product's valid batches in ascending expiry order and computes
//! the per-batch deductions for one sale line. The caller applies the
//! plan as atomic, conditionally-guarded decrements and recomputes
//! against a fresh snapshot on conflict; the engine only plans.

use chrono::{DateTime, Datelike, Utc};
use shared::{
    product_key, sort_by_expiry, validate_quantity, Batch, DeductionEntry, DeductionPlan,
};

use crate::error::{EngineError, EngineResult};

/// Compute a FEFO deduction plan for `quantity_needed` units of the
/// named product.
///
/// Earliest-expiring valid batches are depleted first. Insufficient
/// stock is not an error: the plan simply deducts what is available and
/// the checkout flow decides whether partial fulfillment is acceptable.
/// An unknown product name yields an empty plan the same way. A negative
/// quantity or a matching batch with negative stock is a caller contract
/// violation and is rejected.
pub fn allocate(
    batches: &[Batch],
    product_name: &str,
    quantity_needed: i64,
    reference_now: DateTime<Utc>,
) -> EngineResult<DeductionPlan> {
    if let Err(message) = validate_quantity(quantity_needed) {
        return Err(EngineError::validation("quantity_needed", message));
    }

    let mut candidates = find_by_name(batches, product_name);
    for batch in &candidates {
        if batch.current_stock < 0 {
            return Err(EngineError::validation(
                "current_stock",
                "Current stock cannot be negative",
            ));
        }
    }
    candidates.retain(|batch| batch.is_valid(reference_now));
    sort_by_expiry(&mut candidates);

    tracing::debug!(
        product = product_name,
        requested = quantity_needed,
        candidate_batches = candidates.len(),
        "computing FEFO deduction plan"
    );

    let mut plan = DeductionPlan::default();
    let mut remaining = quantity_needed;
    for batch in &candidates {
        if remaining == 0 {
            break;
        }
        let deducted = remaining.min(batch.current_stock);
        plan.entries.push(DeductionEntry {
            batch_id: batch.id,
            quantity: deducted,
        });
        // The receipt fragment comes out of the same loop iteration as
        // the entry, so the printed breakdown cannot drift from the plan
        plan.batch_expiry_info.push(format!(
            "{}x exp {}/{}",
            deducted,
            batch.expiry_date.month(),
            batch.expiry_date.year()
        ));
        plan.total_deducted += deducted;
        remaining -= deducted;
    }
    plan.used_multiple_batches = plan.entries.len() > 1;

    Ok(plan)
}

/// All batches whose normalized name matches `product_name`, in snapshot
/// order. Used by bulk-import tooling to decide merge-vs-create for
/// incoming rows; applies no validity filter.
pub fn find_by_name(batches: &[Batch], product_name: &str) -> Vec<Batch> {
    let key = product_key(product_name);
    batches
        .iter()
        .filter(|batch| product_key(&batch.name) == key)
        .cloned()
        .collect()
}

/// Total sellable stock for a product: the largest request `allocate`
/// could satisfy in full against this snapshot. Checkout uses this as a
/// pre-check before prompting for partial fulfillment.
pub fn available_stock(
    batches: &[Batch],
    product_name: &str,
    reference_now: DateTime<Utc>,
) -> i64 {
    let key = product_key(product_name);
    batches
        .iter()
        .filter(|batch| product_key(&batch.name) == key && batch.is_valid(reference_now))
        .map(|batch| batch.current_stock)
        .sum()
}
