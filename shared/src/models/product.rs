//! Grouped product view derived from a batch snapshot

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Batch;

/// Reorder-level average assumed for a product with no valid batches.
/// Inherited business policy, preserved as-is; confirm with product
/// owners before treating it as load-bearing.
pub const DEFAULT_REORDER_FALLBACK: i64 = 10;

/// Aggregate view of every batch sharing one product name, as shown in
/// the catalog and search UI. Derived per request; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupedProduct {
    /// First-seen raw name, trimmed (display form)
    pub name: String,
    /// All batches for the name, ascending by expiry date
    pub batches: Vec<Batch>,
    /// Batches with stock remaining and not expired, same order
    pub valid_batches: Vec<Batch>,
    /// Sum of `current_stock` over `valid_batches`; expired and empty
    /// lots contribute zero
    pub total_stock: i64,
    /// Min effective price over valid batches with a positive price;
    /// zero when none qualify
    pub lowest_price: Decimal,
    /// Max effective price over valid batches with a positive price;
    /// zero when none qualify
    pub highest_price: Decimal,
    /// Effective price of the first valid batch, or of the first batch
    /// overall so a fully-expired product still shows a reference price
    pub display_price: Decimal,
    pub has_multiple_batches: bool,
    /// True iff any batch (sellable or not) is expired, so operators can
    /// spot waste even while other lots keep the product sellable
    pub has_expired_batch: bool,
    pub has_low_stock: bool,
}

impl GroupedProduct {
    /// The batch a FEFO sale would deduct from first
    pub fn earliest_valid_batch(&self) -> Option<&Batch> {
        self.valid_batches.first()
    }
}
