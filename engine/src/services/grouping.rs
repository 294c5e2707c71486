//! Batch aggregation for catalog display
//!
//! Collapses a flat batch snapshot into one aggregate view per distinct
//! product name, for browsing, search, and badge rendering. Read-only;
//! the deduction side of the engine lives in `allocation`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::{
    is_expired, product_key, sort_by_expiry, Batch, GroupedProduct, DEFAULT_REORDER_FALLBACK,
};

/// Group a batch snapshot by normalized product name.
///
/// Output order is the insertion order of each name's first occurrence,
/// so recently added products surface first in the catalog. Groups whose
/// batches are all expired or empty are still returned; cleanup
/// workflows need to see them.
pub fn group_by_product(batches: &[Batch], reference_now: DateTime<Utc>) -> Vec<GroupedProduct> {
    let mut key_order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<Batch>> = HashMap::new();

    for batch in batches {
        let key = product_key(&batch.name);
        if !groups.contains_key(&key) {
            key_order.push(key.clone());
        }
        groups.entry(key).or_default().push(batch.clone());
    }

    let mut products = Vec::with_capacity(key_order.len());
    for key in key_order {
        if let Some(group) = groups.remove(&key) {
            products.push(build_group(group, reference_now));
        }
    }
    products
}

fn build_group(mut batches: Vec<Batch>, reference_now: DateTime<Utc>) -> GroupedProduct {
    // Display name comes from the first batch in snapshot order, before
    // the expiry sort rearranges the group
    let name = batches
        .first()
        .map(|batch| batch.name.trim().to_string())
        .unwrap_or_default();

    sort_by_expiry(&mut batches);

    let valid_batches: Vec<Batch> = batches
        .iter()
        .filter(|batch| batch.is_valid(reference_now))
        .cloned()
        .collect();

    let total_stock: i64 = valid_batches.iter().map(|batch| batch.current_stock).sum();

    let has_expired_batch = batches
        .iter()
        .any(|batch| is_expired(batch.expiry_date, reference_now));

    let positive_prices: Vec<Decimal> = valid_batches
        .iter()
        .map(Batch::effective_price)
        .filter(|price| *price > Decimal::ZERO)
        .collect();
    let lowest_price = positive_prices.iter().min().copied().unwrap_or(Decimal::ZERO);
    let highest_price = positive_prices.iter().max().copied().unwrap_or(Decimal::ZERO);

    let display_price = valid_batches
        .first()
        .or_else(|| batches.first())
        .map(Batch::effective_price)
        .unwrap_or(Decimal::ZERO);

    let has_low_stock = Decimal::from(total_stock) <= reorder_threshold(&valid_batches);

    GroupedProduct {
        name,
        has_multiple_batches: valid_batches.len() > 1,
        valid_batches,
        batches,
        total_stock,
        lowest_price,
        highest_price,
        display_price,
        has_expired_batch,
        has_low_stock,
    }
}

/// Average reorder level over the sellable batches; a product with none
/// falls back to `DEFAULT_REORDER_FALLBACK`
fn reorder_threshold(valid_batches: &[Batch]) -> Decimal {
    if valid_batches.is_empty() {
        return Decimal::from(DEFAULT_REORDER_FALLBACK);
    }
    let total: i64 = valid_batches.iter().map(|batch| batch.reorder_level).sum();
    Decimal::from(total) / Decimal::from(valid_batches.len() as i64)
}
