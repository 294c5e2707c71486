//! Input-contract checks for batch snapshots
//!
//! The allocation engine computes over pre-validated records; these
//! helpers let the boundary (import tooling, API handlers) reject
//! malformed rows before they reach grouping or allocation.

use rust_decimal::Decimal;

use crate::models::Batch;

/// Validate a single batch record
pub fn validate_batch(batch: &Batch) -> Result<(), &'static str> {
    if batch.name.trim().is_empty() {
        return Err("Product name cannot be blank");
    }
    if batch.current_stock < 0 {
        return Err("Current stock cannot be negative");
    }
    if batch.reorder_level < 0 {
        return Err("Reorder level cannot be negative");
    }
    if batch.unit_price < Decimal::ZERO {
        return Err("Unit price cannot be negative");
    }
    if let Some(selling_price) = batch.selling_price {
        if selling_price < Decimal::ZERO {
            return Err("Selling price cannot be negative");
        }
    }
    Ok(())
}

/// Validate a requested sale quantity
pub fn validate_quantity(quantity: i64) -> Result<(), &'static str> {
    if quantity < 0 {
        return Err("Quantity cannot be negative");
    }
    Ok(())
}

/// Validate a whole snapshot, reporting the first offending record
pub fn validate_snapshot(batches: &[Batch]) -> Result<(), &'static str> {
    for batch in batches {
        validate_batch(batch)?;
    }
    Ok(())
}
