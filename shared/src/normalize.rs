//! Product name normalization
//!
//! Products are keyed by name rather than a stable id, so grouping,
//! allocation, and duplicate-import detection must all agree on what "the
//! same name" means. This helper is the single definition of that rule.

/// Normalize a product name for matching: trim surrounding whitespace and
/// lowercase. Two batches belong to the same product iff their normalized
/// names are equal.
pub fn product_key(name: &str) -> String {
    name.trim().to_lowercase()
}
