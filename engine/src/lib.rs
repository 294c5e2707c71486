//! Lot-based stock allocation engine for the pharmacy platform
//!
//! Pure, synchronous computation over a snapshot of batch records:
//! grouping/aggregation for catalog display, and FEFO (first-expired,
//! first-out) deduction planning for checkout. The engine performs no I/O
//! and holds no state between calls; two cashiers computing plans
//! concurrently each work against their own snapshot, and the "never sell
//! stock twice" guarantee is enforced where the plans are applied, with
//! conditionally-guarded decrements and recompute-on-conflict.

pub mod error;
pub mod services;

pub use error::{EngineError, EngineResult};
pub use services::*;
