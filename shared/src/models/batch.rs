//! Batch (lot) model and expiry classification

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Days before expiry at which a batch is flagged as expiring soon
pub const EXPIRY_WARNING_DAYS: i64 = 30;

/// One physical batch (lot) of a product: a single receiving event with
/// its own expiry date and remaining stock count. A product may have
/// several concurrent batches sharing a name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Batch {
    pub id: Uuid,
    /// Product name; matching is case-insensitive and whitespace-trimmed
    pub name: String,
    pub category: String,
    pub current_stock: i64,
    /// Stock threshold used for low-stock flagging
    pub reorder_level: i64,
    pub expiry_date: NaiveDate,
    pub unit_price: Decimal,
    /// Falls back to `unit_price` when absent
    pub selling_price: Option<Decimal>,
}

impl Batch {
    /// Price used for display and price-range computation
    pub fn effective_price(&self) -> Decimal {
        self.selling_price.unwrap_or(self.unit_price)
    }

    /// A batch is a sale candidate iff it has stock remaining and has not
    /// expired relative to the reference instant
    pub fn is_valid(&self, reference_now: DateTime<Utc>) -> bool {
        self.current_stock > 0 && !is_expired(self.expiry_date, reference_now)
    }
}

/// Returns true iff `expiry_date` falls strictly before the date portion
/// of `reference_now`. A batch expiring today is still sellable.
pub fn is_expired(expiry_date: NaiveDate, reference_now: DateTime<Utc>) -> bool {
    expiry_date < reference_now.date_naive()
}

/// Expiry classification for catalog badges
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    Expired,
    /// Within `EXPIRY_WARNING_DAYS` of expiry
    ExpiringSoon,
    Ok,
}

impl std::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpiryStatus::Expired => write!(f, "Expired"),
            ExpiryStatus::ExpiringSoon => write!(f, "Expiring Soon"),
            ExpiryStatus::Ok => write!(f, "OK"),
        }
    }
}

/// Classify a date for expiry badge display
pub fn expiry_status(expiry_date: NaiveDate, reference_now: DateTime<Utc>) -> ExpiryStatus {
    let today = reference_now.date_naive();
    if expiry_date < today {
        ExpiryStatus::Expired
    } else if expiry_date.signed_duration_since(today).num_days() <= EXPIRY_WARNING_DAYS {
        ExpiryStatus::ExpiringSoon
    } else {
        ExpiryStatus::Ok
    }
}

/// Sort batches ascending by expiry date. The sort is stable, so batches
/// sharing an expiry date keep their snapshot order. Grouping and
/// allocation both order batches through this helper so the catalog's
/// "earliest expiry" and the checkout's first deduction can never
/// disagree.
pub fn sort_by_expiry(batches: &mut [Batch]) {
    batches.sort_by_key(|batch| batch.expiry_date);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn reference(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_is_expired_strictly_before_reference_date() {
        let now = reference(2025, 6, 1);
        assert!(is_expired(date(2025, 5, 31), now));
        assert!(is_expired(date(2024, 6, 1), now));
    }

    #[test]
    fn test_expiring_today_is_not_expired() {
        let now = reference(2025, 6, 1);
        assert!(!is_expired(date(2025, 6, 1), now));
        assert!(!is_expired(date(2025, 6, 2), now));
    }

    #[test]
    fn test_expiry_status_classification() {
        let now = reference(2025, 6, 1);
        assert_eq!(expiry_status(date(2025, 5, 31), now), ExpiryStatus::Expired);
        assert_eq!(expiry_status(date(2025, 6, 1), now), ExpiryStatus::ExpiringSoon);
        assert_eq!(expiry_status(date(2025, 7, 1), now), ExpiryStatus::ExpiringSoon);
        assert_eq!(expiry_status(date(2025, 7, 2), now), ExpiryStatus::Ok);
    }

    #[test]
    fn test_expiry_status_display() {
        assert_eq!(ExpiryStatus::Expired.to_string(), "Expired");
        assert_eq!(ExpiryStatus::ExpiringSoon.to_string(), "Expiring Soon");
        assert_eq!(ExpiryStatus::Ok.to_string(), "OK");
    }

    #[test]
    fn test_effective_price_falls_back_to_unit_price() {
        let mut batch = Batch {
            id: Uuid::new_v4(),
            name: "Paracetamol".to_string(),
            category: "Analgesic".to_string(),
            current_stock: 10,
            reorder_level: 5,
            expiry_date: date(2026, 1, 1),
            unit_price: Decimal::from(20),
            selling_price: None,
        };
        assert_eq!(batch.effective_price(), Decimal::from(20));

        batch.selling_price = Some(Decimal::from(25));
        assert_eq!(batch.effective_price(), Decimal::from(25));
    }

    #[test]
    fn test_zero_stock_batch_is_not_valid() {
        let now = reference(2025, 6, 1);
        let batch = Batch {
            id: Uuid::new_v4(),
            name: "Paracetamol".to_string(),
            category: "Analgesic".to_string(),
            current_stock: 0,
            reorder_level: 5,
            expiry_date: date(2026, 1, 1),
            unit_price: Decimal::from(20),
            selling_price: None,
        };
        assert!(!batch.is_valid(now));
    }

    #[test]
    fn test_sort_by_expiry_is_stable() {
        let template = Batch {
            id: Uuid::new_v4(),
            name: "Paracetamol".to_string(),
            category: "Analgesic".to_string(),
            current_stock: 10,
            reorder_level: 5,
            expiry_date: date(2025, 8, 1),
            unit_price: Decimal::from(20),
            selling_price: None,
        };
        let first = Batch {
            id: Uuid::new_v4(),
            expiry_date: date(2025, 8, 1),
            ..template.clone()
        };
        let second = Batch {
            id: Uuid::new_v4(),
            expiry_date: date(2025, 7, 1),
            ..template.clone()
        };
        let third = Batch {
            id: Uuid::new_v4(),
            expiry_date: date(2025, 8, 1),
            ..template
        };

        let mut batches = vec![first.clone(), second.clone(), third.clone()];
        sort_by_expiry(&mut batches);

        assert_eq!(batches[0].id, second.id);
        // Equal expiry dates keep snapshot order
        assert_eq!(batches[1].id, first.id);
        assert_eq!(batches[2].id, third.id);
    }
}
