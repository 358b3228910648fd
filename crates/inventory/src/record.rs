use serde::{Deserialize, Serialize};

use stocktable_core::{DomainError, DomainResult, Entity, RecordId, ValueObject};

/// Quantities below this threshold are flagged "low stock" in the derived
/// view. Display-only; never stored on the record.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Unit price in minor currency units (cents).
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn as_cents(&self) -> u64 {
        self.0
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    /// Renders as `$X.YY` (currency symbol, two decimals).
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// One inventory line item.
///
/// Records are never mutated in place: the lifecycle is add, then (possibly)
/// delete by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: Price,
    pub supplier: String,
}

impl InventoryRecord {
    /// Display-only flag: quantity below the fixed threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }
}

impl Entity for InventoryRecord {
    type Id = RecordId;

    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// In-progress, not-yet-committed new-record form state.
///
/// Preserved unmodified when validation fails (the user keeps typed input);
/// reset to defaults only on a successful add.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: Price,
    pub supplier: String,
}

impl ValueObject for Draft {}

impl Draft {
    /// Required-field presence check. Whitespace-only counts as empty.
    pub(crate) fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() || self.category.trim().is_empty() {
            return Err(DomainError::validation("Please fill all required fields"));
        }
        Ok(())
    }

    /// Commit into a record under a caller-assigned id.
    pub(crate) fn to_record(&self, id: RecordId) -> InventoryRecord {
        InventoryRecord {
            id,
            name: self.name.clone(),
            category: self.category.clone(),
            quantity: self.quantity,
            price: self.price,
            supplier: self.supplier.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(quantity: u32) -> InventoryRecord {
        InventoryRecord {
            id: RecordId::new(),
            name: "Test Item".to_string(),
            category: "Electronics".to_string(),
            quantity,
            price: Price::from_cents(12999),
            supplier: "Acme".to_string(),
        }
    }

    #[test]
    fn quantity_below_threshold_is_low_stock() {
        assert!(record(3).is_low_stock());
        assert!(record(9).is_low_stock());
    }

    #[test]
    fn quantity_at_threshold_is_not_low_stock() {
        assert!(!record(10).is_low_stock());
        assert!(!record(20).is_low_stock());
    }

    #[test]
    fn price_renders_with_two_decimals() {
        assert_eq!(Price::from_cents(199_999).to_string(), "$1999.99");
        assert_eq!(Price::from_cents(505).to_string(), "$5.05");
        assert_eq!(Price::from_cents(0).to_string(), "$0.00");
    }

    #[test]
    fn draft_validation_rejects_blank_required_fields() {
        let mut draft = Draft {
            name: "Widget".to_string(),
            category: "Tools".to_string(),
            ..Draft::default()
        };
        assert!(draft.validate().is_ok());

        draft.name = "   ".to_string();
        match draft.validate().unwrap_err() {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank name"),
        }

        draft.name = "Widget".to_string();
        draft.category = String::new();
        match draft.validate().unwrap_err() {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank category"),
        }
    }

    #[test]
    fn to_record_carries_all_draft_fields() {
        let draft = Draft {
            name: "Widget".to_string(),
            category: "Tools".to_string(),
            quantity: 7,
            price: Price::from_cents(999),
            supplier: "Acme".to_string(),
        };
        let id = RecordId::new();
        let record = draft.to_record(id);

        assert_eq!(record.id, id);
        assert_eq!(record.name, "Widget");
        assert_eq!(record.category, "Tools");
        assert_eq!(record.quantity, 7);
        assert_eq!(record.price, Price::from_cents(999));
        assert_eq!(record.supplier, "Acme");
    }
}
