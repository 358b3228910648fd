//! Derived view: the filtered, sorted projection of the collection.
//!
//! The view is recomputed on demand from canonical state and never stored as
//! independent mutable state, so it cannot diverge from the collection.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::record::InventoryRecord;

/// Field the view can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Category,
    Quantity,
    Price,
    Supplier,
}

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort key + direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    /// Quantity ascending: the widget's initial ordering.
    fn default() -> Self {
        Self {
            key: SortKey::Quantity,
            direction: SortDirection::Ascending,
        }
    }
}

fn compare_by(key: SortKey, a: &InventoryRecord, b: &InventoryRecord) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Category => a.category.cmp(&b.category),
        SortKey::Quantity => a.quantity.cmp(&b.quantity),
        SortKey::Price => a.price.cmp(&b.price),
        SortKey::Supplier => a.supplier.cmp(&b.supplier),
    }
}

/// Pure projection of (collection, filter, sort) into display order.
///
/// Sorts the full collection first (stable, so ties keep insertion order),
/// then filters to rows whose category contains the filter text as a
/// case-insensitive substring. Storage order is never touched.
pub fn derive_view(
    records: &[InventoryRecord],
    filter: &str,
    sort: SortConfig,
) -> Vec<InventoryRecord> {
    let mut view: Vec<InventoryRecord> = records.to_vec();
    view.sort_by(|a, b| {
        let ord = compare_by(sort.key, a, b);
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    let needle = filter.to_lowercase();
    view.retain(|r| r.category.to_lowercase().contains(&needle));
    view
}
