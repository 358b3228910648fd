//! Inventory store & view-derivation.
//!
//! This crate holds the widget's canonical state and its transition rules,
//! implemented purely as deterministic domain logic (no IO, no DOM, no
//! timers). The rendering shell dispatches commands in and reads the derived
//! view back out.

pub mod notification;
pub mod record;
pub mod store;
pub mod view;

pub use notification::{NOTIFICATION_TTL, Notification, NotificationKind};
pub use record::{Draft, InventoryRecord, LOW_STOCK_THRESHOLD, Price};
pub use store::{
    ActiveNotification, AddRecord, DeleteRecord, DismissNotification, DraftChanged, FilterChanged,
    InventoryCommand, InventoryEvent, InventoryStore, NotificationCleared, NotificationRaised,
    RecordAdded, RecordDeleted, SetFilterText, SetSort, SortChanged, UpdateDraft, seed_records,
};
pub use view::{SortConfig, SortDirection, SortKey, derive_view};
