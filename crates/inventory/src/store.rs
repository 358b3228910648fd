use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stocktable_core::{DomainError, DomainResult, RecordId, StateStore};

use crate::notification::Notification;
use crate::record::{Draft, InventoryRecord, Price};
use crate::view::{SortConfig, SortDirection, SortKey, derive_view};

/// Command: AddRecord.
///
/// The caller assigns the fresh id so `handle` stays deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddRecord {
    pub record_id: RecordId,
    pub draft: Draft,
    pub occurred_at: DateTime<Utc>,
}

/// Command: DeleteRecord.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRecord {
    pub record_id: RecordId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: SetFilterText.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetFilterText {
    pub text: String,
}

/// Command: SetSort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetSort {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Command: UpdateDraft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDraft {
    pub draft: Draft,
}

/// Command: DismissNotification.
///
/// Carries the sequence number the dismisser saw; a dismiss that arrives
/// after its notification was superseded is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DismissNotification {
    pub seq: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryCommand {
    AddRecord(AddRecord),
    DeleteRecord(DeleteRecord),
    SetFilterText(SetFilterText),
    SetSort(SetSort),
    UpdateDraft(UpdateDraft),
    DismissNotification(DismissNotification),
}

impl InventoryCommand {
    /// Caller-stamped wall-clock time, present on the commands that can
    /// raise notifications.
    fn occurred_at(&self) -> Option<DateTime<Utc>> {
        match self {
            InventoryCommand::AddRecord(c) => Some(c.occurred_at),
            InventoryCommand::DeleteRecord(c) => Some(c.occurred_at),
            _ => None,
        }
    }
}

/// Event: RecordAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordAdded {
    pub record: InventoryRecord,
    pub occurred_at: DateTime<Utc>,
}

/// Event: RecordDeleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDeleted {
    pub record_id: RecordId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: FilterChanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChanged {
    pub text: String,
}

/// Event: SortChanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortChanged {
    pub config: SortConfig,
}

/// Event: DraftChanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftChanged {
    pub draft: Draft,
}

/// Event: NotificationRaised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRaised {
    pub seq: u64,
    pub notification: Notification,
}

/// Event: NotificationCleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationCleared {
    pub seq: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    RecordAdded(RecordAdded),
    RecordDeleted(RecordDeleted),
    FilterChanged(FilterChanged),
    SortChanged(SortChanged),
    DraftChanged(DraftChanged),
    NotificationRaised(NotificationRaised),
    NotificationCleared(NotificationCleared),
}

impl InventoryEvent {
    pub fn name(&self) -> &'static str {
        match self {
            InventoryEvent::RecordAdded(_) => "inventory.record.added",
            InventoryEvent::RecordDeleted(_) => "inventory.record.deleted",
            InventoryEvent::FilterChanged(_) => "inventory.view.filter_changed",
            InventoryEvent::SortChanged(_) => "inventory.view.sort_changed",
            InventoryEvent::DraftChanged(_) => "inventory.draft.changed",
            InventoryEvent::NotificationRaised(_) => "inventory.notification.raised",
            InventoryEvent::NotificationCleared(_) => "inventory.notification.cleared",
        }
    }
}

/// Currently visible notification plus its supersede sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveNotification {
    pub seq: u64,
    pub notification: Notification,
}

/// Canonical widget state: the record collection plus view configuration.
///
/// Storage order is insertion order; display order comes out of
/// [`derive_view`] and never feeds back into storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryStore {
    records: Vec<InventoryRecord>,
    draft: Draft,
    filter: String,
    sort: SortConfig,
    notification: Option<ActiveNotification>,
    notification_seq: u64,
    version: u64,
}

/// The illustrative sample records the widget starts with on every load.
pub fn seed_records() -> Vec<InventoryRecord> {
    let seed = [
        ("MacBook Pro", "Electronics", 15u32, 199_999u64, "Apple Inc."),
        ("Ergonomic Chair", "Furniture", 8, 54_999, "Herman Miller"),
        ("4K Monitor", "Electronics", 5, 59_999, "Dell"),
        ("Mechanical Keyboard", "Electronics", 20, 12_999, "Razer"),
    ];

    seed.into_iter()
        .map(
            |(name, category, quantity, cents, supplier)| InventoryRecord {
                id: RecordId::new(),
                name: name.to_string(),
                category: category.to_string(),
                quantity,
                price: Price::from_cents(cents),
                supplier: supplier.to_string(),
            },
        )
        .collect()
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore {
    /// Empty store with default view configuration.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            draft: Draft::default(),
            filter: String::new(),
            sort: SortConfig::default(),
            notification: None,
            notification_seq: 0,
            version: 0,
        }
    }

    /// Store pre-populated with the sample records.
    pub fn seeded() -> Self {
        Self {
            records: seed_records(),
            ..Self::new()
        }
    }

    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    pub fn notification(&self) -> Option<&ActiveNotification> {
        self.notification.as_ref()
    }

    /// The filtered, sorted projection for display.
    pub fn derived_view(&self) -> Vec<InventoryRecord> {
        derive_view(&self.records, &self.filter, self.sort)
    }

    /// Total outer surface: apply the command's events, or convert a domain
    /// failure into an error notification. Never fails outward; on failure
    /// no other state changes (the draft keeps the typed input).
    pub fn dispatch(&mut self, command: InventoryCommand) {
        match self.handle(&command) {
            Ok(events) => {
                for event in &events {
                    tracing::debug!(event = event.name(), "applying event");
                    self.apply(event);
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "command rejected");
                let Some(occurred_at) = command.occurred_at() else {
                    // Filter/sort/draft/dismiss commands are total; nothing
                    // to report.
                    return;
                };
                let raised = self.raise(Notification::error(err.user_message(), occurred_at));
                self.apply(&InventoryEvent::NotificationRaised(raised));
            }
        }
    }

    fn raise(&self, notification: Notification) -> NotificationRaised {
        NotificationRaised {
            seq: self.notification_seq + 1,
            notification,
        }
    }

    fn ensure_fresh_id(&self, record_id: RecordId) -> DomainResult<()> {
        if self.records.iter().any(|r| r.id == record_id) {
            return Err(DomainError::validation("Record id is already in use"));
        }
        Ok(())
    }

    fn handle_add(&self, cmd: &AddRecord) -> DomainResult<Vec<InventoryEvent>> {
        cmd.draft.validate()?;
        self.ensure_fresh_id(cmd.record_id)?;

        let record = cmd.draft.to_record(cmd.record_id);
        Ok(vec![
            InventoryEvent::RecordAdded(RecordAdded {
                record,
                occurred_at: cmd.occurred_at,
            }),
            InventoryEvent::NotificationRaised(
                self.raise(Notification::success("Item added successfully", cmd.occurred_at)),
            ),
        ])
    }

    fn handle_delete(&self, cmd: &DeleteRecord) -> Vec<InventoryEvent> {
        let mut events = Vec::new();
        if self.records.iter().any(|r| r.id == cmd.record_id) {
            events.push(InventoryEvent::RecordDeleted(RecordDeleted {
                record_id: cmd.record_id,
                occurred_at: cmd.occurred_at,
            }));
        }
        // Delete reports success whether or not the id was live.
        events.push(InventoryEvent::NotificationRaised(self.raise(
            Notification::success("Item deleted successfully", cmd.occurred_at),
        )));
        events
    }

    fn handle_dismiss(&self, cmd: &DismissNotification) -> Vec<InventoryEvent> {
        match &self.notification {
            Some(active) if active.seq == cmd.seq => {
                vec![InventoryEvent::NotificationCleared(NotificationCleared {
                    seq: cmd.seq,
                })]
            }
            // Superseded or already cleared; the dismiss is stale.
            _ => Vec::new(),
        }
    }
}

impl StateStore for InventoryStore {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &InventoryEvent) {
        match event {
            InventoryEvent::RecordAdded(e) => {
                self.records.push(e.record.clone());
                self.draft = Draft::default();
            }
            InventoryEvent::RecordDeleted(e) => {
                self.records.retain(|r| r.id != e.record_id);
            }
            InventoryEvent::FilterChanged(e) => {
                self.filter = e.text.clone();
            }
            InventoryEvent::SortChanged(e) => {
                self.sort = e.config;
            }
            InventoryEvent::DraftChanged(e) => {
                self.draft = e.draft.clone();
            }
            InventoryEvent::NotificationRaised(e) => {
                self.notification_seq = e.seq;
                self.notification = Some(ActiveNotification {
                    seq: e.seq,
                    notification: e.notification.clone(),
                });
            }
            InventoryEvent::NotificationCleared(e) => {
                if self.notification.as_ref().is_some_and(|n| n.seq == e.seq) {
                    self.notification = None;
                }
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &InventoryCommand) -> DomainResult<Vec<InventoryEvent>> {
        match command {
            InventoryCommand::AddRecord(cmd) => self.handle_add(cmd),
            InventoryCommand::DeleteRecord(cmd) => Ok(self.handle_delete(cmd)),
            InventoryCommand::SetFilterText(cmd) => {
                Ok(vec![InventoryEvent::FilterChanged(FilterChanged {
                    text: cmd.text.clone(),
                })])
            }
            InventoryCommand::SetSort(cmd) => {
                Ok(vec![InventoryEvent::SortChanged(SortChanged {
                    config: SortConfig {
                        key: cmd.key,
                        direction: cmd.direction,
                    },
                })])
            }
            InventoryCommand::UpdateDraft(cmd) => {
                Ok(vec![InventoryEvent::DraftChanged(DraftChanged {
                    draft: cmd.draft.clone(),
                })])
            }
            InventoryCommand::DismissNotification(cmd) => Ok(self.handle_dismiss(cmd)),
        }
    }
}
