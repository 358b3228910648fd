//! Leptos widget: inventory table with add, delete, filter, and sort.

use chrono::Utc;
use leptos::leptos_dom::helpers::{TimeoutHandle, set_timeout_with_handle};
use leptos::*;

use stocktable_core::RecordId;
use stocktable_inventory::{
    AddRecord, DeleteRecord, DismissNotification, InventoryCommand, InventoryStore,
    NOTIFICATION_TTL, NotificationKind, SetFilterText, SetSort, SortDirection, SortKey,
    UpdateDraft,
};

/// Main widget component.
///
/// The store signal is the single source of truth; every child reads from it
/// and writes back through `dispatch`. The collection resets to its seeded
/// sample on reload.
#[component]
pub fn App() -> impl IntoView {
    let store = create_rw_signal(InventoryStore::seeded());

    view! {
        <div class="app">
            <header>
                <h1>"Dynamic Inventory Management Table"</h1>
            </header>

            <main>
                <NotificationBanner store/>
                <AddItemForm store/>
                <FilterBar store/>
                <InventoryTable store/>
            </main>
        </div>
    }
}

/// Transient notification banner with the auto-clear timer.
///
/// At most one clear is pending at any time: a new notification cancels the
/// outstanding timeout before scheduling its own, and the store ignores a
/// stale dismiss anyway (sequence check).
#[component]
fn NotificationBanner(store: RwSignal<InventoryStore>) -> impl IntoView {
    let pending_clear: StoredValue<Option<TimeoutHandle>> = store_value(None);

    create_effect(move |prev: Option<Option<u64>>| {
        let seq = store.with(|s| s.notification().map(|n| n.seq));
        if prev.flatten() == seq {
            return seq;
        }

        if let Some(handle) = pending_clear.get_value() {
            handle.clear();
        }
        pending_clear.set_value(None);

        if let Some(seq) = seq {
            let scheduled = set_timeout_with_handle(
                move || {
                    pending_clear.set_value(None);
                    store.update(|s| {
                        s.dispatch(InventoryCommand::DismissNotification(
                            DismissNotification { seq },
                        ));
                    });
                },
                NOTIFICATION_TTL,
            );
            if let Ok(handle) = scheduled {
                pending_clear.set_value(Some(handle));
            }
        }

        seq
    });

    on_cleanup(move || {
        if let Some(handle) = pending_clear.get_value() {
            handle.clear();
        }
    });

    view! {
        {move || {
            store.with(|s| {
                s.notification().map(|active| {
                    let class = match active.notification.kind {
                        NotificationKind::Success => "notification success",
                        NotificationKind::Error => "notification error",
                    };
                    let message = active.notification.message.clone();
                    view! {
                        <div class=class role="status">
                            {message}
                        </div>
                    }
                })
            })
        }}
    }
}

/// New-item form bound to the store's draft.
///
/// Name, category, quantity, and supplier inputs; there is no price input,
/// so new rows price at $0.00.
#[component]
fn AddItemForm(store: RwSignal<InventoryStore>) -> impl IntoView {
    let on_name = move |ev| {
        let value = event_target_value(&ev);
        store.update(|s| {
            let mut draft = s.draft().clone();
            draft.name = value;
            s.dispatch(InventoryCommand::UpdateDraft(UpdateDraft { draft }));
        });
    };
    let on_category = move |ev| {
        let value = event_target_value(&ev);
        store.update(|s| {
            let mut draft = s.draft().clone();
            draft.category = value;
            s.dispatch(InventoryCommand::UpdateDraft(UpdateDraft { draft }));
        });
    };
    let on_quantity = move |ev| {
        let value = event_target_value(&ev);
        if let Ok(quantity) = value.parse::<u32>() {
            store.update(|s| {
                let mut draft = s.draft().clone();
                draft.quantity = quantity;
                s.dispatch(InventoryCommand::UpdateDraft(UpdateDraft { draft }));
            });
        }
    };
    let on_supplier = move |ev| {
        let value = event_target_value(&ev);
        store.update(|s| {
            let mut draft = s.draft().clone();
            draft.supplier = value;
            s.dispatch(InventoryCommand::UpdateDraft(UpdateDraft { draft }));
        });
    };

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        store.update(|s| {
            let draft = s.draft().clone();
            s.dispatch(InventoryCommand::AddRecord(AddRecord {
                record_id: RecordId::new(),
                draft,
                occurred_at: Utc::now(),
            }));
        });
    };

    view! {
        <form class="add-item" on:submit=submit>
            <input
                type="text"
                placeholder="Item Name"
                prop:value=move || store.with(|s| s.draft().name.clone())
                on:input=on_name
            />
            <input
                type="text"
                placeholder="Category"
                prop:value=move || store.with(|s| s.draft().category.clone())
                on:input=on_category
            />
            <input
                type="number"
                placeholder="Quantity"
                prop:value=move || store.with(|s| s.draft().quantity.to_string())
                on:input=on_quantity
            />
            <input
                type="text"
                placeholder="Supplier"
                prop:value=move || store.with(|s| s.draft().supplier.clone())
                on:input=on_supplier
            />
            <button type="submit">"Add Item"</button>
        </form>
    }
}

/// Free-text category filter.
#[component]
fn FilterBar(store: RwSignal<InventoryStore>) -> impl IntoView {
    view! {
        <div class="filter">
            <input
                type="text"
                placeholder="Filter by Category"
                prop:value=move || store.with(|s| s.filter().to_string())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    store.update(|s| {
                        s.dispatch(InventoryCommand::SetFilterText(SetFilterText { text }));
                    });
                }
            />
        </div>
    }
}

/// The derived-view table. Column headers toggle the sort: first activation
/// sorts ascending by that key, activating again flips direction.
#[component]
fn InventoryTable(store: RwSignal<InventoryStore>) -> impl IntoView {
    let sort_by = move |key: SortKey| {
        store.update(|s| {
            let current = s.sort();
            let direction = if current.key == key {
                current.direction.toggled()
            } else {
                SortDirection::Ascending
            };
            s.dispatch(InventoryCommand::SetSort(SetSort { key, direction }));
        });
    };

    view! {
        <table>
            <thead>
                <tr>
                    <th on:click=move |_| sort_by(SortKey::Name)>"Name"</th>
                    <th on:click=move |_| sort_by(SortKey::Category)>"Category"</th>
                    <th on:click=move |_| sort_by(SortKey::Quantity)>"Quantity"</th>
                    <th on:click=move |_| sort_by(SortKey::Price)>"Price"</th>
                    <th on:click=move |_| sort_by(SortKey::Supplier)>"Supplier"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    store
                        .with(|s| s.derived_view())
                        .into_iter()
                        .map(|record| {
                            let low_stock = record.is_low_stock();
                            let row_class = if low_stock { "low-stock" } else { "" };
                            let id = record.id;
                            let price = record.price.to_string();
                            view! {
                                <tr class=row_class>
                                    <td>{record.name}</td>
                                    <td>{record.category}</td>
                                    <td>
                                        {record.quantity}
                                        {low_stock
                                            .then(|| {
                                                view! { <span class="badge">"Low Stock"</span> }
                                            })}
                                    </td>
                                    <td>{price}</td>
                                    <td>{record.supplier}</td>
                                    <td>
                                        <button on:click=move |_| {
                                            store
                                                .update(|s| {
                                                    s.dispatch(
                                                        InventoryCommand::DeleteRecord(DeleteRecord {
                                                            record_id: id,
                                                            occurred_at: Utc::now(),
                                                        }),
                                                    );
                                                });
                                        }>"Delete"</button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
