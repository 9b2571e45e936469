//! Leptos application: the inventory view.

use leptos::*;

use stockroom_inventory::{Item, LowStockRule};

use crate::api;
use crate::logic::{self, EditDraft, CreateItemPayload, QuantityStepPayload};

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    view! { <InventoryPage/> }
}

/// The single stateful view: add form, item table, and the edit/delete
/// dialogs. Every mutation is followed by a full collection re-fetch.
#[component]
fn InventoryPage() -> impl IntoView {
    let items = create_rw_signal(Vec::<Item>::new());
    let loading = create_rw_signal(true);

    let draft_name = create_rw_signal(String::new());
    let draft_category = create_rw_signal(String::new());
    let draft_quantity = create_rw_signal(String::new());

    let edit_draft = create_rw_signal(Option::<EditDraft>::None);
    let pending_delete = create_rw_signal(Option::<Item>::None);
    let show_low_only = create_rw_signal(false);

    let rule = LowStockRule::default();

    let refetch = move || {
        spawn_local(async move {
            match api::list_items().await {
                Ok(list) => items.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("failed to fetch items: {e}").into())
                }
            }
            loading.set(false);
        });
    };

    // Initial load; everything after this is driven by event handlers.
    refetch();

    let add_item = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let name = draft_name.get_untracked();
        let category = draft_category.get_untracked();
        let quantity = draft_quantity.get_untracked();
        if !logic::draft_is_submittable(&name, &quantity) {
            return;
        }

        let payload = CreateItemPayload {
            name,
            category,
            quantity,
        };
        spawn_local(async move {
            match api::create_item(&payload).await {
                Ok(_) => {
                    draft_name.set(String::new());
                    draft_category.set(String::new());
                    draft_quantity.set(String::new());
                    refetch();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("failed to add item: {e}").into())
                }
            }
        });
    };

    let step = move |item: Item, delta: i64| {
        // A step that would go negative is silently not sent.
        let Some(quantity) = logic::stepped_quantity(item.quantity, delta) else {
            return;
        };

        let payload = QuantityStepPayload {
            id: item.id,
            quantity,
        };
        spawn_local(async move {
            match api::step_quantity(&payload).await {
                Ok(_) => refetch(),
                Err(e) => {
                    web_sys::console::error_1(&format!("failed to update quantity: {e}").into())
                }
            }
        });
    };

    let save_edit = move |_: ev::MouseEvent| {
        let Some(draft) = edit_draft.get_untracked() else {
            return;
        };

        let payload = draft.into_payload();
        spawn_local(async move {
            match api::update_item(&payload).await {
                Ok(_) => {
                    edit_draft.set(None);
                    refetch();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("failed to save item: {e}").into())
                }
            }
        });
    };

    let rows = move || {
        let visible = logic::visible_items(&items.get(), show_low_only.get(), rule);
        if visible.is_empty() {
            return view! {
                <p class="empty">"No items found. Use the form above to add one!"</p>
            }
            .into_view();
        }

        view! {
            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th>"Quantity"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {visible
                        .into_iter()
                        .map(|item| {
                            let low = item.is_low_stock(rule);
                            let row_class = if low { "low-stock" } else { "" };
                            let dec = item.clone();
                            let inc = item.clone();
                            let edit = item.clone();
                            let del = item.clone();
                            view! {
                                <tr class=row_class>
                                    <td class="name">
                                        {item.name.clone()}
                                        {low
                                            .then(|| {
                                                view! { <span class="badge">"LOW STOCK"</span> }
                                            })}
                                    </td>
                                    <td>{item.category.clone()}</td>
                                    <td class="quantity">
                                        <button on:click=move |_| step(dec.clone(), -1)>"-"</button>
                                        <span>{item.quantity}</span>
                                        <button on:click=move |_| step(inc.clone(), 1)>"+"</button>
                                    </td>
                                    <td class="actions">
                                        <button on:click=move |_| {
                                            edit_draft.set(Some(EditDraft::from_item(&edit)))
                                        }>"Edit"</button>
                                        <button on:click=move |_| {
                                            pending_delete.set(Some(del.clone()))
                                        }>"Delete"</button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_view()
    };

    view! {
        <div class="app">
            <header>
                <h1>"My Inventory"</h1>
            </header>

            <main>
                <section class="add-item">
                    <h2>"Add New Item"</h2>
                    <form on:submit=add_item>
                        <label>
                            "Item Name"
                            <input
                                type="text"
                                placeholder="e.g. Widget A"
                                prop:value=move || draft_name.get()
                                on:input=move |ev| draft_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Category"
                            <input
                                type="text"
                                placeholder="e.g. Electronics"
                                prop:value=move || draft_category.get()
                                on:input=move |ev| draft_category.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Qty"
                            <input
                                type="number"
                                placeholder="0"
                                prop:value=move || draft_quantity.get()
                                on:input=move |ev| draft_quantity.set(event_target_value(&ev))
                            />
                        </label>
                        <button type="submit">"Add Item"</button>
                    </form>
                </section>

                <section class="inventory-list">
                    <div class="list-header">
                        <h2>"Items"</h2>
                        <button
                            class="filter-toggle"
                            on:click=move |_| show_low_only.update(|v| *v = !*v)
                        >
                            {move || {
                                if show_low_only.get() {
                                    "Show all items"
                                } else {
                                    "Show low stock only"
                                }
                            }}
                        </button>
                    </div>

                    {move || {
                        if loading.get() {
                            view! { <p class="loading">"Loading your items..."</p> }.into_view()
                        } else {
                            rows()
                        }
                    }}
                </section>
            </main>

            {move || {
                pending_delete
                    .get()
                    .map(|item| {
                        let confirm_id = item.id;
                        view! {
                            <div class="modal-backdrop">
                                <div class="modal">
                                    <h3>"Delete item"</h3>
                                    <p>
                                        {format!(
                                            "Delete \"{}\"? This cannot be undone.",
                                            item.name,
                                        )}
                                    </p>
                                    <div class="modal-actions">
                                        <button on:click=move |_| {
                                            pending_delete.set(None);
                                            spawn_local(async move {
                                                match api::delete_item(confirm_id).await {
                                                    Ok(()) => refetch(),
                                                    Err(e) => {
                                                        web_sys::console::error_1(
                                                            &format!("failed to delete item: {e}").into(),
                                                        )
                                                    }
                                                }
                                            });
                                        }>"Delete"</button>
                                        <button on:click=move |_| {
                                            pending_delete.set(None)
                                        }>"Cancel"</button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}

            {move || {
                edit_draft
                    .get()
                    .map(|_| {
                        view! {
                            <div class="modal-backdrop">
                                <div class="modal">
                                    <h3>"Edit item"</h3>
                                    <label>
                                        "Name"
                                        <input
                                            type="text"
                                            prop:value=move || {
                                                edit_draft
                                                    .with(|d| {
                                                        d.as_ref().map(|d| d.name.clone()).unwrap_or_default()
                                                    })
                                            }
                                            on:input=move |ev| {
                                                edit_draft
                                                    .update(|d| {
                                                        if let Some(d) = d.as_mut() {
                                                            d.name = event_target_value(&ev);
                                                        }
                                                    })
                                            }
                                        />
                                    </label>
                                    <label>
                                        "Category"
                                        <input
                                            type="text"
                                            prop:value=move || {
                                                edit_draft
                                                    .with(|d| {
                                                        d.as_ref().map(|d| d.category.clone()).unwrap_or_default()
                                                    })
                                            }
                                            on:input=move |ev| {
                                                edit_draft
                                                    .update(|d| {
                                                        if let Some(d) = d.as_mut() {
                                                            d.category = event_target_value(&ev);
                                                        }
                                                    })
                                            }
                                        />
                                    </label>
                                    <label>
                                        "Low-stock threshold"
                                        <input
                                            type="number"
                                            placeholder="5"
                                            prop:value=move || {
                                                edit_draft
                                                    .with(|d| {
                                                        d.as_ref().map(|d| d.threshold.clone()).unwrap_or_default()
                                                    })
                                            }
                                            on:input=move |ev| {
                                                edit_draft
                                                    .update(|d| {
                                                        if let Some(d) = d.as_mut() {
                                                            d.threshold = event_target_value(&ev);
                                                        }
                                                    })
                                            }
                                        />
                                    </label>
                                    <div class="modal-actions">
                                        <button on:click=save_edit>"Save"</button>
                                        <button on:click=move |_| {
                                            edit_draft.set(None)
                                        }>"Cancel"</button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
