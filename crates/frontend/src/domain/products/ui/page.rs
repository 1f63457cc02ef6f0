use contracts::domain::category::Category;
use contracts::domain::common::CatalogRecord;
use contracts::domain::product::{Product, ProductDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, ButtonSize, Spinner, SpinnerSize};

use super::super::api;
use crate::domain::categories::api as categories_api;
use crate::shared::components::modal::Modal;
use crate::shared::crud::{Operation, ResourceStore};
use crate::shared::image_input::{alert, ImagePicker, ImageSelection};

#[component]
pub fn ProductsPage() -> impl IntoView {
    let store: ResourceStore<Product> = ResourceStore::new(|| Box::pin(api::fetch_products()));
    let draft = RwSignal::new(ProductDraft::default());
    let edit_draft = RwSignal::new(ProductDraft::default());
    let add_image = ImageSelection::new();
    let edit_image = ImageSelection::new();

    // the selector and the per-row category titles join against this list
    let categories = RwSignal::new(Vec::<Category>::new());

    store.load();
    spawn_local(async move {
        match categories_api::fetch_categories().await {
            Ok(list) => categories.set(list),
            Err(e) => log::warn!("failed to load categories for the selector: {}", e),
        }
    });

    let handle_create = move |_| {
        let Some(image) = add_image.file() else {
            alert("Image required");
            return;
        };
        let current = draft.get_untracked();
        store.mutate(
            Operation::Submitting,
            Box::pin(async move { api::create_product(&current, &image).await }),
            move || {
                draft.set(ProductDraft::default());
                add_image.clear();
            },
        );
    };

    let open_edit = move |record: Product| {
        edit_draft.set(ProductDraft::from(&record));
        edit_image.clear();
        store.edit_item.set(Some(record));
    };

    let handle_update = move |_| {
        let Some(record) = store.edit_item.get_untracked() else {
            return;
        };
        let current = edit_draft.get_untracked();
        let image = edit_image.file();
        store.mutate(
            Operation::Submitting,
            Box::pin(async move {
                api::update_product(record.record_id(), &current, image.as_ref()).await
            }),
            move || {
                store.edit_item.set(None);
                edit_image.clear();
            },
        );
    };

    let handle_delete = move |_| {
        let Some(record) = store.delete_item.get_untracked() else {
            return;
        };
        store.mutate(
            Operation::Deleting,
            Box::pin(async move { api::delete_product(record.record_id()).await }),
            move || store.delete_item.set(None),
        );
    };

    let category_select = move |target: RwSignal<ProductDraft>| {
        view! {
            <select
                class="select"
                prop:value=move || {
                    target.get().category_id.map(|id| id.to_string()).unwrap_or_default()
                }
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    target.update(|d| d.category_id = value.parse().ok());
                }
            >
                <option value="">"Select Category"</option>
                {move || {
                    categories
                        .get()
                        .into_iter()
                        .map(|c| view! { <option value=c.id.to_string()>{c.title}</option> })
                        .collect_view()
                }}
            </select>
        }
    };

    let text_inputs = move |target: RwSignal<ProductDraft>| {
        view! {
            <input
                type="text"
                placeholder="Title"
                prop:value=move || target.get().title
                on:input=move |ev| target.update(|d| d.title = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="CAS number"
                prop:value=move || target.get().cas_number
                on:input=move |ev| target.update(|d| d.cas_number = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Purity"
                prop:value=move || target.get().purity
                on:input=move |ev| target.update(|d| d.purity = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Grade"
                prop:value=move || target.get().grade
                on:input=move |ev| target.update(|d| d.grade = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Quantity"
                prop:value=move || target.get().quantity
                on:input=move |ev| target.update(|d| d.quantity = event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="page">
            <div class="card form-card">
                <h2 class="card__title">"Add Product"</h2>
                <div class="form-grid">
                    {text_inputs(draft)}
                    {category_select(draft)}
                </div>
                <div class="form-group">
                    <textarea
                        placeholder="Description"
                        prop:value=move || draft.get().description
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </div>
                <ImagePicker selection=add_image />
                <div class="form-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_create
                        disabled=Signal::derive(move || {
                            store.operation.get() == Operation::Submitting
                        })
                    >
                        {move || {
                            if store.operation.get() == Operation::Submitting {
                                view! { <Spinner size=SpinnerSize::Small /> }.into_any()
                            } else {
                                "Add Product".into_any()
                            }
                        }}
                    </Button>
                </div>
            </div>

            {move || {
                store
                    .error
                    .get()
                    .map(|e| {
                        view! {
                            <div class="warning-box">
                                <span class="warning-box__icon">"⚠"</span>
                                <span class="warning-box__text">{e}</span>
                            </div>
                        }
                    })
            }}

            <div class="card table-card">
                <table class="table">
                    <thead>
                        <tr>
                            <th class="table__header-cell">"ID"</th>
                            <th class="table__header-cell">"Image"</th>
                            <th class="table__header-cell">"Title"</th>
                            <th class="table__header-cell">"Description"</th>
                            <th class="table__header-cell">"CAS"</th>
                            <th class="table__header-cell">"Purity"</th>
                            <th class="table__header-cell">"Grade"</th>
                            <th class="table__header-cell">"Qty"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell table__header-cell--actions">
                                "Actions"
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if store.is_loading_list() {
                                view! {
                                    <tr>
                                        <td colspan="10" class="table__loading">
                                            <Spinner />
                                        </td>
                                    </tr>
                                }
                                    .into_any()
                            } else if store.items.get().is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="10" class="table__empty">"No products yet"</td>
                                    </tr>
                                }
                                    .into_any()
                            } else {
                                store
                                    .items
                                    .get()
                                    .into_iter()
                                    .map(|record| {
                                        let edit_record = record.clone();
                                        let delete_record = record.clone();
                                        let category_title = record
                                            .category
                                            .as_ref()
                                            .map(|c| c.title.clone())
                                            .unwrap_or_default();
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{record.id}</td>
                                                <td class="table__cell">
                                                    {record
                                                        .image_url
                                                        .clone()
                                                        .map(|src| {
                                                            view! { <img class="table__thumb" src=src /> }
                                                        })}
                                                </td>
                                                <td class="table__cell">{record.title.clone()}</td>
                                                <td class="table__cell">{record.description.clone()}</td>
                                                <td class="table__cell">{record.cas_number.clone()}</td>
                                                <td class="table__cell">{record.purity.clone()}</td>
                                                <td class="table__cell">{record.grade.clone()}</td>
                                                <td class="table__cell">{record.quantity.clone()}</td>
                                                <td class="table__cell">{category_title}</td>
                                                <td class="table__cell table__cell--actions">
                                                    <Button
                                                        appearance=ButtonAppearance::Secondary
                                                        size=ButtonSize::Small
                                                        disabled=Signal::derive(move || store.busy())
                                                        on_click=move |_| open_edit(edit_record.clone())
                                                    >
                                                        "Edit"
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Secondary
                                                        size=ButtonSize::Small
                                                        disabled=Signal::derive(move || store.busy())
                                                        on_click=move |_| {
                                                            store.delete_item.set(Some(delete_record.clone()))
                                                        }
                                                    >
                                                        "Delete"
                                                    </Button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            {move || {
                store
                    .edit_item
                    .get()
                    .map(|record| {
                        view! {
                            <Modal
                                title="Edit Product".to_string()
                                on_close=Callback::new(move |_| store.edit_item.set(None))
                            >
                                <div class="form-grid">
                                    {text_inputs(edit_draft)}
                                    {category_select(edit_draft)}
                                </div>
                                <div class="form-group">
                                    <textarea
                                        prop:value=move || edit_draft.get().description
                                        on:input=move |ev| {
                                            edit_draft
                                                .update(|d| d.description = event_target_value(&ev))
                                        }
                                    ></textarea>
                                </div>
                                <ImagePicker
                                    selection=edit_image
                                    existing_url=record.image_url.clone().unwrap_or_default()
                                />
                                <div class="modal-actions">
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=handle_update
                                        disabled=Signal::derive(move || {
                                            store.operation.get() == Operation::Submitting
                                        })
                                    >
                                        {move || {
                                            if store.operation.get() == Operation::Submitting {
                                                view! { <Spinner size=SpinnerSize::Small /> }.into_any()
                                            } else {
                                                "Save".into_any()
                                            }
                                        }}
                                    </Button>
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| store.edit_item.set(None)
                                    >
                                        "Cancel"
                                    </Button>
                                </div>
                            </Modal>
                        }
                    })
            }}

            {move || {
                store
                    .delete_item
                    .get()
                    .map(|record| {
                        let label = record.display_label().to_string();
                        view! {
                            <Modal
                                title="Delete Product".to_string()
                                on_close=Callback::new(move |_| store.delete_item.set(None))
                            >
                                <p class="modal-text">
                                    "Are you sure you want to delete " <b>{label}</b> "?"
                                </p>
                                <div class="modal-actions">
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=handle_delete
                                        disabled=Signal::derive(move || {
                                            store.operation.get() == Operation::Deleting
                                        })
                                    >
                                        {move || {
                                            if store.operation.get() == Operation::Deleting {
                                                view! { <Spinner size=SpinnerSize::Small /> }.into_any()
                                            } else {
                                                "Delete".into_any()
                                            }
                                        }}
                                    </Button>
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| store.delete_item.set(None)
                                    >
                                        "Cancel"
                                    </Button>
                                </div>
                            </Modal>
                        }
                    })
            }}
        </div>
    }
}
