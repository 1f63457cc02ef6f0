use contracts::domain::category::{Category, CategoryDraft};
use contracts::domain::common::CatalogRecord;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize, Spinner, SpinnerSize};

use super::super::api;
use crate::shared::components::modal::Modal;
use crate::shared::crud::{Operation, ResourceStore};

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let store: ResourceStore<Category> = ResourceStore::new(|| Box::pin(api::fetch_categories()));
    let draft = RwSignal::new(CategoryDraft::default());
    let edit_draft = RwSignal::new(CategoryDraft::default());

    store.load();

    let handle_create = move |_| {
        let current = draft.get_untracked().trimmed();
        if !current.is_valid() {
            return;
        }
        store.mutate(
            Operation::Submitting,
            Box::pin(async move { api::create_category(&current).await }),
            move || draft.set(CategoryDraft::default()),
        );
    };

    let open_edit = move |record: Category| {
        edit_draft.set(CategoryDraft::from(&record));
        store.edit_item.set(Some(record));
    };

    let handle_update = move |_| {
        let Some(record) = store.edit_item.get_untracked() else {
            return;
        };
        let current = edit_draft.get_untracked().trimmed();
        store.mutate(
            Operation::Submitting,
            Box::pin(async move { api::update_category(record.record_id(), &current).await }),
            move || store.edit_item.set(None),
        );
    };

    let handle_delete = move |_| {
        let Some(record) = store.delete_item.get_untracked() else {
            return;
        };
        store.mutate(
            Operation::Deleting,
            Box::pin(async move { api::delete_category(record.record_id()).await }),
            move || store.delete_item.set(None),
        );
    };

    view! {
        <div class="page">
            <div class="card form-card">
                <h2 class="card__title">"Add Category"</h2>
                <div class="form-group">
                    <input
                        type="text"
                        placeholder="Category title"
                        prop:value=move || draft.get().title
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    />
                </div>
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
                                "Add".into_any()
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
                            <th class="table__header-cell">"Title"</th>
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
                                        <td colspan="3" class="table__loading">
                                            <Spinner />
                                        </td>
                                    </tr>
                                }
                                    .into_any()
                            } else if store.items.get().is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="3" class="table__empty">"No categories yet"</td>
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
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{record.id}</td>
                                                <td class="table__cell">{record.title.clone()}</td>
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
                    .map(|_| {
                        view! {
                            <Modal
                                title="Edit Category".to_string()
                                on_close=Callback::new(move |_| store.edit_item.set(None))
                            >
                                <div class="form-group">
                                    <input
                                        type="text"
                                        prop:value=move || edit_draft.get().title
                                        on:input=move |ev| {
                                            edit_draft.update(|d| d.title = event_target_value(&ev))
                                        }
                                    />
                                </div>
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
                                title="Delete Category".to_string()
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
