use contracts::domain::common::CatalogRecord;
use contracts::domain::team_member::{TeamMember, TeamMemberDraft};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize, Spinner, SpinnerSize};

use super::super::api;
use crate::shared::components::modal::Modal;
use crate::shared::crud::{Operation, ResourceStore};
use crate::shared::image_input::{alert, ImagePicker, ImageSelection};

#[component]
pub fn TeamMembersPage() -> impl IntoView {
    let store: ResourceStore<TeamMember> =
        ResourceStore::new(|| Box::pin(api::fetch_team_members()));
    let draft = RwSignal::new(TeamMemberDraft::default());
    let edit_draft = RwSignal::new(TeamMemberDraft::default());
    let add_image = ImageSelection::new();
    let edit_image = ImageSelection::new();

    store.load();

    let handle_create = move |_| {
        let Some(image) = add_image.file() else {
            alert("Image required");
            return;
        };
        let current = draft.get_untracked();
        store.mutate(
            Operation::Submitting,
            Box::pin(async move { api::create_team_member(&current, &image).await }),
            move || {
                draft.set(TeamMemberDraft::default());
                add_image.clear();
            },
        );
    };

    let open_edit = move |record: TeamMember| {
        edit_draft.set(TeamMemberDraft::from(&record));
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
                api::update_team_member(record.record_id(), &current, image.as_ref()).await
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
            Box::pin(async move { api::delete_team_member(record.record_id()).await }),
            move || store.delete_item.set(None),
        );
    };

    let fields = move |target: RwSignal<TeamMemberDraft>| {
        view! {
            <input
                type="text"
                placeholder="Name"
                prop:value=move || target.get().name
                on:input=move |ev| target.update(|d| d.name = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Position"
                prop:value=move || target.get().position
                on:input=move |ev| target.update(|d| d.position = event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="page">
            <div class="card form-card">
                <h2 class="card__title">"Add Team Member"</h2>
                <div class="form-grid">{fields(draft)}</div>
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
                                "Add Member".into_any()
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
                            <th class="table__header-cell">"Photo"</th>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Position"</th>
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
                                        <td colspan="5" class="table__loading">
                                            <Spinner />
                                        </td>
                                    </tr>
                                }
                                    .into_any()
                            } else if store.items.get().is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="5" class="table__empty">"No team members yet"</td>
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
                                                <td class="table__cell">
                                                    {record
                                                        .image_url
                                                        .clone()
                                                        .map(|src| {
                                                            view! { <img class="table__thumb" src=src /> }
                                                        })}
                                                </td>
                                                <td class="table__cell">{record.name.clone()}</td>
                                                <td class="table__cell">{record.position.clone()}</td>
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
                                title="Edit Team Member".to_string()
                                on_close=Callback::new(move |_| store.edit_item.set(None))
                            >
                                <div class="form-grid">{fields(edit_draft)}</div>
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
                                title="Delete Team Member".to_string()
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
