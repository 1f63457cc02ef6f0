use leptos::ev;
use leptos::prelude::*;

/// Shared surface for the edit form and the delete confirmation.
#[component]
pub fn Modal(
    /// Title shown in the header
    title: String,
    /// Callback when the modal should close
    on_close: Callback<()>,
    /// Modal content; action buttons go at the bottom of the body
    children: Children,
) -> impl IntoView {
    // Escape closes, same as clicking the overlay
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h3 class="modal-title">{title}</h3>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
