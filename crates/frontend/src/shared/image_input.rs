//! Validated image selection with a local object-URL preview.

use contracts::shared::image::validate_image;
use leptos::prelude::*;
use web_sys::{File, HtmlInputElement, Url};

/// One surface's image pick: the accepted file plus its preview URL.
///
/// A rejected file leaves the previous selection untouched; nothing here has
/// any effect until the file is attached to a submission.
#[derive(Clone, Copy)]
pub struct ImageSelection {
    file: RwSignal<Option<File>, LocalStorage>,
    preview: RwSignal<Option<String>>,
}

impl ImageSelection {
    pub fn new() -> Self {
        Self {
            file: RwSignal::new_local(None),
            preview: RwSignal::new(None),
        }
    }

    /// The accepted file, read at submission time.
    pub fn file(&self) -> Option<File> {
        self.file.get_untracked()
    }

    pub fn preview_url(&self) -> Option<String> {
        self.preview.get()
    }

    /// Accept `file` if it passes the type/size rules; alert and keep the
    /// current selection otherwise.
    pub fn offer(&self, file: File) {
        if let Err(message) = validate_image(&file.type_(), file.size() as u64) {
            alert(&message);
            return;
        }
        self.revoke_preview();
        self.preview.set(Url::create_object_url_with_blob(&file).ok());
        self.file.set(Some(file));
    }

    pub fn clear(&self) {
        self.revoke_preview();
        self.file.set(None);
        self.preview.set(None);
    }

    fn revoke_preview(&self) {
        if let Some(old) = self.preview.get_untracked() {
            let _ = Url::revoke_object_url(&old);
        }
    }
}

impl Default for ImageSelection {
    fn default() -> Self {
        Self::new()
    }
}

/// Blocking browser alert, used for client-side validation failures.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// File input plus preview. In edit mode the stored image is shown until a
/// new file is accepted.
#[component]
pub fn ImagePicker(
    selection: ImageSelection,
    /// Image already stored on the record being edited.
    #[prop(optional)]
    existing_url: Option<String>,
) -> impl IntoView {
    let existing = StoredValue::new(existing_url.filter(|url| !url.is_empty()));
    let shown = move || selection.preview_url().or_else(|| existing.get_value());

    view! {
        <div class="form-group form-group--image">
            <input
                type="file"
                class="file-input"
                on:change=move |ev| {
                    let input: HtmlInputElement = event_target(&ev);
                    if let Some(file) = input.files().and_then(|files| files.get(0)) {
                        selection.offer(file);
                    }
                }
            />
            {move || shown().map(|src| view! { <img class="image-preview" src=src /> })}
        </div>
    }
}
