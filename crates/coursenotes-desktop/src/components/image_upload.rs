//! Image field of the note upload form, with a local preview

use dioxus::prelude::*;

use coursenotes_core::preview::PREVIEW_CLASS;

use crate::state::AppState;

#[component]
pub fn ImageUpload() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let current = (state.preview)();

    let on_change = move |evt: Event<FormData>| {
        let Some(file) = evt.files().into_iter().next() else {
            tracing::debug!("Image input changed with no file selected");
            return;
        };

        let file_name = file.name();
        let mut preview = state.preview;
        let Some(token) = preview.write().begin_read(Some(file_name.as_str())) else {
            return;
        };
        let content_type = file.content_type();

        spawn(async move {
            match file.read_bytes().await {
                Ok(bytes) => {
                    let applied = preview.write().complete_read(
                        token,
                        &file_name,
                        content_type.as_deref(),
                        &bytes,
                    );
                    match applied {
                        Ok(true) => tracing::debug!("Previewing {}", file_name),
                        Ok(false) => {}
                        Err(e) => tracing::warn!("No preview for {}: {}", file_name, e),
                    }
                }
                Err(e) => preview.write().fail_read(token, &e.to_string()),
            }
        });
    };

    rsx! {
        div {
            class: "form-group",
            style: "display: flex; flex-direction: column; gap: 6px;",

            label {
                r#for: "image",
                style: "color: {colors.text_secondary};",
                "Image"
            }
            input {
                id: "image",
                r#type: "file",
                accept: "image/*",
                onchange: on_change,
            }

            if current.is_reading() {
                div {
                    style: "font-size: 12px; color: {colors.text_muted};",
                    "Loading preview..."
                }
            }

            if let Some(image) = current.image() {
                img {
                    class: PREVIEW_CLASS,
                    src: "{image.data_url}",
                    alt: "{image.file_name}",
                }
            }
        }
    }
}
