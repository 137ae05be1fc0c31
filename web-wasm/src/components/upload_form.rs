//! アップロードフォームコンポーネント

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::ev::SubmitEvent;
use doc_summarizer_common::{UploadTransport, ACCEPT_ATTRIBUTE};
use crate::api::upload::{selected_files, FetchTransport};
use crate::app::BrowserController;

/// ドラッグ中のラベル強調
pub fn label_style(highlighted: bool) -> &'static str {
    if highlighted {
        "border-color: #667eea; background: #f0f2ff"
    } else {
        "border-color: #ddd; background: #f8f9fa"
    }
}

pub fn label_class(selected: bool) -> &'static str {
    if selected {
        "file-label file-selected"
    } else {
        "file-label"
    }
}

#[component]
pub fn UploadForm(
    controller: RwSignal<BrowserController, LocalStorage>,
    file_input: NodeRef<html::Input>,
) -> impl IntoView {
    let on_change = move |_: web_sys::Event| {
        let files = file_input
            .get()
            .and_then(|input| input.files())
            .map(|files| selected_files(&files))
            .unwrap_or_default();
        controller.update(|c| c.select(files));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let ticket = match controller.try_update(|c| c.begin_submit()) {
            Some(Ok(ticket)) => ticket,
            // バリデーションエラーは表示済み、送信中は無視
            _ => return,
        };

        spawn_local(async move {
            let reply = FetchTransport::default().send(&ticket.file).await;
            if let Some(Err(e)) = controller.try_update(|c| c.settle(ticket.id, reply)) {
                if e.is_diagnostic() {
                    gloo::console::error!("Error:", e.to_string());
                }
            }
        });
    };

    let file_label = move || controller.with(|c| c.file_label());
    let submit_button = move || controller.with(|c| c.submit_button());

    view! {
        <form id="uploadForm" class="upload-form" on:submit=on_submit>
            <div class="file-input-wrapper">
                <input
                    type="file"
                    id="fileInput"
                    name="file"
                    accept=ACCEPT_ATTRIBUTE
                    class="file-input"
                    node_ref=file_input
                    on:change=on_change
                />
                <label
                    for="fileInput"
                    class=move || label_class(file_label().selected)
                    style=move || label_style(controller.with(|c| c.is_highlighted()))
                >
                    <span class="file-icon">"📄"</span>
                    <span class="file-text">{move || file_label().text}</span>
                </label>
            </div>

            <button
                type="submit"
                id="submitBtn"
                class="submit-btn"
                disabled=move || submit_button().disabled
            >
                {move || submit_button().label}
            </button>
        </form>
    }
}
