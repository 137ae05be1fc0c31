//! ドラッグ&ドロップ領域コンポーネント
//!
//! `.container` 全体でドラッグイベントを受ける。ブラウザ既定の動作
//! （ドロップしたファイルへの遷移）は常に抑止する。

use leptos::html;
use leptos::prelude::*;
use web_sys::DragEvent;
use crate::api::upload::selected_files;
use crate::app::BrowserController;

fn prevent_defaults(ev: &DragEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
pub fn DropZone(
    controller: RwSignal<BrowserController, LocalStorage>,
    file_input: NodeRef<html::Input>,
    children: Children,
) -> impl IntoView {
    let on_dragenter = move |ev: DragEvent| {
        prevent_defaults(&ev);
        controller.update(|c| c.drag_enter());
    };

    let on_dragover = move |ev: DragEvent| {
        prevent_defaults(&ev);
        controller.update(|c| c.drag_over());
    };

    let on_dragleave = move |ev: DragEvent| {
        prevent_defaults(&ev);
        controller.update(|c| c.drag_leave());
    };

    let on_drop = move |ev: DragEvent| {
        prevent_defaults(&ev);

        let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
            controller.update(|c| c.drag_leave());
            return;
        };

        // 選択ダイアログと同じ経路で選択し、入力欄にも反映する
        let updated = controller
            .try_update(|c| c.drop_files(selected_files(&files)))
            .unwrap_or(false);
        if updated {
            if let Some(input) = file_input.get() {
                input.set_files(Some(&files));
            }
        }
    };

    view! {
        <div
            class="container"
            on:dragenter=on_dragenter
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            {children()}
        </div>
    }
}
