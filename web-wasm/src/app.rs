//! メインアプリケーションコンポーネント

use leptos::html;
use leptos::prelude::*;
use doc_summarizer_common::UploadController;
use crate::components::{
    header::Header,
    drop_zone::DropZone,
    upload_form::UploadForm,
    result_sections::ResultSections,
};

/// ブラウザ版コントローラ（ペイロードは `File`）
pub type BrowserController = UploadController<web_sys::File>;

/// メインアプリケーションコンポーネント
///
/// コントローラはここで1度だけ作る。
/// `File` はスレッド間で送れないのでローカルシグナルに置く。
#[component]
pub fn App() -> impl IntoView {
    let controller = RwSignal::new_local(BrowserController::new());

    view! { <UploadPage controller=controller /> }
}

/// 画面全体（ドロップ領域・フォーム・結果欄）
#[component]
pub fn UploadPage(controller: RwSignal<BrowserController, LocalStorage>) -> impl IntoView {
    let file_input: NodeRef<html::Input> = NodeRef::new();

    view! {
        <DropZone controller=controller file_input=file_input>
            <Header />
            <UploadForm controller=controller file_input=file_input />
            <ResultSections controller=controller />
        </DropZone>
    }
}
