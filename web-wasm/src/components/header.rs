//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Document Summarizer"</h1>
            <p class="subtitle">"Upload a PDF or DOCX file to get a summary"</p>
        </header>
    }
}
