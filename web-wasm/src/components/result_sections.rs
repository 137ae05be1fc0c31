//! 結果表示コンポーネント
//!
//! 処理中・要約・エラーの3欄は常にDOMに置き、表示/非表示だけを切り替える。

use leptos::prelude::*;
use doc_summarizer_common::{summary_html, DisplayState, Section};
use crate::app::BrowserController;

pub fn section_style(visible: bool) -> &'static str {
    if visible {
        "display: block"
    } else {
        "display: none"
    }
}

/// 要約欄のHTML（要約以外の状態では空）
pub fn summary_markup(state: &DisplayState) -> String {
    match state {
        DisplayState::Summary {
            summary,
            word_count,
        } => summary_html(summary, *word_count),
        _ => String::new(),
    }
}

#[component]
pub fn ResultSections(controller: RwSignal<BrowserController, LocalStorage>) -> impl IntoView {
    let visible = move |section: Section| {
        section_style(controller.with(|c| c.display().is_visible(section)))
    };

    view! {
        <div id={Section::Loading.element_id()} class="loading-section" style=move || visible(Section::Loading)>
            <div class="spinner"></div>
            <p>"Processing your document..."</p>
        </div>

        <div id={Section::Summary.element_id()} class="summary-section" style=move || visible(Section::Summary)>
            <h2>"Summary"</h2>
            // 要約はサーバー由来のマークアップをそのまま描画
            <div
                id="summaryContent"
                class="summary-content"
                inner_html=move || controller.with(|c| summary_markup(c.display()))
            ></div>
        </div>

        <div id={Section::Error.element_id()} class="error-section" style=move || visible(Section::Error)>
            <h2>"Error"</h2>
            // エラー文言はテキストとして描画
            <div id="errorContent" class="error-content">
                {move || controller.with(|c| c.display().error_message().unwrap_or_default().to_string())}
            </div>
        </div>
    }
}
