//! 表示用の文字列生成

use crate::types::{FileLabel, SubmitButton};

/// ファイル未選択時のラベル
pub const PLACEHOLDER_TEXT: &str = "Choose PDF or DOCX file";

/// 送信ボタン（通常時）
pub const SUBMIT_LABEL: &str = "Summarize Document";

/// 送信ボタン（処理中）
pub const PROCESSING_LABEL: &str = "Processing...";

/// 要約欄のHTML
///
/// 要約本文はサーバー由来の信頼済みマークアップとしてそのまま埋め込む。
pub fn summary_html(summary: &str, word_count: u64) -> String {
    format!(
        "<div><strong>Word Count:</strong> {}</div><hr>{}",
        word_count, summary
    )
}

/// 端末向けの要約表示
pub fn summary_text(summary: &str, word_count: u64) -> String {
    format!("Word Count: {}\n\n{}", word_count, summary)
}

pub fn file_label(selected_name: Option<&str>) -> FileLabel {
    match selected_name {
        Some(name) => FileLabel {
            selected: true,
            text: format!("Selected: {}", name),
        },
        None => FileLabel {
            selected: false,
            text: PLACEHOLDER_TEXT.to_string(),
        },
    }
}

pub fn submit_button(in_flight: bool) -> SubmitButton {
    if in_flight {
        SubmitButton {
            disabled: true,
            label: PROCESSING_LABEL,
        }
    } else {
        SubmitButton {
            disabled: false,
            label: SUBMIT_LABEL,
        }
    }
}
