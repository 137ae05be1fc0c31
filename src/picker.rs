//! 文書ファイルの対話式選択
//!
//! ブラウザのファイル選択ダイアログに相当する。候補はカレントフォルダ直下のPDF/DOCX。

use crate::error::{DocSummarizerError, Result};
use crate::scanner::{scan_documents, DocumentInfo};
use dialoguer::Select;
use std::path::{Path, PathBuf};

/// 一覧表示用のラベル
pub fn document_label(doc: &DocumentInfo) -> String {
    format!("{} ({})", doc.file_name, format_size(doc.size))
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 対話式で文書を選択
///
/// Esc/q で中断した場合は None。
pub fn select_document_interactive(folder: &Path) -> Result<Option<PathBuf>> {
    let documents = scan_documents(folder)?;

    if documents.is_empty() {
        return Err(DocSummarizerError::NoDocumentsFound(folder.display().to_string()));
    }

    let labels: Vec<String> = documents.iter().map(document_label).collect();

    let selection = Select::new()
        .with_prompt("要約する文書を選択してください")
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(|e| DocSummarizerError::Prompt(e.to_string()))?;

    Ok(selection.map(|i| documents[i].path.clone()))
}
