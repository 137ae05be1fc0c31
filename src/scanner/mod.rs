use crate::error::{DocSummarizerError, Result};
use doc_summarizer_common::{media_type_from_extension, SelectedFile};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
}

const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "docx", "PDF", "DOCX"];

/// フォルダ直下のPDF/DOCXを列挙（ファイル選択候補）
pub fn scan_documents(folder: &Path) -> Result<Vec<DocumentInfo>> {
    if !folder.exists() {
        return Err(DocSummarizerError::FileNotFound(folder.display().to_string()));
    }

    let mut documents = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_document = path
            .extension()
            .map(|ext| DOCUMENT_EXTENSIONS.iter().any(|&e| e == ext.to_string_lossy()))
            .unwrap_or(false);

        if is_document {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);

            documents.push(DocumentInfo {
                path: path.to_path_buf(),
                file_name,
                size,
            });
        }
    }

    // ファイル名でソート
    documents.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(documents)
}

/// 申告メディアタイプ（拡張子ベース、中身は見ない）
pub fn declared_media_type(path: &Path) -> &'static str {
    path.extension()
        .map(|ext| media_type_from_extension(&ext.to_string_lossy()))
        .unwrap_or("")
}

/// ファイルを読み込んで選択状態にする
///
/// `media_type` を指定した場合は拡張子からの推定より優先する。
pub fn load_document(path: &Path, media_type: Option<&str>) -> Result<SelectedFile<Vec<u8>>> {
    if !path.is_file() {
        return Err(DocSummarizerError::FileNotFound(path.display().to_string()));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let media_type = media_type.unwrap_or_else(|| declared_media_type(path));
    let payload = std::fs::read(path)?;

    Ok(SelectedFile::new(name, media_type, payload))
}
