//! 受付メディアタイプとバリデーション
//!
//! 判定はブラウザ（またはOS）が申告したMIMEタイプ文字列のみで行う。
//! 中身の検査・サイズ制限・拡張子による補完はしない。

use crate::error::{Result, UploadError};
use crate::types::SelectedFile;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// 受付可能なメディアタイプ
pub const ALLOWED_MEDIA_TYPES: &[&str] = &[MIME_PDF, MIME_DOCX];

/// ファイル選択ダイアログの `accept` 属性
pub const ACCEPT_ATTRIBUTE: &str = ".pdf,.docx";

/// 申告メディアタイプが許可リストと完全一致するか
pub fn is_allowed_media_type(media_type: &str) -> bool {
    ALLOWED_MEDIA_TYPES.contains(&media_type)
}

/// 送信前のバリデーション
pub fn validate_selection<P>(selected: Option<&SelectedFile<P>>) -> Result<&SelectedFile<P>> {
    let file = selected.ok_or(UploadError::NoFileSelected)?;

    if !is_allowed_media_type(&file.media_type) {
        return Err(UploadError::InvalidType {
            media_type: file.media_type.clone(),
        });
    }

    Ok(file)
}

/// 拡張子から申告メディアタイプを推定（ブラウザのOSレジストリ参照に相当）
///
/// 未知の拡張子は空文字列。ブラウザも未登録の拡張子には空の `type` を返す。
pub fn media_type_from_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "pdf" => MIME_PDF,
        "docx" => MIME_DOCX,
        "doc" => "application/msword",
        "txt" => "text/plain",
        "rtf" => "application/rtf",
        "odt" => "application/vnd.oasis.opendocument.text",
        "html" | "htm" => "text/html",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(media_type: &str) -> SelectedFile<()> {
        SelectedFile::new("doc", media_type, ())
    }

    #[test]
    fn test_allowed_types() {
        assert!(is_allowed_media_type("application/pdf"));
        assert!(is_allowed_media_type(MIME_DOCX));
        assert!(!is_allowed_media_type("application/msword"));
        assert!(!is_allowed_media_type(""));
    }

    #[test]
    fn test_accept_attribute_exported() {
        // ファイル選択ダイアログの絞り込みはクレート直下から参照する
        assert_eq!(crate::ACCEPT_ATTRIBUTE, ".pdf,.docx");
    }

    #[test]
    fn test_exact_match_only() {
        // 大文字やパラメータ付きは受け付けない
        assert!(!is_allowed_media_type("APPLICATION/PDF"));
        assert!(!is_allowed_media_type("application/pdf; charset=binary"));
        assert!(!is_allowed_media_type(" application/pdf"));
    }

    #[test]
    fn test_validate_no_file() {
        let result = validate_selection::<()>(None);
        assert_eq!(result.unwrap_err(), UploadError::NoFileSelected);
    }

    #[test]
    fn test_validate_wrong_type() {
        let f = file("text/plain");
        let err = validate_selection(Some(&f)).unwrap_err();
        assert_eq!(
            err,
            UploadError::InvalidType {
                media_type: "text/plain".to_string()
            }
        );
    }

    #[test]
    fn test_validate_ignores_name() {
        // 名前が .pdf でも申告タイプが違えば不可
        let f = SelectedFile::new("report.pdf", "application/octet-stream", ());
        assert!(validate_selection(Some(&f)).is_err());

        let f = SelectedFile::new("report.bin", MIME_PDF, ());
        assert!(validate_selection(Some(&f)).is_ok());
    }

    #[test]
    fn test_media_type_from_extension() {
        assert_eq!(media_type_from_extension("pdf"), MIME_PDF);
        assert_eq!(media_type_from_extension("PDF"), MIME_PDF);
        assert_eq!(media_type_from_extension("docx"), MIME_DOCX);
        assert_eq!(media_type_from_extension("doc"), "application/msword");
        assert_eq!(media_type_from_extension("xyz"), "");
    }
}
