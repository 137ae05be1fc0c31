//! エラー型定義
//!
//! アップロード処理で発生しうる失敗の分類。どの失敗もUI境界で止まり、
//! `user_message()` の文言がエラー表示欄に出る。`Display` は診断ログ用。

use thiserror::Error;

/// ファイル未選択時のメッセージ
pub const MSG_NO_FILE: &str = "Please select a file to upload.";

/// 形式不正時のメッセージ
pub const MSG_INVALID_TYPE: &str = "Please select a valid PDF or DOCX file.";

/// 通信失敗・想定外エラー時の共通メッセージ
pub const MSG_UPLOAD_FAILED: &str = "Failed to upload file. Please try again.";

/// サーバーが `error` を返さなかった場合のフォールバック
pub const MSG_SERVER_FALLBACK: &str = "An error occurred while processing the file.";

/// アップロードエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("no file selected")]
    NoFileSelected,

    #[error("invalid file type: {media_type:?}")]
    InvalidType { media_type: String },

    #[error("HTTP error! status: {status}")]
    TransportFailure { status: u16 },

    #[error("server reported failure: {0}")]
    ServerReportedFailure(String),

    #[error("unexpected client failure: {0}")]
    UnexpectedClientFailure(String),
}

impl UploadError {
    /// エラー表示欄に出す文言
    pub fn user_message(&self) -> &str {
        match self {
            UploadError::NoFileSelected => MSG_NO_FILE,
            UploadError::InvalidType { .. } => MSG_INVALID_TYPE,
            UploadError::ServerReportedFailure(message) => message.as_str(),
            UploadError::TransportFailure { .. } | UploadError::UnexpectedClientFailure(_) => {
                MSG_UPLOAD_FAILED
            }
        }
    }

    /// 送信前のバリデーションで検出されたエラーか
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            UploadError::NoFileSelected | UploadError::InvalidType { .. }
        )
    }

    /// 診断ログに残すべきエラーか（ユーザーには詳細を見せない種類）
    pub fn is_diagnostic(&self) -> bool {
        matches!(
            self,
            UploadError::TransportFailure { .. } | UploadError::UnexpectedClientFailure(_)
        )
    }
}

impl From<serde_json::Error> for UploadError {
    fn from(e: serde_json::Error) -> Self {
        UploadError::UnexpectedClientFailure(e.to_string())
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, UploadError>;
