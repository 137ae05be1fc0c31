use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocSummarizerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("PDF/DOCXファイルが見つかりません: {0}")]
    NoDocumentsFound(String),

    #[error("対話入力エラー: {0}")]
    Prompt(String),

    #[error("サーバーURLが不正: {0}")]
    InvalidServerUrl(String),

    /// 要約が得られなかった（メッセージはエラー表示欄と同じ文言）
    #[error("{0}")]
    SummaryFailed(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Upload(#[from] doc_summarizer_common::UploadError),
}

pub type Result<T> = std::result::Result<T, DocSummarizerError>;
