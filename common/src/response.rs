//! レスポンス分類
//!
//! 送信結果（HTTPステータス+本文、または通信例外）を
//! 要約表示かエラーのどちらかに振り分ける。

use crate::error::{Result, UploadError, MSG_SERVER_FALLBACK};
use crate::types::{HttpReply, UploadResponse};

/// 要約結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOutcome {
    pub summary: String,
    pub word_count: u64,
}

/// 送信結果を分類
///
/// - 2xx以外: 本文は見ずに `TransportFailure`
/// - 2xxだがJSONとして読めない: `UnexpectedClientFailure`
/// - `success: true`: 要約
/// - それ以外: サーバーの `error` をそのまま（空・欠落ならフォールバック）
pub fn classify(reply: Result<HttpReply>) -> Result<SummaryOutcome> {
    let reply = reply?;

    if !reply.is_success() {
        return Err(UploadError::TransportFailure {
            status: reply.status,
        });
    }

    let response: UploadResponse = serde_json::from_str(&reply.body)?;
    interpret(response)
}

/// パース済みレスポンスの解釈
pub fn interpret(response: UploadResponse) -> Result<SummaryOutcome> {
    if response.success {
        return Ok(SummaryOutcome {
            summary: response.summary.unwrap_or_default(),
            word_count: response.word_count.unwrap_or(0),
        });
    }

    let message = response
        .error
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| MSG_SERVER_FALLBACK.to_string());
    Err(UploadError::ServerReportedFailure(message))
}
