//! 要約の実行
//!
//! ブラウザ版と同じ `UploadController` をCLIから駆動する。
//! 送信中はスピナーを表示し、失敗の詳細は診断ログ(tracing)にのみ出す。

use crate::cli::OutputFormat;
use crate::error::{DocSummarizerError, Result};
use crate::scanner;
use doc_summarizer_common::render::PROCESSING_LABEL;
use doc_summarizer_common::{
    summary_html, summary_text, DisplayState, SubmitError, UploadController, UploadTransport,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

pub type CliController = UploadController<Vec<u8>>;

/// ファイルを選択状態にする（None は未選択のまま）
pub fn select_path(
    controller: &mut CliController,
    path: Option<&Path>,
    media_type: Option<&str>,
) -> Result<()> {
    if let Some(path) = path {
        let file = scanner::load_document(path, media_type)?;
        tracing::debug!(file = %file.name, media_type = %file.media_type, "selected");
        controller.select(vec![file]);
    }
    Ok(())
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(PROCESSING_LABEL);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// 送信して表示状態を確定させる
///
/// `show_progress` が true なら送信中にスピナーを出す。
pub async fn submit<T>(
    controller: &mut CliController,
    transport: &T,
    show_progress: bool,
) -> DisplayState
where
    T: UploadTransport<Vec<u8>>,
{
    let ticket = match controller.begin_submit() {
        Ok(ticket) => ticket,
        Err(SubmitError::InFlight) => {
            tracing::warn!("submission already in flight");
            return controller.display().clone();
        }
        Err(SubmitError::Upload(e)) => {
            tracing::debug!(error = %e, "validation failed");
            return controller.display().clone();
        }
    };

    let progress = show_progress.then(spinner);
    let reply = transport.send(&ticket.file).await;
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if let Err(e) = controller.settle(ticket.id, reply) {
        if e.is_diagnostic() {
            tracing::error!(error = %e, file = %ticket.file.name, "upload failed");
        } else {
            tracing::info!(error = %e, "server rejected document");
        }
    }

    controller.display().clone()
}

/// 確定した表示状態を出力用の文字列にする
///
/// Summary なら本文、Error ならユーザー向けメッセージを持つ `SummaryFailed`。
pub fn render(state: &DisplayState, format: OutputFormat) -> Result<String> {
    match state {
        DisplayState::Summary {
            summary,
            word_count,
        } => Ok(match format {
            OutputFormat::Text => summary_text(summary, *word_count),
            OutputFormat::Html => summary_html(summary, *word_count),
        }),
        DisplayState::Error { message } => Err(DocSummarizerError::SummaryFailed(message.clone())),
        DisplayState::Idle | DisplayState::Loading => Err(DocSummarizerError::SummaryFailed(
            doc_summarizer_common::error::MSG_UPLOAD_FAILED.to_string(),
        )),
    }
}
