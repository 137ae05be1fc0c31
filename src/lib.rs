//! doc-summarizer
//!
//! PDF/DOCX文書をサマライザーサーバーへ送信し、要約を端末に表示するCLI。
//! 選択・検証・表示状態の制御はブラウザ版と共通の `doc_summarizer_common` を使う。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod picker;
pub mod scanner;
pub mod summarize;
