use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "doc-summarizer")]
#[command(about = "PDF/DOCX文書をサマライザーサーバーに送信して要約を表示", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// サーバーURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub server: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 文書をアップロードして要約を表示
    Summarize {
        /// 文書ファイル（省略時はカレントフォルダから選択）
        file: Option<PathBuf>,

        /// 申告メディアタイプ（省略時は拡張子から推定）
        #[arg(long)]
        media_type: Option<String>,

        /// 出力形式 (text/html)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// 要約の保存先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// サーバーの稼働確認
    Health,

    /// 設定を表示/編集
    Config {
        /// サーバーURLを設定
        #[arg(long)]
        set_server: Option<String>,

        /// アップロード先パスを設定
        #[arg(long)]
        set_upload_path: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// 文字数行 + 要約本文
    #[default]
    Text,
    /// ブラウザの要約欄と同じHTML
    Html,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            _ => Err(format!("Unknown format: {}. Use text or html", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}
