//! 型定義
//!
//! ブラウザ(WASM)とCLIで共有される型:
//! - SelectedFile: 選択中のファイル（ペイロード型はプラットフォーム依存）
//! - UploadResponse: `/upload` のJSONレスポンス
//! - DisplayState: 結果表示欄の状態

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 選択中のファイル
///
/// ペイロードはブラウザでは `web_sys::File`、CLIでは `Vec<u8>`。
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<P> {
    pub name: String,
    /// 申告メディアタイプ（中身は検査しない）
    pub media_type: String,
    pub payload: P,
}

impl<P> SelectedFile<P> {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, payload: P) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            payload,
        }
    }
}

/// `/upload` のレスポンス
///
/// `success` は真偽値以外でも真偽として読む（`null`、`0`、`""` は偽）。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub word_count: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
    /// サーバー側で正規化されたファイル名（診断用）
    #[serde(default)]
    pub filename: Option<String>,
}

fn truthy<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// 語数は整数値の数値なら受け付ける（`3.0` も可）。負数・小数・null は欠落扱い
fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let count = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(count.and_then(|n| {
        n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        })
    }))
}

/// 送信1回分の生の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 結果表示欄の状態（常にどれか1つ）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayState {
    #[default]
    Idle,
    Loading,
    Summary { summary: String, word_count: u64 },
    Error { message: String },
}

/// 表示欄
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Loading,
    Summary,
    Error,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Loading, Section::Summary, Section::Error];

    /// DOM上の要素ID
    pub fn element_id(&self) -> &'static str {
        match self {
            Section::Loading => "loadingSection",
            Section::Summary => "summarySection",
            Section::Error => "errorSection",
        }
    }
}

impl DisplayState {
    /// 表示中の欄（Idleは何も表示しない）
    pub fn visible_section(&self) -> Option<Section> {
        match self {
            DisplayState::Idle => None,
            DisplayState::Loading => Some(Section::Loading),
            DisplayState::Summary { .. } => Some(Section::Summary),
            DisplayState::Error { .. } => Some(Section::Error),
        }
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.visible_section() == Some(section)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DisplayState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            DisplayState::Error { message } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// ファイル選択ラベルの表示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLabel {
    /// `file-selected` クラスを付けるか
    pub selected: bool,
    pub text: String,
}

/// 送信ボタンの表示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub disabled: bool,
    pub label: &'static str,
}
