use crate::error::{DocSummarizerError, Result};
use doc_summarizer_common::UPLOAD_PATH;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// サーバーURLを上書きする環境変数
pub const SERVER_ENV: &str = "DOC_SUMMARIZER_SERVER";

const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server_url: String,
    pub upload_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.into(),
            upload_path: UPLOAD_PATH.into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| DocSummarizerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("doc-summarizer").join("config.json"))
    }

    /// 実際に使うサーバーURL
    pub fn server_url(&self) -> String {
        // 環境変数を優先
        match std::env::var(SERVER_ENV) {
            Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => self.server_url.clone(),
        }
    }

    pub fn set_server_url(&mut self, url: String) -> Result<()> {
        reqwest::Url::parse(&url).map_err(|e| DocSummarizerError::InvalidServerUrl(format!("{}: {}", url, e)))?;
        self.server_url = url;
        Ok(())
    }

    pub fn set_upload_path(&mut self, path: String) -> Result<()> {
        if !path.starts_with('/') {
            return Err(DocSummarizerError::Config(format!(
                "パスは / で始めてください: {}",
                path
            )));
        }
        self.upload_path = path;
        Ok(())
    }
}
