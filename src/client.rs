//! サマライザーサーバーとのHTTP通信
//!
//! `POST {server}{upload_path}` にmultipart(フィールド `file`)で1回だけ送信する。
//! リトライ・タイムアウトはしない。

use crate::error::{DocSummarizerError, Result};
use doc_summarizer_common::{HttpReply, SelectedFile, UploadError, UploadTransport, FILE_FIELD};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

/// `/health` のレスポンス
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: reqwest::Url,
    upload_path: String,
}

impl HttpTransport {
    pub fn new(server_url: &str, upload_path: &str) -> Result<Self> {
        let base_url = reqwest::Url::parse(server_url)
            .map_err(|e| DocSummarizerError::InvalidServerUrl(format!("{}: {}", server_url, e)))?;

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            upload_path: upload_path.to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url> {
        self.base_url
            .join(path)
            .map_err(|e| DocSummarizerError::InvalidServerUrl(format!("{}: {}", path, e)))
    }

    pub fn upload_url(&self) -> Result<reqwest::Url> {
        self.endpoint(&self.upload_path)
    }

    /// サーバーの稼働確認
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint("/health")?;
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    fn build_form(file: &SelectedFile<Vec<u8>>) -> std::result::Result<Form, reqwest::Error> {
        let mut part = Part::bytes(file.payload.clone()).file_name(file.name.clone());
        // 申告タイプが空のときはContent-Typeを付けない
        if !file.media_type.is_empty() {
            part = part.mime_str(&file.media_type)?;
        }
        Ok(Form::new().part(FILE_FIELD, part))
    }

    async fn post(&self, file: &SelectedFile<Vec<u8>>) -> Result<HttpReply> {
        let url = self.upload_url()?;
        let form = Self::build_form(file)?;

        tracing::debug!(%url, file = %file.name, bytes = file.payload.len(), "uploading");

        let response = self.client.post(url).multipart(form).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(status, body_len = body.len(), "upload response");
        Ok(HttpReply::new(status, body))
    }
}

impl UploadTransport<Vec<u8>> for HttpTransport {
    async fn send(&self, file: &SelectedFile<Vec<u8>>) -> doc_summarizer_common::Result<HttpReply> {
        self.post(file)
            .await
            .map_err(|e| UploadError::UnexpectedClientFailure(e.to_string()))
    }
}
