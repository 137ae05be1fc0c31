//! `/upload` への送信（fetch + FormData）

use doc_summarizer_common::{HttpReply, SelectedFile, UploadError, UploadTransport, FILE_FIELD, UPLOAD_PATH};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList, FormData, Request, RequestInit, Response};

/// ブラウザの `File` を選択状態に変換
///
/// メディアタイプはブラウザが申告した `File.type` をそのまま使う。
pub fn selected_file(file: File) -> SelectedFile<File> {
    SelectedFile::new(file.name(), file.type_(), file)
}

/// `FileList` を選択状態の列に変換
pub fn selected_files(files: &FileList) -> Vec<SelectedFile<File>> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(selected_file)
        .collect()
}

/// fetchによる送信
pub struct FetchTransport {
    url: String,
}

impl Default for FetchTransport {
    fn default() -> Self {
        Self {
            url: UPLOAD_PATH.to_string(),
        }
    }
}

impl FetchTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

fn js_error(e: JsValue) -> UploadError {
    let detail = e
        .as_string()
        .unwrap_or_else(|| format!("{:?}", e));
    UploadError::UnexpectedClientFailure(detail)
}

/// multipartでPOSTし、ステータスと本文を返す
async fn post_form(url: &str, file: &File) -> Result<HttpReply, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob(FILE_FIELD, file)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);

    // Content-Typeはブラウザがboundary付きで設定する
    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let status = resp.status();
    let body = JsFuture::from(resp.text()?)
        .await?
        .as_string()
        .unwrap_or_default();

    Ok(HttpReply::new(status, body))
}

impl UploadTransport<File> for FetchTransport {
    async fn send(&self, file: &SelectedFile<File>) -> doc_summarizer_common::Result<HttpReply> {
        post_form(&self.url, &file.payload).await.map_err(js_error)
    }
}
