//! 送信トランスポート
//!
//! ブラウザは `fetch` + `FormData`、CLIは `reqwest` のmultipartで実装する。

use std::future::Future;

use crate::error::Result;
use crate::types::{HttpReply, SelectedFile};

/// multipartのフィールド名
pub const FILE_FIELD: &str = "file";

/// 送信先パス
pub const UPLOAD_PATH: &str = "/upload";

/// 1回のPOSTを行うトランスポート
///
/// 非2xxもエラーにせず `HttpReply` として返す。分類は呼び出し側で行う。
/// 通信・本文読み込みの例外は `UploadError::UnexpectedClientFailure`。
pub trait UploadTransport<P> {
    fn send(&self, file: &SelectedFile<P>) -> impl Future<Output = Result<HttpReply>>;
}
