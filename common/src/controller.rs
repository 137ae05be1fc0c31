//! アップロードコントローラ
//!
//! ファイル選択・ドラッグ&ドロップ・送信・結果表示の状態を1か所で持つ。
//! DOMやHTTPクライアントには依存せず、ホスト側（WASM/CLI）が
//! イベントを渡して状態を読み出す。
//!
//! 状態遷移:
//! - Idle → Loading: 有効な送信
//! - Loading → Summary | Error: 応答の確定
//! - Summary/Error → Loading: 次の有効な送信
//! - 無効な送信（未選択・形式不正）は Loading を経ず Error

use thiserror::Error;

use crate::error::UploadError;
use crate::media::validate_selection;
use crate::render;
use crate::response::{classify, SummaryOutcome};
use crate::transport::UploadTransport;
use crate::types::{DisplayState, FileLabel, HttpReply, SelectedFile, SubmitButton};

/// 送信が開始できなかった理由
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// 前の送信が未完了（表示は変えない）
    #[error("a submission is already in flight")]
    InFlight,

    #[error(transparent)]
    Upload(#[from] UploadError),
}

/// 送信1回分のチケット
#[derive(Debug, Clone)]
pub struct SubmitTicket<P> {
    pub id: u64,
    pub file: SelectedFile<P>,
}

#[derive(Debug, Clone)]
pub struct UploadController<P> {
    selected: Option<SelectedFile<P>>,
    display: DisplayState,
    highlighted: bool,
    /// 送信中のリクエストID
    in_flight: Option<u64>,
    next_request_id: u64,
    last_error: Option<UploadError>,
}

impl<P> Default for UploadController<P> {
    fn default() -> Self {
        Self {
            selected: None,
            display: DisplayState::Idle,
            highlighted: false,
            in_flight: None,
            next_request_id: 1,
            last_error: None,
        }
    }
}

impl<P> UploadController<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイル選択ダイアログの変更
    ///
    /// 先頭の1件のみ採用。空なら選択解除。
    pub fn select<I>(&mut self, files: I)
    where
        I: IntoIterator<Item = SelectedFile<P>>,
    {
        self.selected = files.into_iter().next();
    }

    pub fn drag_enter(&mut self) {
        self.highlighted = true;
    }

    pub fn drag_over(&mut self) {
        self.highlighted = true;
    }

    pub fn drag_leave(&mut self) {
        self.highlighted = false;
    }

    /// ドロップ
    ///
    /// 空でなければ選択ダイアログと同じ経路で選択する。
    /// 選択が更新されたら true。
    pub fn drop_files<I>(&mut self, files: I) -> bool
    where
        I: IntoIterator<Item = SelectedFile<P>>,
    {
        self.highlighted = false;

        let mut files = files.into_iter().peekable();
        if files.peek().is_none() {
            return false;
        }
        self.select(files);
        true
    }

    pub fn selected(&self) -> Option<&SelectedFile<P>> {
        self.selected.as_ref()
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// 直近の失敗
    pub fn last_error(&self) -> Option<&UploadError> {
        self.last_error.as_ref()
    }

    pub fn file_label(&self) -> FileLabel {
        render::file_label(self.selected.as_ref().map(|f| f.name.as_str()))
    }

    pub fn submit_button(&self) -> SubmitButton {
        render::submit_button(self.is_in_flight())
    }

    /// 応答の確定
    ///
    /// 古いチケットIDは無視する。失敗時はその内容を返すので、
    /// ホスト側で診断ログに出す。
    pub fn settle(
        &mut self,
        ticket_id: u64,
        reply: crate::error::Result<HttpReply>,
    ) -> crate::error::Result<()> {
        if self.in_flight != Some(ticket_id) {
            return Ok(());
        }
        self.in_flight = None;

        match classify(reply) {
            Ok(SummaryOutcome {
                summary,
                word_count,
            }) => {
                self.last_error = None;
                self.display = DisplayState::Summary {
                    summary,
                    word_count,
                };
                Ok(())
            }
            Err(e) => {
                self.show_error(e.clone());
                Err(e)
            }
        }
    }

    fn show_error(&mut self, error: UploadError) {
        self.display = DisplayState::Error {
            message: error.user_message().to_string(),
        };
        self.last_error = Some(error);
    }
}

impl<P: Clone> UploadController<P> {
    /// 送信開始
    ///
    /// バリデーション失敗時はエラー表示にしてリクエストは出さない。
    /// 成功時は Loading に遷移し、送信ボタンを無効化する。
    pub fn begin_submit(&mut self) -> Result<SubmitTicket<P>, SubmitError> {
        if self.is_in_flight() {
            return Err(SubmitError::InFlight);
        }

        let validated = validate_selection(self.selected.as_ref()).cloned();
        let file = match validated {
            Ok(file) => file,
            Err(e) => {
                self.show_error(e.clone());
                return Err(e.into());
            }
        };

        let id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(id);
        self.display = DisplayState::Loading;

        Ok(SubmitTicket { id, file })
    }

    /// 送信開始から確定までを一括で行う（ヘッドレス用）
    pub async fn submit<T>(&mut self, transport: &T) -> Result<(), SubmitError>
    where
        T: UploadTransport<P>,
    {
        let ticket = self.begin_submit()?;
        let reply = transport.send(&ticket.file).await;
        self.settle(ticket.id, reply)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MSG_INVALID_TYPE, MSG_NO_FILE, MSG_UPLOAD_FAILED};
    use crate::media::{MIME_DOCX, MIME_PDF};
    use crate::types::Section;
    use std::cell::{Cell, RefCell};

    type Payload = Vec<u8>;

    /// 固定の応答を返すトランスポート
    struct FakeTransport {
        reply: crate::error::Result<HttpReply>,
        calls: Cell<usize>,
        sent: RefCell<Vec<String>>,
    }

    impl FakeTransport {
        fn new(reply: crate::error::Result<HttpReply>) -> Self {
            Self {
                reply,
                calls: Cell::new(0),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn json(status: u16, body: &str) -> Self {
            Self::new(Ok(HttpReply::new(status, body)))
        }
    }

    impl UploadTransport<Payload> for FakeTransport {
        async fn send(&self, file: &SelectedFile<Payload>) -> crate::error::Result<HttpReply> {
            self.calls.set(self.calls.get() + 1);
            self.sent.borrow_mut().push(file.name.clone());
            self.reply.clone()
        }
    }

    fn pdf(name: &str) -> SelectedFile<Payload> {
        SelectedFile::new(name, MIME_PDF, b"%PDF-1.4".to_vec())
    }

    fn controller_with(file: SelectedFile<Payload>) -> UploadController<Payload> {
        let mut c = UploadController::new();
        c.select(vec![file]);
        c
    }

    #[test]
    fn test_initial_state() {
        let c = UploadController::<Payload>::new();
        assert_eq!(c.display(), &DisplayState::Idle);
        assert!(!c.is_in_flight());
        assert!(!c.file_label().selected);
        assert_eq!(c.submit_button().label, "Summarize Document");
    }

    #[test]
    fn test_select_takes_first_only() {
        let mut c = UploadController::new();
        c.select(vec![pdf("a.pdf"), pdf("b.pdf")]);
        assert_eq!(c.selected().unwrap().name, "a.pdf");
        assert_eq!(c.file_label().text, "Selected: a.pdf");
    }

    #[test]
    fn test_select_empty_clears() {
        let mut c = controller_with(pdf("a.pdf"));
        c.select(Vec::new());
        assert!(c.selected().is_none());
        assert_eq!(c.file_label().text, "Choose PDF or DOCX file");
    }

    #[test]
    fn test_drag_highlight() {
        let mut c = UploadController::<Payload>::new();
        c.drag_enter();
        assert!(c.is_highlighted());
        c.drag_over();
        assert!(c.is_highlighted());
        c.drag_leave();
        assert!(!c.is_highlighted());
    }

    #[test]
    fn test_drop_selects_and_unhighlights() {
        let mut c = UploadController::new();
        c.drag_enter();
        assert!(c.drop_files(vec![pdf("dropped.pdf")]));
        assert!(!c.is_highlighted());
        assert_eq!(c.selected().unwrap().name, "dropped.pdf");
    }

    #[test]
    fn test_empty_drop_keeps_selection() {
        let mut c = controller_with(pdf("kept.pdf"));
        c.drag_enter();
        assert!(!c.drop_files(Vec::new()));
        assert!(!c.is_highlighted());
        assert_eq!(c.selected().unwrap().name, "kept.pdf");
    }

    #[tokio::test]
    async fn test_no_file_selected() {
        let mut c = UploadController::new();
        let transport = FakeTransport::json(200, "{}");

        let err = c.submit(&transport).await.unwrap_err();
        assert_eq!(err, SubmitError::Upload(UploadError::NoFileSelected));
        assert_eq!(c.display().error_message(), Some(MSG_NO_FILE));
        assert_eq!(transport.calls.get(), 0);
        assert!(!c.is_in_flight());
    }

    #[tokio::test]
    async fn test_invalid_type_no_request() {
        let mut c = controller_with(SelectedFile::new("notes.txt", "text/plain", vec![]));
        let transport = FakeTransport::json(200, "{}");

        let err = c.submit(&transport).await.unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Upload(UploadError::InvalidType { .. })
        ));
        assert_eq!(c.display().error_message(), Some(MSG_INVALID_TYPE));
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn test_begin_submit_enters_loading() {
        let mut c = controller_with(SelectedFile::new("a.docx", MIME_DOCX, vec![1, 2]));
        let ticket = c.begin_submit().unwrap();

        assert_eq!(ticket.file.name, "a.docx");
        assert!(c.display().is_loading());
        assert!(c.display().is_visible(Section::Loading));
        assert!(c.is_in_flight());

        let button = c.submit_button();
        assert!(button.disabled);
        assert_eq!(button.label, "Processing...");
    }

    #[test]
    fn test_second_submit_rejected_while_in_flight() {
        let mut c = controller_with(pdf("a.pdf"));
        let _ticket = c.begin_submit().unwrap();

        assert_eq!(c.begin_submit().unwrap_err(), SubmitError::InFlight);
        assert!(c.display().is_loading());
    }

    #[test]
    fn test_settle_success() {
        let mut c = controller_with(pdf("a.pdf"));
        let ticket = c.begin_submit().unwrap();
        let body = r#"{"success": true, "summary": "<b>x</b>", "word_count": 3}"#;

        c.settle(ticket.id, Ok(HttpReply::new(200, body))).unwrap();

        assert_eq!(
            c.display(),
            &DisplayState::Summary {
                summary: "<b>x</b>".to_string(),
                word_count: 3
            }
        );
        assert!(!c.display().is_visible(Section::Error));
        assert!(!c.display().is_visible(Section::Loading));
        assert!(!c.is_in_flight());
        assert_eq!(c.submit_button().label, "Summarize Document");
    }

    #[test]
    fn test_settle_server_error_verbatim() {
        let mut c = controller_with(pdf("a.pdf"));
        let ticket = c.begin_submit().unwrap();
        let body = r#"{"success": false, "error": "bad format"}"#;

        let err = c.settle(ticket.id, Ok(HttpReply::new(200, body))).unwrap_err();
        assert_eq!(err, UploadError::ServerReportedFailure("bad format".to_string()));
        assert_eq!(c.display().error_message(), Some("bad format"));
        assert!(!c.submit_button().disabled);
    }

    #[test]
    fn test_settle_http_500_generic() {
        let mut c = controller_with(pdf("a.pdf"));
        let ticket = c.begin_submit().unwrap();

        let err = c
            .settle(ticket.id, Ok(HttpReply::new(500, "Internal Server Error")))
            .unwrap_err();
        assert_eq!(err, UploadError::TransportFailure { status: 500 });
        assert_eq!(c.display().error_message(), Some(MSG_UPLOAD_FAILED));
        assert!(!c.is_in_flight());
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut c = controller_with(pdf("a.pdf"));
        let first = c.begin_submit().unwrap();
        c.settle(first.id, Ok(HttpReply::new(500, ""))).unwrap_err();

        let second = c.begin_submit().unwrap();
        assert_ne!(first.id, second.id);

        // 古いIDの確定は状態を変えない
        c.settle(first.id, Ok(HttpReply::new(200, r#"{"success": true}"#)))
            .unwrap();
        assert!(c.display().is_loading());
        assert!(c.is_in_flight());
    }

    #[tokio::test]
    async fn test_network_failure_generic_message() {
        let mut c = controller_with(pdf("a.pdf"));
        let transport = FakeTransport::new(Err(UploadError::UnexpectedClientFailure(
            "connection refused".to_string(),
        )));

        let err = c.submit(&transport).await.unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Upload(UploadError::UnexpectedClientFailure(_))
        ));
        assert_eq!(c.display().error_message(), Some(MSG_UPLOAD_FAILED));
        assert_eq!(transport.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_drop_equivalent_to_picker() {
        let transport = FakeTransport::json(200, r#"{"success": true, "summary": "s", "word_count": 1}"#);

        let mut picked = UploadController::new();
        picked.select(vec![pdf("same.pdf")]);
        picked.submit(&transport).await.unwrap();

        let mut dropped = UploadController::new();
        dropped.drag_enter();
        dropped.drop_files(vec![pdf("same.pdf")]);
        dropped.submit(&transport).await.unwrap();

        assert_eq!(picked.display(), dropped.display());
        assert_eq!(
            transport.sent.borrow().as_slice(),
            &["same.pdf".to_string(), "same.pdf".to_string()]
        );
    }

    #[tokio::test]
    async fn test_repeated_failure_is_idempotent() {
        let mut c = controller_with(pdf("a.pdf"));
        let transport = FakeTransport::json(200, r#"{"success": false, "error": "bad format"}"#);

        let first = c.submit(&transport).await.unwrap_err();
        let first_display = c.display().clone();
        let second = c.submit(&transport).await.unwrap_err();

        assert_eq!(first, second);
        assert_eq!(&first_display, c.display());
        assert_eq!(c.last_error(), Some(&UploadError::ServerReportedFailure("bad format".to_string())));
    }

    #[tokio::test]
    async fn test_success_after_error_clears_last_error() {
        let mut c = UploadController::new();
        let transport = FakeTransport::json(200, r#"{"success": true, "summary": "ok", "word_count": 2}"#);

        c.submit(&transport).await.unwrap_err();
        assert!(c.last_error().is_some());

        c.select(vec![pdf("a.pdf")]);
        c.submit(&transport).await.unwrap();
        assert!(c.last_error().is_none());
        assert!(c.display().is_visible(Section::Summary));
    }
}
