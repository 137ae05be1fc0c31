//! Document Summarizer Common Library
//!
//! CLIとWeb(WASM)で共有されるアップロード制御と型

pub mod types;
pub mod error;
pub mod media;
pub mod response;
pub mod render;
pub mod transport;
pub mod controller;

pub use types::{DisplayState, FileLabel, HttpReply, Section, SelectedFile, SubmitButton, UploadResponse};
pub use error::{Result, UploadError};
pub use media::{is_allowed_media_type, media_type_from_extension, validate_selection, ACCEPT_ATTRIBUTE, ALLOWED_MEDIA_TYPES};
pub use response::{classify, SummaryOutcome};
pub use render::{summary_html, summary_text};
pub use transport::{UploadTransport, FILE_FIELD, UPLOAD_PATH};
pub use controller::{SubmitError, SubmitTicket, UploadController};
