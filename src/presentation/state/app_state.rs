use std::sync::Arc;

use crate::application::services::TranscriptionService;
use crate::presentation::config::Settings;

/// Shared per-process state injected into every handler.
///
/// `transcriber` is `None` when the acoustic model failed to initialize at
/// startup; the health probe keeps answering regardless.
#[derive(Clone)]
pub struct AppState {
    pub transcriber: Option<Arc<TranscriptionService>>,
    pub settings: Settings,
}
