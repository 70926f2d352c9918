use crate::domain::{LogitMatrix, Waveform};

/// Pretrained acoustic model treated as an opaque function.
///
/// The returned matrix's time dimension follows the input's temporal order
/// and class indices are stable for the lifetime of the process.
/// Implementations hold read-only weights and must be safe to invoke from
/// concurrent requests.
pub trait AcousticModel: Send + Sync {
    fn infer(&self, waveform: &Waveform) -> Result<LogitMatrix, InferenceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("inference failed: {0}")]
    InferenceFailed(String),
    #[error("model output malformed: {0}")]
    BadOutput(String),
}
