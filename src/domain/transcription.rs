/// Terminal value of a transcription request.
///
/// `duration_seconds` is measured on the decoded clip at its original sample
/// rate, before resampling.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionResult {
    pub transcription: String,
    pub duration_seconds: f64,
}
