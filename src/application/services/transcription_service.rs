use std::sync::Arc;
use std::time::Instant;

use crate::application::ports::{
    AcousticModel, AudioDecoder, DecodeError, InferenceError, InvalidRateError, Resampler,
};
use crate::domain::{ctc, signal, TranscriptionResult, Vocabulary};

/// Per-request pipeline: decode, normalize, resample, infer, decode text.
///
/// The decoder, resampler, model, and vocabulary are process-wide read-only
/// collaborators; every buffer created along the way belongs to a single
/// request and is dropped when it completes.
pub struct TranscriptionService {
    decoder: Arc<dyn AudioDecoder>,
    resampler: Arc<dyn Resampler>,
    model: Arc<dyn AcousticModel>,
    vocabulary: Arc<Vocabulary>,
    target_sample_rate: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum TranscribeError {
    #[error("upload rejected: {0}")]
    Upload(String),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    InvalidRate(#[from] InvalidRateError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
    #[error("transcription task aborted")]
    Aborted,
}

impl TranscribeError {
    /// Last pipeline stage reached before the failure.
    pub fn stage(&self) -> &'static str {
        match self {
            TranscribeError::Upload(_) => "received",
            TranscribeError::Decode(_) => "decoding",
            TranscribeError::InvalidRate(_) => "resampling",
            TranscribeError::Inference(_) => "inference",
            TranscribeError::Aborted => "aborted",
        }
    }
}

impl TranscriptionService {
    pub fn new(
        decoder: Arc<dyn AudioDecoder>,
        resampler: Arc<dyn Resampler>,
        model: Arc<dyn AcousticModel>,
        vocabulary: Arc<Vocabulary>,
        target_sample_rate: u32,
    ) -> Self {
        Self {
            decoder,
            resampler,
            model,
            vocabulary,
            target_sample_rate,
        }
    }

    /// Run the full pipeline on an uploaded audio payload.
    ///
    /// The chain is CPU-bound, so it runs on a blocking thread and the
    /// executor stays free for other requests.
    pub async fn transcribe(&self, data: Vec<u8>) -> Result<TranscriptionResult, TranscribeError> {
        if data.is_empty() {
            return Err(TranscribeError::Upload("empty audio payload".to_string()));
        }

        let decoder = Arc::clone(&self.decoder);
        let resampler = Arc::clone(&self.resampler);
        let model = Arc::clone(&self.model);
        let vocabulary = Arc::clone(&self.vocabulary);
        let target_rate = self.target_sample_rate;
        let span = tracing::Span::current();

        let started = Instant::now();
        let result = tokio::task::spawn_blocking(move || {
            let _guard = span.enter();
            run_pipeline(
                decoder.as_ref(),
                resampler.as_ref(),
                model.as_ref(),
                &vocabulary,
                target_rate,
                &data,
            )
        })
        .await
        .map_err(|_| TranscribeError::Aborted)??;

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            duration_seconds = result.duration_seconds,
            chars = result.transcription.len(),
            "Transcription complete"
        );
        Ok(result)
    }
}

fn run_pipeline(
    decoder: &dyn AudioDecoder,
    resampler: &dyn Resampler,
    model: &dyn AcousticModel,
    vocabulary: &Vocabulary,
    target_rate: u32,
    data: &[u8],
) -> Result<TranscriptionResult, TranscribeError> {
    let stage = Instant::now();
    let buffer = decoder.decode(data)?;
    // Duration comes from the source frame/rate pair, before any resampling.
    let duration_seconds = buffer.duration_seconds();
    tracing::debug!(
        stage = "decoded",
        elapsed_ms = stage.elapsed().as_millis() as u64,
        frames = buffer.frame_count(),
        sample_rate = buffer.sample_rate(),
        channels = buffer.channel_count(),
        "Pipeline stage done"
    );

    let stage = Instant::now();
    let waveform = signal::normalize(&buffer);
    tracing::debug!(
        stage = "normalized",
        elapsed_ms = stage.elapsed().as_millis() as u64,
        samples = waveform.len(),
        "Pipeline stage done"
    );

    let stage = Instant::now();
    let waveform = resampler.resample(waveform, target_rate)?;
    tracing::debug!(
        stage = "resampled",
        elapsed_ms = stage.elapsed().as_millis() as u64,
        samples = waveform.len(),
        sample_rate = waveform.sample_rate,
        "Pipeline stage done"
    );

    let stage = Instant::now();
    let logits = model.infer(&waveform)?;
    tracing::debug!(
        stage = "inferred",
        elapsed_ms = stage.elapsed().as_millis() as u64,
        time_steps = logits.time_steps(),
        vocab_size = logits.vocab_size(),
        "Pipeline stage done"
    );

    let stage = Instant::now();
    let transcription = ctc::greedy_decode(&logits, vocabulary);
    tracing::debug!(
        stage = "decoded_text",
        elapsed_ms = stage.elapsed().as_millis() as u64,
        chars = transcription.len(),
        "Pipeline stage done"
    );

    Ok(TranscriptionResult {
        transcription,
        duration_seconds,
    })
}
