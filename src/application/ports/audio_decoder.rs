use crate::domain::AudioBuffer;

/// Turns raw container bytes into decoded PCM with the original channel
/// layout and sample rate preserved.
pub trait AudioDecoder: Send + Sync {
    fn decode(&self, data: &[u8]) -> Result<AudioBuffer, DecodeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("empty audio payload")]
    EmptyInput,
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("no audio track found")]
    NoAudioTrack,
    #[error("audio decoding failed: {0}")]
    Malformed(String),
}
