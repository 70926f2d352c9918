mod audio_buffer;
pub mod ctc;
mod logits;
pub mod signal;
mod transcription;
mod vocabulary;
mod waveform;

pub use audio_buffer::AudioBuffer;
pub use logits::{LogitMatrix, LogitShapeError};
pub use transcription::TranscriptionResult;
pub use vocabulary::{Vocabulary, VocabularyError};
pub use waveform::Waveform;
