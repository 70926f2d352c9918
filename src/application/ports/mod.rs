mod acoustic_model;
mod audio_decoder;
mod resampler;

pub use acoustic_model::{AcousticModel, InferenceError};
pub use audio_decoder::{AudioDecoder, DecodeError};
pub use resampler::{InvalidRateError, Resampler};
