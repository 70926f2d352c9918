use crate::domain::Waveform;

/// Converts a waveform from its source rate to a fixed target rate.
///
/// Equal rates are an identity. Otherwise the output holds exactly
/// `round(len * target / source)` samples and identical input always yields
/// identical output.
pub trait Resampler: Send + Sync {
    fn resample(&self, waveform: Waveform, target_rate: u32) -> Result<Waveform, InvalidRateError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InvalidRateError {
    #[error("source sample rate must be positive")]
    ZeroSourceRate,
    #[error("target sample rate must be positive")]
    ZeroTargetRate,
    #[error("unsupported rate conversion: {0}")]
    Unsupported(String),
}
