use rubato::{
    Resampler as RubatoResampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType,
    WindowFunction,
};

use crate::application::ports::{InvalidRateError, Resampler};
use crate::domain::Waveform;

/// Band-limited windowed-sinc resampler.
///
/// Output length is exactly `round(len * target / source)`: the input is
/// processed in fixed chunks, the filter is flushed with silence until the
/// expected count is reached, and the tail is trimmed.
pub struct SincResampler {
    chunk_size: usize,
}

impl SincResampler {
    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size }
    }
}

impl Default for SincResampler {
    fn default() -> Self {
        Self::new(1024)
    }
}

impl Resampler for SincResampler {
    fn resample(&self, waveform: Waveform, target_rate: u32) -> Result<Waveform, InvalidRateError> {
        let source_rate = waveform.sample_rate;
        if source_rate == 0 {
            return Err(InvalidRateError::ZeroSourceRate);
        }
        if target_rate == 0 {
            return Err(InvalidRateError::ZeroTargetRate);
        }
        if source_rate == target_rate {
            return Ok(waveform);
        }

        let ratio = target_rate as f64 / source_rate as f64;
        let expected_len = (waveform.samples.len() as f64 * ratio).round() as usize;
        if expected_len == 0 {
            return Ok(Waveform::new(Vec::new(), target_rate));
        }

        let params = SincInterpolationParameters {
            sinc_len: 256,
            f_cutoff: 0.95,
            interpolation: SincInterpolationType::Linear,
            oversampling_factor: 256,
            window: WindowFunction::BlackmanHarris2,
        };

        let mut resampler = SincFixedIn::<f32>::new(ratio, 2.0, params, self.chunk_size, 1)
            .map_err(|e| InvalidRateError::Unsupported(format!("resampler init: {}", e)))?;

        let mut output = Vec::with_capacity(expected_len + self.chunk_size);

        for chunk in waveform.samples.chunks(self.chunk_size) {
            let input = if chunk.len() < self.chunk_size {
                let mut padded = chunk.to_vec();
                padded.resize(self.chunk_size, 0.0);
                padded
            } else {
                chunk.to_vec()
            };

            let result = resampler
                .process(&[input], None)
                .map_err(|e| InvalidRateError::Unsupported(format!("resample: {}", e)))?;

            if let Some(channel) = result.first() {
                output.extend_from_slice(channel);
            }
        }

        // Flush the filter delay with silence until the expected count exists.
        let silence = vec![vec![0.0f32; self.chunk_size]];
        while output.len() < expected_len {
            let result = resampler
                .process(&silence, None)
                .map_err(|e| InvalidRateError::Unsupported(format!("flush: {}", e)))?;
            match result.first() {
                Some(channel) if !channel.is_empty() => output.extend_from_slice(channel),
                _ => break,
            }
        }

        output.resize(expected_len, 0.0);
        Ok(Waveform::new(output, target_rate))
    }
}
