use super::{AudioBuffer, Waveform};

/// Downmix and amplitude-normalize a decoded buffer for inference.
///
/// Downmix takes channel 0 rather than averaging, matching the reference
/// pipeline this service replaces. Amplitude normalization subtracts the mean
/// and divides by the standard deviation; a constant (silent) signal is
/// returned zero-mean but unscaled.
pub fn normalize(buffer: &AudioBuffer) -> Waveform {
    let mut samples: Vec<f32> = buffer.channel(0).collect();
    let n = samples.len();
    if n == 0 {
        return Waveform::new(samples, buffer.sample_rate());
    }

    let mean = samples.iter().sum::<f32>() / n as f32;
    for s in &mut samples {
        *s -= mean;
    }

    let variance = samples.iter().map(|s| s * s).sum::<f32>() / n as f32;
    let std_dev = variance.sqrt();
    if std_dev > f32::EPSILON {
        for s in &mut samples {
            *s /= std_dev;
        }
    }

    Waveform::new(samples, buffer.sample_rate())
}
