use aural::application::ports::{AudioDecoder, DecodeError, InvalidRateError, Resampler};
use aural::domain::{signal, AudioBuffer, Waveform};
use aural::infrastructure::audio::{SincResampler, SymphoniaDecoder};

fn build_wav(sample_rate: u32, channels: u16, samples: &[i16]) -> Vec<u8> {
    let num_samples = samples.len() as u32;
    let block_align = channels * 2;
    let byte_rate = sample_rate * u32::from(block_align);
    let data_size = num_samples * 2;
    let file_size = 36 + data_size;

    let mut wav = Vec::with_capacity(44 + data_size as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&file_size.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&channels.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for &s in samples {
        wav.extend_from_slice(&s.to_le_bytes());
    }
    wav
}

fn sine(count: usize) -> Vec<f32> {
    (0..count).map(|i| (i as f32 * 0.02).sin()).collect()
}

// ── decoder ─────────────────────────────────────────────────────────────

#[test]
fn given_mono_wav_when_decoding_then_rate_and_frames_are_preserved() {
    let samples: Vec<i16> = (0..8_000).map(|i| ((i % 200) as i16 - 100) * 50).collect();
    let wav = build_wav(16_000, 1, &samples);

    let buffer = SymphoniaDecoder.decode(&wav).unwrap();

    assert_eq!(buffer.sample_rate(), 16_000);
    assert_eq!(buffer.channel_count(), 1);
    assert_eq!(buffer.frame_count(), 8_000);
    assert!((buffer.duration_seconds() - 0.5).abs() < 1e-9);
}

#[test]
fn given_stereo_wav_when_decoding_then_channels_are_not_downmixed() {
    // interleaved left/right: left is a ramp, right is silence
    let mut samples = Vec::with_capacity(2_000);
    for i in 0..1_000i16 {
        samples.push(i * 20);
        samples.push(0);
    }
    let wav = build_wav(44_100, 2, &samples);

    let buffer = SymphoniaDecoder.decode(&wav).unwrap();

    assert_eq!(buffer.channel_count(), 2);
    assert_eq!(buffer.frame_count(), 1_000);
    let left_energy: f32 = buffer.channel(0).map(|s| s * s).sum();
    let right_energy: f32 = buffer.channel(1).map(|s| s * s).sum();
    assert!(left_energy > 0.0);
    assert_eq!(right_energy, 0.0);
}

#[test]
fn given_empty_bytes_when_decoding_then_returns_empty_input_error() {
    let result = SymphoniaDecoder.decode(&[]);

    assert!(matches!(result, Err(DecodeError::EmptyInput)));
}

#[test]
fn given_garbage_bytes_when_decoding_then_returns_unsupported_format() {
    let garbage = vec![0xABu8; 512];

    let result = SymphoniaDecoder.decode(&garbage);

    assert!(matches!(result, Err(DecodeError::UnsupportedFormat(_))));
}

// ── normalizer ──────────────────────────────────────────────────────────

#[test]
fn given_stereo_buffer_when_normalizing_then_channel_zero_is_selected() {
    // channel 0 alternates, channel 1 is constant
    let mut interleaved = Vec::new();
    for i in 0..100 {
        interleaved.push(if i % 2 == 0 { 0.5 } else { -0.5 });
        interleaved.push(0.25);
    }
    let buffer = AudioBuffer::new(interleaved, 16_000, 2);

    let waveform = signal::normalize(&buffer);

    assert_eq!(waveform.len(), 100);
    // an alternating signal keeps alternating after standardization; the
    // constant channel 1 would have collapsed to zeros
    assert!(waveform.samples[0] > 0.0);
    assert!(waveform.samples[1] < 0.0);
}

#[test]
fn given_any_signal_when_normalizing_then_zero_mean_unit_variance() {
    let samples: Vec<f32> = sine(4_000).iter().map(|s| s * 0.3 + 0.1).collect();
    let buffer = AudioBuffer::new(samples, 16_000, 1);

    let waveform = signal::normalize(&buffer);

    let n = waveform.len() as f32;
    let mean: f32 = waveform.samples.iter().sum::<f32>() / n;
    let variance: f32 = waveform.samples.iter().map(|s| s * s).sum::<f32>() / n;
    assert!(mean.abs() < 1e-4);
    assert!((variance - 1.0).abs() < 1e-3);
}

#[test]
fn given_constant_signal_when_normalizing_then_zero_mean_but_unscaled() {
    let buffer = AudioBuffer::new(vec![0.7; 500], 8_000, 1);

    let waveform = signal::normalize(&buffer);

    assert!(waveform.samples.iter().all(|&s| s.abs() < 1e-6));
}

#[test]
fn given_silence_when_normalizing_then_stays_silent() {
    let buffer = AudioBuffer::new(vec![0.0; 500], 8_000, 1);

    let waveform = signal::normalize(&buffer);

    assert!(waveform.samples.iter().all(|&s| s == 0.0));
}

// ── resampler ───────────────────────────────────────────────────────────

#[test]
fn given_matching_rates_when_resampling_then_input_is_returned_unchanged() {
    let waveform = Waveform::new(sine(4_000), 16_000);
    let expected = waveform.clone();

    let result = SincResampler::default().resample(waveform, 16_000).unwrap();

    assert_eq!(result, expected);
}

#[test]
fn given_rate_conversion_when_resampling_then_count_is_rounded_ratio() {
    let waveform = Waveform::new(sine(4_410), 44_100);

    let result = SincResampler::default().resample(waveform, 16_000).unwrap();

    // round(4410 * 16000 / 44100) = 1600
    assert_eq!(result.len(), 1_600);
    assert_eq!(result.sample_rate, 16_000);
}

#[test]
fn given_upsample_then_downsample_when_resampling_then_count_within_one_frame() {
    let original = 16_000usize;
    let up = SincResampler::default()
        .resample(Waveform::new(sine(original), 16_000), 44_100)
        .unwrap();

    let back = SincResampler::default().resample(up, 16_000).unwrap();

    let diff = back.len() as i64 - original as i64;
    assert!(diff.abs() <= 1, "round trip drifted by {} frames", diff);
}

#[test]
fn given_identical_input_when_resampling_twice_then_outputs_match() {
    let a = SincResampler::default()
        .resample(Waveform::new(sine(8_000), 22_050), 16_000)
        .unwrap();
    let b = SincResampler::default()
        .resample(Waveform::new(sine(8_000), 22_050), 16_000)
        .unwrap();

    assert_eq!(a, b);
}

#[test]
fn given_zero_target_rate_when_resampling_then_invalid_rate_error() {
    let result = SincResampler::default().resample(Waveform::new(sine(100), 16_000), 0);

    assert!(matches!(result, Err(InvalidRateError::ZeroTargetRate)));
}

#[test]
fn given_zero_source_rate_when_resampling_then_invalid_rate_error() {
    let result = SincResampler::default().resample(Waveform::new(sine(100), 0), 16_000);

    assert!(matches!(result, Err(InvalidRateError::ZeroSourceRate)));
}

#[test]
fn given_resampled_sine_when_comparing_energy_then_signal_survives() {
    let waveform = Waveform::new(sine(44_100), 44_100);

    let result = SincResampler::default().resample(waveform, 16_000).unwrap();

    let energy: f32 = result.samples.iter().map(|s| s * s).sum::<f32>() / result.len() as f32;
    // a full-scale sine has mean square ~0.5; band-limiting keeps most of it
    assert!(energy > 0.3, "energy collapsed to {}", energy);
}
