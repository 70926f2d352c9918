use std::io::Cursor;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioDecoder, DecodeError};
use crate::domain::AudioBuffer;

/// Container-probing decoder for MP3 and WAV-family uploads.
///
/// Keeps the interleaved multi-channel layout; downmixing happens later in
/// the pipeline so the duration can be computed on the original frames.
pub struct SymphoniaDecoder;

impl AudioDecoder for SymphoniaDecoder {
    fn decode(&self, data: &[u8]) -> Result<AudioBuffer, DecodeError> {
        decode_bytes(data)
    }
}

fn decode_bytes(data: &[u8]) -> Result<AudioBuffer, DecodeError> {
    if data.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let cursor = Cursor::new(data.to_vec());
    let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

    let hint = Hint::new();
    let format_opts = FormatOptions::default();
    let metadata_opts = MetadataOptions::default();
    let decoder_opts = DecoderOptions::default();

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &format_opts, &metadata_opts)
        .map_err(|e| DecodeError::UnsupportedFormat(format!("probe: {}", e)))?;

    let mut format = probed.format;

    let track = format.default_track().ok_or(DecodeError::NoAudioTrack)?;
    let track_id = track.id;
    let codec_params = track.codec_params.clone();
    let sample_rate = codec_params
        .sample_rate
        .ok_or_else(|| DecodeError::Malformed("unknown sample rate".to_string()))?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &decoder_opts)
        .map_err(|e| DecodeError::UnsupportedFormat(format!("codec: {}", e)))?;

    let mut channel_count: Option<usize> = codec_params.channels.map(|c| c.count());
    let mut samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                return Err(DecodeError::Malformed(format!("packet: {}", e)));
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(symphonia::core::errors::Error::DecodeError(e)) => {
                tracing::warn!(error = %e, "Skipping corrupt audio frame");
                continue;
            }
            Err(e) => {
                return Err(DecodeError::Malformed(format!("decode: {}", e)));
            }
        };

        let spec = *decoded.spec();
        let num_frames = decoded.frames();
        if num_frames == 0 {
            continue;
        }

        let channels = spec.channels.count();
        match channel_count {
            None => channel_count = Some(channels),
            Some(c) if c != channels => {
                return Err(DecodeError::Malformed(
                    "channel layout changed mid-stream".to_string(),
                ));
            }
            Some(_) => {}
        }

        let mut sample_buf = SampleBuffer::<f32>::new(num_frames as u64, spec);
        sample_buf.copy_interleaved_ref(decoded);
        samples.extend_from_slice(sample_buf.samples());
    }

    let channel_count = channel_count
        .filter(|&c| c > 0)
        .ok_or(DecodeError::NoAudioTrack)?;

    if samples.is_empty() {
        return Err(DecodeError::Malformed(
            "no audio samples decoded".to_string(),
        ));
    }

    Ok(AudioBuffer::new(samples, sample_rate, channel_count))
}
