/// Decoded PCM audio exactly as it came out of the container.
///
/// Samples are interleaved frame by frame and the original channel layout is
/// kept, so the clip duration can be computed from the source frame count and
/// sample rate before any downmixing or resampling touches the signal.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
    channel_count: usize,
}

impl AudioBuffer {
    /// Build a buffer from interleaved samples.
    ///
    /// # Panics
    ///
    /// Panics if `sample_rate` or `channel_count` is zero, or if the sample
    /// count is not a whole number of frames. Decoders guarantee all three.
    pub fn new(samples: Vec<f32>, sample_rate: u32, channel_count: usize) -> Self {
        assert!(sample_rate > 0, "sample rate must be positive");
        assert!(channel_count > 0, "channel count must be positive");
        assert!(
            samples.len() % channel_count == 0,
            "interleaved samples must form whole frames"
        );
        Self {
            samples,
            sample_rate,
            channel_count,
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channel_count
    }

    /// Clip length in seconds at the original sample rate.
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }

    /// Samples of a single channel in frame order.
    pub fn channel(&self, index: usize) -> impl Iterator<Item = f32> + '_ {
        self.samples
            .iter()
            .skip(index)
            .step_by(self.channel_count)
            .copied()
    }
}
