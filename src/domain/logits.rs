/// Per-frame class scores from the acoustic model, row-major `[time, vocab]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogitMatrix {
    scores: Vec<f32>,
    time_steps: usize,
    vocab_size: usize,
}

#[derive(Debug, thiserror::Error)]
#[error("logit buffer of {len} values does not divide into rows of vocab size {vocab_size}")]
pub struct LogitShapeError {
    pub len: usize,
    pub vocab_size: usize,
}

impl LogitMatrix {
    /// Build a matrix from a flat row-major score buffer.
    pub fn from_flat(scores: Vec<f32>, vocab_size: usize) -> Result<Self, LogitShapeError> {
        if vocab_size == 0 || scores.len() % vocab_size != 0 {
            return Err(LogitShapeError {
                len: scores.len(),
                vocab_size,
            });
        }
        let time_steps = scores.len() / vocab_size;
        Ok(Self {
            scores,
            time_steps,
            vocab_size,
        })
    }

    pub fn time_steps(&self) -> usize {
        self.time_steps
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    /// Score vector for one time step.
    pub fn frame(&self, t: usize) -> &[f32] {
        let start = t * self.vocab_size;
        &self.scores[start..start + self.vocab_size]
    }
}
