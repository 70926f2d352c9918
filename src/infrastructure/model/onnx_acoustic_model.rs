use std::path::Path;
use std::sync::Mutex;

use ndarray::Array2;
use ort::execution_providers::CPUExecutionProvider;
use ort::inputs;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::TensorRef;

use crate::application::ports::{AcousticModel, InferenceError};
use crate::domain::{LogitMatrix, Waveform};

/// ONNX Runtime adapter over an exported CTC acoustic model.
///
/// The graph is opaque to the rest of the system: normalized waveform in as
/// `[1, samples]`, per-frame logits out as `[1, time, vocab]`. Weights are
/// read-only after load; session access is serialized inside the adapter so
/// callers need no lock of their own.
pub struct OnnxAcousticModel {
    session: Mutex<Session>,
    input_name: String,
    output_name: String,
}

impl OnnxAcousticModel {
    pub fn new(model_path: &Path) -> Result<Self, InferenceError> {
        if !model_path.exists() {
            return Err(InferenceError::ModelLoadFailed(format!(
                "model file not found: {}",
                model_path.display()
            )));
        }

        tracing::info!(path = %model_path.display(), "Loading acoustic model");
        let session = build_session(model_path)
            .map_err(|e| InferenceError::ModelLoadFailed(e.to_string()))?;

        for input in &session.inputs {
            tracing::info!(name = %input.name, ty = ?input.input_type, "Model input");
        }
        for output in &session.outputs {
            tracing::info!(name = %output.name, ty = ?output.output_type, "Model output");
        }

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .ok_or_else(|| InferenceError::ModelLoadFailed("model has no inputs".to_string()))?;
        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| InferenceError::ModelLoadFailed("model has no outputs".to_string()))?;

        Ok(Self {
            session: Mutex::new(session),
            input_name,
            output_name,
        })
    }
}

fn build_session(path: &Path) -> Result<Session, ort::Error> {
    Session::builder()?
        .with_optimization_level(GraphOptimizationLevel::Level3)?
        .with_execution_providers([CPUExecutionProvider::default().build()])?
        .with_parallel_execution(true)?
        .commit_from_file(path)
}

impl AcousticModel for OnnxAcousticModel {
    fn infer(&self, waveform: &Waveform) -> Result<LogitMatrix, InferenceError> {
        let input = Array2::from_shape_vec((1, waveform.len()), waveform.samples.clone())
            .map_err(|e| InferenceError::InferenceFailed(e.to_string()))?
            .into_dyn();
        let tensor = TensorRef::from_array_view(input.view())
            .map_err(|e| InferenceError::InferenceFailed(e.to_string()))?;

        let mut session = match self.session.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let outputs = session
            .run(inputs![self.input_name.as_str() => tensor])
            .map_err(|e| InferenceError::InferenceFailed(e.to_string()))?;

        let logits = outputs
            .get(self.output_name.as_str())
            .ok_or_else(|| {
                InferenceError::BadOutput(format!("missing output '{}'", self.output_name))
            })?
            .try_extract_array::<f32>()
            .map_err(|e| InferenceError::BadOutput(e.to_string()))?
            .to_owned()
            .into_dimensionality::<ndarray::Ix3>()
            .map_err(|e| InferenceError::BadOutput(e.to_string()))?;

        let vocab_size = logits.shape()[2];
        let (scores, _) = logits.into_raw_vec_and_offset();
        LogitMatrix::from_flat(scores, vocab_size)
            .map_err(|e| InferenceError::BadOutput(e.to_string()))
    }
}
