mod onnx_acoustic_model;

pub use onnx_acoustic_model::OnnxAcousticModel;
