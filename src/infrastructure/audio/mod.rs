mod sinc_resampler;
mod symphonia_decoder;

pub use sinc_resampler::SincResampler;
pub use symphonia_decoder::SymphoniaDecoder;
