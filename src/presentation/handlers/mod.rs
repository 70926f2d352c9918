mod asr;
mod ping;

pub use asr::asr_handler;
pub use ping::ping_handler;
