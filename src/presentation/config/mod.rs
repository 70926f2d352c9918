mod settings;

pub use settings::{AudioSettings, LoggingSettings, ModelSettings, ServerSettings, Settings};
