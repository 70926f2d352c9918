use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Service configuration.
///
/// Loaded from a JSON file when `AURAL_CONFIG` points at one, otherwise
/// assembled from individual environment variables with defaults that match
/// the reference deployment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub model: ModelSettings,
    pub audio: AudioSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    pub model_path: PathBuf,
    pub vocab_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub target_sample_rate: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: env_or("SERVER_HOST", "0.0.0.0"),
            port: env_parse("SERVER_PORT", 8001),
            max_upload_mb: env_parse("MAX_UPLOAD_MB", 32),
        }
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(env_or("ASR_MODEL_PATH", "models/wav2vec2.onnx")),
            vocab_path: PathBuf::from(env_or("ASR_VOCAB_PATH", "models/vocab.json")),
        }
    }
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            target_sample_rate: env_parse("TARGET_SAMPLE_RATE", 16_000),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: env_or("LOG_LEVEL", "info"),
            enable_json: env_parse("LOG_JSON", false),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            model: ModelSettings::default(),
            audio: AudioSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Settings {
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("AURAL_CONFIG") {
            Ok(path) => Self::from_json_file(Path::new(&path)),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
