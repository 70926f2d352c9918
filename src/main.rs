use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use aural::application::services::TranscriptionService;
use aural::domain::Vocabulary;
use aural::infrastructure::audio::{SincResampler, SymphoniaDecoder};
use aural::infrastructure::model::OnnxAcousticModel;
use aural::infrastructure::observability::{init_tracing, TracingConfig};
use aural::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    init_tracing(
        TracingConfig {
            level: settings.logging.level.clone(),
            json_format: settings.logging.enable_json,
            ..TracingConfig::default()
        },
        settings.server.port,
    );

    // The health probe must answer even when the model cannot load, so a
    // failed initialization downgrades /asr instead of aborting startup.
    let transcriber = match build_transcriber(&settings) {
        Ok(service) => Some(Arc::new(service)),
        Err(e) => {
            tracing::error!(error = %e, "Acoustic model unavailable; /asr will fail until restart");
            None
        }
    };

    let state = AppState {
        transcriber,
        settings: settings.clone(),
    };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn build_transcriber(settings: &Settings) -> anyhow::Result<TranscriptionService> {
    let vocabulary = Arc::new(Vocabulary::from_json_file(&settings.model.vocab_path)?);
    let model = Arc::new(OnnxAcousticModel::new(&settings.model.model_path)?);
    tracing::info!(
        vocab_size = vocabulary.len(),
        target_sample_rate = settings.audio.target_sample_rate,
        "Transcription pipeline ready"
    );
    Ok(TranscriptionService::new(
        Arc::new(SymphoniaDecoder),
        Arc::new(SincResampler::default()),
        model,
        vocabulary,
        settings.audio.target_sample_rate,
    ))
}
