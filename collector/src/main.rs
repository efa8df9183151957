mod cli;
mod config;
mod logger;
mod shutdown;

use clap::Parser;
use log::{debug, error, info, warn};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Notify;

use recorder_rs::services::run_service;
use recorder_rs::{EndReason, RecorderError, SessionEvent};
use sensors_rs::adapters::{ReplaySource, SimulatedSource};
use sensors_rs::ports::SensorSourcePort;
use sensors_rs::SourceError;

use cli::Cli;
use config::{AppConfig, ConfigError, SourceConfig, SourceKind};

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Recorder(#[from] RecorderError),
    #[error(transparent)]
    Source(#[from] SourceError),
}

fn build_source(config: &SourceConfig) -> Result<Arc<dyn SensorSourcePort>, SourceError> {
    let source: Arc<dyn SensorSourcePort> = match config.kind {
        SourceKind::Simulated => Arc::new(SimulatedSource::new(config.noise)?),
        SourceKind::Replay => Arc::new(ReplaySource::from_files(config.replay_files.as_slice())?),
    };
    Ok(source)
}

fn report_event(event: &SessionEvent) {
    match event {
        SessionEvent::LiveValue { sensor_type, text } => debug!("{}: {}", sensor_type, text),
        SessionEvent::SensorName { sensor_type, name } => info!("{}: {}", sensor_type, name),
        SessionEvent::Countdown(display) if !display.is_cleared() => info!("{}", display),
        SessionEvent::Countdown(_) | SessionEvent::ControlsEnabled(_) => {}
        SessionEvent::SessionStarted { files, .. } => {
            for file in files {
                info!("Writing {}", file.display());
            }
        }
        SessionEvent::SessionEnded { reason, .. } => match reason {
            EndReason::IoFailure(message) => error!("Recording failed: {}", message),
            reason => info!("Recording finished ({:?})", reason),
        },
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::default(),
    };
    if let Some(output_dir) = cli.output_dir {
        config.recorder.output_dir = output_dir;
    }
    config.validate()?;

    let service = run_service(&config.recorder)?;
    service.subscribe(report_event);

    let source = build_source(&config.source)?;
    let source_abort = Arc::new(Notify::new());
    let feed = service.attach_source(
        source,
        config.source.sampling_period(),
        Arc::clone(&source_abort),
    );

    let (session, mut countdown) =
        service.start_from_fields(&cli.hours, &cli.minutes, &cli.seconds)?;
    info!("Session {} running for {} seconds", session.id, session.total_seconds);

    let shutdown_signal = Arc::new(Notify::new());
    shutdown::listen_for_shutdown(Arc::clone(&shutdown_signal));

    tokio::select! {
        result = &mut countdown => {
            if let Err(e) = result {
                error!("Countdown task failed: {}", e);
            }
        }
        _ = shutdown_signal.notified() => {
            if let Err(e) = service.stop() {
                warn!("{}", e);
            }
            if let Err(e) = countdown.await {
                error!("Countdown task failed: {}", e);
            }
        }
    }

    source_abort.notify_one();
    if let Err(e) = feed.await {
        error!("Sensor feed task failed: {}", e);
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    if let Err(e) = run(cli).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
