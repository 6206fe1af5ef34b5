use story_app::{AppResult, Cli, Session, logger, select_dataset, spawn_event_logger};
use story_config::Config;
use story_viewer::ViewerCommand;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    // Load and validate configuration
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };
    let config = Config::load_from(&config_dir)?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file = logger::log_file_path(
        &config_dir,
        &config.logging.dir,
        config.logging.file.as_deref(),
    )?;
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting stories v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let dataset = select_dataset(&config, &config_dir, cli.dataset, cli.bundled);
    let mut session = Session::open(&config, &config_dir, dataset).await?;
    let _events = spawn_event_logger(session.controller().subscribe());

    let summary = session.load(cli.pages).await;
    print!("{}", summary);

    if !cli.view {
        return Ok(());
    }

    let (commands_tx, mut commands) = mpsc::channel(8);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), closing viewer");
                let _ = commands_tx.send(ViewerCommand::Close).await;
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
                // Keep the sender alive so playback is not cut short.
                std::future::pending::<()>().await;
            }
        }
    });

    if session.play(&mut commands).await?.is_some() {
        print!("{}", session.summary());
    }

    Ok(())
}
