use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use memory_match::cli::Cli;
use memory_match::config::{Config, ConfigStore};
use memory_match::game::{GameEngine, GameMachine};
use memory_match::logging::init_tracing;
use memory_match::shutdown::{ShutdownCoordinator, ShutdownPhase};
use memory_match::ui::app::App;
use memory_match::ui::runtime;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    cli.apply(&mut config);
    config.validate().context("Invalid settings")?;

    let themes = config.theme_registry();
    if cli.list_themes {
        for name in themes.names() {
            println!("{name}");
        }
        return Ok(());
    }

    init_tracing(
        &config.logging.level,
        config.logging.file.as_deref().map(Path::new),
    );
    tracing::info!(
        config = %config_path.display(),
        grid_size = config.game.grid_size,
        min_moves = config.game.min_moves,
        theme = %config.game.theme,
        "Starting memory-match"
    );

    let session = config.session_config();
    let machine = match cli.seed {
        Some(seed) => GameMachine::seeded(session.clone(), themes.clone(), seed),
        None => GameMachine::from_entropy(session.clone(), themes.clone()),
    }
    .context("Failed to create game")?;
    let (engine, engine_task) = GameEngine::spawn(machine);
    engine
        .reset(session)
        .await
        .context("Failed to start the first run")?;

    let coordinator = ShutdownCoordinator::new();
    tokio::spawn({
        let shutdown = coordinator.handle();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                shutdown.signal();
            }
        }
    });

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let store = ConfigStore::new(config);
    let app = App::new(engine.clone(), store, themes.names());
    let shutdown = coordinator.handle();
    let ui_result = tokio::task::spawn_blocking(move || runtime::run(app, tick_rate, shutdown))
        .await
        .context("UI thread panicked")?;

    coordinator.signal();
    coordinator.advance(ShutdownPhase::StoppingEngine);
    if let Err(err) = engine.shutdown().await {
        tracing::debug!(error = %err, "Engine already stopped");
    }
    if let Err(err) = engine_task.await {
        tracing::warn!(error = %err, "Engine task failed");
    }
    coordinator.advance(ShutdownPhase::Complete);

    ui_result.context("Terminal UI failed")
}
