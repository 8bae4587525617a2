mod app;
mod audio;
mod cli;
mod input;
mod renderer;
mod session;

use macroquad::window::Conf;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use gridcycle_core::game_trait::ArcadeGame;
use gridcycle_tron::TronMatch;
use gridcycle_tron::config::TronConfig;

use app::GameApp;
use audio::{AudioManager, AudioSettings};
use cli::{CliArgs, CliError, USAGE};
use session::Session;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(CliError::HelpRequested) => {
            println!("{USAGE}");
            return;
        },
        Err(e) => {
            eprintln!("gridcycle: {e}\n\n{USAGE}");
            std::process::exit(2);
        },
    };

    let mut config = match &args.config_path {
        Some(path) => TronConfig::from_path(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring config, using defaults");
            TronConfig::default()
        }),
        None => TronConfig::load(),
    };
    if let Some(rounds) = args.rounds {
        config.round_count = rounds;
    }

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let game = TronMatch::with_config(args.variant, config).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Ignoring config, using defaults");
        TronMatch::new(args.variant)
    });
    let metadata = game.metadata();
    let roster = game.variant().roster();
    tracing::info!(
        game = %metadata.name,
        description = %metadata.description,
        players = roster.len(),
        min_players = metadata.min_players,
        max_players = metadata.max_players,
        seed = ?args.seed,
        rounds = game.round_count_hint(),
        tick_rate = game.config().tick_rate,
        "Starting"
    );

    let window = Conf {
        window_title: metadata.name,
        window_width: game.config().board_width,
        window_height: game.config().board_height,
        window_resizable: false,
        ..Default::default()
    };
    let session = Session::new(roster, game.round_count_hint());
    let audio_settings = AudioSettings {
        muted: args.muted,
        ..AudioSettings::default()
    };

    macroquad::Window::from_config(window, async move {
        let audio = AudioManager::load(audio_settings).await;
        GameApp::new(game, session, audio, rng).run().await;
    });
}
