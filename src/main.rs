use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};

use food_grab::config;
use food_grab::foodgrab::{GameRng, GameState, PlayerNum};
use food_grab::game_loop;
use food_grab::provider::{self, MoveProvider};
use food_grab::render;

/// Two-player grid game with bot or remote-model move providers.
#[derive(Parser)]
#[command(name = "food-grab")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::load(&cli.config)?;

    let log_dir = config
        .global
        .logfile
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let log_name = config
        .global
        .logfile
        .file_name()
        .context("logfile has no file name")?;
    let file_appender = tracing_appender::rolling::never(log_dir, log_name);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(non_blocking)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut state = GameState::new(config.global.board_size, GameRng::default())?;
    let mut providers: [Box<dyn MoveProvider<GameRng>>; 2] = [
        provider::build(config.player(PlayerNum::P0), PlayerNum::P0)?,
        provider::build(config.player(PlayerNum::P1), PlayerNum::P1)?,
    ];

    let outcome = game_loop::run(&mut state, &mut providers, config.global.rounds, |s| {
        print!("{CLEAR_SCREEN}{}", render::turn_screen(s));
    })?;

    print!(
        "{CLEAR_SCREEN}{}",
        render::game_over_screen(&state, &outcome)
    );
    Ok(())
}
