//! Terminal runner (default binary).
//!
//! Owns the clock: it feeds measured elapsed time into the engine, sleeps in
//! `event::poll` until the next gravity step is due, and redraws after every
//! input event and tick.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use log::{debug, info};

use blockfall::core::{GameConfig, GameEvent, GameState};
use blockfall::input::{map_key_event, InputCommand};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{GRAVITY_INTERVAL_MS, LINE_CLEAR_SCORE};

/// How long to wait for input while no gravity timer is armed.
const IDLE_POLL_MS: u64 = 250;

#[derive(Parser, Debug)]
#[command(name = "blockfall", about = "Falling-block puzzle in the terminal")]
struct Args {
    /// Seed for piece selection (defaults to the current time)
    #[arg(long)]
    seed: Option<u32>,

    /// Milliseconds between gravity steps
    #[arg(long, value_name = "MS", default_value_t = GRAVITY_INTERVAL_MS)]
    gravity_ms: u32,

    /// Points awarded per cleared row
    #[arg(long, value_name = "POINTS", default_value_t = LINE_CLEAR_SCORE)]
    line_score: u32,

    /// Write logs here (the terminal is in raw mode, so logs are otherwise discarded)
    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            seed: self.seed.unwrap_or_else(time_seed),
            gravity_interval_ms: self.gravity_ms,
            line_clear_score: self.line_score,
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let target = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            env_logger::Target::Pipe(Box::new(file))
        }
        None => env_logger::Target::Pipe(Box::new(io::sink())),
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(target)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let config = args.game_config();
    config.validate()?;
    info!("starting with {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut game = GameState::new(config);
    let view = GameView::default();
    let mut last_tick = Instant::now();

    loop {
        for ev in game.take_events() {
            match ev {
                GameEvent::GameOver { final_score } => {
                    info!("game ended, final score {}", final_score)
                }
                other => debug!("{:?}", other),
            }
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        term.draw(view.render(&game.frame(), Viewport::new(w, h)))?;

        let timeout = game
            .next_gravity_in_ms()
            .map_or(IDLE_POLL_MS, u64::from);

        if event::poll(Duration::from_millis(timeout))? {
            match event::read()? {
                Event::Key(key) => match map_key_event(key) {
                    Some(InputCommand::Quit) => return Ok(()),
                    Some(InputCommand::Action(action)) => {
                        game.apply_action(action);
                    }
                    None => {}
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Carry the sub-millisecond remainder into the next tick.
        let elapsed_ms = last_tick.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last_tick += Duration::from_millis(u64::from(elapsed_ms));
        game.tick(elapsed_ms);
    }
}
