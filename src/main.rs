//! Letter Rain entry point
//!
//! The browser build is driven from JS through `letter_rain::web`. Natively
//! this runs headless demo sessions with the autoplay bot and logs what a
//! renderer would have been told.

#[cfg(not(target_arch = "wasm32"))]
use anyhow::{Context, bail};

#[cfg(not(target_arch = "wasm32"))]
use letter_rain::sim::{Autoplayer, GameResult};
#[cfg(not(target_arch = "wasm32"))]
use letter_rain::{Renderer, Session, Tuning, consts::FRAME_MS};

/// What the command line asked for
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
enum Command {
    Run(Options),
    Help,
}

/// Runner options
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
struct Options {
    seed: u64,
    max_ticks: u64,
    sessions: u32,
    reaction_ticks: u32,
    tuning: Option<std::path::PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for Options {
    fn default() -> Self {
        Self {
            seed: 1,
            max_ticks: 20 * 60 * 60,
            sessions: 1,
            reaction_ticks: 20,
            tuning: None,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Options {
    fn from_args(args: &[String]) -> anyhow::Result<Command> {
        let mut options = Self::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag, Some(value.to_string())),
                None => (arg.as_str(), None),
            };
            if flag == "-h" || flag == "--help" {
                return Ok(Command::Help);
            }
            let value = match inline {
                Some(value) => value,
                None => iter
                    .next()
                    .cloned()
                    .with_context(|| format!("expected a value after {flag}"))?,
            };
            match flag {
                "--seed" => options.seed = value.parse().context("--seed must be a number")?,
                "--ticks" => {
                    options.max_ticks = value.parse().context("--ticks must be a number")?
                }
                "--sessions" => {
                    options.sessions = value.parse().context("--sessions must be a number")?
                }
                "--reaction" => {
                    options.reaction_ticks =
                        value.parse().context("--reaction must be a number")?
                }
                "--tuning" => options.tuning = Some(value.into()),
                other => bail!("unknown option '{other}', run with --help"),
            }
        }
        Ok(Command::Run(options))
    }
}

/// Renderer that keeps no pixels, only a log line per notification
#[cfg(not(target_arch = "wasm32"))]
#[derive(Default)]
struct LogRenderer {
    spawned: u64,
    on_screen: usize,
    score: u32,
    results: Vec<GameResult>,
}

#[cfg(not(target_arch = "wasm32"))]
impl Renderer for LogRenderer {
    type Handle = u64;

    fn on_start(&mut self) {
        log::info!("Falling Letters Game! started");
    }

    fn on_spawn(&mut self, glyph: char, x: f32, y: f32) -> u64 {
        self.spawned += 1;
        self.on_screen += 1;
        log::trace!("spawn #{} {} at ({}, {})", self.spawned, glyph, x, y);
        self.spawned
    }

    fn on_tick(&mut self, _handle: &u64, _y: f32) {}

    fn on_despawn(&mut self, handle: u64) {
        self.on_screen = self.on_screen.saturating_sub(1);
        log::trace!("despawn #{}", handle);
    }

    fn on_score_changed(&mut self, score: u32) {
        if score != self.score {
            log::debug!("Score: {}", score);
        }
        self.score = score;
    }

    fn on_game_ended(&mut self, result: GameResult) {
        log::info!("{} Final score {}", result.message(), self.score);
        self.results.push(result);
    }

    fn on_reset(&mut self) {
        log::info!("Press any key to start");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match Options::from_args(&args)? {
        Command::Run(options) => options,
        Command::Help => {
            print_help();
            return Ok(());
        }
    };
    let tuning = match &options.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    log::info!("Letter Rain (native demo) starting with {:?}", options);
    let mut session = Session::new(options.seed, tuning, LogRenderer::default())?;
    let mut bot = Autoplayer::new(options.reaction_ticks);

    let mut ticks = 0u64;
    let mut played = 0u32;
    while ticks < options.max_ticks {
        if let Some(result) = session.state().result() {
            played += 1;
            log::debug!("Session {} result {:?}", played, result);
            if played >= options.sessions {
                break;
            }
            session.request_restart();
        }

        if let Some(key) = bot.next_key(session.state()) {
            session.key_press(key);
        }
        session.update(FRAME_MS);
        ticks += 1;
    }

    let renderer = session.renderer();
    let wins = renderer
        .results
        .iter()
        .filter(|r| **r == GameResult::Won)
        .count();
    println!(
        "{} session(s) finished in {} ticks: {} won, {} lost, {} letters spawned",
        renderer.results.len(),
        ticks,
        wins,
        renderer.results.len() - wins,
        renderer.spawned
    );
    if session.state().is_playing() {
        println!(
            "Tick limit reached mid-run at score {} with {} letters on screen",
            session.state().score,
            renderer.on_screen
        );
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn print_help() {
    println!("letter-rain (native demo)");
    println!("\nUsage:");
    println!("  letter-rain [--seed N] [--ticks N] [--sessions N] [--reaction N] [--tuning FILE]");
    println!("\nOptions:");
    println!("  --seed N        RNG seed for the first session (default 1)");
    println!("  --ticks N       stop after N frames of 16ms (default 72000)");
    println!("  --sessions N    restart until N sessions have ended (default 1)");
    println!("  --reaction N    frames the bot waits between key presses (default 20)");
    println!("  --tuning FILE   JSON balance overrides");
    println!("\nSet RUST_LOG=debug to see every match and spawn batch.");
}


#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::start, this is just to satisfy the compiler
}
