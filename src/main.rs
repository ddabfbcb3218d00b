use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use shooter2d::compute::{apply_controls, frame_dt, init_state, restart, tick};
use shooter2d::display;
use shooter2d::input::{Action, KeyTracker};

const CONTROLS: &str = "\
Controls:
  Arrows / WASD   move
  Space           shoot
  R               restart after game over
  Esc / Q         quit";

#[derive(Parser, Debug)]
#[command(
    name = "shooter2d",
    about = "Single-screen arcade shooter for the terminal",
    after_help = CONTROLS
)]
struct Args {
    /// Seed for enemy spawns and particle effects (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Frame-rate cap
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Write logs to this file. Without it only errors are logged, to
    /// stderr, once the terminal has been restored (RUST_LOG is ignored)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        None => env_logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .init(),
    }
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Input → simulate → render, once per frame, until a quit key arrives.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
    frame_budget: Duration,
) -> anyhow::Result<()> {
    let mut state = init_state();
    let mut keys = KeyTracker::new();
    let mut frame: u64 = 0;
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(key) = ev else { continue };
            match keys.handle(&key, frame) {
                Some(Action::Quit) => return Ok(()),
                Some(Action::Restart) => state = restart(&state),
                None => {}
            }
        }

        let dt = frame_dt(frame_start.duration_since(last));
        last = frame_start;

        state = apply_controls(&state, &keys.controls(frame));
        state = tick(&state, dt, rng);

        display::render(out, &state).context("rendering frame")?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("starting with seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let frame_budget = Duration::from_secs(1) / args.fps.max(1);

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("enabling raw mode")?;
    if let Err(e) = out
        .execute(terminal::EnterAlternateScreen)
        .and_then(|o| o.execute(cursor::Hide))
    {
        let _ = terminal::disable_raw_mode();
        return Err(e).context("entering alternate screen");
    }

    // Request key-release (and key-repeat) events from the terminal.
    // Terminals without the kitty protocol fall back to press-only.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    log::info!("keyboard enhancement: {keyboard_enhanced}");

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never blocks on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &rx, &mut rng, frame_budget);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("exiting on error: {e:#}");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn help_lists_the_controls() {
        let help = Args::command().render_long_help().to_string();
        for key in ["WASD", "Space", "restart", "Esc / Q"] {
            assert!(help.contains(key), "missing {key:?} in help");
        }
    }

    #[test]
    fn log_file_is_optional() {
        let args = Args::try_parse_from(["shooter2d"]).unwrap();
        assert!(args.log_file.is_none());
        assert_eq!(args.fps, 60);
    }
}
