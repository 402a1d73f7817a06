//! Terminal front end (default binary).
//!
//! Owns everything the engine deliberately leaves out: the drop timer, the
//! pause toggle, keyboard input and drawing. The engine is driven only
//! through its public commands and observed through a listener.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::cli::{parse_args, RunConfig};
use blockfall::core::{GameEvent, PuzzleEngine, RandomPieces};
use blockfall::input::{handle_key_event, is_pause_key, should_quit};
use blockfall::term::{GameView, Overlay, TerminalRenderer, Viewport};
use blockfall::types::GameCommand;

/// Input poll timeout while the timer is stopped.
const IDLE_POLL: Duration = Duration::from_millis(250);

struct Summary {
    seed: u64,
    score: u32,
    level: u32,
    lines: u32,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let run_config = parse_args(&args)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &run_config);

    // Always try to restore terminal state.
    let _ = term.exit();

    match &result {
        Ok(s) => eprintln!(
            "[blockfall] session ended: seed {}, score {}, level {}, lines {}",
            s.seed, s.score, s.level, s.lines
        ),
        Err(e) => eprintln!("[blockfall] fatal: {:#}", e),
    }
    result.map(|_| ())
}

fn run(term: &mut TerminalRenderer, run_config: &RunConfig) -> Result<Summary> {
    let config = run_config.engine_config()?;
    let seed = run_config.seed.unwrap_or_else(clock_seed);
    let mut engine = PuzzleEngine::new(config, RandomPieces::seeded(seed))?;

    let dirty = Rc::new(Cell::new(true));
    let flag = Rc::clone(&dirty);
    engine.add_listener(move |_: &GameEvent| flag.set(true));

    let view = GameView::default();
    let mut paused = false;
    let mut next_drop = Instant::now() + interval(&engine);

    loop {
        if dirty.replace(false) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let fb = view.render(&engine.snapshot(), Overlay { paused }, Viewport::new(w, h));
            term.draw(fb)?;
        }

        let timer_running = !paused && !engine.is_game_over();
        let timeout = if timer_running {
            next_drop.saturating_duration_since(Instant::now())
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        break;
                    }
                    if is_pause_key(key) {
                        if !engine.is_game_over() {
                            paused = !paused;
                            dirty.set(true);
                            next_drop = Instant::now() + interval(&engine);
                        }
                        continue;
                    }
                    match handle_key_event(key) {
                        Some(GameCommand::Restart) => {
                            paused = false;
                            engine.restart();
                            next_drop = Instant::now() + interval(&engine);
                        }
                        Some(command) if !paused => {
                            engine.apply(command);
                        }
                        _ => {}
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty.set(true);
                }
                _ => {}
            }
        }

        if timer_running && Instant::now() >= next_drop {
            engine.tick();
            // Level-ups change the cadence; re-read after every tick.
            next_drop = Instant::now() + interval(&engine);
        }
    }

    let progress = engine.progress();
    Ok(Summary {
        seed,
        score: progress.score,
        level: progress.level,
        lines: progress.total_lines,
    })
}

fn interval<S>(engine: &PuzzleEngine<S>) -> Duration
where
    S: blockfall::core::PieceSource,
{
    Duration::from_millis(u64::from(engine.drop_interval_ms()))
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
