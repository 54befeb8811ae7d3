//! Terminal Game of Life runner (default binary).
//!
//! Resolves an initial grid from a file, a named preset, or random fill,
//! then pulls generations from the simulation at the configured pace.
//! Quit keys stop consumption, which the runner reports as an interruption
//! rather than an error.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use rand::Rng;

use tui_life::core::{Grid, SimConfig, Simulation};
use tui_life::pattern;
use tui_life::presets;
use tui_life::term::{GridView, Symbols, TerminalRenderer, Theme};
use tui_life::types::{DEFAULT_PAUSE_MS, GRID_SIZE, MAX_ITERATIONS};

#[derive(Parser, Debug)]
#[command(
    name = "tui-life",
    version,
    about = "Conway's Game of Life in the terminal"
)]
struct Args {
    /// Maximum iterations beyond the initial generation.
    #[arg(short, long, default_value_t = MAX_ITERATIONS)]
    iterations: usize,

    /// Pause between generations, in milliseconds.
    #[arg(short, long, default_value_t = DEFAULT_PAUSE_MS)]
    pause_ms: u64,

    /// Start from a built-in pattern (see --list-presets).
    #[arg(short = 's', long, conflicts_with = "file")]
    preset: Option<String>,

    /// Path to a .txt pattern file ('*' alive, '-' dead).
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Start from a uniformly random soup instead of a preset.
    #[arg(short, long, conflicts_with_all = ["preset", "file"])]
    random: bool,

    /// Colour theme for dead/alive cells.
    #[arg(short, long, default_value = "classic")]
    theme: String,

    /// Two characters to draw dead and alive cells with.
    #[arg(long, num_args = 2, value_names = ["DEAD", "ALIVE"])]
    symbols: Option<Vec<char>>,

    /// Print plain rows to stdout instead of the alternate-screen display.
    #[arg(long)]
    plain: bool,

    /// List the built-in preset names and exit.
    #[arg(long)]
    list_presets: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list_presets {
        for name in presets::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let theme = Theme::from_name(&args.theme).ok_or_else(|| {
        anyhow!(
            "unknown theme {:?} (expected one of: {})",
            args.theme,
            Theme::NAMES.join(", ")
        )
    })?;
    let symbols = match args.symbols.as_deref() {
        Some([dead, alive]) => Symbols {
            dead: *dead,
            alive: *alive,
        },
        _ => Symbols::default(),
    };
    let view = GridView::new(symbols, theme);

    let mut rng = rand::thread_rng();
    let (label, initial) = resolve_grid(&args, &mut rng)?;

    let config = SimConfig {
        max_iterations: args.iterations,
        ..SimConfig::default()
    };
    let mut sim = Simulation::new(initial.clone(), config);
    let pause = Duration::from_millis(args.pause_ms);

    if args.plain {
        run_plain(&mut sim, &view, pause)?;
    } else {
        let mut term = TerminalRenderer::new();
        term.enter()?;
        let result = run(&mut sim, &mut term, &view, pause);
        // Always try to restore terminal state.
        let _ = term.exit();
        result?;
    }

    summarize(&sim, &view, &initial, &label);
    Ok(())
}

fn resolve_grid(args: &Args, rng: &mut impl Rng) -> Result<(String, Grid)> {
    if let Some(path) = &args.file {
        let grid = pattern::load_pattern_file(path)
            .with_context(|| format!("failed to load pattern from {}", path.display()))?;
        return Ok((path.display().to_string(), grid));
    }

    if let Some(name) = &args.preset {
        let grid = presets::by_name(name).ok_or_else(|| {
            anyhow!(
                "unknown preset {:?} (expected one of: {})",
                name,
                presets::names().join(", ")
            )
        })?;
        return Ok((name.clone(), grid));
    }

    if args.random {
        return Ok(("random soup".to_string(), Grid::random(GRID_SIZE, rng)));
    }

    let (name, grid) =
        presets::pick_random(rng).ok_or_else(|| anyhow!("no built-in presets available"))?;
    Ok((name.to_string(), grid))
}

fn run(
    sim: &mut Simulation,
    term: &mut TerminalRenderer,
    view: &GridView,
    pause: Duration,
) -> Result<()> {
    run_loop(
        sim,
        pause,
        |grid, iterations| term.draw(view, grid, iterations),
        quit_requested,
    )
}

fn run_plain(sim: &mut Simulation, view: &GridView, pause: Duration) -> Result<()> {
    // Raw mode without the alternate screen, so quit keys (including Ctrl-C)
    // reach the loop and the run ends with a summary instead of a dead process.
    terminal::enable_raw_mode()?;
    let result = plain_loop(sim, view, pause);
    // Always try to restore terminal state.
    let _ = terminal::disable_raw_mode();
    result
}

fn plain_loop(sim: &mut Simulation, view: &GridView, pause: Duration) -> Result<()> {
    let mut out = io::stdout();
    run_loop(
        sim,
        pause,
        |grid, iterations| {
            // Raw output needs explicit carriage returns.
            for line in view.plain(grid).lines() {
                write!(out, "{line}\r\n")?;
            }
            write!(out, "iteration: {iterations}\r\n\r\n")?;
            out.flush()?;
            Ok(())
        },
        quit_requested,
    )
}

/// Pull generations, rendering each and pausing in between. A stop request
/// ends consumption through `Simulation::stop`, so the halt reason reads
/// `Interrupted` afterwards.
fn run_loop(
    sim: &mut Simulation,
    pause: Duration,
    mut render: impl FnMut(&Grid, usize) -> Result<()>,
    mut stop_requested: impl FnMut(Duration) -> Result<bool>,
) -> Result<()> {
    while let Some(grid) = sim.next() {
        render(&grid, sim.iterations())?;
        if stop_requested(pause)? {
            sim.stop();
            break;
        }
    }
    Ok(())
}

/// Wait out the display pause, reporting whether a quit key arrived.
fn quit_requested(pause: Duration) -> Result<bool> {
    let deadline = Instant::now() + pause;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if !event::poll(remaining)? {
            return Ok(false);
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && is_quit_key(key) {
                return Ok(true);
            }
        }
        if Instant::now() >= deadline {
            return Ok(false);
        }
    }
}

fn is_quit_key(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn summarize(sim: &Simulation, view: &GridView, initial: &Grid, label: &str) {
    println!("The last generation of {label} was:");
    print!("{}", view.plain(sim.current()));
    println!();
    println!("The first generation was:");
    print!("{}", view.plain(initial));
    println!("[That was {} iterations ago]", sim.iterations());

    if let Some(reason) = sim.halt_reason() {
        println!("Run stopped due to {}.", reason.describe());
    }
}
