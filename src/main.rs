//! Headless runner: animates one algorithm over a list of values with the
//! timed driver and logs every step, effect and result.
//!
//! ```text
//! RUST_LOG=debug stepviz --values 5,3,8,1 --algorithm bubble
//! stepviz --values 1,3,5,8 --algorithm binary --target 8 --step
//! ```

use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use glam::Vec2;
use rand::Rng;
use stepviz::animation::TimedDriver;
use stepviz::engine::{Command, EngineEvent, SearchKind, SortKind, Visualizer};
use stepviz::options::Options;
use stepviz::scene::parse::parse_values;
use stepviz::scene::{values_of, Scene, Value};
use stepviz::util::frame_timing::FrameTiming;
use web_time::Instant;

/// Target FPS of the headless frame loop
const TARGET_FPS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Linear,
    Binary,
    Bubble,
    Selection,
}

#[derive(Debug, Parser)]
#[command(
    name = "stepviz",
    about = "Animate a search or sort step by step and log what happens",
    version
)]
struct Cli {
    /// Comma-separated element values.
    #[arg(long, default_value = "5,3,8,1")]
    values: String,

    /// Algorithm to run.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Bubble)]
    algorithm: AlgorithmArg,

    /// Value to search for (searches only).
    #[arg(long)]
    target: Option<String>,

    /// Step manually: press Enter for every step.
    #[arg(long)]
    step: bool,

    /// Animation speed multiplier.
    #[arg(long)]
    speed: Option<f32>,

    /// Options preset (TOML) to start from.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Scatter N random values instead of using --values.
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Write the options JSON schema to PATH and exit.
    #[arg(long, value_name = "PATH")]
    schema: Option<PathBuf>,
}

impl Cli {
    fn command(&self) -> Result<Command> {
        let search = |kind| -> Result<Command> {
            let Some(target) = self.target.clone() else {
                bail!("--target is required for {:?} search", self.algorithm);
            };
            Ok(Command::StartSearch { kind, target })
        };
        match self.algorithm {
            AlgorithmArg::Linear => search(SearchKind::Linear),
            AlgorithmArg::Binary => search(SearchKind::Binary),
            AlgorithmArg::Bubble => Ok(Command::StartSort {
                kind: SortKind::Bubble,
            }),
            AlgorithmArg::Selection => Ok(Command::StartSort {
                kind: SortKind::Selection,
            }),
        }
    }

    fn options(&self) -> Result<Options> {
        let mut options = match &self.options {
            Some(path) => Options::load(path)
                .with_context(|| format!("loading options from {}", path.display()))?,
            None => Options::default(),
        };
        if self.step {
            options.playback.stepping = true;
        }
        if let Some(speed) = self.speed {
            options.playback.speed = speed;
        }
        Ok(options)
    }
}

/// Random values at random positions inside the viewport.
fn random_scene(count: usize, options: &Options) -> Scene {
    let mut rng = rand::rng();
    let [width, height] = options.layout.viewport;
    let margin = options.layout.element_size;
    let mut scene = Scene::new();
    for _ in 0..count {
        let value: Value = rng.random_range(1..=99);
        let at = Vec2::new(
            rng.random_range(margin..(width - margin).max(margin + 1.0)),
            rng.random_range(height * 0.3..height * 0.7),
        );
        let _ = scene.insert(value, at);
    }
    scene
}

fn write_schema(path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&Options::json_schema())?;
    std::fs::write(path, json)
        .with_context(|| format!("writing schema to {}", path.display()))?;
    log::info!("Wrote options schema to {}", path.display());
    Ok(())
}

/// Lines typed on stdin, one message per Enter.
fn spawn_enter_listener() -> mpsc::Receiver<()> {
    let (tx, rx) = mpsc::channel();
    let _ = thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            if line.is_err() || tx.send(()).is_err() {
                break;
            }
        }
    });
    rx
}

fn log_event(event: &EngineEvent) {
    match event {
        EngineEvent::Advisory(advisory) => log::warn!("{advisory}"),
        EngineEvent::StepCompleted { step } => log::info!("step {step} done"),
        EngineEvent::Finished(result) => log::info!("{result}"),
        EngineEvent::Cancelled => log::info!("run cancelled"),
        EngineEvent::AnnouncementCleared => log::debug!("announcement cleared"),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.options()?;
    let mut engine = match cli.random {
        Some(count) => Visualizer::with_scene(random_scene(count, &options), options),
        None => Visualizer::with_values(&parse_values(&cli.values)?, options),
    };
    let command = cli.command()?;
    log::info!(
        "values (left to right): {:?}",
        values_of(&engine.scene().ordered_view())
    );

    let mut driver = TimedDriver::new(engine.options());
    let start = Instant::now();
    let mut frames = FrameTiming::new(TARGET_FPS, start);
    driver.track(engine.scene().elements(), start);
    engine.mark_rendered();

    engine.execute(command, start, &mut driver)?;
    let enter = engine.is_stepping().then(spawn_enter_listener);
    let mut prompted = false;

    loop {
        let now = Instant::now();
        if !frames.is_due(now) {
            thread::sleep(frames.until_next(now));
            continue;
        }
        if let Some(enter) = &enter {
            if engine.can_advance() && !prompted {
                log::info!("press Enter for the next step");
                prompted = true;
            }
            if enter.try_recv().is_ok() {
                if engine.advance() {
                    prompted = false;
                } else {
                    log::info!("still animating; step ignored");
                }
            }
        }

        for event in engine.tick(now, &mut driver) {
            log_event(&event);
        }
        if engine.scene().is_dirty() {
            driver.track(engine.scene().elements(), now);
            engine.mark_rendered();
        }
        if !engine.is_busy() && driver.is_settled(now) {
            break;
        }

        frames.end_frame(now);
    }

    log::info!(
        "final order: {:?} ({:.0} fps)",
        values_of(&engine.scene().ordered_view()),
        frames.fps()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let cli = Cli::parse();
    if let Some(path) = &cli.schema {
        return write_schema(path);
    }
    run(&cli)
}
