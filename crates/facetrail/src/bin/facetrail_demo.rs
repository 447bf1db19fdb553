//! FACETRAIL demo
//!
//! Runs the trail headless against a scripted pointer and writes the last
//! frame as an SVG file.
//!
//! Script: the pointer circles the surface for the first half of the run,
//! leaves, and the surface shrinks at three quarters.

use std::f64::consts::TAU;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use facetrail::{
    render_scene, CancelToken, Frame, FrameScheduler, InputHub, IntervalScheduler,
    ManualScheduler, SceneOptions, TrailConfig, TrailRuntime,
};
use facetrail_core::Point2D;

/// Command-line arguments for facetrail_demo
#[derive(Parser, Debug)]
#[command(name = "facetrail_demo")]
#[command(version, about = "Face trail animation demo", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Frames to run (at least 1)
    #[arg(short, long, default_value = "600", value_parser = clap::value_parser!(u64).range(1..))]
    pub frames: u64,

    /// Output SVG for the last frame
    #[arg(short, long, default_value = "facetrail.svg")]
    pub output: PathBuf,

    /// Seed for the bounce direction
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pace frames at the configured rate instead of running flat out
    #[arg(long)]
    pub realtime: bool,

    /// Verbose logging (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    info!("facetrail demo v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &args.config {
        Some(path) => TrailConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => TrailConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.animator.seed = Some(seed);
    }
    tracing::debug!(?config, "configuration");

    let hub = InputHub::new(config.runtime.event_capacity);
    let mut runtime = TrailRuntime::from_config(&config, &hub)?;
    let token = CancelToken::new();

    let mut scheduler: Box<dyn FrameScheduler> = if args.realtime {
        Box::new(IntervalScheduler::new(config.runtime.frame_interval()))
    } else {
        Box::new(ManualScheduler::new(args.frames))
    };

    let viewport = config.viewport;
    let total = args.frames;
    let stopper = token.clone();
    let script = hub.clone();
    let mut last: Option<Frame> = None;

    let summary = runtime.run(scheduler.as_mut(), &token, |frame| {
        let n = frame.snapshot.frame;
        // Events sent here are applied at the start of the next frame
        if n < total / 2 {
            let pointer = circle_point(viewport.width, viewport.height, n);
            script.pointer_move(pointer.x, pointer.y);
        } else if n == total / 2 {
            script.pointer_leave();
        } else if n == total * 3 / 4 {
            script.resize(viewport.width * 0.75, viewport.height * 0.75);
        }

        if n >= total {
            stopper.cancel();
        }
        last = Some(frame.clone());
    });

    info!(frames = summary.frames, events = summary.events, "run finished");

    let frame = last.context("no frame was rendered")?;
    let options = SceneOptions {
        icon_size: config.animator.icon_size,
        ..SceneOptions::default()
    };
    let svg = render_scene(&frame.glyphs, &config.face, runtime.viewport(), &options);
    std::fs::write(&args.output, svg)
        .with_context(|| format!("writing {}", args.output.display()))?;

    let head = frame.snapshot.head();
    info!(
        output = %args.output.display(),
        head_x = head.x,
        head_y = head.y,
        "wrote last frame"
    );
    Ok(())
}

/// Pointer position on a circle around the surface center.
#[allow(clippy::cast_precision_loss)]
fn circle_point(width: f64, height: f64, frame: u64) -> Point2D {
    let angle = frame as f64 / 240.0 * TAU;
    let radius = width.min(height) * 0.3;
    Point2D::new(width / 2.0, height / 2.0) + Point2D::from_angle(angle) * radius
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "facetrail={level},facetrail_core={level},facetrail_demo={level},warn",
            level = log_level
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
