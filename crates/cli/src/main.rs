use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use arcgauge::prelude::*;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod provenance;
mod trace;

use provenance::{write_sidecar, Payload};
use trace::{Frame, FrameTrace};

#[derive(Parser)]
#[command(name = "arcgauge")]
#[command(about = "Drive the arc gauge controller from the command line")]
struct Cmd {
    /// Optional gauge configuration (JSON); flags below override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the arc angles for one progress value
    Sweep {
        #[arg(long, allow_hyphen_values = true)]
        progress: f64,
        #[arg(long)]
        max: Option<f64>,
        /// strict | wrap | clamp
        #[arg(long)]
        bounds: Option<String>,
    },
    /// Simulate an animation at a fixed frame interval
    Animate {
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        start: f64,
        #[arg(long, default_value_t = 100.0, allow_hyphen_values = true)]
        end: f64,
        #[arg(long, default_value_t = 1000)]
        duration_ms: u64,
        #[arg(long, default_value_t = 16)]
        frame_ms: u64,
        /// linear | quad | cubic | sine | standard
        #[arg(long)]
        easing: Option<String>,
        #[arg(long, default_value_t = 0)]
        repeat: u32,
        /// Reached flags such as `1101`; animates from the current progress to their share of max
        #[arg(long)]
        segments: Option<String>,
        /// Cancel the run once this much time has elapsed
        #[arg(long)]
        cancel_at_ms: Option<u64>,
        /// Write the per-frame trace (.csv or .parquet)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the draw operations for one frame
    Scene {
        #[arg(long, allow_hyphen_values = true)]
        progress: f64,
        #[arg(long, default_value_t = 200.0)]
        width: f64,
        #[arg(long, default_value_t = 200.0)]
        height: f64,
        #[arg(long, default_value_t = 0.0)]
        padding: f64,
    },
    /// Print the persisted state for a gauge
    Snapshot {
        #[arg(long, allow_hyphen_values = true)]
        progress: f64,
        #[arg(long)]
        max: Option<f64>,
    },
    /// Restore a persisted state and print the resulting gauge
    Restore { file: PathBuf },
    /// Print a small provenance JSON block, optionally summarizing a trace
    Report {
        #[arg(long)]
        trace: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cmd = Cmd::parse();
    let cfg = load_config(cmd.config.as_deref())?;
    match cmd.action {
        Action::Sweep {
            progress,
            max,
            bounds,
        } => sweep(cfg, progress, max, bounds),
        Action::Animate {
            start,
            end,
            duration_ms,
            frame_ms,
            easing,
            repeat,
            segments,
            cancel_at_ms,
            out,
        } => animate(
            cfg,
            AnimateArgs {
                start,
                end,
                duration: Duration::from_millis(duration_ms),
                frame: Duration::from_millis(frame_ms),
                easing,
                repeat,
                segments,
                cancel_at: cancel_at_ms.map(Duration::from_millis),
                out,
            },
        ),
        Action::Scene {
            progress,
            width,
            height,
            padding,
        } => scene_cmd(cfg, progress, width, height, padding),
        Action::Snapshot { progress, max } => snapshot(cfg, progress, max),
        Action::Restore { file } => restore(cfg, &file),
        Action::Report { trace } => report(trace.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> Result<GaugeConfig> {
    let Some(path) = path else {
        return Ok(GaugeConfig::default());
    };
    let raw =
        std::fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("parsing config {}", path.display()))
}

fn parse_bounds(name: &str) -> Result<BoundsMode> {
    BoundsMode::from_name(name).with_context(|| format!("unknown bounds mode `{name}`"))
}

fn parse_segments(s: &str) -> Result<Vec<bool>> {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| match c {
            '1' => Ok(true),
            '0' => Ok(false),
            other => bail!("segment flags must be 0 or 1, got `{other}`"),
        })
        .collect()
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn sweep(mut cfg: GaugeConfig, progress: f64, max: Option<f64>, bounds: Option<String>) -> Result<()> {
    if let Some(b) = bounds {
        cfg.bounds = parse_bounds(&b)?;
    }
    let mut gauge = Gauge::new(cfg);
    if let Some(m) = max {
        if !gauge.set_max(m) {
            tracing::warn!(max = m, "max ignored; keeping {}", gauge.max());
        }
    }
    let accepted = gauge.set_progress(progress);
    tracing::info!(progress, accepted, "sweep");
    print_json(&json!({
        "requested": progress,
        "accepted": accepted,
        "progress": gauge.progress(),
        "max": gauge.max(),
        "direction": gauge.direction(),
        "sweep": gauge.sweep(),
        "label": gauge.label(),
    }))
}

struct AnimateArgs {
    start: f64,
    end: f64,
    duration: Duration,
    frame: Duration,
    easing: Option<String>,
    repeat: u32,
    segments: Option<String>,
    cancel_at: Option<Duration>,
    out: Option<PathBuf>,
}

fn animate(cfg: GaugeConfig, args: AnimateArgs) -> Result<()> {
    if args.frame.is_zero() {
        bail!("--frame-ms must be positive");
    }
    let mut gauge = Gauge::new(cfg);
    if let Some(name) = &args.easing {
        let easing =
            Easing::from_name(name).with_context(|| format!("unknown easing `{name}`"))?;
        gauge.set_easing(easing);
    }
    gauge.add_listener(|e: &AnimationEvent| {
        tracing::info!(
            phase = ?e.phase,
            progress = e.progress,
            repetition = e.repetition,
            "animation"
        );
    });

    let mut trace = FrameTrace::default();
    match &args.segments {
        Some(flags) => {
            let flags = parse_segments(flags)?;
            gauge.set_progress(args.start);
            if !gauge.animate_segments(&flags, args.duration) {
                bail!("--segments needs at least one flag");
            }
        }
        None => gauge.animate(
            AnimationRun::new(args.start, args.end, args.duration)
                .with_easing(gauge.easing())
                .with_repeat(args.repeat),
        ),
    }
    trace.push(Frame::sample(Duration::ZERO, &gauge));

    let mut t = Duration::ZERO;
    let mut cancelled = false;
    while gauge.is_animating() {
        if args.cancel_at.is_some_and(|at| t >= at) {
            cancelled = gauge.cancel();
            break;
        }
        t += args.frame;
        gauge.advance(args.frame);
        trace.push(Frame::sample(t, &gauge));
    }

    if let Some(out) = &args.out {
        trace
            .write(out)
            .with_context(|| format!("writing trace {}", out.display()))?;
        let payload = Payload::new(json!({
            "start": args.start,
            "end": args.end,
            "duration_ms": args.duration.as_millis() as u64,
            "frame_ms": args.frame.as_millis() as u64,
            "easing": format!("{:?}", gauge.easing()),
            "repeat": args.repeat,
            "segments": args.segments,
            "frames": trace.len(),
        }));
        let prov = write_sidecar(out, payload)?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "trace written");
    }

    print_json(&json!({
        "frames": trace.len(),
        "elapsed_ms": t.as_millis() as u64,
        "cancelled": cancelled,
        "progress": gauge.progress(),
        "sweep": gauge.sweep(),
        "label": gauge.label(),
    }))
}

fn scene_cmd(cfg: GaugeConfig, progress: f64, width: f64, height: f64, padding: f64) -> Result<()> {
    let mut gauge = Gauge::new(cfg);
    gauge.set_progress(progress);
    let viewport = Viewport {
        width,
        height,
        padding: Padding::uniform(padding),
    };
    print_json(&scene(&gauge, &viewport))
}

fn snapshot(cfg: GaugeConfig, progress: f64, max: Option<f64>) -> Result<()> {
    let mut gauge = Gauge::new(cfg);
    if let Some(m) = max {
        gauge.set_max(m);
    }
    gauge.set_progress(progress);
    print_json(&gauge.snapshot())
}

fn restore(cfg: GaugeConfig, file: &Path) -> Result<()> {
    let raw = std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let snap: GaugeSnapshot =
        serde_json::from_slice(&raw).with_context(|| format!("parsing {}", file.display()))?;
    let mut gauge = Gauge::new(cfg);
    gauge.restore(&snap);
    print_json(&json!({
        "max": gauge.max(),
        "progress": gauge.progress(),
        "prefix": gauge.prefix(),
        "suffix": gauge.suffix(),
        "sweep": gauge.sweep(),
        "style": gauge.style(),
    }))
}

fn report(trace_file: Option<&Path>) -> Result<()> {
    let summary = trace_file
        .map(|p| trace::summarize(p).with_context(|| format!("summarizing {}", p.display())))
        .transpose()?;
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "lib_version": arcgauge::VERSION,
        "trace": trace_file.map(|p| p.to_string_lossy()),
        "summary": summary,
    });
    print_json(&obj)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_flags_parse() {
        assert_eq!(
            parse_segments("1,0 1").unwrap(),
            vec![true, false, true]
        );
        assert!(parse_segments("1x").is_err());
        assert!(parse_segments("").unwrap().is_empty());
    }

    #[test]
    fn bounds_names_parse() {
        assert_eq!(parse_bounds("clamp").unwrap(), BoundsMode::Clamp);
        assert!(parse_bounds("loop").is_err());
    }

    #[test]
    fn config_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gauge.json");
        std::fs::write(&path, r#"{"max": 40, "suffix": " steps", "bounds": "strict"}"#).unwrap();
        let cfg = load_config(Some(&path)).unwrap();
        assert_eq!(cfg.max, 40.0);
        assert_eq!(cfg.suffix, " steps");
        assert_eq!(cfg.bounds, BoundsMode::Strict);
        assert_eq!(cfg.prefix, "");
        assert!(load_config(Some(&dir.path().join("missing.json"))).is_err());
    }
}
