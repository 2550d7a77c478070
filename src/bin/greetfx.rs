use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use greetfx::{
    AmbientLayer, CpuSurface, DrawSurface, EngineState, FrameRGBA, ManualClock, RetriggerPolicy,
    Scene, SceneConfig, SurfaceSize,
    foundation::{core::FrameIndex, rng::source_for_seed},
    render::{ambient::draw_layer, composite},
};

#[derive(Parser, Debug)]
#[command(name = "greetfx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate an ambient layer and print it as JSON.
    Ambient(AmbientArgs),
    /// Render a confetti burst over the ambient layer as a PNG sequence.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct AmbientArgs {
    /// Random seed (entropy when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out: PathBuf,

    /// Scene config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed; overrides the config and GREETFX_SEED.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Write every K-th frame.
    #[arg(long, default_value_t = 1)]
    every: u64,

    /// Stop after this many confetti frames even if particles remain.
    #[arg(long, default_value_t = 400)]
    max_frames: u64,

    /// Re-trigger policy; overrides the config and GREETFX_RETRIGGER.
    #[arg(long)]
    retrigger: Option<RetriggerPolicy>,

    /// Skip the ambient layer.
    #[arg(long)]
    no_ambient: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Ambient(args) => cmd_ambient(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_ambient(args: AmbientArgs) -> anyhow::Result<()> {
    let mut rng = source_for_seed(args.seed);
    let layer = AmbientLayer::generate(rng.as_mut());
    let json = serde_json::to_string_pretty(&layer).context("serialize ambient layer")?;

    match args.out {
        Some(path) => {
            create_parent_dir(&path)?;
            std::fs::write(&path, json)
                .with_context(|| format!("write ambient json '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn load_config(args: &RenderArgs) -> anyhow::Result<SceneConfig> {
    let cfg = match &args.config {
        Some(path) => SceneConfig::from_path(path)?,
        None => SceneConfig::default(),
    };
    let mut cfg = cfg.with_env_overrides()?;
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(policy) = args.retrigger {
        cfg.retrigger = policy;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    if args.every == 0 {
        anyhow::bail!("--every must be > 0");
    }
    let size = SurfaceSize::new(args.width, args.height);
    let cfg = load_config(&args)?;
    let background = cfg.background;

    let mut scene = Scene::new(cfg, CpuSurface::new(size))?;
    if scene.engine().surface().readback().is_err() {
        anyhow::bail!("{}x{} is not a renderable size", args.width, args.height);
    }
    let mut ambient_surface = CpuSurface::new(size);

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;

    let mut clock = ManualClock::new();
    scene.mount(&clock);
    scene.set_trigger(true, &mut clock);

    let mut frame = FrameIndex::default();
    let mut written = 0u64;
    while scene.engine().state() == EngineState::Running && frame.0 < args.max_frames {
        let report = scene.pump(&mut clock, 1);
        if report.tasks == 0 {
            break;
        }
        if report.frames == 0 {
            continue;
        }

        if frame.0 % args.every == 0 {
            let mut out = composite::background_frame(size, background);
            if !args.no_ambient
                && let (Some(layer), Some(t)) = (scene.ambient(), scene.elapsed_s(&clock))
                && let Some(ctx) = ambient_surface.context()
            {
                draw_layer(ctx, layer, t, size);
                composite::composite_over(&mut out, &ambient_surface.readback()?, 1.0)?;
            }
            composite::composite_over(&mut out, &scene.engine().surface().readback()?, 1.0)?;

            let path = args.out.join(format!("frame_{:05}.png", frame.0));
            write_png(&path, &out)?;
            written += 1;
        }
        frame = frame.next();
    }

    scene.unmount(&mut clock);
    eprintln!(
        "wrote {written} frames ({} rendered) to {}",
        frame.0,
        args.out.display()
    );
    Ok(())
}

fn write_png(path: &Path, frame: &FrameRGBA) -> anyhow::Result<()> {
    image::save_buffer_with_format(
        path,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
