use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};

use glowfield::{
    AlphaPolicy, DiscRanges, Extent, PngSink, RectRanges, RngSource, Scene, ValueSource,
    sample_discs, sample_rects,
};

#[derive(Parser, Debug)]
#[command(name = "glowfield", version)]
struct Cli {
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 1024)]
    height: u32,

    /// Number of glow discs to stamp.
    #[arg(long, default_value_t = 1024)]
    discs: usize,

    /// Number of flat rects to stamp.
    #[arg(long, default_value_t = 0)]
    rects: usize,

    /// Seed for reproducible output. Defaults to OS entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Output alpha policy.
    #[arg(long, value_enum, default_value_t = AlphaChoice::Opaque)]
    alpha: AlphaChoice,

    /// Output PNG path.
    #[arg(long, default_value = "res.png")]
    out: PathBuf,

    /// Log render progress at debug level.
    #[arg(long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlphaChoice {
    /// Grayscale pixels with full opacity.
    Opaque,
    /// White pixels carrying brightness in the alpha channel.
    Accumulator,
}

impl From<AlphaChoice> for AlphaPolicy {
    fn from(c: AlphaChoice) -> Self {
        match c {
            AlphaChoice::Opaque => AlphaPolicy::Opaque,
            AlphaChoice::Accumulator => AlphaPolicy::Accumulator,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let extent = Extent::new(cli.width, cli.height).context("invalid canvas size")?;

    let mut scene = match cli.seed {
        Some(seed) => build_scene(&mut RngSource::seeded(seed), extent, &cli)?,
        None => build_scene(&mut RngSource::new(rand::rng()), extent, &cli)?,
    };

    scene.render();
    scene
        .save(&mut PngSink::new(), &cli.out)
        .context("write output image")?;

    eprintln!("wrote {}", cli.out.display());
    Ok(())
}

fn build_scene(
    src: &mut impl ValueSource,
    extent: Extent,
    cli: &Cli,
) -> anyhow::Result<Scene> {
    let mut scene = Scene::new(extent).with_alpha_policy(cli.alpha.into());
    scene.add_primitives(sample_discs(src, extent, &DiscRanges::default(), cli.discs)?);
    scene.add_primitives(sample_rects(src, extent, &RectRanges::default(), cli.rects)?);
    Ok(scene)
}
