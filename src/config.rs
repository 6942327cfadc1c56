use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, bail};
use clap::Parser;

use crate::constants::*;

/// Browse folders of photos as side-by-side carousels.
///
/// Images directly inside DIRECTORY form the first carousel, every
/// sub-directory adds another one.
#[derive(Debug, Clone, Parser)]
#[command(name = "carousel", version, about)]
pub struct Cli {
    /// Directory holding the images (one sub-directory per carousel)
    pub directory: PathBuf,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: i32,

    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Maximum number of carousels shown
    #[arg(long, default_value_t = DEFAULT_GROUP_COUNT)]
    pub max_groups: usize,

    /// Shuffle the images inside each carousel
    #[arg(long)]
    pub shuffle: bool,

    /// Seed for --shuffle, for a repeatable order
    #[arg(long, requires = "shuffle")]
    pub seed: Option<u64>,

    /// Advance every carousel each SECONDS
    #[arg(long, value_name = "SECONDS")]
    pub autoplay: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub directory: PathBuf,
    pub width: i32,
    pub height: i32,
    pub fps: u32,
    pub max_groups: usize,
    pub shuffle: bool,
    pub seed: Option<u64>,
    pub autoplay: Option<Duration>,
}

impl TryFrom<Cli> for Config {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        if cli.width <= 0 || cli.height <= 0 {
            bail!("window size must be positive, got {}x{}", cli.width, cli.height);
        }
        if cli.fps == 0 {
            bail!("fps must be at least 1");
        }
        if cli.max_groups == 0 {
            bail!("max-groups must be at least 1");
        }
        let autoplay = match cli.autoplay {
            Some(secs) if !(secs.is_finite() && secs > 0.0) => {
                bail!("autoplay interval must be a positive number of seconds, got {secs}")
            }
            Some(secs) => match Duration::try_from_secs_f32(secs) {
                Ok(interval) => Some(interval),
                Err(_) => bail!("autoplay interval is too large, got {secs}"),
            },
            None => None,
        };

        Ok(Self {
            directory: cli.directory,
            width: cli.width,
            height: cli.height,
            fps: cli.fps,
            max_groups: cli.max_groups,
            shuffle: cli.shuffle,
            seed: cli.seed,
            autoplay,
        })
    }
}

impl Config {
    pub fn from_args() -> Result<Self> {
        Cli::parse().try_into()
    }
}
