//! Headless showcase of the switchy widgets.
//!
//! The gallery lays every switch variant out in an adaptive grid, each bound
//! to its own state. [`run_gallery`] applies scripted clicks, simulates
//! frames, and prints either a per-item summary or the frame's draw list;
//! [`check_config`] validates a gallery file without running it.

pub mod config;
pub mod error;
pub mod gallery;
pub mod session;

pub use config::{ConfigFormat, ContentConfig, GalleryConfig, GridMetrics, ItemConfig, Variant};
pub use error::{ConfigError, DemoError};
pub use gallery::{Gallery, GalleryCell, GalleryItem};
pub use session::{ItemReport, Session};

use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Options of the `gallery` command.
#[derive(Debug, Clone, clap::Args)]
pub struct GalleryArgs {
    /// Gallery config (.yaml, .yml or .toml); the built-in showcase if omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Frames to simulate after the clicks
    #[arg(short, long, default_value = "60")]
    pub frames: usize,

    /// Click the switch with this test id (repeatable, applied in order)
    #[arg(long = "click", value_name = "TEST_ID")]
    pub clicks: Vec<String>,

    /// Print the draw list as JSON instead of the summary
    #[arg(long)]
    pub json: bool,
}

/// Build the gallery, apply clicks, simulate, and write the result.
pub fn run_gallery(args: &GalleryArgs, out: &mut impl Write) -> Result<(), DemoError> {
    let config = match &args.config {
        Some(path) => GalleryConfig::load(path)?,
        None => GalleryConfig::default(),
    };
    let mut session = Session::new(&config)?;
    for id in &args.clicks {
        session.click(id)?;
    }
    let run = session.run(args.frames);
    info!(clicks = args.clicks.len(), frames = run, "gallery simulated");

    if args.json {
        session.write_json(out)
    } else {
        session.write_summary(out)?;
        Ok(())
    }
}

/// Parse and validate a gallery file, writing a short description.
pub fn check_config(path: &Path, out: &mut impl Write) -> Result<GalleryConfig, DemoError> {
    writeln!(out, "Checking gallery config: {}", path.display())?;
    let config = GalleryConfig::load(path)?;
    let gallery = Gallery::from_config(&config)?;
    writeln!(out, "Config valid!")?;
    writeln!(
        out,
        "  Viewport: {}x{}",
        config.viewport.width, config.viewport.height
    )?;
    writeln!(
        out,
        "  Columns: {}",
        gallery.columns(config.viewport.width)
    )?;
    writeln!(out, "  Frame rate: {}", config.frame_rate)?;
    writeln!(out, "  Items: {}", config.items.len())?;
    Ok(config)
}
