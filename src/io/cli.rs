//! Command-line interface for rendering a meme from image files

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use log::{LevelFilter, info};

use crate::compose::{ComposeOptions, MemeConfig, MemePipeline};
use crate::glyph::resolver::{BuiltinOnlyResolver, SystemFontResolver, select_face};
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_BORDER_COLOR, DEFAULT_DPI, DEFAULT_GLYPH, DEFAULT_OUTPUT,
    DEFAULT_SIZE_RATIO, DEFAULT_THRESHOLD, FONT_CANDIDATES,
};
use crate::io::error::Result;
use crate::io::image::{load_raster, save_raster};

#[derive(Parser, Debug)]
#[command(name = "selection-meme")]
#[command(
    author,
    version,
    about = "Render a four-panel meme explaining selection bias"
)]
/// Command-line arguments for the meme renderer
pub struct Cli {
    /// Reference image shown as "Reality"
    #[arg(value_name = "REALITY")]
    pub reality: PathBuf,

    /// Stippled or sampled image shown as "Your Model"
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,

    /// Output image path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Glyph drawn into the selection mask
    #[arg(short, long, default_value = DEFAULT_GLYPH)]
    pub glyph: String,

    /// Glyph size as a fraction of the smaller image side
    #[arg(short = 'r', long, default_value_t = DEFAULT_SIZE_RATIO)]
    pub size_ratio: f32,

    /// Mask values below this are erased from the model
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f32,

    /// Output resolution in dots per inch
    #[arg(short, long, default_value_t = DEFAULT_DPI)]
    pub dpi: u32,

    /// Figure background color (name or #rrggbb)
    #[arg(short, long, default_value = DEFAULT_BACKGROUND)]
    pub background: String,

    /// Panel border color (name or #rrggbb)
    #[arg(long, default_value = DEFAULT_BORDER_COLOR)]
    pub border_color: String,

    /// Also save the rendered letter mask to this path
    #[arg(long, value_name = "PATH")]
    pub mask_output: Option<PathBuf>,

    /// Also save the masked model to this path
    #[arg(long, value_name = "PATH")]
    pub estimate_output: Option<PathBuf>,

    /// Skip font discovery and draw with the built-in block face
    #[arg(long)]
    pub builtin_font: bool,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level implied by `--quiet` and `--verbose`
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Meme configuration assembled from the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the dpi or a color is invalid
    pub fn meme_config(&self) -> Result<MemeConfig> {
        Ok(MemeConfig {
            glyph: self.glyph.clone(),
            size_ratio: self.size_ratio,
            threshold: self.threshold,
            compose: ComposeOptions::new(self.dpi, &self.background, &self.border_color)?,
        })
    }
}

/// Runs the meme pipeline for parsed arguments
pub struct MemeCommand {
    cli: Cli,
}

impl MemeCommand {
    /// Create a command for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load inputs, render the meme and write every requested output
    ///
    /// # Errors
    ///
    /// Returns an error if an input cannot be loaded, a parameter is
    /// invalid, or an output cannot be written
    pub fn run(&self) -> Result<()> {
        let config = self.cli.meme_config()?;
        let face = if self.cli.builtin_font {
            select_face(&FONT_CANDIDATES, &BuiltinOnlyResolver)
        } else {
            select_face(&FONT_CANDIDATES, &SystemFontResolver::default())
        };
        let pipeline = MemePipeline::new(config, Arc::new(face))?;

        let reality = load_raster(&self.cli.reality)?;
        let model = load_raster(&self.cli.model)?;
        info!(
            "Loaded reality {}x{} and model {}x{}",
            reality.height(),
            reality.width(),
            model.height(),
            model.width()
        );

        let artifacts = pipeline.render_to(&reality, &model, &self.cli.output)?;

        if let Some(path) = &self.cli.mask_output {
            save_raster(&artifacts.mask, path)?;
            info!("Mask written to '{}'", path.display());
        }
        if let Some(path) = &self.cli.estimate_output {
            save_raster(&artifacts.estimate, path)?;
            info!("Estimate written to '{}'", path.display());
        }

        Ok(())
    }
}
