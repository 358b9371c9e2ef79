//! CLI argument definitions for the spritesheets command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Args, Parser, Subcommand};
use spritesheets_backend::{EightWayOptions, SheetOptions};
use spritesheets_spec::{DEFAULT_ALPHA_CUTOFF, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH};

/// Spritesheets - pack rendered animation frames into sheets
#[derive(Parser)]
#[command(name = "spritesheets")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Show debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Pack one animation into a single sheet
    Pack {
        #[command(flatten)]
        sheet: SheetArgs,
    },

    /// Pack an eight-direction animation into height-bounded sheets
    PackEightway {
        #[command(flatten)]
        sheet: SheetArgs,

        /// Frames in one direction group
        #[arg(long)]
        frames_per_direction: usize,

        /// Maximum sheet height in pixels
        #[arg(long, default_value_t = DEFAULT_MAX_HEIGHT)]
        max_height: u32,
    },

    /// Report the content bounds of an animation and a crop window that covers them
    Bounds {
        /// Directory holding one sub-directory per animation
        #[arg(short, long)]
        source: String,

        /// Animation name (sub-directory of the source)
        #[arg(short, long)]
        name: String,

        /// Alpha at or above which a pixel counts as content
        #[arg(long, default_value_t = DEFAULT_ALPHA_CUTOFF)]
        cutoff: f64,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Cross-fade one animation into another
    Blend {
        /// Directory holding one sub-directory per animation
        #[arg(short, long)]
        source: String,

        /// Animation faded out
        #[arg(long)]
        first: String,

        /// Animation faded in
        #[arg(long)]
        second: String,

        /// Output root; frames go to <out>/<first>_blended/
        #[arg(short, long)]
        out: String,

        /// Last frame that is purely the first animation
        #[arg(long)]
        start: usize,

        /// First frame that is purely the second animation
        #[arg(long)]
        crossover: usize,

        /// Cycle length for repeating blends (0 disables wrapping)
        #[arg(long, default_value_t = 0)]
        length: usize,
    },

    /// List (and optionally move aside) frames an animation never plays
    Unused {
        /// Directory holding one sub-directory per animation
        #[arg(short, long)]
        source: String,

        /// Animation name (sub-directory of the source)
        #[arg(short, long)]
        name: String,

        /// Number of evenly spaced frames the animation plays
        #[arg(long)]
        used: usize,

        /// Move unused frames into this directory
        #[arg(long)]
        move_to: Option<String>,
    },

    /// Pack every animation of a manifest and write its descriptor
    Batch {
        /// Path to the manifest JSON file
        #[arg(short, long)]
        manifest: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a manifest without packing anything
    Validate {
        /// Path to the manifest JSON file
        #[arg(short, long)]
        manifest: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

/// Options shared by the packing commands.
#[derive(Args, Debug)]
pub(crate) struct SheetArgs {
    /// Directory holding one sub-directory per animation
    #[arg(short, long)]
    pub source: String,

    /// Animation name (sub-directory of the source)
    #[arg(short, long)]
    pub name: String,

    /// Output directory for sheets
    #[arg(short, long)]
    pub out: String,

    /// Maximum sheet width in pixels
    #[arg(long, default_value_t = DEFAULT_MAX_WIDTH)]
    pub max_width: u32,

    /// Centered crop applied to every frame, as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_window)]
    pub window: Option<(u32, u32)>,

    /// Explicit frames to pack, by file name, in order
    #[arg(long, value_delimiter = ',')]
    pub frames: Option<Vec<String>>,

    /// Keep every n-th frame
    #[arg(long)]
    pub stride: Option<usize>,

    /// Appended to the sheet file stem after `_sheet`
    #[arg(long, default_value = "")]
    pub suffix: String,

    /// Alpha below which pixels are cleared
    #[arg(long, default_value_t = DEFAULT_ALPHA_CUTOFF)]
    pub cutoff: f64,

    /// Lowercase the animation name in sheet file names
    #[arg(long)]
    pub lowercase: bool,
}

impl SheetArgs {
    pub fn sheet_options(&self) -> SheetOptions {
        SheetOptions {
            max_width: self.max_width,
            window: self.window,
            subset: self.frames.clone(),
            stride: self.stride,
            suffix: self.suffix.clone(),
            alpha_cutoff: self.cutoff,
            lowercase: self.lowercase,
        }
    }

    pub fn eightway_options(&self, frames_per_direction: usize, max_height: u32) -> EightWayOptions {
        EightWayOptions {
            sheet: self.sheet_options(),
            max_height,
            frames_per_direction,
        }
    }
}

/// Parse `WIDTHxHEIGHT` into a non-zero window size.
pub(crate) fn parse_window(value: &str) -> Result<(u32, u32), String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", value))?;
    let width: u32 = width
        .trim()
        .parse()
        .map_err(|_| format!("invalid window width '{}'", width))?;
    let height: u32 = height
        .trim()
        .parse()
        .map_err(|_| format!("invalid window height '{}'", height))?;
    if width == 0 || height == 0 {
        return Err("window dimensions must be non-zero".to_string());
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_window() {
        assert_eq!(parse_window("192x192"), Ok((192, 192)));
        assert_eq!(parse_window("64X32"), Ok((64, 32)));
        assert!(parse_window("192").is_err());
        assert!(parse_window("0x10").is_err());
        assert!(parse_window("ax10").is_err());
    }

    #[test]
    fn test_cli_parses_pack() {
        let cli = Cli::try_parse_from([
            "spritesheets",
            "pack",
            "--source",
            "renders",
            "--name",
            "Idle1",
            "--out",
            "sheets",
            "--max-width",
            "1152",
            "--window",
            "192x192",
            "--frames",
            "a.png,b.png",
            "--lowercase",
        ])
        .unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Pack { sheet } => {
                let options = sheet.sheet_options();
                assert_eq!(options.max_width, 1152);
                assert_eq!(options.window, Some((192, 192)));
                assert_eq!(
                    options.subset,
                    Some(vec!["a.png".to_string(), "b.png".to_string()])
                );
                assert!(options.lowercase);
                assert_eq!(options.suffix, "");
                assert_eq!(options.alpha_cutoff, DEFAULT_ALPHA_CUTOFF);
            }
            _ => panic!("expected pack command"),
        }
    }

    #[test]
    fn test_cli_parses_pack_eightway() {
        let cli = Cli::try_parse_from([
            "spritesheets",
            "-v",
            "pack-eightway",
            "-s",
            "renders",
            "-n",
            "Walk",
            "-o",
            "sheets",
            "--frames-per-direction",
            "20",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::PackEightway {
                sheet,
                frames_per_direction,
                max_height,
            } => {
                let options = sheet.eightway_options(frames_per_direction, max_height);
                assert_eq!(options.frames_per_direction, 20);
                assert_eq!(options.max_height, DEFAULT_MAX_HEIGHT);
                assert_eq!(options.sheet.max_width, DEFAULT_MAX_WIDTH);
            }
            _ => panic!("expected pack-eightway command"),
        }
    }

    #[test]
    fn test_cli_parses_blend() {
        let cli = Cli::try_parse_from([
            "spritesheets",
            "blend",
            "--source",
            "renders",
            "--first",
            "Walk",
            "--second",
            "Run",
            "--out",
            "out",
            "--start",
            "2",
            "--crossover",
            "5",
        ])
        .unwrap();
        match cli.command {
            Commands::Blend {
                start,
                crossover,
                length,
                ..
            } => {
                assert_eq!((start, crossover, length), (2, 5, 0));
            }
            _ => panic!("expected blend command"),
        }
    }

    #[test]
    fn test_cli_rejects_missing_manifest() {
        assert!(Cli::try_parse_from(["spritesheets", "batch"]).is_err());
    }
}
