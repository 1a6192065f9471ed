//! Command line options.
//!
//! The selectors are mutually exclusive in spirit but not enforced by the
//! parser. When several are given, [`Options::mode`] picks one with the
//! priority distance, greyscale, harmony, hue, luminance, saturation,
//! similarity, temperature. Without selectors, the palette is ordered by RGB.
//!
//! ```
//! # use clap::Parser;
//! # use prettypalette::opt::{Mode, Options};
//! # use prettypalette::order::Strategy;
//! let options = Options::try_parse_from(["prettypalette", "--hue", "--luminance"])?;
//! assert_eq!(options.mode(), Mode::Order(Strategy::Hue));
//! # Ok::<(), clap::Error>(())
//! ```

use clap::Parser;

use crate::error::OutOfBoundsError;
use crate::order::Strategy;
use crate::termco::EmbeddedRgb;

/// What to print.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Print the palette with the cube in the given order.
    Order(Strategy),
    /// Print the harmonies for the reference color.
    Harmony(EmbeddedRgb),
}

/// Parse a reference color, which must be part of the 6x6x6 RGB cube.
pub fn parse_reference(s: &str) -> Result<EmbeddedRgb, String> {
    let index = s
        .trim()
        .parse::<u8>()
        .map_err(|_| format!("`{}` is not a color index in range 16..=231", s))?;
    EmbeddedRgb::try_from(index).map_err(|e: OutOfBoundsError| e.to_string())
}

/// Print the 256 terminal colors, sorted or as harmonies.
#[derive(Clone, Debug, Default, Parser)]
#[command(name = "prettypalette", version)]
#[command(about = "Print the 256-color terminal palette in different orders")]
pub struct Options {
    /// Order by distance to the reference color 16..=231
    #[arg(short, long, value_name = "INDEX", value_parser = parse_reference)]
    pub distance: Option<EmbeddedRgb>,

    /// Order by greyscale, brightest first
    #[arg(short, long)]
    pub greyscale: bool,

    /// Show harmonies for the reference color 16..=231
    #[arg(short = 'H', long, value_name = "INDEX", value_parser = parse_reference)]
    pub harmony: Option<EmbeddedRgb>,

    /// Order by hue, grays last
    #[arg(short = 'u', long)]
    pub hue: bool,

    /// Order by luminance, darkest first
    #[arg(short, long)]
    pub luminance: bool,

    /// Order by saturation, grays first
    #[arg(short, long)]
    pub saturation: bool,

    /// Order by similarity group
    #[arg(short = 'S', long)]
    pub similarity: bool,

    /// Order by temperature, warm colors first
    #[arg(short, long)]
    pub temperature: bool,
}

impl Options {
    /// Resolve the selectors into a mode.
    pub fn mode(&self) -> Mode {
        if let Some(reference) = self.distance {
            return Mode::Order(Strategy::Distance(reference));
        }
        if self.greyscale {
            return Mode::Order(Strategy::Greyscale);
        }
        if let Some(reference) = self.harmony {
            return Mode::Harmony(reference);
        }

        let strategy = if self.hue {
            Strategy::Hue
        } else if self.luminance {
            Strategy::Luminance
        } else if self.saturation {
            Strategy::Saturation
        } else if self.similarity {
            Strategy::Similarity
        } else if self.temperature {
            Strategy::Temperature
        } else {
            Strategy::Rgb
        };
        Mode::Order(strategy)
    }
}
