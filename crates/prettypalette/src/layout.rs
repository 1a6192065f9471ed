//! Laying out swatches on screen.
//!
//! Palette output comprises a header with the 16 ANSI colors followed by the
//! body with the (ordered) 6x6x6 RGB cube and the grayscale ramp. The body is
//! laid out in rows of six colors, each shown as background swatches first and
//! foreground swatches second, with blocks of six rows separated by an empty
//! line. Harmony output shows one labelled row per harmony.

use std::io::{Result, Write};

use crate::harmony::HarmonySet;
use crate::style::{Layer, Swatch};
use crate::termco::{AnsiColor, Band, GrayGradient};

/// The number of colors per row.
pub const ROW_LENGTH: usize = 6;

/// The number of colors per block.
pub const BLOCK_LENGTH: usize = 36;

/// Write one row: all colors as background swatches, then all colors as
/// foreground swatches, then a newline.
pub fn write_row<W: Write>(out: &mut W, indices: &[u8]) -> Result<()> {
    for layer in Layer::DISPLAY_ORDER {
        for &index in indices {
            write!(out, "{}", Swatch::new(index, layer))?;
        }
    }
    writeln!(out)
}

/// Write the 16 ANSI colors.
///
/// The first two rows show the achromatic colors, i.e., black and white from
/// the standard and then the high-intensity band. The next two rows show the
/// chromatic colors of both bands.
pub fn write_header<W: Write>(out: &mut W) -> Result<()> {
    for achromatic in [true, false] {
        for band in [Band::Standard, Band::HighIntensity] {
            let colors = AnsiColor::all()
                .filter(|c| c.band() == band && c.is_achromatic() == achromatic)
                .map(u8::from)
                .collect::<Vec<_>>();
            write_row(out, &colors)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write the body in rows and blocks.
pub fn write_body<W: Write>(out: &mut W, indices: &[u8]) -> Result<()> {
    for (count, row) in indices.chunks(ROW_LENGTH).enumerate() {
        write_row(out, row)?;

        if ((count + 1) * ROW_LENGTH) % BLOCK_LENGTH == 0 {
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write the entire palette with the cube in the given order.
pub fn write_palette<W: Write>(out: &mut W, cube: &[u8]) -> Result<()> {
    write_header(out)?;

    let mut body = Vec::with_capacity(cube.len() + Band::Grayscale.len());
    body.extend_from_slice(cube);
    body.extend(GrayGradient::all().map(u8::from));
    write_body(out, &body)
}

/// Write the harmonies with at least two colors.
pub fn write_harmonies<W: Write>(out: &mut W, sets: &[HarmonySet]) -> Result<()> {
    for set in sets.iter().filter(|s| !s.is_degenerate()) {
        writeln!(out, "{} ({} colours):", set.harmony(), set.len())?;
        write_row(out, set.colors())?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{write_body, write_harmonies, write_header, write_palette, write_row};
    use crate::harmony::harmonies;
    use crate::order::{sort, Strategy};
    use std::io::Result;

    fn render<F>(f: F) -> Result<String>
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buffer = Vec::new();
        f(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    #[test]
    fn test_row() -> Result<()> {
        let text = render(|out| write_row(out, &[16, 17]))?;
        assert_eq!(
            text,
            concat!(
                "\x1b[48;5;16m  016  \x1b[0m",
                "\x1b[48;5;17m  017  \x1b[0m",
                "\x1b[38;5;16m  |016|\x1b[0m",
                "\x1b[38;5;17m  |017|\x1b[0m",
                "\n"
            )
        );
        Ok(())
    }

    #[test]
    fn test_header() -> Result<()> {
        let text = render(write_header)?;
        let lines = text.split('\n').collect::<Vec<_>>();
        assert_eq!(lines.len(), 7);
        assert_eq!(
            lines[0],
            concat!(
                "\x1b[48;5;0m  000  \x1b[0m",
                "\x1b[48;5;7m  007  \x1b[0m",
                "\x1b[38;5;0m  |000|\x1b[0m",
                "\x1b[38;5;7m  |007|\x1b[0m",
            )
        );
        assert_eq!(lines[1].matches("\x1b[48;5;").count(), 2);
        assert!(lines[1].starts_with("\x1b[48;5;8m  008  \x1b[0m\x1b[48;5;15m  015  "));
        assert_eq!(lines[2], "");
        assert!(lines[3].starts_with("\x1b[48;5;1m  001  "));
        assert_eq!(lines[3].matches("\x1b[48;5;").count(), 6);
        assert!(lines[4].starts_with("\x1b[48;5;9m  009  "));
        assert_eq!(lines[5], "");
        Ok(())
    }

    #[test]
    fn test_body() -> Result<()> {
        let indices = (16..=87).collect::<Vec<u8>>();
        let text = render(|out| write_body(out, &indices))?;
        let lines = text.split('\n').collect::<Vec<_>>();
        // 12 rows, two block separators, and the empty tail.
        assert_eq!(lines.len(), 15);
        assert_eq!(lines[6], "");
        assert_eq!(lines[13], "");
        assert!(lines[7].starts_with("\x1b[48;5;52m  052  "));
        Ok(())
    }

    #[test]
    fn test_palette() -> Result<()> {
        let cube = sort(Strategy::Rgb);
        let text = render(|out| write_palette(out, &cube))?;
        for index in 0..=255_u8 {
            assert!(text.contains(&format!("\x1b[48;5;{}m", index)));
        }
        // 4 + 12 header swatches plus 216 cube and 24 grayscale swatches.
        assert_eq!(text.matches("\x1b[48;5;").count(), 4 + 12 + 240);
        Ok(())
    }

    #[test]
    fn test_harmonies() -> Result<()> {
        let sets = harmonies(196);
        let text = render(|out| write_harmonies(out, &sets))?;
        assert!(text.starts_with("Complementary (2 colours):\n"));
        assert!(text.contains("RGB gradient (6 colours):\n"));

        let degenerate = harmonies(9);
        let text = render(|out| write_harmonies(out, &degenerate))?;
        assert_eq!(text, "");
        Ok(())
    }
}
