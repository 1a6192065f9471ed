//! # Pretty 🎨 Palette
//!
//! Prettypalette sorts, groups, and harmonizes the 256 colors of 1970s
//! terminals. It treats the 216 colors of the 6x6x6 RGB cube embedded in the
//! 8-bit palette as proper colors with hue, saturation, value, luminance, and
//! temperature and prints the palette in an order that makes these properties
//! visible.
//!
//!
//! ## 1. Overview
//!
//! Prettypalette's main abstractions are:
//!
//!   * The [`termco`] module offers the **terminal-specific color formats**
//!     [`AnsiColor`](termco::AnsiColor),
//!     [`EmbeddedRgb`](termco::EmbeddedRgb), and
//!     [`GrayGradient`](termco::GrayGradient), which together cover all 256
//!     indices.
//!   * [`Analysis`](analysis::Analysis) derives the **color properties** of
//!     an embedded RGB color, i.e., its [`Hsv`] coordinates, luminance,
//!     greyscale, [`Temperature`], and similarity group.
//!   * The [`order`] module implements **orderings of the RGB cube**. Each
//!     [`Strategy`](order::Strategy) is a chain of sort keys with directions.
//!   * The [`harmony`] module derives **color harmonies**, from complementary
//!     pairs to RGB gradients, relative to a reference color.
//!   * The [`style`] and [`layout`] modules turn 8-bit indices into
//!     **escape-coded swatches** and lay them out in rows and blocks.
//!   * The [`opt`] module defines the **command line options** of the
//!     `prettypalette` binary.
//!
//!
//! ## 2. Example
//!
//! ```
//! # use prettypalette::layout::write_palette;
//! # use prettypalette::order::{sort, Strategy};
//! let cube = sort(Strategy::Hue);
//! let mut buffer = Vec::new();
//! write_palette(&mut buffer, &cube)?;
//! assert!(buffer.starts_with(b"\x1b[48;5;0m  000  \x1b[0m"));
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Prettypalette supports one feature flag:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

pub mod analysis;
mod core;
pub mod error;
pub mod harmony;
pub mod layout;
pub mod opt;
pub mod order;
pub mod style;
pub mod termco;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{Hsv, Temperature, SIMILARITY_GROUPS};
