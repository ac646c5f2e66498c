#![doc(
    html_logo_url = "https://repository-images.githubusercontent.com/796446264/7483a099-9280-489e-b1b0-119497d8c2da"
)]

//! # Pretty 🌸 Pretty
//!
//! Prettypretty brings 2020s color science to 1970 terminals.
//!
//! The [`Color`] type implements high-resolution, perceptually uniform color
//! science: conversion between color spaces, interpolation, perceptual
//! contrast, and gamut mapping. The [`termco`] and [`theme`] modules capture
//! the low-resolution color vocabulary that terminals actually speak — ANSI,
//! 8-bit indexed, and 24-bit RGB colors, plus the color theme that gives
//! meaning to the 16 ANSI colors. [`Sampler`] bridges the two: it translates
//! high-resolution colors down to whatever a terminal's fidelity allows, and
//! resolves terminal colors back up to high-resolution ones.
//!
//!
//! ## 1. Overview
//!
//! Prettypretty's main abstractions are:
//!
//!   * [`Color`] implements **high-resolution colors** by combining a
//!     [`ColorSpace`] with three [`Float`] coordinates. Its methods expose much
//!     of prettypretty's functionality, including conversion between color
//!     spaces, interpolation between colors, calculation of perceptual
//!     contrast, as well as gamut testing, clipping, and mapping.
//!   * The [`termco`] module offers a choice of **terminal-specific color
//!     formats** [`AnsiColor`](termco::AnsiColor),
//!     [`EmbeddedRgb`](termco::EmbeddedRgb),
//!     [`GrayGradient`](termco::GrayGradient),
//!     [`EightBitColor`](termco::EightBitColor), [`Rgb`](termco::Rgb), as well
//!     as the wrapper [`Colorant`](termco::Colorant), which also knows how to
//!     render itself as SGR parameters for a given [`Layer`](style::Layer).
//!   * The [`theme`] module defines [`Theme`](theme::Theme), a container for
//!     the 16 ANSI colors plus the default foreground and background, indexed
//!     by [`ThemeEntry`](theme::ThemeEntry), [`AnsiColor`](termco::AnsiColor),
//!     or [`Layer`](style::Layer).
//!   * [`Sampler`] implements **translation between color formats**. To
//!     ensure high quality results, its preferred algorithms leverage the
//!     perceptually uniform Oklab/Oklrab color space. For conversion to the 16
//!     ANSI colors, it also requires the terminal's current color
//!     [`Theme`](theme::Theme).
//!
//!
//! ## 2. Resolving and Adjusting Colors
//!
//! First, determine the terminal's fidelity, typically from its environment,
//! and build a [`Sampler`] from the current color theme.
//!
//! ```
//! # use prettypretty::{OkVersion, Sampler};
//! # use prettypretty::style::Fidelity;
//! # use prettypretty::theme::VGA_COLORS;
//! let fidelity = Fidelity::from_environment(true);
//! let sampler = Sampler::new(OkVersion::Revised, VGA_COLORS.clone());
//! ```
//!
//! Second, use the sampler to downgrade a high-resolution color to whatever
//! the terminal's fidelity supports, and render the result as an SGR
//! escape sequence.
//!
//! ```
//! # use prettypretty::{Color, OkVersion, Sampler};
//! # use prettypretty::style::{Fidelity, Layer};
//! # use prettypretty::theme::VGA_COLORS;
//! # let fidelity = Fidelity::from_environment(true);
//! # let sampler = Sampler::new(OkVersion::Revised, VGA_COLORS.clone());
//! let pink = Color::srgb(1.0, 0.5, 0.5);
//! if let Some(colorant) = sampler.adjust_hires(&pink, fidelity) {
//!     if let Ok(display) = colorant.display(Layer::Foreground) {
//!         println!("\x1b[{}mHello, pink!\x1b[0m", display);
//!     }
//! }
//! ```
//!
//! Third, to resolve terminal colors back to high-resolution colors — for
//! instance, to compute contrast against a theme's background —
//! [`Sampler::to_high_res`] and [`Sampler::try_high_res`] do the inverse
//! conversion.
//!
//!
//! ## 3. Optional Features
//!
//! Prettypretty supports one feature flag:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!
//!
//! ## 4. Acknowledgements
//!
//! Implementing prettypretty's color support was a breeze. In part, that was
//! because I had been toying with different approaches to terminal styling for
//! a while and knew what I wanted to build. In part, that was because I
//! benefitted from [Lea Verou](http://lea.verou.me/)'s and [Chris
//! Lilley](https://svgees.us/)'s work on the [Color.js](https://colorjs.io)
//! library and [CSS Color 4](https://www.w3.org/TR/css-color-4/) specification.
//! Prettypretty directly reuses Color.js' formulae for conversion between color
//! spaces and implements several CSS Color 4 algorithms. Thank you! 🌸
//!
//!

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

mod core;
pub mod error;
mod object;
pub mod style;
pub mod termco;
pub mod theme;
mod trans;
mod util;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{ColorSpace, HueInterpolation};
pub use object::{Color, Interpolator, OkVersion};
pub use trans::Sampler;
