#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Peter de Jong attractor renderer
//!
//! The de Jong attractor is a two-dimensional map driven by four
//! coefficients, a, b, c and d:
//!
//! ```text
//! x' = sin(a * y) - cos(b * x)
//! y' = sin(c * x) - cos(d * y)
//! ```
//!
//! Starting from the origin and iterating the map a million times
//! traces out a cloud of points that, for most choices of the
//! coefficients, settles onto a delicate, folded structure.  Since
//! sine and cosine are bounded, every point lands somewhere inside
//! the square [-2, 2] x [-2, 2].  By mapping each point to the
//! nearest integral pixel and incrementing that pixel by one, we get
//! a histogram of how often the orbit visits each part of the plane.
//!
//! That histogram is then pushed through a steep ease-out curve so
//! that rarely visited pixels stay visible next to the dense
//! "skeleton" of the attractor, and packed into an RGBA buffer.

pub mod accumulator;
pub mod config;
pub mod errors;
pub mod overlay;
pub mod params;
pub mod planes;
pub mod renderer;
pub mod session;

pub use accumulator::{accumulate, run_pass, DensityGrid, PassStats};
pub use config::Config;
pub use errors::DeJongError;
pub use params::Parameters;
pub use renderer::{render, render_with, PixelBuffer, Tone};
pub use session::Session;
