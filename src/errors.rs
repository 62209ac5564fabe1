//! Errors raised at the edges of the renderer.  The attractor pass
//! and the tone mapping themselves cannot fail; only configuration
//! handed in from the outside can be wrong.

use failure::Fail;

/// Everything that can go wrong while setting up a render.
#[derive(Debug, Fail, PartialEq)]
pub enum DeJongError {
    /// The canvas must be at least one pixel in each direction.
    #[fail(display = "Canvas must be non-empty, got {}x{}", width, height)]
    EmptyCanvas {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// Parameters are drawn from [-range, range); that needs a
    /// positive, finite range.
    #[fail(display = "Parameter range must be positive and finite, got {}", _0)]
    BadRange(f32),

    /// The intensity curve needs a clamp strictly between zero and one.
    #[fail(display = "Intensity clamp must lie in (0, 1), got {}", _0)]
    BadClamp(f64),

    /// An explicit parameter list could not be understood.
    #[fail(display = "Could not parse parameters from '{}'", _0)]
    BadParameters(String),
}
