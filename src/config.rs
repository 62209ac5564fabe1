//! Startup constants for a session.

use crate::errors::DeJongError;
use crate::renderer::Tone;

/// Canvas width of the reference picture.
pub const WIDTH: usize = 640;
/// Canvas height of the reference picture.
pub const HEIGHT: usize = 640;
/// Samples drawn per pass.
pub const ITERATIONS: usize = 1_000_000;
/// Parameters are drawn from [-RANGE, RANGE).
pub const RANGE: f32 = 3.0;

/// Everything a session needs to know up front.  The grid and the
/// pixel buffer are both sized from width and height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    /// Canvas width in pixels.
    pub width: usize,
    /// Canvas height in pixels.
    pub height: usize,
    /// Samples drawn per pass.
    pub iterations: usize,
    /// Half-width of the interval parameters are drawn from.
    pub range: f32,
    /// The intensity curve and hue.
    pub tone: Tone,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: WIDTH,
            height: HEIGHT,
            iterations: ITERATIONS,
            range: RANGE,
            tone: Tone::default(),
        }
    }
}

impl Config {
    /// Check the values a session cannot work with.
    pub fn validate(&self) -> Result<(), DeJongError> {
        if self.width == 0 || self.height == 0 {
            return Err(DeJongError::EmptyCanvas {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.range.is_finite() && self.range > 0.0) {
            return Err(DeJongError::BadRange(self.range));
        }
        if !(self.tone.clamp > 0.0 && self.tone.clamp < 1.0) {
            return Err(DeJongError::BadClamp(self.tone.clamp));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_reference_picture() {
        let config = Config::default();
        assert_eq!((config.width, config.height), (640, 640));
        assert_eq!(config.iterations, 1_000_000);
        assert_eq!(config.tone.exponent, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_canvas_is_rejected() {
        let config = Config {
            height: 0,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(DeJongError::EmptyCanvas {
                width: 640,
                height: 0
            })
        );
    }

    #[test]
    fn bad_range_and_clamp_are_rejected() {
        let config = Config {
            range: 0.0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(DeJongError::BadRange(0.0)));

        let mut config = Config::default();
        config.tone.clamp = 1.0;
        assert_eq!(config.validate(), Err(DeJongError::BadClamp(1.0)));
    }
}
