//! A session owns everything one window (or one headless render)
//! needs: the configuration, the current parameters, the density
//! grid and the finished pixel buffer.

use log::info;
use rand::Rng;

use crate::accumulator::{accumulate, DensityGrid, PassStats};
use crate::config::Config;
use crate::errors::DeJongError;
use crate::params::Parameters;
use crate::renderer::{render_with, PixelBuffer};

/// The first line of the debug overlay.
pub const INSTRUCTIONS: &str = "Press Enter to generate a new image";

/// Explicit owned state for the attractor.  Nothing here is shared;
/// a regeneration borrows the session mutably, so nobody can look at
/// the buffer while it is being rebuilt.
#[derive(Debug)]
pub struct Session {
    config: Config,
    params: Parameters,
    grid: DensityGrid,
    buffer: PixelBuffer,
    stats: PassStats,
}

impl Session {
    /// Validate the configuration, draw a first set of parameters
    /// and render them.
    pub fn new<R: Rng + ?Sized>(config: Config, rng: &mut R) -> Result<Self, DeJongError> {
        config.validate()?;
        let params = Parameters::random(rng, config.range);
        Ok(Session::build(config, params))
    }

    /// A session rendering a fixed set of parameters.
    pub fn with_parameters(config: Config, params: Parameters) -> Result<Self, DeJongError> {
        config.validate()?;
        Ok(Session::build(config, params))
    }

    fn build(config: Config, params: Parameters) -> Self {
        let mut session = Session {
            config,
            params,
            grid: DensityGrid::new(config.width, config.height),
            buffer: PixelBuffer::new(config.width, config.height),
            stats: PassStats::default(),
        };
        session.pass();
        session
    }

    /// Draw four new parameters and rebuild the picture from scratch.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.params = Parameters::random(rng, self.config.range);
        self.pass();
    }

    fn pass(&mut self) {
        let Config {
            width,
            height,
            iterations,
            tone,
            ..
        } = self.config;
        self.grid.reset();
        self.stats = accumulate(&mut self.grid, &self.params, iterations);
        self.buffer = render_with(&tone, &self.grid, iterations, width, height);
        info!(
            "rendered {} ({} of {} samples on the canvas)",
            self.params, self.stats.plotted, iterations
        );
    }

    /// The configuration this session was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The parameters behind the current picture.
    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    /// The histogram behind the current picture.
    pub fn grid(&self) -> &DensityGrid {
        &self.grid
    }

    /// The current picture.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Sample statistics of the last pass.
    pub fn stats(&self) -> PassStats {
        self.stats
    }

    /// The two lines of debug text shown over the picture.
    pub fn overlay_lines(&self) -> [String; 2] {
        [INSTRUCTIONS.to_string(), self.params.to_string()]
    }
}
