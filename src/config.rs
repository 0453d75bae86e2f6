//! Command-line configuration for the frontend.
//!
//! Only presentation settings live here. Physical constants are fixed in
//! [`crate::flight`].

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::ConfigError;

#[derive(Parser, Debug, Clone, PartialEq)]
#[clap(name = "glider", version, about = "Steer a glider with the mouse")]
pub struct Config {
    /// Window width in pixels
    #[clap(long, default_value_t = 960)]
    pub width: u32,

    /// Window height in pixels
    #[clap(long, default_value_t = 640)]
    pub height: u32,

    /// Frames per second; every frame advances the simulation by one step
    #[clap(long, default_value_t = 60)]
    pub fps: u32,

    /// Number of clouds scattered over the background tile
    #[clap(long, default_value_t = 40)]
    pub clouds: usize,

    /// Seed for the cloud layout; random when omitted
    #[clap(long)]
    pub seed: Option<u64>,

    /// TrueType font for the speed/position readout; no readout when omitted
    #[clap(long)]
    pub font: Option<PathBuf>,

    #[clap(long, default_value_t = 18)]
    pub font_size: u16,

    /// Start with the force vectors shown (toggle with Space)
    #[clap(long)]
    pub debug: bool,

    /// Log filter used when RUST_LOG is unset
    #[clap(long, default_value = "info")]
    pub log: String,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidWindowSize { width: self.width, height: self.height });
        }
        if self.fps == 0 {
            return Err(ConfigError::InvalidFrameRate);
        }
        if self.font_size == 0 {
            return Err(ConfigError::InvalidFontSize);
        }
        Ok(())
    }

    pub fn frame_period(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}
