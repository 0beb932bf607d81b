//! Chomp - a dot-collecting arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (world state, entity factory, update engine)
//! - `renderer`: Render adapter painting world snapshots onto a drawing surface
//! - `session`: Session controller (start/reset, terminal outcomes, sinks)
//! - `input`: Key identifiers to facing direction
//! - `driver`: Fixed-rate frame scheduling
//! - `settings`: Data-driven game configuration

pub mod driver;
pub mod input;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::{NotificationSink, ScoreSink, Session, SessionState};
pub use settings::{ConfigError, GameConfig};

use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Nominal frame rate; one simulation tick per frame
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Maximum frames run per scheduler update to prevent spiral of death
    pub const MAX_FRAMES_PER_UPDATE: u32 = 8;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 400.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 50.0;
    pub const PLAYER_START_Y: f32 = 50.0;
    pub const PLAYER_RADIUS: f32 = 15.0;
    pub const PLAYER_SPEED: f32 = 3.0;

    /// Mouth animation (fraction of π)
    pub const MOUTH_START_ANGLE: f32 = 0.2;
    pub const MOUTH_SPEED: f32 = 0.1;
    pub const MOUTH_MIN: f32 = 0.2;
    pub const MOUTH_MAX: f32 = 0.8;

    /// Collectible defaults
    pub const COLLECTIBLE_COUNT: usize = 50;
    pub const COLLECTIBLE_RADIUS: f32 = 3.0;
    pub const COLLECTIBLE_MARGIN: f32 = 10.0;
    pub const COLLECTIBLE_REWARD: u32 = 10;

    /// Enemy defaults
    pub const ENEMY_COUNT: usize = 3;
    pub const ENEMY_RADIUS: f32 = 12.0;
    pub const ENEMY_SPEED: f32 = 1.5;
    pub const ENEMY_MARGIN: f32 = 15.0;
}

/// RGB color used to tag enemies and fill shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const YELLOW: Color = Color::rgb(0xFF, 0xFF, 0x00);

    /// CSS-style hex string, e.g. `#FFB8FF`
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Enemy identity colors, one per enemy: red, cyan, pink
pub const ENEMY_PALETTE: [Color; 3] = [
    Color::rgb(0xFF, 0x00, 0x00),
    Color::rgb(0x00, 0xFF, 0xFF),
    Color::rgb(0xFF, 0xB8, 0xFF),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        assert_eq!(ENEMY_PALETTE[0].to_hex(), "#FF0000");
        assert_eq!(ENEMY_PALETTE[1].to_hex(), "#00FFFF");
        assert_eq!(ENEMY_PALETTE[2].to_hex(), "#FFB8FF");
    }
}
