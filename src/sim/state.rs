//! World state and core simulation types
//!
//! Everything one session needs lives in [`World`]; it is rebuilt wholesale by
//! the entity factory and mutated only by the update engine and input.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Color;
use crate::consts::*;

/// Player facing direction (axis-aligned only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// Unit step in canvas coordinates (y grows downward)
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// Rotation (radians) applied when drawing the player
    pub fn angle(self) -> f32 {
        use std::f32::consts::{FRAC_PI_2, PI};
        match self {
            Direction::Right => 0.0,
            Direction::Down => FRAC_PI_2,
            Direction::Left => PI,
            Direction::Up => -FRAC_PI_2,
        }
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub direction: Direction,
    /// Half mouth opening as a fraction of π (presentation only)
    pub mouth_angle: f32,
    /// Per-frame change of `mouth_angle`
    pub mouth_speed: f32,
}

impl Player {
    pub fn new(pos: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            radius,
            speed,
            direction: Direction::default(),
            mouth_angle: MOUTH_START_ANGLE,
            mouth_speed: MOUTH_SPEED,
        }
    }

    /// Advance the chomp animation one frame, bouncing between the bounds
    pub fn animate_mouth(&mut self) {
        self.mouth_angle += self.mouth_speed;
        // Only reverse when heading further out, so f32 drift can't pin it at a bound
        let past_max = self.mouth_angle > MOUTH_MAX && self.mouth_speed > 0.0;
        let past_min = self.mouth_angle < MOUTH_MIN && self.mouth_speed < 0.0;
        if past_max || past_min {
            self.mouth_speed = -self.mouth_speed;
        }
    }
}

/// A dot the player can eat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
    pub radius: f32,
    pub collected: bool,
}

/// A ghost chasing the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub color: Color,
}

/// Complete world state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Canvas bounds (width, height)
    pub bounds: Vec2,
    pub player: Player,
    /// Fixed for the session; entries are only ever marked, never removed
    pub collectibles: Vec<Collectible>,
    pub enemies: Vec<Enemy>,
    /// Points awarded per collectible
    pub reward: u32,
    pub score: u32,
    /// True while the frame loop is active
    pub running: bool,
}

impl World {
    /// Number of collectibles not yet eaten
    pub fn remaining_collectibles(&self) -> usize {
        self.collectibles.iter().filter(|c| !c.collected).count()
    }

    /// JSON snapshot for debugging / logging
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
