//! Per-frame simulation tick
//!
//! One call advances the world by exactly one frame, in a fixed order:
//! player motion, enemy motion, then interactions (collect, enemy contact,
//! win check). Enemy contact is checked before the win check, so a frame that
//! eats the last dot while a ghost is touching the player is a loss.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::circles_overlap;
use super::state::World;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    /// Player-facing terminal message
    pub fn message(self, final_score: u32) -> String {
        match self {
            Outcome::Win => format!("You Win! All dots collected! Final Score: {final_score}"),
            Outcome::Lose => format!("Game Over! Ghost got you! Final Score: {final_score}"),
        }
    }
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickResult {
    Continue,
    Win,
    Lose,
}

impl TickResult {
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            TickResult::Continue => None,
            TickResult::Win => Some(Outcome::Win),
            TickResult::Lose => Some(Outcome::Lose),
        }
    }

    pub fn is_terminal(self) -> bool {
        self != TickResult::Continue
    }
}

/// Advance the world by one frame
pub fn tick(world: &mut World) -> TickResult {
    move_player(world);
    move_enemies(world);
    resolve_interactions(world)
}

/// Step along the facing direction, then keep the whole circle on the canvas
fn move_player(world: &mut World) {
    let player = &mut world.player;
    player.pos += player.direction.unit() * player.speed;

    let r = player.radius;
    let max = world.bounds - Vec2::splat(r);
    player.pos = player.pos.clamp(Vec2::splat(r), max);
}

/// Greedy per-axis chase. Enemies are never clamped to the canvas.
fn move_enemies(world: &mut World) {
    let target = world.player.pos;
    for enemy in &mut world.enemies {
        enemy.pos.x = chase_axis(enemy.pos.x, target.x, enemy.speed);
        enemy.pos.y = chase_axis(enemy.pos.y, target.y, enemy.speed);
    }
}

/// Step toward `target`, then step back if now past it. The second check sees
/// the updated coordinate, so an enemy within one step below the target holds
/// still while one within a step above it crosses over.
fn chase_axis(mut pos: f32, target: f32, speed: f32) -> f32 {
    if pos < target {
        pos += speed;
    }
    if pos > target {
        pos -= speed;
    }
    pos
}

fn resolve_interactions(world: &mut World) -> TickResult {
    let player_pos = world.player.pos;
    let player_radius = world.player.radius;

    for dot in world.collectibles.iter_mut().filter(|c| !c.collected) {
        if circles_overlap(player_pos, player_radius, dot.pos, dot.radius) {
            dot.collected = true;
            world.score += world.reward;
        }
    }

    let caught = world
        .enemies
        .iter()
        .any(|e| circles_overlap(player_pos, player_radius, e.pos, e.radius));
    if caught {
        return TickResult::Lose;
    }

    if world.remaining_collectibles() == 0 {
        return TickResult::Win;
    }

    TickResult::Continue
}
