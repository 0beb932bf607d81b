//! Demo autopilot
//!
//! Plays unattended for the attract/demo mode: heads for the nearest dot,
//! closing the larger gap first. It ignores the ghosts entirely.

use super::state::{Direction, World};

/// Pick a facing for this frame, or `None` when nothing is left to eat
pub fn autopilot(world: &World) -> Option<Direction> {
    let player = &world.player;

    let target = world
        .collectibles
        .iter()
        .filter(|c| !c.collected)
        .min_by(|a, b| {
            let dist_a = a.pos.distance_squared(player.pos);
            let dist_b = b.pos.distance_squared(player.pos);
            dist_a
                .partial_cmp(&dist_b)
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;

    let delta = target.pos - player.pos;
    let direction = if delta.x.abs() >= delta.y.abs() {
        if delta.x >= 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if delta.y >= 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };

    Some(direction)
}
