//! Shape generation and painting for world entities

use glam::Vec2;
use std::f32::consts::PI;

use super::surface::Surface;
use crate::Color;
use crate::sim::{Enemy, Player, World};

/// Segments used to approximate the ghost's rounded head
const DOME_SEGMENTS: u32 = 16;
/// Eye offsets from the ghost center and their radii
const EYE_OFFSET: Vec2 = Vec2::new(4.0, -2.0);
const EYE_RADIUS: f32 = 3.0;
const PUPIL_RADIUS: f32 = 1.0;

/// Paint a full frame: clear, dots, ghosts, then the player on top
pub fn paint<S: Surface + ?Sized>(world: &World, surface: &mut S) {
    surface.clear(world.bounds);

    for dot in world.collectibles.iter().filter(|c| !c.collected) {
        surface.fill_circle(dot.pos, dot.radius, Color::WHITE);
    }

    for enemy in &world.enemies {
        paint_enemy(enemy, surface);
    }

    paint_player(&world.player, surface);
}

/// Mouth opening in world angles: `(start, end)` of the filled slice
pub fn player_wedge_angles(player: &Player) -> (f32, f32) {
    let facing = player.direction.angle();
    let mouth = player.mouth_angle * PI;
    (facing + mouth, facing + (2.0 * PI - mouth))
}

fn paint_player<S: Surface + ?Sized>(player: &Player, surface: &mut S) {
    let (start, end) = player_wedge_angles(player);
    surface.fill_wedge(player.pos, player.radius, start, end, Color::YELLOW);
}

fn paint_enemy<S: Surface + ?Sized>(enemy: &Enemy, surface: &mut S) {
    surface.fill_polygon(&ghost_outline(enemy.pos, enemy.radius, DOME_SEGMENTS), enemy.color);

    let left = enemy.pos + Vec2::new(-EYE_OFFSET.x, EYE_OFFSET.y);
    let right = enemy.pos + EYE_OFFSET;
    surface.fill_circle(left, EYE_RADIUS, Color::WHITE);
    surface.fill_circle(right, EYE_RADIUS, Color::WHITE);
    surface.fill_circle(left, PUPIL_RADIUS, Color::BLACK);
    surface.fill_circle(right, PUPIL_RADIUS, Color::BLACK);
}

/// Ghost body: upper half-circle, then straight down to a flat skirt
pub fn ghost_outline(center: Vec2, radius: f32, segments: u32) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(segments as usize + 3);

    // From the left (π) over the top (3π/2 in y-down space) to the right (2π)
    for i in 0..=segments {
        let theta = PI + (i as f32 / segments as f32) * PI;
        points.push(center + Vec2::new(radius * theta.cos(), radius * theta.sin()));
    }
    points.push(center + Vec2::new(radius, radius));
    points.push(center + Vec2::new(-radius, radius));

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ENEMY_PALETTE;
    use crate::renderer::surface::{CommandBuffer, DrawCommand};
    use crate::settings::GameConfig;
    use crate::sim::{Direction, initialize};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn world() -> World {
        let mut rng = Pcg32::seed_from_u64(5);
        initialize(&GameConfig::default(), &mut rng).unwrap()
    }

    #[test]
    fn test_paint_order_and_counts() {
        let mut world = world();
        world.collectibles[0].collected = true;
        world.collectibles[1].collected = true;

        let mut buffer = CommandBuffer::new();
        paint(&world, &mut buffer);

        assert!(matches!(buffer.commands[0], DrawCommand::Clear { .. }));
        assert!(matches!(
            buffer.commands.last(),
            Some(DrawCommand::Wedge { color: Color::YELLOW, .. })
        ));

        // 48 dots, plus two eyes per ghost
        assert_eq!(buffer.circles_of(Color::WHITE), 48 + 2 * 3);
        assert_eq!(buffer.circles_of(Color::BLACK), 2 * 3);

        let bodies: Vec<Color> = buffer
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Polygon { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(bodies, ENEMY_PALETTE.to_vec());
    }

    #[test]
    fn test_wedge_faces_direction() {
        let mut player = world().player;
        player.mouth_angle = 0.25;

        let (start, end) = player_wedge_angles(&player);
        assert!((start - 0.25 * PI).abs() < 1e-5);
        assert!((end - 1.75 * PI).abs() < 1e-5);

        player.direction = Direction::Left;
        let (start, end) = player_wedge_angles(&player);
        assert!((start - 1.25 * PI).abs() < 1e-5);
        assert!((end - 2.75 * PI).abs() < 1e-5);
    }

    #[test]
    fn test_ghost_outline_shape() {
        let center = Vec2::new(100.0, 100.0);
        let points = ghost_outline(center, 12.0, 8);
        assert_eq!(points.len(), 8 + 3);
        // Starts at the left edge, peaks above the center, ends on the skirt
        assert!((points[0] - Vec2::new(88.0, 100.0)).length() < 1e-4);
        assert!((points[4] - Vec2::new(100.0, 88.0)).length() < 1e-4);
        assert_eq!(points[9], Vec2::new(112.0, 112.0));
        assert_eq!(points[10], Vec2::new(88.0, 112.0));
    }
}
