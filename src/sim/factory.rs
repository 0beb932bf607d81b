//! Entity factory
//!
//! Builds a brand new [`World`] for a session. The random source is injected so
//! tests can reproduce exact layouts from a seed.

use glam::Vec2;
use rand::Rng;

use super::state::{Collectible, Enemy, Player, World};
use crate::ENEMY_PALETTE;
use crate::settings::{ConfigError, GameConfig};

/// Create a fresh world: player at the configured start, collectibles and
/// enemies scattered uniformly inside their margins, score 0, not running.
pub fn initialize<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<World, ConfigError> {
    config.validate()?;
    Ok(build(config, rng))
}

/// Build a world from a config that has already passed
/// [`GameConfig::validate`]; an unvalidated config may panic on empty
/// placement ranges.
pub(crate) fn build<R: Rng>(config: &GameConfig, rng: &mut R) -> World {
    let bounds = Vec2::new(config.width, config.height);

    let collectibles = (0..config.collectible_count)
        .map(|_| Collectible {
            pos: random_inset(rng, bounds, config.collectible_margin),
            radius: config.collectible_radius,
            collected: false,
        })
        .collect();

    let enemies = ENEMY_PALETTE
        .iter()
        .take(config.enemy_count)
        .map(|&color| Enemy {
            pos: random_inset(rng, bounds, config.enemy_margin),
            radius: config.enemy_radius,
            speed: config.enemy_speed,
            color,
        })
        .collect();

    let (start_x, start_y) = config.player_start;
    let world = World {
        bounds,
        player: Player::new(
            Vec2::new(start_x, start_y),
            config.player_radius,
            config.player_speed,
        ),
        collectibles,
        enemies,
        reward: config.collectible_reward,
        score: 0,
        running: false,
    };

    log::debug!(
        "World initialized: {}x{}, {} collectibles, enemies [{}]",
        bounds.x,
        bounds.y,
        world.collectibles.len(),
        world
            .enemies
            .iter()
            .map(|e| e.color.to_hex())
            .collect::<Vec<_>>()
            .join(", ")
    );

    world
}

/// Uniform point in `[margin, dim - margin)` on both axes
fn random_inset<R: Rng>(rng: &mut R, bounds: Vec2, margin: f32) -> Vec2 {
    Vec2::new(
        rng.random_range(margin..bounds.x - margin),
        rng.random_range(margin..bounds.y - margin),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_default_layout() {
        let mut rng = Pcg32::seed_from_u64(12345);
        let world = initialize(&GameConfig::default(), &mut rng).unwrap();

        assert_eq!(world.player.pos, Vec2::new(PLAYER_START_X, PLAYER_START_Y));
        assert_eq!(world.collectibles.len(), COLLECTIBLE_COUNT);
        assert_eq!(world.enemies.len(), ENEMY_COUNT);
        assert_eq!(world.score, 0);
        assert!(!world.running);

        for dot in &world.collectibles {
            assert!(!dot.collected);
            assert!(dot.pos.x >= COLLECTIBLE_MARGIN && dot.pos.x < CANVAS_WIDTH - COLLECTIBLE_MARGIN);
            assert!(dot.pos.y >= COLLECTIBLE_MARGIN && dot.pos.y < CANVAS_HEIGHT - COLLECTIBLE_MARGIN);
        }
        for enemy in &world.enemies {
            assert!(enemy.pos.x >= ENEMY_MARGIN && enemy.pos.x < CANVAS_WIDTH - ENEMY_MARGIN);
            assert!(enemy.pos.y >= ENEMY_MARGIN && enemy.pos.y < CANVAS_HEIGHT - ENEMY_MARGIN);
        }
    }

    #[test]
    fn test_enemy_colors_distinct() {
        let mut rng = Pcg32::seed_from_u64(1);
        let world = initialize(&GameConfig::default(), &mut rng).unwrap();
        let colors: Vec<_> = world.enemies.iter().map(|e| e.color).collect();
        assert_eq!(colors, ENEMY_PALETTE.to_vec());
    }

    #[test]
    fn test_rejects_oversized_enemy_count() {
        let mut rng = Pcg32::seed_from_u64(1);
        let config = GameConfig {
            enemy_count: 4,
            ..Default::default()
        };
        assert!(matches!(
            initialize(&config, &mut rng),
            Err(ConfigError::TooManyEnemies { .. })
        ));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let config = GameConfig::default();
        let a = initialize(&config, &mut Pcg32::seed_from_u64(99)).unwrap();
        let b = initialize(&config, &mut Pcg32::seed_from_u64(99)).unwrap();
        for (x, y) in a.collectibles.iter().zip(&b.collectibles) {
            assert_eq!(x.pos, y.pos);
        }
        for (x, y) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(x.pos, y.pos);
        }
    }
}
