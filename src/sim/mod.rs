//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per frame, fixed step order
//! - Injected RNG only (used by the factory, never by the tick)
//! - No rendering or platform dependencies

pub mod collision;
pub mod factory;
pub mod pilot;
pub mod state;
pub mod tick;

pub use collision::circles_overlap;
pub use factory::initialize;
pub use pilot::autopilot;
pub use state::{Collectible, Direction, Enemy, Player, World};
pub use tick::{Outcome, TickResult, tick};
