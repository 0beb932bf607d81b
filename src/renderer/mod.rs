//! Render adapter
//!
//! Paints read-only world snapshots onto any [`Surface`]. Nothing here mutates
//! simulation state.

pub mod ascii;
pub mod shapes;
pub mod surface;

pub use ascii::AsciiSurface;
pub use shapes::paint;
pub use surface::{CommandBuffer, DrawCommand, Surface};
