//! Drawing surface abstraction
//!
//! The render adapter only ever talks to a [`Surface`]. Real backends (canvas,
//! GPU, terminal) implement it; [`CommandBuffer`] records calls for tests and
//! headless runs.

use glam::Vec2;

use crate::Color;

/// Minimal 2D fill API, canvas coordinates (y grows downward, angles clockwise)
pub trait Surface {
    /// Wipe the whole surface
    fn clear(&mut self, size: Vec2);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Pie slice from `start` to `end` (radians), closed through the center
    fn fill_wedge(&mut self, center: Vec2, radius: f32, start: f32, end: f32, color: Color);

    /// Closed polygon
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
}

/// A recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        size: Vec2,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Wedge {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        color: Color,
    },
    Polygon {
        points: Vec<Vec2>,
        color: Color,
    },
}

/// Surface that just records what was drawn
#[derive(Debug, Default, Clone)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands since the most recent clear
    pub fn current_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear { .. }))
            .unwrap_or(0);
        &self.commands[start..]
    }

    pub fn circles_of(&self, color: Color) -> usize {
        self.current_frame()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { color: fill, .. } if *fill == color))
            .count()
    }
}

impl Surface for CommandBuffer {
    fn clear(&mut self, size: Vec2) {
        self.commands.push(DrawCommand::Clear { size });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_wedge(&mut self, center: Vec2, radius: f32, start: f32, end: f32, color: Color) {
        self.commands.push(DrawCommand::Wedge {
            center,
            radius,
            start,
            end,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }
}
