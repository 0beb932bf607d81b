//! Fixed-rate frame scheduling
//!
//! Turns wall-clock time into whole simulation frames. The game advances a
//! fixed distance per frame, so frames must be run at a steady rate no matter
//! how often the host calls in.

use rand::Rng;

use crate::consts::{FRAME_DT, MAX_FRAMES_PER_UPDATE};
use crate::renderer::Surface;
use crate::session::Session;
use crate::sim::TickResult;

/// Longest elapsed time honored per update (seconds); longer stalls are dropped
const MAX_ELAPSED: f32 = 0.1;

/// Accumulator-driven frame pump
#[derive(Debug, Clone)]
pub struct FrameLoop {
    accumulator: f32,
    frame_dt: f32,
    max_frames: u32,
    frames_run: u64,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new(FRAME_DT, MAX_FRAMES_PER_UPDATE)
    }
}

impl FrameLoop {
    pub fn new(frame_dt: f32, max_frames: u32) -> Self {
        Self {
            accumulator: 0.0,
            frame_dt,
            max_frames,
            frames_run: 0,
        }
    }

    /// Total frames run since creation
    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    /// Feed `elapsed` seconds and run every frame that is due. Stops early on
    /// a terminal outcome (the session is Idle again afterwards) and discards
    /// leftover time while the session is not running.
    pub fn update<R: Rng, S: Surface + ?Sized>(
        &mut self,
        session: &mut Session<R>,
        surface: &mut S,
        elapsed: f32,
    ) -> Option<TickResult> {
        if !session.is_running() {
            self.accumulator = 0.0;
            return None;
        }

        self.accumulator += elapsed.clamp(0.0, MAX_ELAPSED);

        let mut frames = 0;
        let mut last = None;
        while self.accumulator >= self.frame_dt && frames < self.max_frames {
            self.accumulator -= self.frame_dt;
            frames += 1;

            let Some(result) = session.frame(surface) else {
                break;
            };
            self.frames_run += 1;
            last = Some(result);
            if result.is_terminal() {
                self.accumulator = 0.0;
                break;
            }
        }

        // Too far behind: drop the backlog rather than spiral
        if frames == self.max_frames && self.accumulator >= self.frame_dt {
            log::debug!("Dropping {:.3}s of frame backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        last
    }
}
