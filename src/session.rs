//! Session controller
//!
//! Owns the world for a run of play and drives it through
//! Idle -> Running -> Ended -> Idle. Terminal outcomes are reported to a
//! [`NotificationSink`] and the world is rebuilt right away, so a new game can
//! be started immediately.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::renderer::{Surface, paint};
use crate::settings::{ConfigError, GameConfig};
use crate::sim::{Direction, Outcome, TickResult, World, factory, tick};

/// Receives the score whenever it changes (including the reset to 0)
pub trait ScoreSink {
    fn score_changed(&mut self, score: u32);
}

/// Receives the terminal outcome of a session
pub trait NotificationSink {
    fn notify(&mut self, outcome: Outcome, final_score: u32);
}

impl<F: FnMut(u32)> ScoreSink for F {
    fn score_changed(&mut self, score: u32) {
        self(score)
    }
}

impl<F: FnMut(Outcome, u32)> NotificationSink for F {
    fn notify(&mut self, outcome: Outcome, final_score: u32) {
        self(outcome, final_score)
    }
}

/// Sink that reports through the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ScoreSink for LogSink {
    fn score_changed(&mut self, score: u32) {
        log::debug!("Score: {}", score);
    }
}

impl NotificationSink for LogSink {
    fn notify(&mut self, outcome: Outcome, final_score: u32) {
        log::info!("{}", outcome.message(final_score));
    }
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Fresh world, waiting for `start`
    Idle,
    /// Frames are being ticked
    Running,
    /// A terminal outcome was reached. Only held while the outcome is being
    /// reported: `frame` resets to `Idle` before it returns, so callers never
    /// observe this state.
    Ended,
}

pub struct Session<R: Rng = Pcg32> {
    config: GameConfig,
    rng: R,
    world: World,
    state: SessionState,
    score_sink: Box<dyn ScoreSink>,
    notification_sink: Box<dyn NotificationSink>,
    games_played: u32,
}

impl<R: Rng> Session<R> {
    /// Validate the config and build the first world
    pub fn new(
        config: GameConfig,
        mut rng: R,
        score_sink: impl ScoreSink + 'static,
        notification_sink: impl NotificationSink + 'static,
    ) -> Result<Self, ConfigError> {
        let world = factory::initialize(&config, &mut rng)?;
        let mut session = Self {
            config,
            rng,
            world,
            state: SessionState::Idle,
            score_sink: Box::new(score_sink),
            notification_sink: Box::new(notification_sink),
            games_played: 0,
        };
        session.score_sink.score_changed(0);
        Ok(session)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Read-only snapshot for rendering and inspection
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn score(&self) -> u32 {
        self.world.score
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Number of sessions that reached a terminal outcome
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Begin ticking. No-op while already running.
    pub fn start(&mut self) {
        if self.state == SessionState::Running {
            log::debug!("start ignored: already running");
            return;
        }
        self.state = SessionState::Running;
        self.world.running = true;
        log::info!("Session started");
    }

    /// Abandon the current world and go back to Idle with a fresh one
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
        // Config was validated on construction / replacement
        self.world = factory::build(&self.config, &mut self.rng);
        self.score_sink.score_changed(0);
        log::info!("Session reset");
    }

    /// Swap in a new config (validated first) and reset
    pub fn set_config(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.reset();
        Ok(())
    }

    /// Apply a key press; returns false for keys that don't steer
    pub fn handle_key(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(direction) => {
                self.steer(direction);
                true
            }
            None => false,
        }
    }

    /// Change facing; takes effect on the next tick
    pub fn steer(&mut self, direction: Direction) {
        if self.world.player.direction != direction {
            log::trace!("Facing {}", direction.as_str());
        }
        self.world.player.direction = direction;
    }

    /// Run one scheduled frame: animate, paint, tick, and settle any terminal
    /// outcome. Returns `None` (and does nothing) unless the session is running.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<TickResult> {
        if self.state != SessionState::Running {
            return None;
        }

        self.world.player.animate_mouth();
        paint(&self.world, surface);

        let score_before = self.world.score;
        let result = tick(&mut self.world);
        if self.world.score != score_before {
            self.score_sink.score_changed(self.world.score);
        }
        log::trace!("Frame: {:?}, score {}", result, self.world.score);

        if let Some(outcome) = result.outcome() {
            self.finish(outcome);
            paint(&self.world, surface);
        }

        Some(result)
    }

    fn finish(&mut self, outcome: Outcome) {
        self.state = SessionState::Ended;
        self.world.running = false;
        self.games_played += 1;

        let final_score = self.world.score;
        log::info!("Session ended: {:?} with score {}", outcome, final_score);
        self.notification_sink.notify(outcome, final_score);

        self.reset();
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
