//! Chomp entry point
//!
//! Native builds run a headless attract-mode demo: the autopilot plays a few
//! games while the log shows each outcome and the fresh board that follows.

#[cfg(not(target_arch = "wasm32"))]
use chomp::{
    ConfigError, GameConfig, Session,
    consts::FRAME_DT,
    driver::FrameLoop,
    renderer::AsciiSurface,
    session::LogSink,
    sim::autopilot,
};

/// Frames simulated before the demo gives up (one minute per game at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_FRAMES: u32 = 3 * 60 * 60;
#[cfg(not(target_arch = "wasm32"))]
const DEMO_GAMES: u32 = 3;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Chomp (native) starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), ConfigError> {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("Game initialized with seed: {}", seed);

    let mut session = Session::new(config, Pcg32::seed_from_u64(seed), LogSink, LogSink)?;
    let mut surface = AsciiSurface::new(40, 20);
    let mut frames = FrameLoop::default();

    session.start();
    for _ in 0..DEMO_FRAMES {
        if let Some(direction) = autopilot(session.world()) {
            session.steer(direction);
        }

        let Some(result) = frames.update(&mut session, &mut surface, FRAME_DT) else {
            continue;
        };
        if result.is_terminal() {
            log::info!("Fresh board:\n{}", surface.to_text());
            if session.games_played() >= DEMO_GAMES {
                break;
            }
            session.start();
        }
    }

    log::info!(
        "Demo finished: {} games over {} frames",
        session.games_played(),
        frames.frames_run()
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive `Session` directly; there is no native loop to run
}
