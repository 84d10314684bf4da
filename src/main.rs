//! Block Burst headless driver
//!
//! Runs the simulation on a fixed 60 Hz clock, taps on a schedule, and logs
//! what a renderer would upload each time the mesh changes.
//!
//! Usage: `block-burst [settings.json] [seconds]`

use block_burst::renderer::{INDEX_FORMAT, ModelUniform};
use block_burst::{Engine, MeshSnapshot, Settings, TapIntent};

/// Frame period of the demo clock
const FRAME_DT: f32 = 1.0 / 60.0;
/// Tap every this many frames
const TAP_EVERY: u64 = 45;
/// Difficulty tightens by this factor every 10 seconds
const DIFFICULTY_RAMP: f32 = 0.9;

/// Host-side frame timer feeding the engine elapsed and total seconds
struct FrameClock {
    total: f64,
    frames: u64,
}

impl FrameClock {
    fn new() -> Self {
        Self { total: 0.0, frames: 0 }
    }

    fn tick(&mut self, dt: f32) -> (f32, f64) {
        self.total += dt as f64;
        self.frames += 1;
        (dt, self.total)
    }
}

fn log_upload(label: &str, mesh: &MeshSnapshot) {
    log::info!(
        "{}: {} blocks, {} vertex bytes, {} index bytes ({:?}, {:?})",
        label,
        mesh.block_count(),
        mesh.vertex_bytes().len(),
        mesh.index_bytes().len(),
        INDEX_FORMAT,
        mesh.index_mode
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Block Burst (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let seconds: f32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10.0);

    let mut engine = match Engine::new(settings) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            std::process::exit(1);
        }
    };
    log_upload("Initial mesh", engine.mesh());

    let mut clock = FrameClock::new();
    let mut difficulty = engine.difficulty();
    let frames = (seconds / FRAME_DT).round() as u64;

    while clock.frames < frames {
        let (elapsed, total) = clock.tick(FRAME_DT);

        if clock.frames % 600 == 0 {
            difficulty *= DIFFICULTY_RAMP;
            log::info!("Difficulty now {:.3}", difficulty);
        }

        if let Some(mesh) = engine.step(elapsed, total, difficulty) {
            log_upload("Spawn rebuild", &mesh);
        }

        if clock.frames % TAP_EVERY == 0 {
            let mesh = engine.on_tap(TapIntent::Nearest);
            log_upload("Tap rebuild", &mesh);
        }
    }

    let uniforms = ModelUniform::for_store(engine.blocks());
    log::info!(
        "Finished after {:.2}s: {} blocks, {} model uniforms, score {}, rotation {:.3} rad",
        clock.total,
        engine.blocks().len(),
        uniforms.len(),
        engine.score(),
        engine.rotation()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Headless driver is native only
}
