//! Per-frame simulation step
//!
//! Elapsed and total time come from the host's frame timer; this module never
//! reads a clock itself.

use super::state::Engine;
use crate::renderer::MeshSnapshot;
use crate::spin_angle;

/// Advance every block by one frame and run the spawn countdown.
///
/// Returns a rebuilt mesh if blocks were added or removed, else `None`.
pub fn step(
    engine: &mut Engine,
    elapsed: f32,
    total_seconds: f64,
    difficulty: f32,
) -> Option<MeshSnapshot> {
    if difficulty.is_finite() && difficulty > 0.0 {
        engine.difficulty = difficulty;
    } else {
        log::warn!(
            "Ignoring difficulty {}; keeping {}",
            difficulty,
            engine.difficulty
        );
    }

    let elapsed = if elapsed.is_finite() && elapsed >= 0.0 {
        elapsed
    } else {
        log::warn!("Ignoring elapsed time {}; treating as 0", elapsed);
        0.0
    };

    // One angle for every block this frame
    let radians = spin_angle(total_seconds, engine.settings.degrees_per_second);
    engine.rotation = radians;

    for block in engine.store.iter_mut() {
        block.advance(elapsed, radians);
    }

    let mut changed = false;

    if let Some(limit) = engine.settings.despawn_z {
        let removed = engine.store.retain(|b| b.position.z >= limit);
        if removed > 0 {
            log::debug!("Despawned {} blocks past z={}", removed, limit);
            changed = true;
        }
    }

    engine.spawn_countdown -= elapsed;
    if engine.spawn_countdown <= 0.0 {
        engine.spawn_random();
        engine.spawn_countdown = engine.settings.effective_spawn_interval(engine.difficulty);
        changed = true;
    }

    if changed {
        Some(engine.rebuild())
    } else {
        None
    }
}
