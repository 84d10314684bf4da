//! Tap handling: remove the targeted block and split it in two
//!
//! Screen-to-world picking is the host's job; a tap arrives here already
//! resolved to an intent.

use glam::Vec3;

use super::state::Engine;
use crate::renderer::MeshSnapshot;

/// What the host resolved a tap to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TapIntent {
    /// The block closest to the viewer (minimum z)
    #[default]
    Nearest,
    /// A specific block by store index
    Block(usize),
}

/// Apply a tap. An empty store or an out-of-range index is a no-op that
/// returns the current mesh.
pub fn on_tap(engine: &mut Engine, intent: TapIntent) -> MeshSnapshot {
    let target = match intent {
        TapIntent::Nearest => engine.store.nearest(),
        TapIntent::Block(index) => Some(index),
    };

    let Some(block) = target.and_then(|index| engine.store.remove(index)) else {
        log::debug!("Tap {:?} hit nothing", intent);
        return engine.mesh.clone();
    };

    let outcome = engine.rule.resolve(block.class);
    if outcome.split {
        let offset = Vec3::new(engine.settings.split_offset, 0.0, 0.0);
        engine.spawn(block.position - offset, block.class, block.size);
        engine.spawn(block.position + offset, block.class, block.size);
    }
    engine.score = engine.score.saturating_add(outcome.score_delta);

    log::debug!(
        "Tapped {:?} block at {} (split={}, score {:+} -> {})",
        block.class,
        block.position,
        outcome.split,
        outcome.score_delta,
        engine.score
    );

    engine.rebuild()
}
