//! Engine state: the block store plus everything a step or tap reads or writes
//!
//! The engine owns the store. Steps and taps borrow it mutably for one call
//! and rebuild the mesh before returning whenever the block set changed, so
//! index offsets handed out are never stale.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::block::{Block, BlockClass};
use super::rules::{TapRule, rule_from_settings};
use super::store::BlockStore;
use super::tap::{TapIntent, on_tap};
use super::tick::step;
use crate::renderer::{MeshSnapshot, build_mesh};
use crate::settings::{ConfigError, Settings};

#[derive(Debug)]
pub struct Engine {
    pub(crate) settings: Settings,
    pub(crate) store: BlockStore,
    /// Seeded RNG for spawn positions and classes
    pub(crate) rng: Pcg32,
    pub(crate) rule: Box<dyn TapRule>,
    /// Shared spin angle from the last step
    pub(crate) rotation: f32,
    /// Seconds until the next periodic spawn
    pub(crate) spawn_countdown: f32,
    /// Difficulty from the last step (drives new block velocity)
    pub(crate) difficulty: f32,
    pub(crate) score: i64,
    /// Latest mesh build
    pub(crate) mesh: MeshSnapshot,
}

impl Engine {
    /// Create an engine with its seed blocks already meshed
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;

        let mut engine = Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            rule: rule_from_settings(&settings),
            store: BlockStore::new(),
            rotation: 0.0,
            spawn_countdown: settings.initial_spawn_delay,
            difficulty: settings.difficulty,
            score: 0,
            mesh: MeshSnapshot::default(),
            settings,
        };

        let seeds = engine.settings.seed_blocks.clone();
        for [x, y, z] in seeds {
            engine.spawn(Vec3::new(x, y, z), BlockClass::Good, 1.0);
        }
        engine.rebuild();

        log::info!(
            "Engine started: seed={}, {} seed blocks, difficulty={}, index mode {:?}",
            engine.settings.seed,
            engine.store.len(),
            engine.difficulty,
            engine.settings.index_mode
        );

        Ok(engine)
    }

    /// Advance one frame. Returns a new mesh only if the block set changed.
    pub fn step(&mut self, elapsed: f32, total_seconds: f64, difficulty: f32) -> Option<MeshSnapshot> {
        step(self, elapsed, total_seconds, difficulty)
    }

    /// Handle a tap. Always returns the current mesh.
    pub fn on_tap(&mut self, intent: TapIntent) -> MeshSnapshot {
        on_tap(self, intent)
    }

    /// Append one block moving toward the viewer at the current fall speed.
    ///
    /// Index offsets stay unassigned until the next `rebuild`.
    pub fn spawn(&mut self, position: Vec3, class: BlockClass, size: f32) {
        let speed = self.settings.effective_fall_speed(self.difficulty);
        self.spawn_with_velocity(position, Vec3::new(0.0, 0.0, -speed), class, size);
    }

    /// Append one block with an explicit velocity (zero for a stationary block)
    pub fn spawn_with_velocity(&mut self, position: Vec3, velocity: Vec3, class: BlockClass, size: f32) {
        log::debug!("Spawn {:?} block at {}", class, position);
        self.store
            .push(Block::new(position, velocity, self.rotation, class, size));
    }

    /// Periodic spawn at a random integer x on the spawn line
    pub(crate) fn spawn_random(&mut self) {
        let x = self
            .rng
            .random_range(self.settings.spawn_x_min..=self.settings.spawn_x_max);
        let chance = self.settings.bad_spawn_chance;
        let class = if chance > 0.0 && self.rng.random_bool(chance as f64) {
            BlockClass::Bad
        } else {
            BlockClass::Good
        };
        self.spawn(Vec3::new(x as f32, 0.0, 0.0), class, 1.0);
    }

    /// Rebuild the mesh from the current store and return it
    pub fn rebuild(&mut self) -> MeshSnapshot {
        self.mesh = build_mesh(&mut self.store, self.settings.index_mode);
        self.mesh.clone()
    }

    /// Remove every block
    pub fn clear(&mut self) -> MeshSnapshot {
        self.store.clear();
        self.rebuild()
    }

    /// Swap the tap rule
    pub fn set_rule(&mut self, rule: Box<dyn TapRule>) {
        self.rule = rule;
    }

    pub fn blocks(&self) -> &BlockStore {
        &self.store
    }

    pub fn mesh(&self) -> &MeshSnapshot {
        &self.mesh
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn spawn_countdown(&self) -> f32 {
        self.spawn_countdown
    }

    pub fn difficulty(&self) -> f32 {
        self.difficulty
    }
}

#[cfg(test)]
impl Engine {
    /// Engine holding exactly the given blocks (class `Good`, default speed)
    pub(crate) fn with_blocks(positions: &[Vec3]) -> Self {
        let settings = Settings {
            seed_blocks: positions.iter().map(|p| p.to_array()).collect(),
            ..Settings::default()
        };
        match Self::new(settings) {
            Ok(engine) => engine,
            Err(e) => panic!("test settings rejected: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_has_seed_blocks_meshed() {
        let engine = Engine::new(Settings::default()).unwrap();
        assert_eq!(engine.blocks().len(), 2);
        assert_eq!(engine.blocks().get(0).unwrap().position, Vec3::new(-3.0, 0.0, 0.0));
        assert_eq!(engine.blocks().get(1).unwrap().position, Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(engine.mesh().vertices.len(), 16);
        assert!(engine.blocks().iter().all(|b| b.index_offset().is_some()));
        assert_eq!(engine.spawn_countdown(), 1.0);
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = Settings {
            difficulty: -1.0,
            ..Settings::default()
        };
        assert!(Engine::new(settings).is_err());
    }

    #[test]
    fn test_spawn_velocity_follows_fall_speed() {
        let mut engine = Engine::with_blocks(&[]);
        engine.spawn(Vec3::ZERO, BlockClass::Good, 1.0);
        assert_eq!(engine.blocks().get(0).unwrap().velocity, Vec3::new(0.0, 0.0, -1.0));

        engine.settings.fall_speed = Some(4.0);
        engine.spawn(Vec3::ZERO, BlockClass::Dead, 0.5);
        let block = engine.blocks().get(1).unwrap();
        assert_eq!(block.velocity, Vec3::new(0.0, 0.0, -4.0));
        assert_eq!(block.size, 0.5);
        assert_eq!(block.class, BlockClass::Dead);
    }

    #[test]
    fn test_spawn_leaves_offsets_unassigned_until_rebuild() {
        let mut engine = Engine::with_blocks(&[Vec3::ZERO]);
        engine.spawn(Vec3::X, BlockClass::Good, 1.0);
        assert!(engine.blocks().iter().all(|b| b.index_offset().is_none()));

        let mesh = engine.rebuild();
        assert_eq!(mesh.block_count(), 2);
        assert_eq!(engine.blocks().get(1).unwrap().index_offset(), Some(8));
    }

    #[test]
    fn test_spawn_random_stays_in_range() {
        let mut engine = Engine::with_blocks(&[]);
        for _ in 0..200 {
            engine.spawn_random();
        }
        for block in engine.blocks() {
            let x = block.position.x;
            assert_eq!(x, x.round());
            assert!((-5.0..=4.0).contains(&x), "x={}", x);
            assert_eq!(block.position.y, 0.0);
            assert_eq!(block.position.z, 0.0);
            assert_eq!(block.class, BlockClass::Good);
        }
    }

    #[test]
    fn test_bad_spawn_chance_one_spawns_bad() {
        let settings = Settings {
            bad_spawn_chance: 1.0,
            seed_blocks: Vec::new(),
            ..Settings::default()
        };
        let mut engine = Engine::new(settings).unwrap();
        engine.spawn_random();
        assert_eq!(engine.blocks().get(0).unwrap().class, BlockClass::Bad);
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = Engine::with_blocks(&[]);
        let mut b = Engine::with_blocks(&[]);
        for _ in 0..20 {
            a.spawn_random();
            b.spawn_random();
        }
        let xs = |e: &Engine| e.blocks().iter().map(|b| b.position.x).collect::<Vec<_>>();
        assert_eq!(xs(&a), xs(&b));
    }

    #[test]
    fn test_clear() {
        let mut engine = Engine::new(Settings::default()).unwrap();
        let mesh = engine.clear();
        assert!(mesh.is_empty());
        assert!(engine.blocks().is_empty());
    }
}
