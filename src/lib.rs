//! Block Burst - tap the nearest approaching block to split it
//!
//! Core modules:
//! - `sim`: Block store, per-frame step, tap handling
//! - `renderer`: Mesh rebuild and GPU hand-off data
//! - `settings`: Data-driven tuning

pub mod renderer;
pub mod settings;
pub mod sim;

pub use renderer::{IndexMode, MeshSnapshot};
pub use settings::{ConfigError, Settings};
pub use sim::{Engine, TapIntent};

/// Game configuration constants
pub mod consts {
    /// Spin rate shared by every block
    pub const DEGREES_PER_SECOND: f32 = 45.0;

    /// Difficulty at start (doubles as spawn interval and fall speed)
    pub const DEFAULT_DIFFICULTY: f32 = 1.0;
    /// Countdown before the first periodic spawn
    pub const INITIAL_SPAWN_DELAY: f32 = 1.0;

    /// Periodic spawns land on integer x in this inclusive range
    pub const SPAWN_X_MIN: i32 = -5;
    pub const SPAWN_X_MAX: i32 = 4;

    /// The two blocks present at start
    pub const SEED_BLOCKS: [[f32; 3]; 2] = [[-3.0, 0.0, 0.0], [3.0, 0.0, 0.0]];

    /// Split halves appear this far left/right of the tapped block
    pub const SPLIT_OFFSET: f32 = 1.0;
    pub const SCORE_PER_SPLIT: i64 = 10;

    pub const DEFAULT_SEED: u64 = 0x5EED;
}

/// Shared spin angle in `[0, 2π)` for a given total time.
///
/// Derived from absolute time rather than integrated, so the same total time
/// always gives the same angle.
#[inline]
pub fn spin_angle(total_seconds: f64, degrees_per_second: f32) -> f32 {
    let total = total_seconds * (degrees_per_second as f64).to_radians();
    let angle = total.rem_euclid(std::f64::consts::TAU) as f32;
    // Narrowing can round values just below 2π up to 2π
    if angle >= std::f32::consts::TAU { 0.0 } else { angle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_spin_angle_basics() {
        assert_eq!(spin_angle(0.0, 45.0), 0.0);
        assert!((spin_angle(2.0, 45.0) - FRAC_PI_2).abs() < 1e-6);
        assert!((spin_angle(4.0, 45.0) - PI).abs() < 1e-6);
        // 8 seconds is a full turn
        assert!((spin_angle(9.0, 45.0) - spin_angle(1.0, 45.0)).abs() < 1e-5);
    }

    #[test]
    fn test_spin_angle_range() {
        for t in [0.0, 0.1, 7.99, 8.0, 123.456, 1.0e6] {
            let a = spin_angle(t, 45.0);
            assert!((0.0..std::f32::consts::TAU).contains(&a), "t={} a={}", t, a);
        }
    }
}
