//! Deterministic block simulation
//!
//! All gameplay logic lives here:
//! - Time comes in from the host, never read from a clock
//! - Seeded RNG only
//! - Store order is insertion order and drives mesh layout
//! - No device or platform dependencies

pub mod block;
pub mod rules;
pub mod state;
pub mod store;
pub mod tap;
pub mod tick;

pub use block::{Block, BlockClass};
pub use rules::{ByClass, SplitAll, TapOutcome, TapRule};
pub use state::Engine;
pub use store::BlockStore;
pub use tap::{TapIntent, on_tap};
pub use tick::step;
