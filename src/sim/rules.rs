//! Tap rules: what happens to a tapped block and how the score moves

use super::block::BlockClass;
use crate::settings::{Settings, TapRuleKind};

/// Decision for one tapped block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapOutcome {
    /// Replace the block with two halves (otherwise it is just removed)
    pub split: bool,
    pub score_delta: i64,
}

pub trait TapRule: std::fmt::Debug {
    fn resolve(&self, class: BlockClass) -> TapOutcome;
}

/// Every block splits and scores the same
#[derive(Debug, Clone, Copy)]
pub struct SplitAll {
    pub points: i64,
}

impl TapRule for SplitAll {
    fn resolve(&self, _class: BlockClass) -> TapOutcome {
        TapOutcome {
            split: true,
            score_delta: self.points,
        }
    }
}

/// Good blocks split and score, bad blocks cost points, dead blocks just vanish
#[derive(Debug, Clone, Copy)]
pub struct ByClass {
    pub points: i64,
    pub penalty: i64,
}

impl TapRule for ByClass {
    fn resolve(&self, class: BlockClass) -> TapOutcome {
        match class {
            BlockClass::Good => TapOutcome {
                split: true,
                score_delta: self.points,
            },
            BlockClass::Bad => TapOutcome {
                split: false,
                score_delta: 0i64.saturating_sub(self.penalty),
            },
            BlockClass::Dead => TapOutcome {
                split: false,
                score_delta: 0,
            },
        }
    }
}

/// Build the rule selected in settings
pub fn rule_from_settings(settings: &Settings) -> Box<dyn TapRule> {
    match settings.tap_rule {
        TapRuleKind::SplitAll => Box::new(SplitAll {
            points: settings.score_per_split,
        }),
        TapRuleKind::ByClass => Box::new(ByClass {
            points: settings.score_per_split,
            penalty: settings.bad_tap_penalty,
        }),
    }
}
