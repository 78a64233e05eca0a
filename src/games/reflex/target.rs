//! Targets and size tiers.

use serde::{Deserialize, Serialize};

use super::config::ReflexConfig;
use crate::core::GameRng;

/// Target size bucket. Smaller is harder to hit and worth more.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeTier {
    Small,
    Medium,
    Large,
}

impl SizeTier {
    pub const ALL: [SizeTier; 3] = [SizeTier::Small, SizeTier::Medium, SizeTier::Large];

    /// Points for hitting a target of this size.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            SizeTier::Small => 3,
            SizeTier::Medium => 2,
            SizeTier::Large => 1,
        }
    }

    /// Hitbox diameter in pixels.
    #[must_use]
    pub const fn diameter(self) -> f64 {
        match self {
            SizeTier::Small => 32.0,
            SizeTier::Medium => 48.0,
            SizeTier::Large => 64.0,
        }
    }
}

/// A clickable target, centred on (`x`, `y`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub x: f64,
    pub y: f64,
    pub tier: SizeTier,
}

impl Target {
    /// Place a target uniformly inside the inset play area with a uniform tier.
    pub(crate) fn random(rng: &mut GameRng, config: &ReflexConfig) -> Self {
        let inset = config.margin / 2.0;
        let x = rng.gen_f64_between(inset, config.width - inset);
        let y = rng.gen_f64_between(inset, config.height - inset);
        let tier = SizeTier::ALL[rng.gen_range_usize(0..SizeTier::ALL.len())];
        Self { x, y, tier }
    }

    /// Points this target is worth.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.tier.points()
    }

    /// Is the point (`px`, `py`) inside the circular hitbox?
    #[must_use]
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let r = self.tier.diameter() / 2.0;
        let (dx, dy) = (px - self.x, py - self.y);
        dx * dx + dy * dy <= r * r
    }
}
