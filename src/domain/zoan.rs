//! Zoan asset model: rarity/level tiers and the hash-rate tables.

use super::error::FarmError;

/// Hash power per rarity tier, indexed by `rarity - 1`.
const BASE_POWER: [u64; 6] = [200, 300, 400, 500, 600, 700];

/// Per-level multiplier per rarity tier, indexed by `rarity - 1`.
const MULTIPLIER: [u64; 6] = [75, 70, 65, 60, 55, 50];

/// Experience thresholds for levels 2..=6. Below the first entry is level 1.
const LEVEL_THRESHOLDS: [(f64, u8); 5] = [
    (100.0, 2),
    (350.0, 3),
    (1000.0, 4),
    (2000.0, 5),
    (4000.0, 6),
];

/// A yield-generating asset. Immutable after construction; the hash rate is
/// derived once from rarity and level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zoan {
    rarity: u8,
    level: u8,
    price: u64,
    hash_rate: u64,
}

impl Zoan {
    pub fn new(rarity: u8, level: u8, price: u64) -> Result<Self, FarmError> {
        if !(1..=6).contains(&rarity) {
            return Err(FarmError::InvalidRarity(rarity));
        }
        if !(1..=6).contains(&level) {
            return Err(FarmError::InvalidLevel(level));
        }
        let hash_rate = compute_hash_rate(rarity, level);
        Ok(Zoan {
            rarity,
            level,
            price,
            hash_rate,
        })
    }

    /// Construct with the level derived from accrued experience.
    pub fn from_experience(rarity: u8, exp: f64, price: u64) -> Result<Self, FarmError> {
        if !exp.is_finite() || exp < 0.0 {
            return Err(FarmError::InvalidArgument {
                what: "experience".to_string(),
                reason: format!("must be finite and non-negative, got {exp}"),
            });
        }
        Self::new(rarity, level_for_experience(exp), price)
    }

    /// Batch constructor: `count` independent assets with identical parameters.
    pub fn make_multi(count: u32, rarity: u8, exp: f64, price: u64) -> Result<Vec<Self>, FarmError> {
        let template = Self::from_experience(rarity, exp, price)?;
        Ok(vec![template; count as usize])
    }

    pub fn rarity(&self) -> u8 {
        self.rarity
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn hash_rate(&self) -> u64 {
        self.hash_rate
    }
}

fn level_for_experience(exp: f64) -> u8 {
    let mut level = 1;
    for (limit, lvl) in LEVEL_THRESHOLDS {
        if exp < limit {
            break;
        }
        level = lvl;
    }
    level
}

fn compute_hash_rate(rarity: u8, level: u8) -> u64 {
    if level == 1 {
        return 0;
    }
    // Assets above rarity 2 yield nothing until level 3.
    if rarity > 2 && level == 2 {
        return 0;
    }
    let idx = (rarity - 1) as usize;
    BASE_POWER[idx] * MULTIPLIER[idx] * (level as u64 - 1)
}
