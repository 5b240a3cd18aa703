#![allow(dead_code)]

use zoonfarm::domain::farm::{Farm, FarmParams};
use zoonfarm::domain::zoan::Zoan;

pub const EXTERNAL_CAPACITY: f64 = 2_064_166_400.0;
pub const POOL_DAILY_REWARD: f64 = 1_788_500.0;
pub const ZOON_USD: f64 = 0.01415;

pub fn zoan(rarity: u8, level: u8, price: u64) -> Zoan {
    Zoan::new(rarity, level, price).unwrap()
}

/// The reference portfolio: 2 rarity-1 level-3 at 2000, 24 rarity-1 level-3
/// at 1800, and 1 rarity-2 level-4 at 3800.
pub fn reference_holdings() -> Vec<Zoan> {
    let mut zoans = vec![zoan(1, 3, 2000); 2];
    zoans.extend(vec![zoan(1, 3, 1800); 24]);
    zoans.push(zoan(2, 4, 3800));
    zoans
}

pub fn reference_params() -> FarmParams {
    FarmParams {
        external_capacity: EXTERNAL_CAPACITY,
        price_of_unit: ZOON_USD,
        pool_daily_reward: POOL_DAILY_REWARD,
        starting_balance: 0.0,
    }
}

pub fn reference_farm() -> Farm {
    Farm::new(reference_holdings(), reference_params())
}

/// Aggregate hash rate of [`reference_holdings`]: 26 * 30_000 + 63_000.
pub const REFERENCE_HASH_RATE: u64 = 843_000;

/// Aggregate price of [`reference_holdings`] in ZOON.
pub const REFERENCE_INVESTMENT: u64 = 51_000;
