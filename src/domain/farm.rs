//! Portfolio ledger: owned zoans, aggregate hash rate, and the ZOON balance.

use super::currency::round2;
use super::error::FarmError;
use super::zoan::Zoan;

/// Pool-wide parameters the ledger needs at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmParams {
    /// Pool-wide total hash rate, the reward-share denominator.
    pub external_capacity: f64,
    /// Current ZOON → USD rate.
    pub price_of_unit: f64,
    /// Fixed total reward the pool distributes per day.
    pub pool_daily_reward: f64,
    pub starting_balance: f64,
}

/// Mutable simulation state. Created once per run; zoans only accumulate.
#[derive(Debug, Clone, PartialEq)]
pub struct Farm {
    pub zoans: Vec<Zoan>,
    pub total_hash_rate: u64,
    pub total_investment: u64,
    /// Liquid ZOON balance at full precision; rounded only via [`Farm::balance`].
    pub balance: f64,
    pub payout_total: f64,
    pub external_capacity: f64,
    pub price_of_unit: f64,
    pub pool_daily_reward: f64,
    /// Snapshots taken at construction, in native units.
    pub initial_hash_rate: u64,
    pub initial_investment: u64,
}

impl Farm {
    /// Seed the ledger with the initial holdings. Seeding does not charge the
    /// balance; only strategy-time purchases do.
    pub fn new(initial_zoans: Vec<Zoan>, params: FarmParams) -> Self {
        let total_hash_rate = initial_zoans.iter().map(|z| z.hash_rate()).sum();
        let total_investment = initial_zoans.iter().map(|z| z.price()).sum();
        Farm {
            zoans: initial_zoans,
            total_hash_rate,
            total_investment,
            balance: params.starting_balance,
            payout_total: 0.0,
            external_capacity: params.external_capacity,
            price_of_unit: params.price_of_unit,
            pool_daily_reward: params.pool_daily_reward,
            initial_hash_rate: total_hash_rate,
            initial_investment: total_investment,
        }
    }

    /// Append `count` independent copies of `zoan`, updating the aggregate
    /// caches and debiting the balance. Affordability is the caller's job.
    pub fn acquire(&mut self, zoan: &Zoan, count: u32) {
        for _ in 0..count {
            self.zoans.push(zoan.clone());
        }
        self.total_hash_rate += zoan.hash_rate() * count as u64;
        self.total_investment += zoan.price() * count as u64;
        self.balance -= (zoan.price() * count as u64) as f64;
    }

    /// Credit one day's reward: the farm's share of the pool daily reward,
    /// proportional to hash rate over external capacity.
    pub fn accrue_reward(&mut self) -> Result<f64, FarmError> {
        if self.external_capacity == 0.0 {
            return Err(FarmError::ZeroCapacity);
        }
        let share = self.total_hash_rate as f64 / self.external_capacity;
        let reward = share * self.pool_daily_reward;
        if !reward.is_finite() {
            return Err(FarmError::NonFinite {
                what: "daily reward".to_string(),
            });
        }
        self.balance += reward;
        Ok(reward)
    }

    /// Balance rounded to 2 decimals for reporting.
    pub fn balance(&self) -> f64 {
        round2(self.balance)
    }

    /// Withdraw `ratio` of the reported balance. Uses the rounded balance as
    /// the base and does not clamp; a payout can push the balance negative.
    pub fn apply_payout(&mut self, ratio: f64) -> f64 {
        let payout = ratio * self.balance();
        self.payout_total += payout;
        self.balance -= payout;
        payout
    }

    pub fn zoan_count(&self) -> usize {
        self.zoans.len()
    }
}
