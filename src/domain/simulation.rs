//! The day-by-day projection loop.

use super::currency::round2;
use super::error::FarmError;
use super::farm::Farm;
use super::strategy::Strategy;

/// One recorded entry of the projection. Rows are appended on purchase days
/// and unconditionally on day 1; never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRow {
    pub day: u32,
    /// Reward accrued on this day, rounded for reporting.
    pub income: f64,
    /// Income accumulated since the previous recorded row, inclusive.
    pub period_income: f64,
    pub payout: f64,
    pub payout_total: f64,
    pub zoans_purchased: u32,
    pub zoans_purchased_total: usize,
    /// Unit price in effect when the row was recorded (pre-decay).
    pub price_of_unit: f64,
    pub external_capacity: f64,
}

/// Recorded rows plus the summary snapshots renderers need. Investment
/// figures stay in native ZOON units; conversion happens at display time.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub rows: Vec<DayRow>,
    pub days: u32,
    pub initial_hash_rate: u64,
    pub final_hash_rate: u64,
    pub initial_investment: u64,
    pub total_investment: u64,
    pub final_balance: f64,
    pub payout_total: f64,
    pub final_price_of_unit: f64,
    pub final_external_capacity: f64,
}

/// Run the strategy against the farm for `strategy.days` days.
///
/// Per day: payout first if configured, then a greedy purchase burst on
/// interval days, then reward accrual. A row is recorded when anything was
/// bought, and always on day 1 so callers get a baseline entry. Price decay
/// applies after a row is recorded; capacity growth applies every day.
///
/// The first failure aborts the remaining days and surfaces to the caller.
pub fn run_strategy(farm: &mut Farm, strategy: &Strategy) -> Result<SimulationReport, FarmError> {
    strategy.validate()?;
    // A non-finite balance would satisfy the greedy purchase condition on
    // every iteration and never terminate.
    if !farm.balance.is_finite() {
        return Err(FarmError::NonFinite {
            what: "starting balance".to_string(),
        });
    }

    let mut rows = Vec::new();
    let mut period_income = 0.0;

    for day in 1..=strategy.days {
        let daily_payout = match strategy.payout_ratio {
            Some(ratio) => farm.apply_payout(ratio),
            None => 0.0,
        };

        let mut purchased = 0u32;
        if let Some(template) = &strategy.purchase {
            if day % strategy.purchase_interval == 0 {
                // Greedy: whole units only, as many as the balance covers,
                // before this day's reward lands.
                while template.price() as f64 <= farm.balance {
                    farm.acquire(template, 1);
                    purchased += 1;
                }
            }
        }

        let income = farm.accrue_reward()?;
        period_income += income;

        if purchased > 0 || day == 1 {
            rows.push(DayRow {
                day,
                income: round2(income),
                period_income: round2(period_income),
                payout: round2(daily_payout),
                payout_total: round2(farm.payout_total),
                zoans_purchased: purchased,
                zoans_purchased_total: farm.zoan_count(),
                price_of_unit: farm.price_of_unit,
                external_capacity: farm.external_capacity,
            });
            period_income = 0.0;

            // Decay after recording: the row keeps the pre-decay rate even
            // for income accrued across the whole period.
            if let Some(decay) = strategy.price_decay_ratio {
                farm.price_of_unit -= farm.price_of_unit * decay;
            }
        }

        if let Some(growth) = strategy.capacity_growth {
            farm.external_capacity += growth;
        }
    }

    Ok(SimulationReport {
        rows,
        days: strategy.days,
        initial_hash_rate: farm.initial_hash_rate,
        final_hash_rate: farm.total_hash_rate,
        initial_investment: farm.initial_investment,
        total_investment: farm.total_investment,
        final_balance: farm.balance(),
        payout_total: round2(farm.payout_total),
        final_price_of_unit: farm.price_of_unit,
        final_external_capacity: farm.external_capacity,
    })
}
