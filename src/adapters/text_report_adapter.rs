//! Plain-text table renderer for simulation reports.

use crate::domain::currency::{convert, Currency, ExchangeRates};
use crate::domain::error::FarmError;
use crate::domain::simulation::SimulationReport;
use crate::ports::report_port::ReportPort;
use std::io::Write;

pub struct TextReportAdapter;

impl ReportPort for TextReportAdapter {
    fn write(
        &self,
        report: &SimulationReport,
        currency: Currency,
        rates: &ExchangeRates,
        out: &mut dyn Write,
    ) -> Result<(), FarmError> {
        // Investments are stored in native units; convert with the unit price
        // in effect at render time.
        let rate = report.final_price_of_unit;
        writeln!(
            out,
            "Initial investment: {:.2} {currency}",
            convert(report.initial_investment as f64, rate, currency, rates)
        )?;
        writeln!(
            out,
            "Total investment:   {:.2} {currency}",
            convert(report.total_investment as f64, rate, currency, rates)
        )?;
        writeln!(out, "Initial hash rate:  {}", report.initial_hash_rate)?;
        writeln!(out, "Final hash rate:    {}", report.final_hash_rate)?;
        writeln!(out, "Final balance:      {:.2} ZOON", report.final_balance)?;
        if report.payout_total > 0.0 {
            writeln!(
                out,
                "Payout total:       {:.2} {currency}",
                convert(report.payout_total, rate, currency, rates)
            )?;
        }
        writeln!(out)?;

        writeln!(
            out,
            "{:>5} {:>12} {:>12} {:>12} {:>10} {:>7} {:>11} {:>14}",
            "Day",
            "Income",
            format!("Income {currency}"),
            "Period",
            "Purchased",
            "Total",
            "Unit price",
            "Capacity"
        )?;

        for row in &report.rows {
            writeln!(
                out,
                "{:>5} {:>12.2} {:>12.2} {:>12.2} {:>10} {:>7} {:>11.5} {:>14.0}",
                row.day,
                row.income,
                convert(row.income, row.price_of_unit, currency, rates),
                row.period_income,
                row.zoans_purchased,
                row.zoans_purchased_total,
                row.price_of_unit,
                row.external_capacity
            )?;
        }

        Ok(())
    }
}
