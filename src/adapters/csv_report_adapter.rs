//! CSV row export for simulation reports.

use crate::domain::currency::{convert, Currency, ExchangeRates};
use crate::domain::error::FarmError;
use crate::domain::simulation::SimulationReport;
use crate::ports::report_port::ReportPort;
use std::io::Write;

pub struct CsvReportAdapter;

impl ReportPort for CsvReportAdapter {
    fn write(
        &self,
        report: &SimulationReport,
        currency: Currency,
        rates: &ExchangeRates,
        out: &mut dyn Write,
    ) -> Result<(), FarmError> {
        let mut writer = csv::Writer::from_writer(out);

        let income_col = format!("income_{}", currency.to_string().to_lowercase());
        writer
            .write_record([
                "day",
                "income_zoon",
                income_col.as_str(),
                "period_income",
                "payout",
                "payout_total",
                "zoans_purchased",
                "zoans_purchased_total",
                "price_of_unit",
                "external_capacity",
            ])
            .map_err(csv_error)?;

        for row in &report.rows {
            writer
                .write_record([
                    row.day.to_string(),
                    format!("{:.2}", row.income),
                    format!("{:.2}", convert(row.income, row.price_of_unit, currency, rates)),
                    format!("{:.2}", row.period_income),
                    format!("{:.2}", row.payout),
                    format!("{:.2}", row.payout_total),
                    row.zoans_purchased.to_string(),
                    row.zoans_purchased_total.to_string(),
                    row.price_of_unit.to_string(),
                    format!("{:.0}", row.external_capacity),
                ])
                .map_err(csv_error)?;
        }

        writer.flush()?;
        Ok(())
    }
}

fn csv_error(e: csv::Error) -> FarmError {
    FarmError::Io(std::io::Error::other(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::farm::{Farm, FarmParams};
    use crate::domain::simulation::run_strategy;
    use crate::domain::strategy::Strategy;
    use crate::domain::zoan::Zoan;

    #[test]
    fn exports_header_and_one_row_per_recorded_day() {
        let mut farm = Farm::new(
            vec![Zoan::new(1, 3, 2000).unwrap()],
            FarmParams {
                external_capacity: 2_064_166_400.0,
                price_of_unit: 0.01415,
                pool_daily_reward: 1_788_500.0,
                starting_balance: 5000.0,
            },
        );
        let strategy = Strategy::reinvest(5, Zoan::new(1, 3, 1800).unwrap());
        let report = run_strategy(&mut farm, &strategy).unwrap();

        let mut buf = Vec::new();
        CsvReportAdapter
            .write(&report, Currency::Usd, &ExchangeRates::default(), &mut buf)
            .unwrap();
        let output = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0].split(',').count(), 10);
        assert!(lines[0].starts_with("day,income_zoon,income_usd"));
        assert_eq!(lines.len(), report.rows.len() + 1);
        // Day-1 row bought 2 templates from the starting balance.
        assert!(lines[1].starts_with("1,"));
        assert!(lines[1].contains(",2,3,"));
    }
}
