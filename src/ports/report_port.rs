//! Report generation port.

use crate::domain::currency::{Currency, ExchangeRates};
use crate::domain::error::FarmError;
use crate::domain::simulation::SimulationReport;
use std::io::Write;

/// Port for rendering a finished simulation. The core has no dependency on
/// how rows are displayed.
pub trait ReportPort {
    fn write(
        &self,
        report: &SimulationReport,
        currency: Currency,
        rates: &ExchangeRates,
        out: &mut dyn Write,
    ) -> Result<(), FarmError>;
}
