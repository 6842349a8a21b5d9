use std::{fmt, fs, path::Path, time::Duration};

use rust_decimal::RoundingStrategy;

use crate::{
    domain::sale::AggregationResult,
    error::{Error, Result},
};

pub const OUTPUT_FILE: &str = "SalesResults.txt";

#[derive(Debug, Clone, Copy)]
pub struct Report {
    pub result: AggregationResult,
    pub elapsed: Duration,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self
            .result
            .total
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        writeln!(f, "Total de ventas: ${total:.2}")?;
        writeln!(f, "Errores encontrados: {}", self.result.errors)?;
        writeln!(
            f,
            "Tiempo de ejecución: {:.4} segundos",
            self.elapsed.as_secs_f64()
        )
    }
}

/// Persist the report as UTF-8 text, replacing any previous file.
pub fn write(report: &Report, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    fs::write(path, report.to_string()).map_err(|source| Error::WriteFailure {
        path: path.to_owned(),
        source,
    })
}
