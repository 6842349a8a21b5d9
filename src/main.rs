use std::{
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::{
    domain::{catalog::PriceCatalog, sale},
    error::Result,
    report::Report,
};

mod domain;
mod error;
mod json;
mod report;

const DEFAULT_PRODUCTS_FILE: &str = "ProductList.json";
const DEFAULT_SALES_FILE: &str = "Sales.json";

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let products_path = args
        .next()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PRODUCTS_FILE));
    let sales_path = args
        .next()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SALES_FILE));

    match run(&products_path, &sales_path, Path::new(report::OUTPUT_FILE)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            if let Some(source) = std::error::Error::source(&err) {
                error!("caused by: {source}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(products_path: &Path, sales_path: &Path, output_path: &Path) -> Result<()> {
    let started = Instant::now();

    let products = json::records(json::load(products_path)?, "products")?;
    debug!(sample = %products[0], "first product");
    let sales = json::records(json::load(sales_path)?, "sales")?;
    debug!(sample = %sales[0], "first sale");

    let catalog = PriceCatalog::from_products(&products)?;
    info!(products = catalog.len(), sales = sales.len(), "computing total sales");

    let aggregation = sale::aggregate(&catalog, &sales);
    for warning in &aggregation.warnings {
        warn!("{warning}");
    }

    let report = Report {
        result: aggregation.result,
        elapsed: started.elapsed(),
    };
    println!("{report}");

    report::write(&report, output_path)?;
    info!(path = %output_path.display(), "results saved");

    Ok(())
}
