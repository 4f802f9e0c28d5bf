//! Sales records, and the parse, summarise, filter and report steps run over them.
mod filter;
mod money;
mod parser;
mod report;
mod sale;
mod summary;


use std::{io, path::PathBuf};

pub use filter::filter_sales;
pub use money::{Money, ParseMoneyError};
pub use parser::{parse_lines, read_sales};
pub use report::{render_report, write_report, FILTERED_BY_MONTH_TITLE, FILTERED_BY_PRODUCT_TITLE};
pub use sale::Sale;
pub use summary::{aggregate, totals_by_month, totals_by_product, Summary, Total};

/// A failure that stops the run. Malformed lines are never errors, they're
/// skipped.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Error reading the sales data file: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Error writing the sales data file: {source}")]
    Report { path: PathBuf, source: io::Error },
    #[error("Error summing sales: total for {key:?} is out of range")]
    Overflow { key: String },
}
