use std::{
    error::Error,
    io::{self, StdinLock},
    path::PathBuf,
    process,
};

use clap::Parser;
use log::debug;
use sales_report::{
    args::{prompt, split_search, Args},
    sales::{
        filter_sales, read_sales, write_report, Summary, Total, FILTERED_BY_MONTH_TITLE,
        FILTERED_BY_PRODUCT_TITLE,
    },
};

fn main() {
    env_logger::init();
    if let Err(err) = run(Args::parse()) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut stdin = io::stdin().lock();
    let input = path_or_prompt(args.input, &mut stdin, "Enter the input file path: ")?;
    let output = path_or_prompt(args.output, &mut stdin, "Enter the output file path: ")?;

    let sales = read_sales(&input)?;
    let summary = Summary::of(&sales)?;
    display_totals("Total sales by Product:", &summary.by_product);
    display_totals("Total sales by Month:", &summary.by_month);

    let raw_search = match args.search {
        Some(raw) => Some(raw),
        None => prompt(&mut stdin, "\nEnter search strings separated by commas: ")?,
    };
    let matches = match raw_search.as_deref().and_then(split_search) {
        Some(matches) => matches,
        None => {
            println!("No search strings entered. Exiting.");
            return Ok(());
        }
    };
    debug!("searching for {:?}", matches);

    let filtered = filter_sales(&sales, &matches);
    let filtered_summary = Summary::of(&filtered)?;
    display_totals(FILTERED_BY_PRODUCT_TITLE, &filtered_summary.by_product);
    display_totals(FILTERED_BY_MONTH_TITLE, &filtered_summary.by_month);

    write_report(&output, &filtered, &matches)?;
    println!("\nThe output is successfully saved to {}.", output.display());
    Ok(())
}

fn path_or_prompt(
    given: Option<PathBuf>,
    stdin: &mut StdinLock<'_>,
    question: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(path) = given {
        return Ok(path);
    }
    match prompt(stdin, question)? {
        Some(path) if !path.trim().is_empty() => Ok(PathBuf::from(path.trim())),
        _ => Err(format!("no path given for {:?}", question.trim_end_matches(": ")).into()),
    }
}

fn display_totals(title: &str, totals: &[Total]) {
    println!("\n{}", title);
    for total in totals {
        println!("{}", total);
    }
}
