use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use log::info;

use super::{Error, Sale, Summary};

pub const FILTERED_BY_PRODUCT_TITLE: &str = "Total sales by Filtered product:";
pub const FILTERED_BY_MONTH_TITLE: &str = "Total sales by Filtered product group by Month:";

/// Writes the filtered-sales report for `sales`, with `summary` holding their
/// totals, to `out`. `matches` are the search strings the sales were filtered
/// with, printed as given.
pub fn render_report<W, S>(
    out: &mut W,
    sales: &[Sale],
    summary: &Summary,
    matches: &[S],
) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    let matches: Vec<&str> = matches.iter().map(|m| m.as_ref()).collect();
    writeln!(out, "Filtered product(s): {}", matches.join(", "))?;
    writeln!(out)?;

    writeln!(out, "Products Information:")?;
    for sale in sales {
        writeln!(out, "{}", sale)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", FILTERED_BY_PRODUCT_TITLE)?;
    for total in &summary.by_product {
        writeln!(out, "{}", total)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", FILTERED_BY_MONTH_TITLE)?;
    for total in &summary.by_month {
        writeln!(out, "{}", total)?;
    }
    Ok(())
}

/// Sums `sales`, then creates or truncates the file at `path` and renders the
/// report into it.
///
/// Totals out of range fail before the file is touched. A failed write can
/// leave a partial file behind; the handle is closed either way.
pub fn write_report<S: AsRef<str>>(
    path: impl AsRef<Path>,
    sales: &[Sale],
    matches: &[S],
) -> Result<(), Error> {
    let path = path.as_ref();
    let summary = Summary::of(sales)?;
    let report_error = |source: io::Error| Error::Report {
        path: path.to_owned(),
        source,
    };
    let mut out = BufWriter::new(File::create(path).map_err(report_error)?);
    // flush by hand, BufWriter's drop swallows errors
    render_report(&mut out, sales, &summary, matches)
        .and_then(|()| out.flush())
        .map_err(report_error)?;
    info!("wrote report of {} sales to {}", sales.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::sales::Money;

    fn sale(name: &str, (y, m, d): (i32, u32, u32), cents: i64) -> Sale {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        Sale::new(name, date, Money::new(cents, 2))
    }

    fn render(sales: &[Sale], matches: &[&str]) -> String {
        let mut buf = Vec::new();
        let summary = Summary::of(sales).unwrap();
        render_report(&mut buf, sales, &summary, matches).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn full_layout() {
        let sales = [
            sale("Product1", (2022, 1, 1), 100_00),
            sale("Product2", (2022, 1, 2), 200_00),
            sale("Product1", (2022, 2, 9), 1500_255),
        ];
        let expected = "\
Filtered product(s): Product1, Product2

Products Information:
Product1, 01/01/2022, 100.00
Product2, 01/02/2022, 200.00
Product1, 02/09/2022, 15,002.55

Total sales by Filtered product:
Product1: $15,102.55
Product2: $200.00

Total sales by Filtered product group by Month:
February: $15,002.55
January: $300.00
";
        assert_eq!(render(&sales, &["Product1", "Product2"]), expected);
    }

    #[test]
    fn matches_are_printed_verbatim() {
        let out = render(&[], &["product1", " PRODUCT2 "]);
        assert!(out.starts_with("Filtered product(s): product1,  PRODUCT2 \n\n"));
    }

    #[test]
    fn empty_selection_still_has_every_section() {
        let expected = "\
Filtered product(s): nothing

Products Information:

Total sales by Filtered product:

Total sales by Filtered product group by Month:
";
        assert_eq!(render(&[], &["nothing"]), expected);
    }

    #[test]
    fn unwritable_destination_is_a_report_error() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let matches: [&str; 0] = [];
        let err = write_report(dir.path().join("no/such/dir/out.txt"), &[], &matches).unwrap_err();
        assert!(matches!(err, Error::Report { .. }));
        assert!(err
            .to_string()
            .starts_with("Error writing the sales data file: "));
        Ok(())
    }

    #[test]
    fn out_of_range_totals_leave_no_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.txt");
        let date = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        let sales = [
            Sale::new("A", date, Money::from(rust_decimal::Decimal::MAX)),
            Sale::new("A", date, Money::new(1, 0)),
        ];
        let err = write_report(&path, &sales, &["A"]).unwrap_err();
        assert!(matches!(err, Error::Overflow { .. }));
        assert!(!path.exists());
        Ok(())
    }
}
