use std::{fs::File, io, path::Path};

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};

use super::{Error, Sale};

const FIELDS: usize = 3;

/// Parses in-memory lines into sales, skipping every line that isn't exactly
/// `name, MM/dd/yyyy, amount`.
pub fn parse_lines<I, S>(lines: I) -> Vec<Sale>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .zip(1..)
        .filter_map(|(line, number)| {
            // every comma splits, there is no quoting
            let mut record: StringRecord = line.as_ref().split(',').collect();
            sale_from_record(&mut record, number)
        })
        .collect()
}

/// Reads every sale in the file at `path`.
///
/// Only a file that can't be opened or read is an error. Lines that don't
/// hold a sale, including ones that aren't UTF-8, are skipped.
pub fn read_sales(path: impl AsRef<Path>) -> Result<Vec<Sale>, Error> {
    let path = path.as_ref();
    let read_error = |source: io::Error| Error::Read {
        path: path.to_owned(),
        source,
    };
    let file = File::open(path).map_err(read_error)?;

    // a plain comma splitter: no header, no quotes, any field count
    let mut csv_in = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(file);

    let mut sales = Vec::new();
    let mut record = StringRecord::new();
    loop {
        match csv_in.read_record(&mut record) {
            Ok(true) => {
                let number = record.position().map_or(0, |pos| pos.line());
                sales.extend(sale_from_record(&mut record, number));
            }
            Ok(false) => break,
            Err(err) => match err.into_kind() {
                csv::ErrorKind::Io(source) => return Err(read_error(source)),
                kind => debug!("skipping unreadable line: {:?}", kind),
            },
        }
    }
    info!("read {} sales from {}", sales.len(), path.display());
    Ok(sales)
}

fn sale_from_record(record: &mut StringRecord, line: u64) -> Option<Sale> {
    record.trim();
    if record.len() != FIELDS {
        debug!(
            "line {}: expected {} fields, found {}",
            line,
            FIELDS,
            record.len()
        );
        return None;
    }
    match record.deserialize::<Sale>(None) {
        Ok(sale) => Some(sale),
        Err(err) => {
            debug!("line {}: {}", line, err);
            None
        }
    }
}
