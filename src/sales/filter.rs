use log::debug;

use super::Sale;

/// Keeps the sales whose name equals any of `matches`, ignoring case and any
/// whitespace around each match. No matches keep nothing.
pub fn filter_sales<S: AsRef<str>>(sales: &[Sale], matches: &[S]) -> Vec<Sale> {
    let wanted: Vec<&str> = matches.iter().map(|m| m.as_ref().trim()).collect();
    let kept: Vec<Sale> = sales
        .iter()
        .filter(|sale| wanted.iter().any(|w| eq_ignore_case(sale.name(), w)))
        .cloned()
        .collect();
    debug!("{} of {} sales match {:?}", kept.len(), sales.len(), wanted);
    kept
}

/// Char by char, each side mapped to its single-char uppercase. No full case
/// folding: "ß" is not "SS" and the Kelvin sign is not "k".
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().map(simple_uppercase).eq(b.chars().map(simple_uppercase))
}

fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
