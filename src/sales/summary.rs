use std::collections::{hash_map::Entry, HashMap};

use derive_more::Display;

use super::{Error, Money, Sale};

/// Summed amount of every sale sharing `key`.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
#[display(fmt = "{}: ${}", key, total)]
pub struct Total {
    pub key: String,
    pub total: Money,
}

/// Totals by product and by month over the same sales.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub by_product: Vec<Total>,
    pub by_month: Vec<Total>,
}

impl Summary {
    pub fn of(sales: &[Sale]) -> Result<Self, Error> {
        Ok(Self {
            by_product: totals_by_product(sales)?,
            by_month: totals_by_month(sales)?,
        })
    }
}

/// Groups `sales` by `key_of` and sums each group, largest total first.
/// Equal totals stay in the order their keys first appeared.
///
/// Fails with [`Error::Overflow`] if a group's sum leaves the `Decimal` range.
pub fn aggregate<F>(sales: &[Sale], key_of: F) -> Result<Vec<Total>, Error>
where
    F: Fn(&Sale) -> String,
{
    let mut positions = HashMap::<String, usize>::new();
    let mut totals = Vec::<Total>::new();
    for sale in sales {
        match positions.entry(key_of(sale)) {
            Entry::Occupied(o) => {
                let entry = &mut totals[*o.get()];
                entry.total = entry
                    .total
                    .checked_add(sale.amount())
                    .ok_or_else(|| Error::Overflow {
                        key: entry.key.clone(),
                    })?;
            }
            Entry::Vacant(v) => {
                totals.push(Total {
                    key: v.key().clone(),
                    total: sale.amount(),
                });
                v.insert(totals.len() - 1);
            }
        }
    }
    // stable sort
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    Ok(totals)
}

pub fn totals_by_product(sales: &[Sale]) -> Result<Vec<Total>, Error> {
    aggregate(sales, |sale| sale.name().to_owned())
}

pub fn totals_by_month(sales: &[Sale]) -> Result<Vec<Total>, Error> {
    aggregate(sales, Sale::month)
}
