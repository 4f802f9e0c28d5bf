//! Sales summaries and filtered product reports from `name, MM/dd/yyyy, amount` files.
pub mod args;
pub mod sales;
