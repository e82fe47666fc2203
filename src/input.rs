//! Order lists read from disk.
//!
//! `.json` files hold a bare array (`[50, 100, 200]`); anything else is read
//! as TOML with an `orders` key (`orders = [50, 100, 200]`).

use serde::Deserialize;
use std::path::Path;

use crate::error::SchedulerError;

#[derive(Debug, Deserialize)]
struct OrderFile {
    orders: Vec<u64>,
}

pub fn load_orders(path: &Path) -> Result<Vec<u64>, SchedulerError> {
    let contents = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(serde_json::from_str(&contents)?)
    } else {
        let file: OrderFile = toml::from_str(&contents)?;
        Ok(file.orders)
    }
}
