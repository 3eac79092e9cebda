//! Webshop order export (tab-delimited).
//!
//! The export is wide — an order row carries at least 19 columns — and
//! only a handful matter here: order date (1), guest first/last name
//! (2, 3), email (4), player id (17), and birthday (18, `YYYY-MM-DD`).
//! There is no quoting and no mobile number in this source.

use tdf_model::{BirthDate, PlayerData};

use crate::error::Result;
use crate::layout::{DelimitedLayout, column, parse_delimited};

const LAYOUT: DelimitedLayout = DelimitedLayout {
    name: "webshop export",
    required_headers: &["Order date", "Email", "Player ID"],
    alternate_hint:
        "If the file came from the registration form, parse it as a form export instead.",
    min_columns: 19,
    split: split_tabs,
    extract: extract_row,
};

fn split_tabs(line: &str) -> Vec<String> {
    line.split('\t').map(str::to_string).collect()
}

fn extract_row(columns: &[String]) -> PlayerData {
    let first_name = column(columns, 2);
    let last_name = column(columns, 3);
    let birthday = column(columns, 18);
    // Only the year survives; the serializer re-expands it with the
    // placeholder day and month.
    let birth_year = birthday.split('-').next().unwrap_or("").to_string();

    PlayerData {
        timestamp: column(columns, 1).to_string(),
        email: column(columns, 4).to_string(),
        navn: format!("{first_name} {last_name}").trim().to_string(),
        player_id: column(columns, 17).to_string(),
        birth_date: BirthDate::Year(birth_year),
        mobile: String::new(),
    }
}

/// Parse the tab-delimited webshop export into deduplicated records.
pub fn parse_webshop_export(text: &str) -> Result<Vec<PlayerData>> {
    parse_delimited(text, &LAYOUT)
}
