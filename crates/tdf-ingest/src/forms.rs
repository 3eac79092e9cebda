//! Norwegian registration form export (comma-delimited).
//!
//! Columns, in order: Timestamp, Email Address, Navn, Player-ID,
//! Fødselsår, Mobil (Brukes kun ved viktige beskjeder). The mobile
//! column is optional and defaults to empty.

use tdf_model::{BirthDate, PlayerData};

use crate::error::Result;
use crate::layout::{DelimitedLayout, column, parse_delimited};
use crate::line::tokenize_line;

const LAYOUT: DelimitedLayout = DelimitedLayout {
    name: "form export",
    required_headers: &["Timestamp", "Email Address", "Navn"],
    alternate_hint: "If the file came from the webshop, parse it as a webshop export instead.",
    min_columns: 5,
    split: tokenize_line,
    extract: extract_row,
};

fn extract_row(columns: &[String]) -> PlayerData {
    PlayerData {
        timestamp: column(columns, 0).to_string(),
        email: column(columns, 1).to_string(),
        navn: column(columns, 2).to_string(),
        player_id: column(columns, 3).to_string(),
        birth_date: BirthDate::classify(column(columns, 4)),
        mobile: column(columns, 5).to_string(),
    }
}

/// Parse the comma-delimited form export into deduplicated records.
pub fn parse_forms_csv(text: &str) -> Result<Vec<PlayerData>> {
    parse_delimited(text, &LAYOUT)
}
