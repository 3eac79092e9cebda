//! Shared constants and helpers for TDF output generation.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDateTime;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use tdf_model::BirthDate;

/// TDF schema version understood by the pairing application.
pub const TDF_VERSION: &str = "1.74";

/// Fixed game type attribute.
pub const GAME_TYPE: &str = "TRADING_CARD_GAME";

/// Fixed tournament mode attribute.
pub const TOURNAMENT_MODE: &str = "LEAGUECHALLENGE";

/// Country emitted in the data block.
pub const COUNTRY: &str = "Norway";

/// Tournament name used when the config does not carry one.
pub const DEFAULT_TOURNAMENT_NAME: &str = "August Challenge";

/// City placeholder used when the config does not carry one.
pub const DEFAULT_CITY: &str = "Update";

/// Placeholder month/day for year-only birth dates.
const YEAR_ONLY_PREFIX: &str = "02/27";

/// Write a simple text element.
pub fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write an element with no content, keeping the open/close pair on one
/// line as the pairing application's own files do.
pub fn write_empty_element<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    write_text_element(writer, name, "")
}

/// Split a full name on single spaces: first token is the first name,
/// the remaining tokens rejoined are the last name. A one-token name
/// yields an empty last name.
pub fn split_name(full_name: &str) -> (String, String) {
    let mut parts = full_name.trim().split(' ');
    let first = parts.next().unwrap_or("").to_string();
    let rest: Vec<&str> = parts.collect();
    (first, rest.join(" "))
}

/// Re-emit a tagged birth date in the pairing application's
/// `MM/DD/YYYY` shape.
///
/// Year-only values get the fixed placeholder day and month; raw values
/// pass through unchanged rather than erroring (the consumer tolerates
/// them better than a refused import).
pub fn format_birthdate(birth_date: &BirthDate) -> String {
    match birth_date {
        BirthDate::Iso(value) => {
            let mut parts = value.split('-');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(year), Some(month), Some(day)) => format!("{month}/{day}/{year}"),
                _ => value.clone(),
            }
        }
        BirthDate::Euro(value) => {
            let mut parts = value.split('/');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(day), Some(month), Some(year)) => format!("{month}/{day}/{year}"),
                _ => value.clone(),
            }
        }
        BirthDate::Year(year) => format!("{YEAR_ONLY_PREFIX}/{year}"),
        BirthDate::Raw(value) => value.clone(),
    }
}

/// Format a clock value the way the pairing application expects.
pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format("%m/%d/%Y %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn split_name_first_and_rest() {
        assert_eq!(
            split_name("Ola Nordmann Hansen"),
            ("Ola".to_string(), "Nordmann Hansen".to_string())
        );
    }

    #[test]
    fn split_name_single_token() {
        assert_eq!(split_name("Madonna"), ("Madonna".to_string(), String::new()));
    }

    #[test]
    fn split_name_trims_outer_whitespace() {
        assert_eq!(
            split_name("  Jane Doe  "),
            ("Jane".to_string(), "Doe".to_string())
        );
    }

    #[test]
    fn birthdate_iso_becomes_us_order() {
        assert_eq!(
            format_birthdate(&BirthDate::Iso("2005-03-12".to_string())),
            "03/12/2005"
        );
    }

    #[test]
    fn birthdate_euro_swaps_day_and_month() {
        assert_eq!(
            format_birthdate(&BirthDate::Euro("12/03/2005".to_string())),
            "03/12/2005"
        );
    }

    #[test]
    fn birthdate_year_gets_placeholder() {
        assert_eq!(
            format_birthdate(&BirthDate::Year("1990".to_string())),
            "02/27/1990"
        );
        assert_eq!(format_birthdate(&BirthDate::Year(String::new())), "02/27/");
    }

    #[test]
    fn birthdate_raw_passes_through() {
        assert_eq!(
            format_birthdate(&BirthDate::Raw("11/2020".to_string())),
            "11/2020"
        );
    }

    #[test]
    fn datetime_format() {
        let value = NaiveDate::from_ymd_opt(2024, 8, 1)
            .unwrap()
            .and_hms_opt(9, 5, 3)
            .unwrap();
        assert_eq!(format_datetime(value), "08/01/2024 09:05:03");
    }
}
