//! Shared parse pipeline for the delimited fail-fast layouts.

use tdf_model::PlayerData;

use crate::dedupe::dedupe_by_recency;
use crate::error::{ParseError, Result};

/// Descriptor for one delimited source layout.
///
/// The pipeline is the same for every delimited export — header check,
/// row loop with ordered field validation, recency dedup — so each
/// layout only supplies its split and field-mapping steps plus the
/// constants the error messages need.
pub(crate) struct DelimitedLayout {
    /// Short layout name used in error messages.
    pub name: &'static str,
    /// Substrings the header line must contain (case-sensitive).
    pub required_headers: &'static [&'static str],
    /// Pointer at the other supported layout, appended to header errors.
    pub alternate_hint: &'static str,
    /// Fewest raw columns a data row may have.
    pub min_columns: usize,
    pub split: fn(&str) -> Vec<String>,
    pub extract: fn(&[String]) -> PlayerData,
}

/// Run the shared pipeline over a raw text buffer.
///
/// Fail-fast: the first header, column-count, or field violation aborts
/// the parse. Surviving records are deduplicated by player id before
/// being returned.
pub(crate) fn parse_delimited(text: &str, layout: &DelimitedLayout) -> Result<Vec<PlayerData>> {
    let lines: Vec<&str> = text.trim().split('\n').collect();
    if lines.len() < 2 {
        return Err(ParseError::MissingData);
    }

    let header = lines[0];
    if !layout
        .required_headers
        .iter()
        .all(|required| header.contains(required))
    {
        return Err(ParseError::HeaderMismatch {
            layout: layout.name,
            expected: layout.required_headers.join(", "),
            hint: layout.alternate_hint,
        });
    }

    let data_rows: Vec<&str> = lines[1..]
        .iter()
        .copied()
        .filter(|line| !line.trim().is_empty())
        .collect();

    let mut records = Vec::with_capacity(data_rows.len());
    for (idx, line) in data_rows.iter().enumerate() {
        // Row 1 is the header, so the first data row reports as row 2.
        let row = idx + 2;
        let columns = (layout.split)(line);
        if columns.len() < layout.min_columns {
            return Err(ParseError::ColumnCount {
                row,
                expected: layout.min_columns,
                got: columns.len(),
            });
        }

        let record = (layout.extract)(&columns);
        if !record.email.contains('@') {
            return Err(ParseError::InvalidEmail {
                row,
                value: record.email,
            });
        }
        if record.navn.is_empty() {
            return Err(ParseError::MissingName { row });
        }
        if record.player_id.is_empty() {
            return Err(ParseError::MissingPlayerId { row });
        }
        records.push(record);
    }

    tracing::debug!(
        layout = layout.name,
        rows = records.len(),
        "Parsed delimited export"
    );
    Ok(dedupe_by_recency(records))
}

/// Fetch a column by position, trimmed, defaulting to empty when the row
/// is short.
pub(crate) fn column(columns: &[String], idx: usize) -> &str {
    columns.get(idx).map(String::as_str).unwrap_or("").trim()
}
