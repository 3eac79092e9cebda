//! Roster spreadsheet grid parsing (sectioned export).
//!
//! The roster export is not a flat table: registration rows are grouped
//! under section marker rows ("Deltar (42)", "Venteliste (3)", ...) and
//! the column header row sits somewhere between them. Only rows under
//! the attending section become records, and malformed rows are skipped
//! silently — this source is fail-open, unlike the delimited layouts.

use chrono::NaiveDateTime;

use tdf_model::{BirthDate, GridParseResult, PlayerData, SectionTally};

const NAME_LABEL: &str = "Navn";
const EMAIL_LABEL: &str = "E-post";
const PLAYER_ID_LABEL: &str = "Spiller ID";
const BIRTH_DATE_LABEL: &str = "Fødselsdato";
const MOBILE_LABEL: &str = "Mobilnummer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Attending,
    Waitlist,
    NoResponse,
    NotAttending,
}

impl Section {
    const ALL: [Section; 4] = [
        Section::Attending,
        Section::Waitlist,
        Section::NoResponse,
        Section::NotAttending,
    ];

    /// Marker prefix as written in the export, up to and including the
    /// opening parenthesis of the count.
    fn marker(self) -> &'static str {
        match self {
            Section::Attending => "Deltar (",
            Section::Waitlist => "Venteliste (",
            Section::NoResponse => "Ikke svart (",
            Section::NotAttending => "Kommer ikke (",
        }
    }
}

/// Parse a 2-D cell grid extracted from the roster spreadsheet.
///
/// Stateful scan: section markers switch the active section and record
/// their counts, the header row establishes the column lookup, and
/// subsequent rows in the attending section become records. `now`
/// supplies the synthesized timestamp, since the export carries none.
pub fn parse_roster_grid(rows: &[Vec<String>], now: NaiveDateTime) -> GridParseResult {
    let mut result = GridParseResult::default();
    let mut current_section: Option<Section> = None;
    let mut headers: Option<Vec<String>> = None;

    let timestamp = now.format("%Y-%m-%dT%H:%M:%S").to_string();

    for row in rows {
        let first_cell = row.first().map(|cell| cell.trim()).unwrap_or("");

        if let Some(section) = detect_section(first_cell) {
            current_section = Some(section);
            if let Some(count) = section_count(first_cell, section.marker()) {
                *tally_slot(&mut result.sections, section) = count;
            }
            continue;
        }

        if first_cell == NAME_LABEL && row.iter().any(|cell| cell.contains(EMAIL_LABEL)) {
            headers = Some(row.iter().map(|cell| cell.trim().to_string()).collect());
            continue;
        }

        let Some(header_row) = headers.as_deref() else {
            continue;
        };
        if current_section != Some(Section::Attending) {
            continue;
        }
        if first_cell.is_empty() || row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        if let Some(player) = extract_player(row, header_row, &timestamp) {
            result.players.push(player);
        }
    }

    result.total_found = result.players.len();
    tracing::debug!(
        found = result.total_found,
        attending = result.sections.attending,
        "Parsed roster grid"
    );
    result
}

fn detect_section(first_cell: &str) -> Option<Section> {
    Section::ALL
        .into_iter()
        .find(|section| first_cell.contains(section.marker()))
}

/// Extract the parenthesized count following a section marker.
fn section_count(cell: &str, marker: &str) -> Option<u32> {
    let start = cell.find(marker)? + marker.len();
    let rest = &cell[start..];
    let end = rest.find(')')?;
    rest[..end].parse().ok()
}

fn tally_slot(tally: &mut SectionTally, section: Section) -> &mut u32 {
    match section {
        Section::Attending => &mut tally.attending,
        Section::Waitlist => &mut tally.waitlist,
        Section::NoResponse => &mut tally.no_response,
        Section::NotAttending => &mut tally.not_attending,
    }
}

fn extract_player(row: &[String], headers: &[String], timestamp: &str) -> Option<PlayerData> {
    let lookup = |label: &str| -> &str {
        headers
            .iter()
            .position(|header| header.contains(label))
            .and_then(|idx| row.get(idx))
            .map(|cell| cell.trim())
            .unwrap_or("")
    };

    let navn = lookup(NAME_LABEL);
    let email = lookup(EMAIL_LABEL);
    let player_id = lookup(PLAYER_ID_LABEL);
    let birth_date = lookup(BIRTH_DATE_LABEL);
    let mobile = lookup(MOBILE_LABEL);

    if navn.is_empty() || (email.is_empty() && player_id.is_empty()) {
        tracing::debug!("Skipping roster row without name or identifiers");
        return None;
    }
    // Guardian rows accompany a minor's registration: contact email, no
    // player id of their own.
    if player_id.is_empty() && !email.is_empty() {
        tracing::debug!("Skipping guardian row without player id");
        return None;
    }

    Some(PlayerData {
        timestamp: timestamp.to_string(),
        email: email.to_string(),
        navn: navn.to_string(),
        player_id: player_id.to_string(),
        birth_date: reformat_birth_date(birth_date),
        mobile: mobile.to_string(),
    })
}

/// Rewrite a `DD/MM/YYYY` cell as zero-padded `YYYY-MM-DD`; anything
/// else keeps its original shape.
fn reformat_birth_date(raw: &str) -> BirthDate {
    if raw.contains('/') {
        let parts: Vec<&str> = raw.split('/').collect();
        if let [day, month, year] = parts[..] {
            return BirthDate::Iso(format!("{year}-{month:0>2}-{day:0>2}"));
        }
    }
    BirthDate::classify(raw)
}
