use serde::{Deserialize, Serialize};

use crate::player::PlayerData;

/// Per-category registration counts captured from the roster spreadsheet's
/// section marker rows.
///
/// The counts come from the parenthesized totals in the marker cells
/// ("Deltar (42)" etc.), not from counting parsed rows, so they may differ
/// from the number of records actually extracted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionTally {
    /// "Deltar" — attending.
    pub attending: u32,
    /// "Venteliste" — waitlist.
    pub waitlist: u32,
    /// "Ikke svart" — no response.
    pub no_response: u32,
    /// "Kommer ikke" — not attending.
    pub not_attending: u32,
}

/// Outcome of parsing a roster spreadsheet grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridParseResult {
    /// Records extracted from the attending section, in grid order.
    pub players: Vec<PlayerData>,
    /// Number of records extracted.
    pub total_found: usize,
    pub sections: SectionTally,
}
