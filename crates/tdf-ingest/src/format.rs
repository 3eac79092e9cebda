//! Source format selection for the delimited exports.

use tdf_model::PlayerData;

use crate::error::Result;
use crate::{forms, webshop};

/// Which delimited export layout a text buffer is in.
///
/// The roster spreadsheet is not listed here: it arrives as a cell grid,
/// not text, and goes through [`crate::grid::parse_roster_grid`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceFormat {
    /// Comma-delimited Norwegian registration form export.
    #[default]
    Forms,
    /// Tab-delimited webshop order export.
    Webshop,
}

/// Parse a delimited export in the given format.
pub fn parse_registrations(text: &str, format: SourceFormat) -> Result<Vec<PlayerData>> {
    match format {
        SourceFormat::Forms => forms::parse_forms_csv(text),
        SourceFormat::Webshop => webshop::parse_webshop_export(text),
    }
}
