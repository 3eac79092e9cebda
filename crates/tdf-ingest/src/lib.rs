//! Registration export parsing.
//!
//! Three source layouts converge on the normalized
//! [`tdf_model::PlayerData`] record:
//!
//! - **Form export**: comma-delimited Norwegian registration form
//!   ([`parse_forms_csv`]), fail-fast with row-numbered errors.
//! - **Webshop export**: tab-delimited order export
//!   ([`parse_webshop_export`]), fail-fast.
//! - **Roster grid**: sectioned spreadsheet cell grid
//!   ([`parse_roster_grid`]), fail-open with silent row skips.
//!
//! The delimited layouts deduplicate by player id before returning
//! ([`dedupe_by_recency`]); the roster grid returns its raw sequence
//! plus section tallies.

pub mod dedupe;
pub mod error;
pub mod format;
pub mod forms;
pub mod grid;
mod layout;
pub mod line;
pub mod timestamp;
pub mod webshop;

pub use dedupe::dedupe_by_recency;
pub use error::{ParseError, Result};
pub use format::{SourceFormat, parse_registrations};
pub use forms::parse_forms_csv;
pub use grid::parse_roster_grid;
pub use line::tokenize_line;
pub use timestamp::{is_more_recent, parse_timestamp};
pub use webshop::parse_webshop_export;
