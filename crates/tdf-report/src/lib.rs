//! TDF output generation.
//!
//! Renders a normalized registration record set plus tournament metadata
//! into the fixed tournament-definition XML dialect consumed by the
//! external pairing application. The document shape is rigid; the only
//! caller-controlled parts are the tournament metadata, the player list,
//! and the injected clock value.

mod common;
mod tdf_xml;

pub use common::{format_birthdate, format_datetime, split_name};
pub use tdf_xml::generate_tdf;
