use serde::{Deserialize, Serialize};

/// Tournament metadata supplied by the caller to the TDF serializer.
///
/// Only the organizer fields are mandatory; the serializer substitutes
/// defaults for the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Organizer display name.
    pub organizer_name: String,
    /// Organizer POP id as registered with the pairing application.
    pub organizer_pop_id: String,
    #[serde(default)]
    pub tournament_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    /// Pre-formatted start date; the serializer falls back to its own
    /// formatted clock value when absent.
    #[serde(default)]
    pub start_date: Option<String>,
}

impl TournamentConfig {
    pub fn new(organizer_name: impl Into<String>, organizer_pop_id: impl Into<String>) -> Self {
        Self {
            organizer_name: organizer_name.into(),
            organizer_pop_id: organizer_pop_id.into(),
            tournament_name: None,
            city: None,
            start_date: None,
        }
    }

    #[must_use]
    pub fn with_tournament_name(mut self, name: impl Into<String>) -> Self {
        self.tournament_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn with_start_date(mut self, start_date: impl Into<String>) -> Self {
        self.start_date = Some(start_date.into());
        self
    }
}
