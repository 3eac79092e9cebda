pub mod grid;
pub mod player;
pub mod tournament;

pub use grid::{GridParseResult, SectionTally};
pub use player::{BirthDate, PlayerData};
pub use tournament::TournamentConfig;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_data_serializes() {
        let player = PlayerData {
            timestamp: "2024-01-01".to_string(),
            email: "a@b.com".to_string(),
            navn: "Jane Doe".to_string(),
            player_id: "P1".to_string(),
            birth_date: BirthDate::Year("1990".to_string()),
            mobile: String::new(),
        };
        let json = serde_json::to_string(&player).expect("serialize player");
        let round: PlayerData = serde_json::from_str(&json).expect("deserialize player");
        assert_eq!(round, player);
        assert!(json.contains("\"kind\":\"year\""));
    }

    #[test]
    fn tournament_config_builder() {
        let config = TournamentConfig::new("Oslo Pokemon Liga", "654321")
            .with_tournament_name("Vinterliga")
            .with_city("Oslo");
        assert_eq!(config.tournament_name.as_deref(), Some("Vinterliga"));
        assert_eq!(config.city.as_deref(), Some("Oslo"));
        assert!(config.start_date.is_none());
    }

    #[test]
    fn tournament_config_optional_fields_default() {
        let config: TournamentConfig =
            serde_json::from_str(r#"{"organizer_name":"N","organizer_pop_id":"1"}"#)
                .expect("deserialize config");
        assert!(config.tournament_name.is_none());
        assert!(config.city.is_none());
        assert!(config.start_date.is_none());
    }
}
