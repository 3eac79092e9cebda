//! TDF tournament document generation.

use anyhow::Result;
use chrono::NaiveDateTime;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use tdf_model::{PlayerData, TournamentConfig};

use crate::common::{
    COUNTRY, DEFAULT_CITY, DEFAULT_TOURNAMENT_NAME, GAME_TYPE, TDF_VERSION, TOURNAMENT_MODE,
    format_birthdate, format_datetime, split_name, write_empty_element, write_text_element,
};

/// Render a normalized record set plus tournament metadata as one TDF
/// XML document.
///
/// `now` is the injected clock: every player's creation and modification
/// date uses this single value, formatted once, and the start date falls
/// back to it when the config carries none. Free text and attribute
/// values are entity-escaped by the writer, exactly once.
pub fn generate_tdf(
    players: &[PlayerData],
    config: &TournamentConfig,
    now: NaiveDateTime,
) -> Result<String> {
    let mut xml = Writer::new_with_indent(Vec::new(), b'\t', 1);

    let stamp = format_datetime(now);
    let start_date = config.start_date.clone().unwrap_or_else(|| stamp.clone());

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut tournament = BytesStart::new("tournament");
    tournament.push_attribute(("type", "2"));
    tournament.push_attribute(("stage", "1"));
    tournament.push_attribute(("version", TDF_VERSION));
    tournament.push_attribute(("gametype", GAME_TYPE));
    tournament.push_attribute(("mode", TOURNAMENT_MODE));
    xml.write_event(Event::Start(tournament))?;

    xml.write_event(Event::Start(BytesStart::new("data")))?;
    let name = config
        .tournament_name
        .as_deref()
        .unwrap_or(DEFAULT_TOURNAMENT_NAME);
    write_text_element(&mut xml, "name", name)?;
    write_empty_element(&mut xml, "id")?;
    write_text_element(&mut xml, "city", config.city.as_deref().unwrap_or(DEFAULT_CITY))?;
    write_empty_element(&mut xml, "state")?;
    write_text_element(&mut xml, "country", COUNTRY)?;
    write_text_element(&mut xml, "roundtime", "0")?;
    write_text_element(&mut xml, "finalsroundtime", "0")?;

    let mut organizer = BytesStart::new("organizer");
    organizer.push_attribute(("popid", config.organizer_pop_id.as_str()));
    organizer.push_attribute(("name", config.organizer_name.as_str()));
    xml.write_event(Event::Empty(organizer))?;

    write_text_element(&mut xml, "startdate", &start_date)?;
    write_text_element(&mut xml, "lessswiss", "false")?;
    write_text_element(&mut xml, "autotablenumber", "true")?;
    write_text_element(&mut xml, "overflowtablestart", "0")?;
    xml.write_event(Event::End(BytesEnd::new("data")))?;

    write_text_element(&mut xml, "timeelapsed", "0")?;

    xml.write_event(Event::Start(BytesStart::new("players")))?;
    for player in players {
        let (first_name, last_name) = split_name(&player.navn);

        let mut node = BytesStart::new("player");
        node.push_attribute(("userid", player.player_id.as_str()));
        xml.write_event(Event::Start(node))?;
        write_text_element(&mut xml, "firstname", &first_name)?;
        write_text_element(&mut xml, "lastname", &last_name)?;
        write_text_element(&mut xml, "birthdate", &format_birthdate(&player.birth_date))?;
        write_text_element(&mut xml, "creationdate", &stamp)?;
        write_text_element(&mut xml, "lastmodifieddate", &stamp)?;
        xml.write_event(Event::End(BytesEnd::new("player")))?;
    }
    xml.write_event(Event::End(BytesEnd::new("players")))?;

    // The pairing application expects these sections even when empty.
    xml.write_event(Event::Start(BytesStart::new("pods")))?;
    xml.write_event(Event::End(BytesEnd::new("pods")))?;
    xml.write_event(Event::Start(BytesStart::new("finalsoptions")))?;
    xml.write_event(Event::End(BytesEnd::new("finalsoptions")))?;

    xml.write_event(Event::End(BytesEnd::new("tournament")))?;

    Ok(String::from_utf8(xml.into_inner())?)
}
