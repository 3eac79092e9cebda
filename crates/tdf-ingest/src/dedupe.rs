//! Recency-based deduplication keyed by player id.

use std::collections::BTreeMap;

use tdf_model::PlayerData;

use crate::timestamp::is_more_recent;

/// Collapse records sharing a player id, keeping the most recent entry.
///
/// The first record seen for an id fixes its position in the output; a
/// strictly more recent duplicate replaces it in place without moving
/// it. Recency comparison never fails — unparseable timestamps resolve
/// as later-wins.
pub fn dedupe_by_recency(records: Vec<PlayerData>) -> Vec<PlayerData> {
    let mut slot_by_id: BTreeMap<String, usize> = BTreeMap::new();
    let mut retained: Vec<PlayerData> = Vec::with_capacity(records.len());

    for record in records {
        match slot_by_id.get(&record.player_id) {
            Some(&slot) => {
                if is_more_recent(&record.timestamp, &retained[slot].timestamp) {
                    tracing::debug!(
                        player_id = %record.player_id,
                        "Replacing duplicate registration with more recent entry"
                    );
                    retained[slot] = record;
                }
            }
            None => {
                slot_by_id.insert(record.player_id.clone(), retained.len());
                retained.push(record);
            }
        }
    }

    retained
}
