use crate::models::match_report::Match;
use crate::models::player::Player;
use serde::Serialize;
use std::collections::HashMap;

/// One player's record at a point in the tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsRow {
    pub id: i32,
    pub name: String,
    /// Matches this player won.
    pub wins: u32,
    /// Matches this player played, won or lost.
    pub matches: u32,
}

/// Ranks every player on the roster by descending wins.
///
/// Players with equal wins are ordered by ascending id, so the result only
/// depends on the inputs. A player with no matches appears with zero wins and
/// zero matches. Matches naming an id that is not on the roster are not
/// credited to anyone.
pub fn compute_standings(players: &[Player], matches: &[Match]) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = players
        .iter()
        .map(|player| StandingsRow {
            id: player.id,
            name: player.name.clone(),
            wins: 0,
            matches: 0,
        })
        .collect();

    let positions: HashMap<i32, usize> = rows
        .iter()
        .enumerate()
        .map(|(position, row)| (row.id, position))
        .collect();

    for played in matches {
        if let Some(row) = positions
            .get(&played.winner_id)
            .and_then(|&position| rows.get_mut(position))
        {
            row.wins += 1;
            row.matches += 1;
        }
        if let Some(row) = positions
            .get(&played.loser_id)
            .and_then(|&position| rows.get_mut(position))
        {
            row.matches += 1;
        }
    }

    rows.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.id.cmp(&b.id)));
    rows
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
