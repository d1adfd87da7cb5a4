use crate::models::match_report::Match;
use crate::models::player::Player;
use chrono::Utc;

pub(crate) fn player(id: i32, name: &str) -> Player {
    Player {
        id,
        name: name.to_string(),
        registered_at: Utc::now(),
    }
}

pub(crate) fn roster(names: &[&str]) -> Vec<Player> {
    names
        .iter()
        .zip(1..)
        .map(|(name, id)| player(id, name))
        .collect()
}

pub(crate) fn played(id: i32, winner_id: i32, loser_id: i32) -> Match {
    Match {
        id,
        winner_id,
        loser_id,
        played_at: Utc::now(),
    }
}

/// Builds a match history from `(winner, loser)` pairs, numbering matches from 1.
pub(crate) fn history(results: &[(i32, i32)]) -> Vec<Match> {
    results
        .iter()
        .zip(1..)
        .map(|(&(winner, loser), id)| played(id, winner, loser))
        .collect()
}
