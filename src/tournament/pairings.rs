use crate::tournament::standings::StandingsRow;
use serde::Serialize;
use thiserror::Error;

/// Two players drawn against each other for the upcoming round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub id1: i32,
    pub name1: String,
    pub id2: i32,
    pub name2: String,
}

impl Pairing {
    fn between(first: &StandingsRow, second: &StandingsRow) -> Self {
        Pairing {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error(
    "cannot pair an odd number of players ({players}); register or remove a player so every player has an opponent"
)]
pub struct InvalidRosterError {
    pub players: usize,
}

/// Pairs each player with the next one in the standings: first with second,
/// third with fourth, and so on.
///
/// `standings` must already be ranked, as returned by
/// [`compute_standings`](crate::tournament::compute_standings). An empty
/// roster yields no pairings; an odd one is rejected since the last player
/// would be left without an opponent.
pub fn compute_pairings(standings: &[StandingsRow]) -> Result<Vec<Pairing>, InvalidRosterError> {
    if standings.len() % 2 != 0 {
        return Err(InvalidRosterError {
            players: standings.len(),
        });
    }

    Ok(standings
        .chunks_exact(2)
        .map(|pair| Pairing::between(&pair[0], &pair[1]))
        .collect())
}

#[cfg(test)]
#[path = "pairings_tests.rs"]
mod pairings_tests;
