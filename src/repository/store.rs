use crate::models::match_report::Match;
use crate::models::player::Player;
use async_trait::async_trait;
use diesel_async::pooled_connection::deadpool::{BuildError, PoolError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("could not build database pool: {0}")]
    PoolBuildError(#[from] BuildError),
    #[error("could not get database connection from pool: {0}")]
    PoolError(#[from] PoolError),
    #[error("error executing database query: {0}")]
    QueryError(#[from] diesel::result::Error),
    #[error("match references an unregistered player (winner {winner_id}, loser {loser_id})")]
    UnknownPlayer { winner_id: i32, loser_id: i32 },
    #[error("player {0} cannot play against themselves")]
    SelfMatch(i32),
    #[error("players still have recorded matches; delete the matches first")]
    PlayersInUse,
}

/// The roster and match history as read at a single point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub players: Vec<Player>,
    pub matches: Vec<Match>,
}

/// Durable record of players and match outcomes.
///
/// Players and matches are listed in ascending id order.
#[async_trait]
pub trait MatchStore: Send + Sync {
    async fn register_player(&self, name: &str) -> Result<Player, StoreError>;

    async fn list_players(&self) -> Result<Vec<Player>, StoreError>;

    async fn count_players(&self) -> Result<i64, StoreError>;

    /// Removes every player and returns how many were removed. Fails with
    /// [`StoreError::PlayersInUse`] while matches still reference them.
    async fn clear_players(&self) -> Result<usize, StoreError>;

    async fn record_match(&self, winner_id: i32, loser_id: i32) -> Result<Match, StoreError>;

    async fn list_matches(&self) -> Result<Vec<Match>, StoreError>;

    async fn clear_matches(&self) -> Result<usize, StoreError>;

    /// Reads roster and history together so standings never mix two states.
    async fn snapshot(&self) -> Result<Snapshot, StoreError>;
}
