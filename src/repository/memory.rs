use crate::models::match_report::Match;
use crate::models::player::Player;
use crate::repository::store::{MatchStore, Snapshot, StoreError};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

/// In-memory stand-in for the PostgreSQL store, with the same
/// referential rules as the schema.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    players: Vec<Player>,
    matches: Vec<Match>,
    next_player_id: i32,
    next_match_id: i32,
}

#[async_trait]
impl MatchStore for MemoryStore {
    async fn register_player(&self, name: &str) -> Result<Player, StoreError> {
        let mut state = self.state.lock().await;
        state.next_player_id += 1;
        let player = Player {
            id: state.next_player_id,
            name: name.to_string(),
            registered_at: Utc::now(),
        };
        state.players.push(player.clone());
        Ok(player)
    }

    async fn list_players(&self) -> Result<Vec<Player>, StoreError> {
        Ok(self.state.lock().await.players.clone())
    }

    async fn count_players(&self) -> Result<i64, StoreError> {
        Ok(self.state.lock().await.players.len() as i64)
    }

    async fn clear_players(&self) -> Result<usize, StoreError> {
        let mut state = self.state.lock().await;
        if !state.matches.is_empty() {
            return Err(StoreError::PlayersInUse);
        }
        let deleted = state.players.len();
        state.players.clear();
        Ok(deleted)
    }

    async fn record_match(&self, winner_id: i32, loser_id: i32) -> Result<Match, StoreError> {
        if winner_id == loser_id {
            return Err(StoreError::SelfMatch(winner_id));
        }
        let mut state = self.state.lock().await;
        let registered = |id: i32| state.players.iter().any(|p| p.id == id);
        if !registered(winner_id) || !registered(loser_id) {
            return Err(StoreError::UnknownPlayer {
                winner_id,
                loser_id,
            });
        }
        state.next_match_id += 1;
        let recorded = Match {
            id: state.next_match_id,
            winner_id,
            loser_id,
            played_at: Utc::now(),
        };
        state.matches.push(recorded.clone());
        Ok(recorded)
    }

    async fn list_matches(&self) -> Result<Vec<Match>, StoreError> {
        Ok(self.state.lock().await.matches.clone())
    }

    async fn clear_matches(&self) -> Result<usize, StoreError> {
        let mut state = self.state.lock().await;
        let deleted = state.matches.len();
        state.matches.clear();
        Ok(deleted)
    }

    async fn snapshot(&self) -> Result<Snapshot, StoreError> {
        let state = self.state.lock().await;
        Ok(Snapshot {
            players: state.players.clone(),
            matches: state.matches.clone(),
        })
    }
}
