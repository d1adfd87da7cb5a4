use crate::config::config::Config;
use crate::models::match_report::{Match, NewMatch};
use crate::models::player::{NewPlayer, Player};
use crate::models::schema::{matches, players};
use crate::repository::store::{MatchStore, Snapshot, StoreError};
use async_trait::async_trait;
use deadpool::managed::Object;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::{ConnectionError, ConnectionResult, ExpressionMethods, QueryDsl};
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{
    pooled_connection::{deadpool::Pool, AsyncDieselConnectionManager},
    AsyncPgConnection, RunQueryDsl, SimpleAsyncConnection,
};
use log::{debug, error, info};
use openssl::ssl::{SslConnector, SslMethod};
use postgres_openssl::MakeTlsConnector;

pub type DBPool = Pool<AsyncPgConnection>;

const SCHEMA_SQL: &str = include_str!("../../migrations/schema.sql");

pub struct Database {
    pool: DBPool,
}

impl Database {
    pub fn new(config: &Config) -> Result<Self, StoreError> {
        let manager = match config.database_ca_file.clone() {
            Some(ca_file) => AsyncDieselConnectionManager::<AsyncPgConnection>::new_with_setup(
                config.database_url.clone(),
                move |url| Box::pin(Self::establish(url, ca_file.clone())),
            ),
            None => AsyncDieselConnectionManager::<AsyncPgConnection>::new(
                config.database_url.clone(),
            ),
        };
        let pool = Pool::builder(manager)
            .max_size(config.database_pool_size)
            .build()?;
        Ok(Database { pool })
    }

    async fn establish(database_url: &str, ca_file: String) -> ConnectionResult<AsyncPgConnection> {
        let mut builder = SslConnector::builder(SslMethod::tls())
            .map_err(|e| ConnectionError::BadConnection(e.to_string()))?;
        builder
            .set_ca_file(&ca_file)
            .map_err(|e| ConnectionError::BadConnection(e.to_string()))?;
        let connector = MakeTlsConnector::new(builder.build());
        let (client, connection) = tokio_postgres::connect(database_url, connector)
            .await
            .map_err(|e| ConnectionError::BadConnection(e.to_string()))?;
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("connection error: {e}");
            }
        });
        AsyncPgConnection::try_from(client).await
    }

    /// Creates the tables if they do not exist yet.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        let mut conn = self.get_db_conn().await?;
        conn.batch_execute(SCHEMA_SQL).await?;
        Ok(())
    }

    async fn get_db_conn(
        &self,
    ) -> Result<Object<AsyncDieselConnectionManager<AsyncPgConnection>>, StoreError> {
        self.pool.get().await.map_err(StoreError::PoolError)
    }
}

fn is_foreign_key_violation(err: &DieselError) -> bool {
    matches!(
        err,
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _)
    )
}

/// A foreign-key failure on insert means one of the two ids is not registered.
fn record_match_error(err: DieselError, winner_id: i32, loser_id: i32) -> StoreError {
    if is_foreign_key_violation(&err) {
        return StoreError::UnknownPlayer {
            winner_id,
            loser_id,
        };
    }
    error!("An error occurred in the record_match function. The error: {err}");
    StoreError::QueryError(err)
}

/// A foreign-key failure on delete means matches still point at the players.
fn clear_players_error(err: DieselError) -> StoreError {
    if is_foreign_key_violation(&err) {
        return StoreError::PlayersInUse;
    }
    error!("An error occurred in the clear_players function. The error: {err}");
    StoreError::QueryError(err)
}

#[async_trait]
impl MatchStore for Database {
    async fn register_player(&self, name: &str) -> Result<Player, StoreError> {
        let mut conn = self.get_db_conn().await?;
        let player = diesel::insert_into(players::table)
            .values(&NewPlayer { name })
            .returning((players::id, players::name, players::registered_at))
            .get_result::<Player>(&mut conn)
            .await
            .map_err(|err| {
                error!("An error occurred while inserting a player in register_player. The error: {err}");
                StoreError::QueryError(err)
            })?;
        info!("registered player {} ({})", player.id, player.name);
        Ok(player)
    }

    async fn list_players(&self) -> Result<Vec<Player>, StoreError> {
        let mut conn = self.get_db_conn().await?;
        let roster = players::table
            .select((players::id, players::name, players::registered_at))
            .order(players::id.asc())
            .load::<Player>(&mut conn)
            .await?;
        Ok(roster)
    }

    async fn count_players(&self) -> Result<i64, StoreError> {
        let mut conn = self.get_db_conn().await?;
        let count = players::table
            .count()
            .get_result::<i64>(&mut conn)
            .await?;
        Ok(count)
    }

    async fn clear_players(&self) -> Result<usize, StoreError> {
        let mut conn = self.get_db_conn().await?;
        match diesel::delete(players::table).execute(&mut conn).await {
            Ok(deleted) => {
                info!("deleted {deleted} players");
                Ok(deleted)
            }
            Err(err) => Err(clear_players_error(err)),
        }
    }

    async fn record_match(&self, winner_id: i32, loser_id: i32) -> Result<Match, StoreError> {
        if winner_id == loser_id {
            return Err(StoreError::SelfMatch(winner_id));
        }

        let mut conn = self.get_db_conn().await?;
        match diesel::insert_into(matches::table)
            .values(&NewMatch {
                winner_id,
                loser_id,
            })
            .returning((
                matches::id,
                matches::winner_id,
                matches::loser_id,
                matches::played_at,
            ))
            .get_result::<Match>(&mut conn)
            .await
        {
            Ok(recorded) => {
                info!("recorded match {}: {winner_id} beat {loser_id}", recorded.id);
                Ok(recorded)
            }
            Err(err) => Err(record_match_error(err, winner_id, loser_id)),
        }
    }

    async fn list_matches(&self) -> Result<Vec<Match>, StoreError> {
        let mut conn = self.get_db_conn().await?;
        let history = matches::table
            .select((
                matches::id,
                matches::winner_id,
                matches::loser_id,
                matches::played_at,
            ))
            .order(matches::id.asc())
            .load::<Match>(&mut conn)
            .await?;
        Ok(history)
    }

    async fn clear_matches(&self) -> Result<usize, StoreError> {
        let mut conn = self.get_db_conn().await?;
        let deleted = diesel::delete(matches::table).execute(&mut conn).await?;
        info!("deleted {deleted} matches");
        Ok(deleted)
    }

    async fn snapshot(&self) -> Result<Snapshot, StoreError> {
        let mut conn = self.get_db_conn().await?;
        let snapshot = conn
            .build_transaction()
            .repeatable_read()
            .read_only()
            .run(|conn| {
                async move {
                    let roster = players::table
                        .select((players::id, players::name, players::registered_at))
                        .order(players::id.asc())
                        .load::<Player>(conn)
                        .await?;
                    let history = matches::table
                        .select((
                            matches::id,
                            matches::winner_id,
                            matches::loser_id,
                            matches::played_at,
                        ))
                        .order(matches::id.asc())
                        .load::<Match>(conn)
                        .await?;
                    Ok::<_, DieselError>(Snapshot {
                        players: roster,
                        matches: history,
                    })
                }
                .scope_boxed()
            })
            .await?;
        debug!(
            "read snapshot with {} players and {} matches",
            snapshot.players.len(),
            snapshot.matches.len()
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
#[path = "database_tests.rs"]
mod database_tests;
