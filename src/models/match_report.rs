use chrono::{DateTime, Utc};
use diesel::{Insertable, Queryable};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Queryable)]
#[diesel(table_name = crate::models::schema::matches)]
pub struct Match {
    pub id: i32,
    #[serde(rename = "winnerId")]
    pub winner_id: i32,
    #[serde(rename = "loserId")]
    pub loser_id: i32,
    #[serde(rename = "playedAt")]
    pub played_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::models::schema::matches)]
pub struct NewMatch {
    pub winner_id: i32,
    pub loser_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct ReportMatchSchema {
    #[serde(rename = "winnerId")]
    pub winner_id: i32,
    #[serde(rename = "loserId")]
    pub loser_id: i32,
}
