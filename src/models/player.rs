use chrono::{DateTime, Utc};
use diesel::{Insertable, Queryable};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Queryable)]
#[diesel(table_name = crate::models::schema::players)]
pub struct Player {
    pub id: i32,
    pub name: String,
    #[serde(rename = "registeredAt")]
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::models::schema::players)]
pub struct NewPlayer<'a> {
    pub name: &'a str,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct RegisterPlayerSchema {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must not be empty and must be at most 100 characters long"
    ))]
    pub name: String,
}
