use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// `password` holds the Argon2 PHC string, never the raw credential. Rows of
/// this type are filtered through `response::FilteredUser` before leaving the
/// server.
#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}
