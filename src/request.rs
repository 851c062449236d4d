use serde::Deserialize;

/// Body for both POST /notes and PUT /notes/:id. The fields are optional so
/// an absent one binds as SQL NULL and fails the column's NOT NULL
/// constraint, rather than being rejected before it reaches the database.
#[derive(Debug, Deserialize)]
pub struct NotePayload {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterUser {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginUser {
    pub username: String,
    pub password: String,
}
