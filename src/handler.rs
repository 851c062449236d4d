use std::sync::Arc;

use argon2::{password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rand_core::OsRng;

use crate::{
    model::{Note, User},
    request::{LoginUser, NotePayload, RegisterUser},
    response::{ErrorResponse, FilteredUser, MessageResponse},
    AppState,
};

pub async fn get_notes_handler(
    State(data): State<Arc<AppState>>,
) -> Result<Json<Vec<Note>>, (StatusCode, Json<ErrorResponse>)> {
    let notes = sqlx::query_as::<_, Note>("SELECT id, title, content FROM notes ORDER BY id")
        .fetch_all(&data.db)
        .await
        .map_err(|e| {
            tracing::error!("Error fetching notes: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch notes".to_string(),
                }),
            )
        })?;
    Ok(Json(notes))
}

pub async fn get_note_handler(
    State(data): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Note>, (StatusCode, Json<ErrorResponse>)> {
    let note = sqlx::query_as::<_, Note>("SELECT id, title, content FROM notes WHERE id = ?")
        .bind(id)
        .fetch_optional(&data.db)
        .await
        .map_err(|e| {
            tracing::error!("Error fetching note: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch note".to_string(),
                }),
            )
        })?;

    match note {
        Some(note) => Ok(Json(note)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Note not found".to_string(),
            }),
        )),
    }
}

pub async fn post_note_handler(
    State(data): State<Arc<AppState>>,
    Json(body): Json<NotePayload>,
) -> Result<Json<Note>, (StatusCode, Json<ErrorResponse>)> {
    // A missing title or content binds as NULL and is rejected by the NOT
    // NULL constraint, which lands in the same error arm as any other
    // storage fault.
    let new_note = sqlx::query_as::<_, Note>(
        "INSERT INTO notes (title, content) VALUES (?, ?) RETURNING id, title, content",
    )
    .bind(body.title)
    .bind(body.content)
    .fetch_one(&data.db)
    .await
    .map_err(|e| {
        tracing::error!("Error adding note: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to add note".to_string(),
            }),
        )
    })?;
    Ok(Json(new_note))
}

pub async fn put_note_handler(
    State(data): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<NotePayload>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    // The affected-row count is not checked: an id with no matching row
    // still reports success.
    sqlx::query("UPDATE notes SET title = ?, content = ? WHERE id = ?")
        .bind(body.title)
        .bind(body.content)
        .bind(id)
        .execute(&data.db)
        .await
        .map_err(|e| {
            tracing::error!("Error updating note: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update note".to_string(),
                }),
            )
        })?;
    Ok(Json(MessageResponse {
        message: "Note updated successfully".to_string(),
    }))
}

pub async fn delete_note_handler(
    State(data): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Same as update: no row-count check, deleting a missing id succeeds.
    sqlx::query("DELETE FROM notes WHERE id = ?")
        .bind(id)
        .execute(&data.db)
        .await
        .map_err(|e| {
            tracing::error!("Error deleting note: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to delete note".to_string(),
                }),
            )
        })?;
    Ok(Json(MessageResponse {
        message: "Note deleted successfully".to_string(),
    }))
}

pub async fn register_user_handler(
    State(data): State<Arc<AppState>>,
    Json(body): Json<RegisterUser>,
) -> Result<Json<FilteredUser>, (StatusCode, Json<ErrorResponse>)> {
    let salt = SaltString::generate(&mut OsRng);
    let hashed_password = Argon2::default()
        .hash_password(body.password.as_bytes(), &salt)
        .map_err(|e| {
            tracing::error!("Error while hashing password: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Registration failed".to_string(),
                }),
            )
        })
        .map(|hash| hash.to_string())?;

    // A duplicate username violates the UNIQUE constraint and fails the
    // insert here.
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (username, password) VALUES (?, ?) RETURNING id, username, password",
    )
    .bind(&body.username)
    .bind(&hashed_password)
    .fetch_one(&data.db)
    .await
    .map_err(|e| {
        tracing::error!("Error registering user: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Registration failed".to_string(),
            }),
        )
    })?;

    Ok(Json(FilteredUser::from(&user)))
}

pub async fn login_user_handler(
    State(data): State<Arc<AppState>>,
    Json(body): Json<LoginUser>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, password FROM users WHERE username = ?",
    )
    .bind(&body.username)
    .fetch_optional(&data.db)
    .await
    .map_err(|e| {
        tracing::error!("Error fetching user: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Login failed".to_string(),
            }),
        )
    })?;

    let user = match user {
        Some(user) => user,
        None => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "User not found".to_string(),
                }),
            ))
        }
    };

    let is_valid = match PasswordHash::new(&user.password) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(body.password.as_bytes(), &parsed_hash)
            .map_or(false, |_| true),
        Err(_) => false,
    };

    if !is_valid {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid credentials".to_string(),
            }),
        ));
    }

    // No token or cookie is issued; a login is a bare acknowledgment and
    // every request stays anonymous.
    Ok(Json(MessageResponse {
        message: "Login successful".to_string(),
    }))
}
