use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{
    handler::{
        delete_note_handler, get_note_handler, get_notes_handler, login_user_handler,
        post_note_handler, put_note_handler, register_user_handler,
    },
    AppState,
};

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/notes", get(get_notes_handler))
        .route("/notes", post(post_note_handler))
        .route("/notes/:id", get(get_note_handler))
        .route("/notes/:id", put(put_note_handler))
        .route("/notes/:id", delete(delete_note_handler))
        .route("/register", post(register_user_handler))
        .route("/login", post(login_user_handler))
        .with_state(app_state)
}
