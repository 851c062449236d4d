use sqlx::SqlitePool;

pub mod config;
pub mod db;
pub mod handler;
pub mod model;
pub mod request;
pub mod response;
pub mod route;

pub struct AppState {
    pub db: SqlitePool,
}
