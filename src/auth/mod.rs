use crate::state::AppState;
use axum::Router;

pub mod credentials;
pub mod dto;
pub mod handlers;
pub mod repo;
pub mod tokens;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::auth_routes())
}
