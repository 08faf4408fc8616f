use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, PublicUser, SignupRequest},
        repo::User,
        tokens::TokenPair,
    },
    error::AppError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let email = payload.email.unwrap_or_default().trim().to_lowercase();
    let password = payload.password.unwrap_or_default();
    let first_name = payload.first_name.unwrap_or_default().trim().to_string();
    let last_name = payload.last_name.unwrap_or_default().trim().to_string();

    // Length is counted in characters, not UTF-8 bytes.
    if email.is_empty() || password.chars().count() < 6 {
        warn!("signup with missing email or too-short password");
        return Err(AppError::InvalidInput);
    }

    let stored = state.verifier.protect(&password)?;
    let user = User::create(&state.db, &email, &stored, &first_name, &last_name).await?;

    let tokens = TokenPair::issue();
    info!(user_id = user.id, email = %user.email, "user signed up");
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_in: tokens.expires_in,
            user: PublicUser::from(user),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let email = payload.email.unwrap_or_default().trim().to_lowercase();
    let password = payload.password.unwrap_or_default();

    // Unknown email and wrong password both answer with the same error so
    // the response does not reveal which half was wrong.
    let user = match User::find_by_email(&state.db, &email).await? {
        Some(user) => user,
        None => {
            warn!(email = %email, "login with unknown email");
            return Err(AppError::InvalidCredentials);
        }
    };

    if !state.verifier.verify(&password, &user.password)? {
        warn!(user_id = user.id, "login with wrong password");
        return Err(AppError::InvalidCredentials);
    }

    let tokens = TokenPair::issue();
    info!(user_id = user.id, email = %user.email, "user logged in");
    Ok(Json(AuthResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        expires_in: tokens.expires_in,
        user: PublicUser::from(user),
    }))
}
