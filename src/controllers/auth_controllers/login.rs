use axum::{
    extract::State,
    http::header::{HeaderValue, SET_COOKIE},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use mongodb::bson::{doc, oid::ObjectId};

use crate::controllers::auth_controllers::models::{LoginRequest, LoginResponse};
use crate::models::user_models::User;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::session::create_token;

/// Find-or-create the user by username and hand out a session cookie.
/// The real product authenticates against a hosted identity provider;
/// this keeps a caller identity available for voting and poll closing.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Response> {
    let username = payload.username.trim().to_string();
    if username.is_empty() {
        return Err(AppError::ValidationError("Username must not be empty".to_string()));
    }

    let users = state.db.collection::<User>("users");

    let user = match users.find_one(doc! { "username": username.clone() }).await? {
        Some(user) => user,
        None => {
            let user = User {
                id: ObjectId::new(),
                username: username.clone(),
                created_at: Utc::now(),
            };
            users.insert_one(&user).await?;
            user
        }
    };

    let token = create_token(&user.id.to_hex())
        .map_err(|e| AppError::InternalError(format!("Failed to create session token: {}", e)))?;

    let cookie_value = format!(
        "session_token={}; Path=/; HttpOnly; SameSite=Lax; Max-Age=86400",
        token
    );

    let mut resp = Json(LoginResponse {
        user_id: user.id.to_hex(),
        username: user.username,
    })
    .into_response();

    resp.headers_mut().insert(
        SET_COOKIE,
        HeaderValue::from_str(&cookie_value)
            .map_err(|e| AppError::InternalError(format!("Invalid cookie value: {}", e)))?,
    );

    Ok(resp)
}
