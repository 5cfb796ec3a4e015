use axum::http::header::{HeaderValue, SET_COOKIE};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::utils::error::{AppError, AppResult};

pub async fn logout() -> AppResult<Response> {
    let cookie_value = "session_token=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0";

    let mut resp = Json(serde_json::json!({
        "success": true,
        "message": "Logged out successfully"
    }))
    .into_response();

    resp.headers_mut().insert(
        SET_COOKIE,
        HeaderValue::from_str(cookie_value)
            .map_err(|e| AppError::InternalError(format!("Invalid cookie value: {}", e)))?,
    );

    Ok(resp)
}
