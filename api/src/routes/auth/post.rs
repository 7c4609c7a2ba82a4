use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::user;
use serde::{Deserialize, Serialize};
use util::state::AppState;

use crate::auth::generate_jwt;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Default)]
pub struct LoginResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub admin: bool,
    pub token: String,
    pub expires_at: String,
}

/// POST /auth/login
///
/// Authenticate with username and password.
///
/// ### Request Body
/// ```json
/// {
///   "username": "lecturer1",
///   "password": "strongpassword"
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "username": "lecturer1",
///     "email": "user@example.com",
///     "admin": false,
///     "token": "jwt_token_here",
///     "expires_at": "2026-08-06T11:00:00Z"
///   },
///   "message": "Login successful"
/// }
/// ```
///
/// - `401 Unauthorized` (unknown user or wrong password)
/// ```json
/// {
///   "success": false,
///   "message": "Invalid username or password"
/// }
/// ```
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    match user::Model::verify_credentials(app_state.db(), &req.username, &req.password).await {
        Ok(Some(user)) => {
            let (token, expires_at) = generate_jwt(user.id, user.admin);
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    LoginResponse {
                        id: user.id,
                        username: user.username,
                        email: user.email,
                        admin: user.admin,
                        token,
                        expires_at,
                    },
                    "Login successful",
                )),
            )
        }
        Ok(None) => (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<LoginResponse>::error(
                "Invalid username or password",
            )),
        ),
        Err(err) => {
            tracing::error!(error = %err, "Database error during login");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<LoginResponse>::error(
                    "Database error during login",
                )),
            )
        }
    }
}
