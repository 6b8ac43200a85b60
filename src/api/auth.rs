use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Form, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::auth::{create_jwt, verify_password};
use crate::models::user;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

#[derive(Serialize)]
pub struct Token {
    access_token: String,
    token_type: String,
}

/// `POST /login`, form-encoded. Unknown user and wrong password get the
/// same answer so usernames cannot be enumerated.
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> impl IntoResponse {
    tracing::info!("Login attempt for user: {}", form.username);

    let rejected = || {
        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Bearer")],
            Json(json!({ "error": "Incorrect username or password" })),
        )
            .into_response()
    };

    let user = match state
        .users
        .get_one_by(user::Column::Username, form.username.as_str())
        .await
    {
        Ok(Some(u)) => u,
        _ => {
            tracing::warn!("Login rejected for user: {}", form.username);
            return rejected();
        }
    };

    match verify_password(&form.password, &user.password_hash) {
        Ok(true) => {}
        _ => {
            tracing::warn!("Login rejected for user: {}", form.username);
            return rejected();
        }
    }

    match create_jwt(&user.username) {
        Ok(token) => Json(Token {
            access_token: token,
            token_type: "bearer".to_string(),
        })
        .into_response(),
        Err(e) => {
            tracing::error!("Token issuance failed: {}", e);
            rejected()
        }
    }
}
