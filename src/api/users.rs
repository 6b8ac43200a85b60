use axum::{
    extract::{Path, State},
    Json,
};
use sea_orm::Set;
use serde::Deserialize;

use crate::api::envelope::Envelope;
use crate::auth::{hash_password, AuthUser};
use crate::models::user::{self, UserView};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

/// `POST /reg` - open. Only the argon2 hash of the password is stored.
pub async fn register(State(state): State<AppState>, Json(data): Json<NewUser>) -> Envelope<i32> {
    let hash = match hash_password(&data.password) {
        Ok(h) => h,
        Err(e) => return Envelope::failure(e),
    };
    let row = user::ActiveModel {
        username: Set(data.username),
        password_hash: Set(hash),
        ..Default::default()
    };
    match state.users.add(row).await {
        Ok(id) => Envelope::ok(Some(id)),
        Err(e) => Envelope::failure(e),
    }
}

pub async fn get_by_id(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Envelope<UserView> {
    state
        .users
        .get_by_id(id)
        .await
        .map(|row| row.map(UserView::from))
        .into()
}

pub async fn get_by_username(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Envelope<UserView> {
    state
        .users
        .get_one_by(user::Column::Username, username)
        .await
        .map(|row| row.map(UserView::from))
        .into()
}

pub async fn get_by_page(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(page): Path<i64>,
) -> Envelope<Vec<UserView>> {
    match state.users.get_by_page(page).await {
        Ok(rows) => Envelope::ok(Some(rows.into_iter().map(UserView::from).collect())),
        Err(e) => Envelope::failure(e),
    }
}

pub async fn delete(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Envelope<bool> {
    match state.users.delete(id).await {
        Ok(done) => Envelope::ok(Some(done)),
        Err(e) => Envelope::failure(e),
    }
}
