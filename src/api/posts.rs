use axum::{
    extract::{Path, State},
    Json,
};
use sea_orm::Set;
use serde::Deserialize;

use crate::api::envelope::Envelope;
use crate::auth::AuthUser;
use crate::models::post::{self, PostView};
use crate::models::user;
use crate::state::AppState;
use crate::views;

#[derive(Deserialize)]
pub struct NewPost {
    pub title: String,
    pub text: String,
    pub user_id: i32,
    pub book_id: i32,
}

pub async fn add(
    _user: AuthUser,
    State(state): State<AppState>,
    Json(data): Json<NewPost>,
) -> Envelope<i32> {
    let row = post::ActiveModel {
        title: Set(data.title),
        text: Set(data.text),
        user_id: Set(data.user_id),
        book_id: Set(data.book_id),
        ..Default::default()
    };
    match state.posts.add(row).await {
        Ok(id) => Envelope::ok(Some(id)),
        Err(e) => Envelope::failure(e),
    }
}

/// A post whose user or book lookup fails serializes as `value: null`.
pub async fn get_by_id(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Envelope<PostView> {
    let post = match state.posts.get_by_id(id).await {
        Ok(Some(p)) => p,
        Ok(None) => return Envelope::ok(None),
        Err(e) => return Envelope::failure(e),
    };
    views::post_view(state.db(), post).await.into()
}

/// Posts by the named author. An unknown username is an empty list.
pub async fn get_by_username(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Envelope<Vec<PostView>> {
    let owner = match state.users.get_one_by(user::Column::Username, username).await {
        Ok(Some(u)) => u,
        Ok(None) => return Envelope::ok(Some(Vec::new())),
        Err(e) => return Envelope::failure(e),
    };
    let posts = match state.posts.get_all_by(post::Column::UserId, owner.id).await {
        Ok(rows) => rows,
        Err(e) => return Envelope::failure(e),
    };
    match views::post_views(state.db(), posts).await {
        Ok(list) => Envelope::ok(Some(list)),
        Err(e) => Envelope::failure(e),
    }
}

pub async fn get_by_title(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Envelope<Vec<PostView>> {
    let posts = match state.posts.get_all_by(post::Column::Title, title).await {
        Ok(rows) => rows,
        Err(e) => return Envelope::failure(e),
    };
    match views::post_views(state.db(), posts).await {
        Ok(list) => Envelope::ok(Some(list)),
        Err(e) => Envelope::failure(e),
    }
}

pub async fn get_by_page(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(page): Path<i64>,
) -> Envelope<Vec<PostView>> {
    let posts = match state.posts.get_by_page(page).await {
        Ok(rows) => rows,
        Err(e) => return Envelope::failure(e),
    };
    match views::post_views(state.db(), posts).await {
        Ok(list) => Envelope::ok(Some(list)),
        Err(e) => Envelope::failure(e),
    }
}

pub async fn get_all(State(state): State<AppState>) -> Envelope<Vec<PostView>> {
    let posts = match state.posts.get_all().await {
        Ok(rows) => rows,
        Err(e) => return Envelope::failure(e),
    };
    match views::post_views(state.db(), posts).await {
        Ok(list) => Envelope::ok(Some(list)),
        Err(e) => Envelope::failure(e),
    }
}

pub async fn delete(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Envelope<bool> {
    match state.posts.delete(id).await {
        Ok(done) => Envelope::ok(Some(done)),
        Err(e) => Envelope::failure(e),
    }
}
