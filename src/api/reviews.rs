use axum::{
    extract::{Path, State},
    Json,
};
use sea_orm::Set;
use serde::Deserialize;

use crate::api::envelope::Envelope;
use crate::models::review::{self, ReviewView};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct NewReview {
    pub username: String,
    pub text: String,
    pub book_id: i32,
}

pub async fn add(State(state): State<AppState>, Json(data): Json<NewReview>) -> Envelope<i32> {
    let row = review::ActiveModel {
        username: Set(data.username),
        text: Set(data.text),
        book_id: Set(data.book_id),
        ..Default::default()
    };
    match state.reviews.add(row).await {
        Ok(id) => Envelope::ok(Some(id)),
        Err(e) => Envelope::failure(e),
    }
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Envelope<ReviewView> {
    state
        .reviews
        .get_by_id(id)
        .await
        .map(|row| row.map(ReviewView::from))
        .into()
}

pub async fn get_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Envelope<Vec<ReviewView>> {
    match state
        .reviews
        .get_all_by(review::Column::Username, username)
        .await
    {
        Ok(rows) => Envelope::ok(Some(rows.into_iter().map(ReviewView::from).collect())),
        Err(e) => Envelope::failure(e),
    }
}

pub async fn get_by_book(
    State(state): State<AppState>,
    Path(book_id): Path<i32>,
) -> Envelope<Vec<ReviewView>> {
    match state
        .reviews
        .get_all_by(review::Column::BookId, book_id)
        .await
    {
        Ok(rows) => Envelope::ok(Some(rows.into_iter().map(ReviewView::from).collect())),
        Err(e) => Envelope::failure(e),
    }
}

pub async fn get_by_page(
    State(state): State<AppState>,
    Path(page): Path<i64>,
) -> Envelope<Vec<ReviewView>> {
    match state.reviews.get_by_page(page).await {
        Ok(rows) => Envelope::ok(Some(rows.into_iter().map(ReviewView::from).collect())),
        Err(e) => Envelope::failure(e),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Envelope<bool> {
    match state.reviews.delete(id).await {
        Ok(done) => Envelope::ok(Some(done)),
        Err(e) => Envelope::failure(e),
    }
}
