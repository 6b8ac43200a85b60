use axum::{
    extract::{Path, State},
    Json,
};
use sea_orm::Set;
use serde::Deserialize;

use crate::api::envelope::Envelope;
use crate::models::genre::{self, GenreView};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct NewGenre {
    pub name: String,
}

pub async fn add(State(state): State<AppState>, Json(data): Json<NewGenre>) -> Envelope<i32> {
    let row = genre::ActiveModel {
        name: Set(data.name),
        ..Default::default()
    };
    match state.genres.add(row).await {
        Ok(id) => Envelope::ok(Some(id)),
        Err(e) => Envelope::failure(e),
    }
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Envelope<GenreView> {
    state
        .genres
        .get_by_id(id)
        .await
        .map(|row| row.map(GenreView::from))
        .into()
}

pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Envelope<GenreView> {
    state
        .genres
        .get_one_by(genre::Column::Name, name)
        .await
        .map(|row| row.map(GenreView::from))
        .into()
}

pub async fn get_by_page(
    State(state): State<AppState>,
    Path(page): Path<i64>,
) -> Envelope<Vec<GenreView>> {
    match state.genres.get_by_page(page).await {
        Ok(rows) => Envelope::ok(Some(rows.into_iter().map(GenreView::from).collect())),
        Err(e) => Envelope::failure(e),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Envelope<bool> {
    match state.genres.delete(id).await {
        Ok(done) => Envelope::ok(Some(done)),
        Err(e) => Envelope::failure(e),
    }
}
