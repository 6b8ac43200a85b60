use axum::{
    extract::{Path, State},
    Json,
};
use sea_orm::Set;
use serde::Deserialize;

use crate::api::envelope::Envelope;
use crate::models::book::{self, BookView};
use crate::models::genre;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct NewBook {
    pub name: String,
    pub author: String,
    pub genre_id: Option<i32>,
}

pub async fn add(State(state): State<AppState>, Json(data): Json<NewBook>) -> Envelope<i32> {
    let row = book::ActiveModel {
        name: Set(data.name),
        author: Set(data.author),
        genre_id: Set(data.genre_id),
        ..Default::default()
    };
    match state.books.add(row).await {
        Ok(id) => Envelope::ok(Some(id)),
        Err(e) => Envelope::failure(e),
    }
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Envelope<BookView> {
    state
        .books
        .get_by_id(id)
        .await
        .map(|row| row.map(BookView::from))
        .into()
}

pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Envelope<BookView> {
    state
        .books
        .get_one_by(book::Column::Name, name)
        .await
        .map(|row| row.map(BookView::from))
        .into()
}

/// Books in the named genre. An unknown genre is an empty list, not an
/// error.
pub async fn get_by_genre(
    State(state): State<AppState>,
    Path(genre_name): Path<String>,
) -> Envelope<Vec<BookView>> {
    let genre = match state.genres.get_one_by(genre::Column::Name, genre_name).await {
        Ok(Some(g)) => g,
        Ok(None) => return Envelope::ok(Some(Vec::new())),
        Err(e) => return Envelope::failure(e),
    };
    match state.books.get_all_by(book::Column::GenreId, genre.id).await {
        Ok(rows) => Envelope::ok(Some(rows.into_iter().map(BookView::from).collect())),
        Err(e) => Envelope::failure(e),
    }
}

pub async fn get_by_page(
    State(state): State<AppState>,
    Path(page): Path<i64>,
) -> Envelope<Vec<BookView>> {
    match state.books.get_by_page(page).await {
        Ok(rows) => Envelope::ok(Some(rows.into_iter().map(BookView::from).collect())),
        Err(e) => Envelope::failure(e),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Envelope<bool> {
    match state.books.delete(id).await {
        Ok(done) => Envelope::ok(Some(done)),
        Err(e) => Envelope::failure(e),
    }
}
