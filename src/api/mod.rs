pub mod auth;
pub mod books;
pub mod envelope;
pub mod genres;
pub mod posts;
pub mod reviews;
pub mod users;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

/// Route map. `/login` and `/reg` are open; user and post routes sit behind
/// the bearer-token gate (via the `AuthUser` extractor on their handlers).
pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Auth
        .route("/login", post(auth::login))
        .route("/reg", post(users::register))
        // Users
        .route("/users/get/id/:id", get(users::get_by_id))
        .route("/users/get/username/:username", get(users::get_by_username))
        .route("/users/get/page/:page", get(users::get_by_page))
        .route("/users/delete/:id", delete(users::delete))
        // Books
        .route("/books/add", post(books::add))
        .route("/books/get/id/:id", get(books::get_by_id))
        .route("/books/get/name/:name", get(books::get_by_name))
        .route("/books/get/genre/:genre", get(books::get_by_genre))
        .route("/books/get/page/:page", get(books::get_by_page))
        .route("/books/delete/:id", delete(books::delete))
        // Genres
        .route("/genres/add", post(genres::add))
        .route("/genres/get/id/:id", get(genres::get_by_id))
        .route("/genres/get/name/:name", get(genres::get_by_name))
        .route("/genres/get/page/:page", get(genres::get_by_page))
        .route("/genres/delete/:id", delete(genres::delete))
        // Posts
        .route("/posts/add", post(posts::add))
        .route("/posts/get/id/:id", get(posts::get_by_id))
        .route("/posts/get/username/:username", get(posts::get_by_username))
        .route("/posts/get/title/:title", get(posts::get_by_title))
        .route("/posts/get/page/:page", get(posts::get_by_page))
        .route("/posts/get/all", get(posts::get_all))
        .route("/posts/delete/:id", delete(posts::delete))
        // Reviews
        .route("/reviews/add", post(reviews::add))
        .route("/reviews/get/id/:id", get(reviews::get_by_id))
        .route(
            "/reviews/get/username/:username",
            get(reviews::get_by_username),
        )
        .route("/reviews/get/book/:book_id", get(reviews::get_by_book))
        .route("/reviews/get/page/:page", get(reviews::get_by_page))
        .route("/reviews/delete/:id", delete(reviews::delete))
        .with_state(state)
}
