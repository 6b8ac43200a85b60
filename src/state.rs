//! Application state shared across all handlers.

use sea_orm::DatabaseConnection;

use crate::models::{book, genre, post, review, user};
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    pub users: Store<user::Entity>,
    pub books: Store<book::Entity>,
    pub genres: Store<genre::Entity>,
    pub posts: Store<post::Entity>,
    pub reviews: Store<review::Entity>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: Store::new(db.clone()),
            books: Store::new(db.clone()),
            genres: Store::new(db.clone()),
            posts: Store::new(db.clone()),
            reviews: Store::new(db.clone()),
            db,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

// Lets the AuthUser extractor pull the connection out of the state.
impl axum::extract::FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
