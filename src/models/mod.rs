pub mod book;
pub mod genre;
pub mod post;
pub mod review;
pub mod user;

pub use book::BookView;
pub use genre::GenreView;
pub use post::PostView;
pub use review::ReviewView;
pub use user::UserView;
