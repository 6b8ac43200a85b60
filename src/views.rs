//! Assembly of public views that need secondary lookups.

use sea_orm::{DatabaseConnection, EntityTrait};

use crate::domain::DomainError;
use crate::models::post::{self, PostView};
use crate::models::{book, user};

/// Resolve a post's foreign keys into display fields. If the owning user or
/// the referenced book is gone the whole view is `None` - no partial
/// objects are surfaced.
pub async fn post_view(
    db: &DatabaseConnection,
    post: post::Model,
) -> Result<Option<PostView>, DomainError> {
    let Some(owner) = user::Entity::find_by_id(post.user_id).one(db).await? else {
        return Ok(None);
    };
    let Some(book) = book::Entity::find_by_id(post.book_id).one(db).await? else {
        return Ok(None);
    };

    Ok(Some(PostView {
        id: post.id,
        username: owner.username,
        title: post.title,
        text: post.text,
        book_name: book.name,
        book_author: book.author,
    }))
}

/// Resolve a list of posts, dropping the ones whose lookups fail.
pub async fn post_views(
    db: &DatabaseConnection,
    posts: Vec<post::Model>,
) -> Result<Vec<PostView>, DomainError> {
    let mut views = Vec::with_capacity(posts.len());
    for post in posts {
        if let Some(view) = post_view(db, post).await? {
            views.push(view);
        }
    }
    Ok(views)
}
