//! Generic entity store
//!
//! One store type serves all five entities; the per-entity repetition of the
//! add/get/delete pattern lives here exactly once. Conventions shared by
//! every operation:
//!
//! - not-found is `Ok(None)` / an empty `Vec`, never an error
//! - delete is idempotent and reports `Ok(true)` even for zero rows
//! - unique-constraint violations surface as `DomainError::Conflict`
//!
//! Each call is a single statement and therefore its own transaction.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PrimaryKeyTrait, QueryFilter,
    QuerySelect, Value,
};

use crate::domain::DomainError;

/// Fixed page size for `get_by_page`.
pub const PAGE_SIZE: u64 = 10;

pub struct Store<E: EntityTrait> {
    db: DatabaseConnection,
    entity: PhantomData<E>,
}

impl<E: EntityTrait> Clone for Store<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            entity: PhantomData,
        }
    }
}

/// Offset for a 1-based page number. The original implementation computed a
/// negative offset for page < 1 and handed it to the database; that is
/// rejected here instead.
fn page_offset(page: i64) -> Result<u64, DomainError> {
    if page < 1 {
        return Err(DomainError::Validation(format!(
            "page numbers are 1-based, got {}",
            page
        )));
    }
    Ok(PAGE_SIZE * (page as u64 - 1))
}

impl<E> Store<E>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Insert one row and return its new primary key.
    pub async fn add<A>(&self, row: A) -> Result<i32, DomainError>
    where
        A: ActiveModelTrait<Entity = E> + Send + 'static,
    {
        let res = E::insert(row).exec(&self.db).await?;
        Ok(res.last_insert_id)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<E::Model>, DomainError> {
        Ok(E::find_by_id(id).one(&self.db).await?)
    }

    /// First row whose `column` equals `value`.
    pub async fn get_one_by<V>(&self, column: E::Column, value: V) -> Result<Option<E::Model>, DomainError>
    where
        V: Into<Value> + Send,
    {
        Ok(E::find().filter(column.eq(value)).one(&self.db).await?)
    }

    /// All rows whose `column` equals `value`.
    pub async fn get_all_by<V>(&self, column: E::Column, value: V) -> Result<Vec<E::Model>, DomainError>
    where
        V: Into<Value> + Send,
    {
        Ok(E::find().filter(column.eq(value)).all(&self.db).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<E::Model>, DomainError> {
        Ok(E::find().all(&self.db).await?)
    }

    /// Page `page` (1-based) of at most [`PAGE_SIZE`] rows in table order.
    pub async fn get_by_page(&self, page: i64) -> Result<Vec<E::Model>, DomainError> {
        let offset = page_offset(page)?;
        Ok(E::find()
            .offset(offset)
            .limit(PAGE_SIZE)
            .all(&self.db)
            .await?)
    }

    /// Delete the row with `id` if it exists. Zero rows removed is still a
    /// success.
    pub async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let res = E::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            tracing::debug!("delete matched no rows");
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_offsets_are_one_based() {
        assert_eq!(page_offset(1).unwrap(), 0);
        assert_eq!(page_offset(2).unwrap(), 10);
        assert_eq!(page_offset(5).unwrap(), 40);
    }

    #[test]
    fn page_below_one_is_rejected() {
        assert!(matches!(page_offset(0), Err(DomainError::Validation(_))));
        assert!(matches!(page_offset(-3), Err(DomainError::Validation(_))));
    }
}
