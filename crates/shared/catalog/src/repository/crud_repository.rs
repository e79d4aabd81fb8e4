//! Generic repository with soft delete support.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, SqlErr, Value,
};
use validator::Validate;

use common::{AppError, AppResult, OptionExt};
use domain::{Resource, STATUS_ACTIVE};

use super::entities::CatalogEntity;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Repository trait for dependency injection.
///
/// All reads exclude soft-deleted rows and order by id ascending.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CrudRepository<R: Resource>: Send + Sync {
    /// List every live row
    async fn find_all(&self) -> AppResult<Vec<R>>;

    /// Find a live row by id, `NotFound` otherwise
    async fn find_by_id(&self, id: i32) -> AppResult<R>;

    /// Insert a new row; the database assigns the id
    async fn create(&self, input: R::Create) -> AppResult<R>;

    /// Overwrite the non-empty fields of a live row
    async fn update(&self, id: i32, input: R::Update) -> AppResult<R>;

    /// Soft delete a live row (sets deleted_at timestamp)
    async fn soft_delete(&self, id: i32) -> AppResult<()>;

    /// Count live rows with active status
    async fn count_active(&self) -> AppResult<u64>;

    /// Live rows with active status, `limit` at most, after skipping `offset`
    async fn find_active_page(&self, offset: u64, limit: u64) -> AppResult<Vec<R>>;

    /// Whether another live row already holds this unique value
    async fn is_taken(&self, value: &str, excluding: Option<i32>) -> AppResult<bool>;
}

/// SeaORM implementation of [`CrudRepository`], one per table.
pub struct SeaRepository<E> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E> SeaRepository<E> {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

impl<E> SeaRepository<E>
where
    E: CatalogEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    fn live() -> Select<E> {
        E::find().filter(E::deleted_at_column().is_null())
    }

    fn active() -> Select<E> {
        Self::live().filter(E::status_column().eq(STATUS_ACTIVE))
    }

    async fn find_live_model(&self, id: i32) -> AppResult<E::Model> {
        Self::live()
            .filter(E::id_column().eq(id))
            .one(&self.db)
            .await?
            .ok_or_not_found(<E::Resource as Resource>::NAME)
    }

    /// A write that lost a race on the unique field surfaces as a conflict.
    fn write_error(err: DbErr) -> AppError {
        match (err.sql_err(), <E::Resource as Resource>::UNIQUE_FIELD) {
            (Some(SqlErr::UniqueConstraintViolation(_)), Some(field)) => AppError::conflict(field),
            _ => err.into(),
        }
    }
}

#[async_trait]
impl<E> CrudRepository<E::Resource> for SeaRepository<E>
where
    E: CatalogEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    async fn find_all(&self) -> AppResult<Vec<E::Resource>> {
        let models = Self::live()
            .order_by_asc(E::id_column())
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<E::Resource> {
        let model = self.find_live_model(id).await?;
        Ok(model.into())
    }

    async fn create(
        &self,
        input: <E::Resource as Resource>::Create,
    ) -> AppResult<E::Resource> {
        input.validate()?;

        let row = E::new_row(input, Utc::now());
        let model = row.insert(&self.db).await.map_err(Self::write_error)?;
        tracing::debug!("Created {} {:?}", <E::Resource as Resource>::NAME, model);

        Ok(model.into())
    }

    async fn update(
        &self,
        id: i32,
        input: <E::Resource as Resource>::Update,
    ) -> AppResult<E::Resource> {
        input.validate()?;

        let model = self.find_live_model(id).await?;
        let mut row: E::ActiveModel = model.into_active_model();
        E::apply_changes(&mut row, input);
        row.set(E::updated_at_column(), Value::from(Utc::now()));

        let model = row.update(&self.db).await.map_err(Self::write_error)?;
        Ok(model.into())
    }

    async fn soft_delete(&self, id: i32) -> AppResult<()> {
        let model = self.find_live_model(id).await?;
        let mut row: E::ActiveModel = model.into_active_model();
        let now = Utc::now();
        row.set(E::deleted_at_column(), Value::from(Some(now)));
        row.set(E::updated_at_column(), Value::from(now));

        row.update(&self.db).await?;
        tracing::debug!("Soft deleted {} {}", <E::Resource as Resource>::NAME, id);
        Ok(())
    }

    async fn count_active(&self) -> AppResult<u64> {
        let total = Self::active().count(&self.db).await?;
        Ok(total)
    }

    async fn find_active_page(&self, offset: u64, limit: u64) -> AppResult<Vec<E::Resource>> {
        let models = Self::active()
            .order_by_asc(E::id_column())
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn is_taken(&self, value: &str, excluding: Option<i32>) -> AppResult<bool> {
        let Some(column) = E::unique_column() else {
            return Ok(false);
        };

        let mut query = Self::live().filter(column.eq(value));
        if let Some(id) = excluding {
            query = query.filter(E::id_column().ne(id));
        }

        Ok(query.count(&self.db).await? > 0)
    }
}
