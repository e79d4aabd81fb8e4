//! Catalog service - CRUD use cases shared by users, stores and brands.

use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use common::{AppError, AppResult, Page, PageRequest};
use domain::Resource;

use crate::repository::CrudRepository;

/// Catalog service trait for dependency injection.
///
/// Every operation ignores soft-deleted rows.
#[async_trait]
pub trait CatalogService<R: Resource>: Send + Sync {
    /// List every live record, ordered by id
    async fn list_all(&self) -> AppResult<Vec<R>>;

    /// Get a live record by id
    async fn get(&self, id: i32) -> AppResult<R>;

    /// Validate and create a record
    async fn create(&self, input: R::Create) -> AppResult<R>;

    /// Validate and apply a partial update
    async fn update(&self, id: i32, input: R::Update) -> AppResult<R>;

    /// Soft delete a record
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// One page of active records plus the active total
    async fn list_active_page(&self, request: PageRequest) -> AppResult<Page<R>>;
}

/// Concrete implementation of CatalogService using a repository.
pub struct CatalogManager<R: Resource> {
    repo: Arc<dyn CrudRepository<R>>,
}

impl<R: Resource> CatalogManager<R> {
    /// Create new service instance with repository
    pub fn new(repo: Arc<dyn CrudRepository<R>>) -> Self {
        Self { repo }
    }

    async fn ensure_unique(&self, value: Option<&str>, excluding: Option<i32>) -> AppResult<()> {
        let (Some(field), Some(value)) = (R::UNIQUE_FIELD, value) else {
            return Ok(());
        };

        if self.repo.is_taken(value, excluding).await? {
            return Err(AppError::conflict(field));
        }
        Ok(())
    }
}

#[async_trait]
impl<R: Resource> CatalogService<R> for CatalogManager<R> {
    async fn list_all(&self) -> AppResult<Vec<R>> {
        self.repo.find_all().await
    }

    async fn get(&self, id: i32) -> AppResult<R> {
        self.repo.find_by_id(id).await
    }

    async fn create(&self, input: R::Create) -> AppResult<R> {
        input.validate()?;
        self.ensure_unique(R::unique_value_on_create(&input), None)
            .await?;

        let record = self.repo.create(input).await?;
        tracing::info!("{} {} created", R::NAME, record.id());
        Ok(record)
    }

    async fn update(&self, id: i32, input: R::Update) -> AppResult<R> {
        // Payload errors win over a missing row
        input.validate()?;
        self.repo.find_by_id(id).await?;
        self.ensure_unique(R::unique_value_on_update(&input), Some(id))
            .await?;

        self.repo.update(id, input).await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.repo.soft_delete(id).await?;
        tracing::info!("{} {} deleted", R::NAME, id);
        Ok(())
    }

    async fn list_active_page(&self, request: PageRequest) -> AppResult<Page<R>> {
        let (total, items) = tokio::try_join!(
            self.repo.count_active(),
            self.repo.find_active_page(request.offset(), request.limit),
        )?;

        Ok(Page::new(items, request, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCrudRepository;
    use chrono::Utc;
    use domain::{CreateUser, Status, UpdateUser, User};

    fn user(id: i32, email: &str) -> User {
        User {
            id,
            name: "Ann".to_string(),
            email: email.to_string(),
            phone: String::new(),
            status: Status::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn create_rejects_taken_email() {
        let mut repo = MockCrudRepository::<User>::new();
        repo.expect_is_taken()
            .withf(|value, excluding| value == "ann@x.com" && excluding.is_none())
            .returning(|_, _| Ok(true));
        repo.expect_create().never();

        let service = CatalogManager::<User>::new(Arc::new(repo));
        let result = service
            .create(CreateUser {
                name: "Ann".into(),
                email: "ann@x.com".into(),
                phone: String::new(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Conflict(field)) if field == "Email"));
    }

    #[tokio::test]
    async fn create_validates_before_touching_the_repository() {
        let mut repo = MockCrudRepository::<User>::new();
        repo.expect_is_taken().never();
        repo.expect_create().never();

        let service = CatalogManager::<User>::new(Arc::new(repo));
        let result = service
            .create(CreateUser {
                name: "Ann".into(),
                email: "not-an-email".into(),
                phone: String::new(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() {
        let mut repo = MockCrudRepository::<User>::new();
        repo.expect_find_by_id()
            .returning(|_| Err(AppError::not_found("User")));
        repo.expect_update().never();

        let service = CatalogManager::<User>::new(Arc::new(repo));
        let result = service.update(999, UpdateUser::default()).await;

        assert!(matches!(result, Err(AppError::NotFound(entity)) if entity == "User"));
    }

    #[tokio::test]
    async fn update_excludes_own_row_from_email_check() {
        let mut repo = MockCrudRepository::<User>::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(user(id, "ann@x.com")));
        repo.expect_is_taken()
            .withf(|value, excluding| value == "ann@x.com" && *excluding == Some(7))
            .returning(|_, _| Ok(false));
        repo.expect_update()
            .returning(|id, _| Ok(user(id, "ann@x.com")));

        let service = CatalogManager::<User>::new(Arc::new(repo));
        let patch = UpdateUser {
            email: Some("ann@x.com".into()),
            ..Default::default()
        };
        let updated = service.update(7, patch).await.unwrap();

        assert_eq!(updated.id, 7);
    }

    #[tokio::test]
    async fn active_page_combines_count_and_rows() {
        let mut repo = MockCrudRepository::<User>::new();
        repo.expect_count_active().returning(|| Ok(5));
        repo.expect_find_active_page()
            .withf(|offset, limit| *offset == 2 && *limit == 2)
            .returning(|_, _| Ok(vec![user(3, "c@x.com"), user(4, "d@x.com")]));

        let service = CatalogManager::<User>::new(Arc::new(repo));
        let page = service
            .list_active_page(PageRequest::new(2, 2))
            .await
            .unwrap();

        assert_eq!(page.total, 5);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.request, PageRequest::new(2, 2));
    }
}
