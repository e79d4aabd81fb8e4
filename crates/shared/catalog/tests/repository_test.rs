//! Repository tests against an in-memory SQLite database.

use catalog::infra::Database;
use catalog::repository::{BrandStore, CrudRepository, StoreStore, UserStore};
use common::{AppError, DatabaseConfig};
use domain::{
    CreateBrand, CreateStore, CreateUser, Status, UpdateBrand, UpdateStore, UpdateUser,
};

async fn setup() -> Database {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    Database::connect(&config).await.expect("sqlite should open")
}

fn new_user(name: &str, email: &str) -> CreateUser {
    CreateUser {
        name: name.to_string(),
        email: email.to_string(),
        phone: String::new(),
    }
}

fn new_brand(name: &str) -> CreateBrand {
    CreateBrand {
        name: name.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn create_assigns_id_timestamps_and_active_status() {
    let repo = UserStore::new(setup().await.get_connection());

    let user = repo.create(new_user("Ann", "ann@x.com")).await.unwrap();

    assert!(user.id > 0);
    assert_eq!(user.status, Status::Active);
    assert_eq!(user.created_at, user.updated_at);
    assert!(user.deleted_at.is_none());
}

#[tokio::test]
async fn create_with_empty_name_is_a_validation_error() {
    let repo = BrandStore::new(setup().await.get_connection());

    let result = repo.create(new_brand("")).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn soft_deleted_rows_disappear_from_every_read() {
    let repo = StoreStore::new(setup().await.get_connection());
    let kept = repo
        .create(CreateStore {
            name: "Main St".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    let gone = repo
        .create(CreateStore {
            name: "Harbor".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    repo.soft_delete(gone.id).await.unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.iter().map(|s| s.id).collect::<Vec<_>>(), vec![kept.id]);
    assert!(matches!(
        repo.find_by_id(gone.id).await,
        Err(AppError::NotFound(entity)) if entity == "Store"
    ));
    assert_eq!(repo.count_active().await.unwrap(), 1);
    assert_eq!(repo.find_active_page(0, 10).await.unwrap().len(), 1);
}

#[tokio::test]
async fn second_delete_is_not_found() {
    let repo = BrandStore::new(setup().await.get_connection());
    let brand = repo.create(new_brand("Acme")).await.unwrap();

    repo.soft_delete(brand.id).await.unwrap();
    let again = repo.soft_delete(brand.id).await;

    assert!(matches!(again, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn delete_of_unknown_id_is_not_found() {
    let repo = StoreStore::new(setup().await.get_connection());

    let result = repo.soft_delete(999).await;

    assert!(matches!(result, Err(AppError::NotFound(entity)) if entity == "Store"));
}

#[tokio::test]
async fn empty_strings_leave_fields_untouched() {
    let repo = UserStore::new(setup().await.get_connection());
    let user = repo.create(new_user("Ann", "ann@x.com")).await.unwrap();

    let updated = repo
        .update(
            user.id,
            UpdateUser {
                name: Some(String::new()),
                email: Some(String::new()),
                phone: Some("555-0100".into()),
                status: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Ann");
    assert_eq!(updated.email, "ann@x.com");
    assert_eq!(updated.phone, "555-0100");
    assert!(updated.updated_at >= user.updated_at);
}

#[tokio::test]
async fn create_then_rename_scenario() {
    let repo = UserStore::new(setup().await.get_connection());
    let user = repo.create(new_user("Ann", "ann@x.com")).await.unwrap();

    let renamed = repo
        .update(
            user.id,
            UpdateUser {
                name: Some("Anne".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(renamed.name, "Anne");
    assert_eq!(renamed.email, "ann@x.com");
    let fetched = repo.find_by_id(user.id).await.unwrap();
    assert_eq!(fetched.name, "Anne");
}

#[tokio::test]
async fn inactive_rows_are_excluded_from_active_reads() {
    let repo = BrandStore::new(setup().await.get_connection());
    let hidden = repo.create(new_brand("Hidden")).await.unwrap();
    repo.create(new_brand("Shown")).await.unwrap();

    repo.update(
        hidden.id,
        UpdateBrand {
            status: Some("inactive".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(repo.count_active().await.unwrap(), 1);
    let page = repo.find_active_page(0, 10).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].name, "Shown");
    // Admin listings still show inactive rows
    assert_eq!(repo.find_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn pages_cover_active_rows_without_duplicates() {
    let repo = BrandStore::new(setup().await.get_connection());
    for name in ["A", "B", "C", "D", "E"] {
        repo.create(new_brand(name)).await.unwrap();
    }

    let total = repo.count_active().await.unwrap();
    let mut seen = Vec::new();
    let limit = 2;
    let mut offset = 0;
    while offset < total {
        let page = repo.find_active_page(offset, limit).await.unwrap();
        assert!(page.len() as u64 <= limit);
        seen.extend(page.into_iter().map(|b| b.name));
        offset += limit;
    }

    assert_eq!(seen, vec!["A", "B", "C", "D", "E"]);
}

#[tokio::test]
async fn unique_value_check_ignores_deleted_rows_and_self() {
    let repo = UserStore::new(setup().await.get_connection());
    let ann = repo.create(new_user("Ann", "ann@x.com")).await.unwrap();

    assert!(repo.is_taken("ann@x.com", None).await.unwrap());
    assert!(!repo.is_taken("ann@x.com", Some(ann.id)).await.unwrap());

    repo.soft_delete(ann.id).await.unwrap();
    assert!(!repo.is_taken("ann@x.com", None).await.unwrap());
}

#[tokio::test]
async fn tables_without_unique_fields_never_report_taken() {
    let repo = StoreStore::new(setup().await.get_connection());
    repo.create(CreateStore {
        name: "Main St".into(),
        email: "shop@x.com".into(),
        ..Default::default()
    })
    .await
    .unwrap();

    assert!(!repo.is_taken("shop@x.com", None).await.unwrap());
}

#[tokio::test]
async fn update_validates_before_lookup() {
    let repo = StoreStore::new(setup().await.get_connection());

    let result = repo
        .update(
            999,
            UpdateStore {
                email: Some("broken".into()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn storage_rejects_a_second_live_email() {
    let repo = UserStore::new(setup().await.get_connection());
    let ann = repo.create(new_user("Ann", "ann@x.com")).await.unwrap();

    // The repository does not pre-check, so only the index can refuse this
    let duplicate = repo.create(new_user("Ann Two", "ann@x.com")).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(field)) if field == "Email"));

    let bob = repo.create(new_user("Bob", "bob@x.com")).await.unwrap();
    let takeover = repo
        .update(
            bob.id,
            UpdateUser {
                email: Some("ann@x.com".into()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(takeover, Err(AppError::Conflict(_))));

    repo.soft_delete(ann.id).await.unwrap();
    assert!(repo.create(new_user("Ann Again", "ann@x.com")).await.is_ok());
}
