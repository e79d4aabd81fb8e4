//! CRUD handlers, written once and mounted for users, stores and brands.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Path, State},
    response::Json,
    routing::get,
    Router,
};

use catalog::service::CatalogService;
use common::{ApiResponse, AppError, AppResult, Created, ListResponse};
use domain::Resource;

use crate::extractors::ValidatedJson;
use crate::state::AppState;

type Service<R> = Arc<dyn CatalogService<R>>;

/// Create CRUD routes for one record type.
pub fn resource_routes<R: Resource>() -> Router<AppState>
where
    Service<R>: FromRef<AppState>,
{
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route("/:id", get(show::<R>).put(update::<R>).delete(destroy::<R>))
}

/// A non-numeric id can never match a row.
fn parse_id<R: Resource>(raw: &str) -> AppResult<i32> {
    raw.parse().map_err(|_| AppError::not_found(R::NAME))
}

/// List every live record.
async fn list<R: Resource>(State(service): State<Service<R>>) -> AppResult<Json<ListResponse<R>>> {
    let records = service.list_all().await?;
    Ok(Json(ListResponse::new(records)))
}

/// Get one live record.
async fn show<R: Resource>(
    State(service): State<Service<R>>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<R>>> {
    let id = parse_id::<R>(&id)?;
    let record = service.get(id).await?;
    Ok(Json(ApiResponse::success(record)))
}

/// Create a record.
async fn create<R: Resource>(
    State(service): State<Service<R>>,
    ValidatedJson(input): ValidatedJson<R::Create>,
) -> AppResult<Created<R>> {
    let record = service.create(input).await?;
    Ok(Created::new(
        record,
        format!("{} created successfully", R::NAME),
    ))
}

/// Apply a partial update; the payload is checked before the row lookup.
async fn update<R: Resource>(
    State(service): State<Service<R>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<R::Update>,
) -> AppResult<Json<ApiResponse<R>>> {
    let id = parse_id::<R>(&id)?;
    let record = service.update(id, input).await?;
    Ok(Json(ApiResponse::with_message(
        record,
        format!("{} updated successfully", R::NAME),
    )))
}

/// Soft delete a record.
async fn destroy<R: Resource>(
    State(service): State<Service<R>>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = parse_id::<R>(&id)?;
    service.delete(id).await?;
    Ok(Json(ApiResponse::message(format!(
        "{} deleted successfully",
        R::NAME
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::User;

    #[test]
    fn non_numeric_id_is_not_found() {
        let err = parse_id::<User>("abc").unwrap_err();
        assert_eq!(err.user_message(), "User not found");
        assert_eq!(parse_id::<User>("42").unwrap(), 42);
    }
}
