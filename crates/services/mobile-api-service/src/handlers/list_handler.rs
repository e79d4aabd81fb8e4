//! Paginated listings of active records for mobile clients.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    response::Json,
    routing::get,
    Router,
};
use tracing::debug;

use catalog::service::CatalogService;
use common::{AppResult, PageRequest, Paginated, PaginationQuery};
use domain::Resource;

use crate::state::AppState;

type Service<R> = Arc<dyn CatalogService<R>>;

/// Create the listing route for one record type.
pub fn active_list_routes<R: Resource>() -> Router<AppState>
where
    Service<R>: FromRef<AppState>,
{
    Router::new().route("/", get(list_active::<R>))
}

/// One page of active, live records. Bad `page`/`limit` values fall back
/// to defaults instead of failing the request.
async fn list_active<R: Resource>(
    State(service): State<Service<R>>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<Paginated<R>>> {
    let request = PageRequest::from(query);
    debug!(
        resource = R::COLLECTION,
        page = request.page,
        limit = request.limit,
        "listing active records"
    );

    let page = service.list_active_page(request).await?;
    Ok(Json(Paginated::from(page)))
}
