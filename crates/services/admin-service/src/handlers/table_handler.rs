//! Admin panel table declarations and rendered rows.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde_json::{Map, Value};

use catalog::service::CatalogService;
use common::{ApiResponse, AppError, AppResult, OptionExt};
use domain::Resource;

use crate::state::AppState;
use crate::tables::{all_tables, find_table, TableDefinition};

/// Create admin table routes.
pub fn table_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tables))
        .route("/:name", get(show_table))
        .route("/:name/rows", get(table_rows))
}

/// Every table declaration, in menu order.
async fn list_tables() -> Json<ApiResponse<Vec<TableDefinition>>> {
    Json(ApiResponse::success(all_tables()))
}

/// One table declaration.
async fn show_table(Path(name): Path<String>) -> AppResult<Json<ApiResponse<TableDefinition>>> {
    let table = find_table(&name).ok_or_not_found("Table")?;
    Ok(Json(ApiResponse::success(table)))
}

/// Live rows of a table with the listing formatters applied.
async fn table_rows(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<Map<String, Value>>>>> {
    let table = find_table(&name).ok_or_not_found("Table")?;

    let rows = match table.name {
        domain::USERS_COLLECTION => rendered_rows(&state.users, &table).await?,
        domain::STORES_COLLECTION => rendered_rows(&state.stores, &table).await?,
        domain::BRANDS_COLLECTION => rendered_rows(&state.brands, &table).await?,
        _ => return Err(AppError::not_found("Table")),
    };

    Ok(Json(ApiResponse::success(rows)))
}

async fn rendered_rows<R: Resource>(
    service: &Arc<dyn CatalogService<R>>,
    table: &TableDefinition,
) -> AppResult<Vec<Map<String, Value>>> {
    service
        .list_all()
        .await?
        .iter()
        .map(|record| render_row(record, table))
        .collect()
}

/// Keep only listed columns; formatted ones become display strings.
fn render_row<R: Resource>(record: &R, table: &TableDefinition) -> AppResult<Map<String, Value>> {
    let value = serde_json::to_value(record).map_err(|e| AppError::internal(e.to_string()))?;
    let Value::Object(mut fields) = value else {
        return Err(AppError::internal(format!("{} is not a JSON object", R::NAME)));
    };

    let mut row = Map::new();
    for column in &table.columns {
        let cell = fields.remove(column.field).unwrap_or(Value::Null);
        let cell = match (column.formatter, &cell) {
            (Some(_), Value::String(raw)) => Value::String(column.render(raw)),
            (Some(_), Value::Null) => Value::String(column.render("")),
            _ => cell,
        };
        row.insert(column.field.to_string(), cell);
    }
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domain::{Brand, Status};

    #[test]
    fn brand_row_is_rendered_for_display() {
        let brand = Brand {
            id: 3,
            name: "Acme".into(),
            description: "d".repeat(120),
            logo: String::new(),
            status: Status::Inactive,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        };
        let table = find_table("brands").unwrap();

        let row = render_row(&brand, &table).unwrap();

        assert_eq!(row["id"], 3);
        assert_eq!(row["name"], "Acme");
        assert_eq!(row["logo"], r#"<span class="text-muted">No Logo</span>"#);
        assert_eq!(row["status"], r#"<span class="label label-danger">Inactive</span>"#);
        assert_eq!(row["description"].as_str().unwrap().len(), 103);
        assert!(!row.contains_key("deleted_at"));
    }
}
