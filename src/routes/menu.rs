use axum::Json;
use chefmenu_menu::{ItemStore, MenuAggregator, MenuOverview, MenuQuery};
use chefmenu_shared::{CourseFilter, MenuItem};
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub items: Vec<MenuItem>,
    #[serde(default)]
    pub course_filter: CourseFilter,
    #[serde(default)]
    pub search_term: String,
}

#[derive(Debug, Deserialize)]
pub struct OverviewRequest {
    pub items: Vec<MenuItem>,
}

/// POST /menu/query - Filtered items, per-course totals and the average
/// price of the filtered items
pub async fn query(Json(request): Json<QueryRequest>) -> Result<Json<MenuQuery>, AppError> {
    tracing::debug!(
        items = request.items.len(),
        filter = %request.course_filter,
        "menu query"
    );

    // Rejects duplicate ids and invalid names
    let store = ItemStore::seeded(request.items)?;

    Ok(Json(MenuAggregator::query(
        store.items(),
        request.course_filter,
        &request.search_term,
    )))
}

/// POST /menu/overview - Count, average price and items for every course
pub async fn overview(
    Json(request): Json<OverviewRequest>,
) -> Result<Json<MenuOverview>, AppError> {
    tracing::debug!(items = request.items.len(), "menu overview");

    let store = ItemStore::seeded(request.items)?;

    Ok(Json(MenuAggregator::overview(store.items())))
}
