use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::category::CategoryDto,
    server::{error::AppError, service::category::CategoryService, state::AppState},
};

/// GET /api/server/category - List server categories
///
/// Returns every category a server can belong to, ordered by name. The names are
/// the values accepted by the `category` filter of the server listing.
///
/// # Returns
/// - `200 OK`: JSON array of CategoryDto
/// - `500 Internal Server Error`: Database error
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let category_service = CategoryService::new(&state.db);

    let categories: Vec<CategoryDto> = category_service
        .get_all()
        .await?
        .into_iter()
        .map(|c| c.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(categories)))
}
