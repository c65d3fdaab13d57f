use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::server::{ServerDto, ServerListQuery},
    server::{
        error::AppError, middleware::auth::AuthGuard, model::server::ServerListParams,
        service::server::ServerService, state::AppState,
    },
};

/// GET /api/server/select - List servers
///
/// Returns servers filtered by the optional query parameters. Anonymous callers
/// may use every filter except `by_user` and `by_serverid`.
///
/// # Query Parameters
/// - `category`: Only servers in the category with this exact name
/// - `qty`: Maximum number of servers to return
/// - `by_user`: `true` to only return servers the caller is a member of
/// - `by_serverid`: Only the server with this ID
/// - `with_num_members`: `true` to add `num_members` to each server
///
/// # Returns
/// - `200 OK`: JSON array of ServerDto
/// - `400 Bad Request`: Invalid `qty` or `by_serverid`, or server ID not found
/// - `401 Unauthorized`: `by_user` or `by_serverid` without a logged in user
/// - `500 Internal Server Error`: Database or session error
pub async fn list_servers(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ServerListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).caller().await?;

    let params = ServerListParams::from_query(query, &caller)?;

    tracing::debug!("Listing servers for {:?} with {:?}", caller, params);

    let server_service = ServerService::new(&state.db);
    let servers = server_service.list(&params, &caller).await?;

    let servers_dto: Vec<ServerDto> = servers.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(servers_dto)))
}
