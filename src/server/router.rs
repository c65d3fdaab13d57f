use axum::{routing::get, Router};

use crate::server::{
    controller::{category::list_categories, server::list_servers},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/server/select", get(list_servers))
        .route("/api/server/category", get(list_categories))
}
