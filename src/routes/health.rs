use axum::Json;

use crate::response::ApiResponse;

pub const SERVICE_DESCRIPTION: &str = "API de E-commerce de Cosméticos Veganos";

/// Liveness probe; answers without touching the database.
pub async fn root() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message(SERVICE_DESCRIPTION))
}
