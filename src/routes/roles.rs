//! Read-only JSON view of the role registry.

#[cfg(test)]
#[path = "roles_test.rs"]
mod tests;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::Json;
use client::roles::{self, Role, RoleDescriptor};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `GET /api/roles` — every descriptor, in card order.
pub async fn list_roles() -> Json<Vec<&'static RoleDescriptor>> {
    Json(roles::registry().collect())
}

/// `GET /api/roles/{id}` — one descriptor by lowercase key.
pub async fn get_role(Path(id): Path<String>) -> Result<Json<&'static RoleDescriptor>, (StatusCode, Json<ErrorBody>)> {
    let role: Role = id.parse().map_err(|e: roles::UnknownRole| {
        tracing::debug!(%id, "role lookup miss");
        (StatusCode::NOT_FOUND, Json(ErrorBody { error: e.to_string() }))
    })?;
    Ok(Json(role.descriptor()))
}
