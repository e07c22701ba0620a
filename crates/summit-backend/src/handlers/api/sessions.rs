use axum::Json;

use summit::data::Session;

use crate::catalog;

/// Handler to list the conference program. Query parameters are ignored.
pub async fn list() -> Json<&'static [Session]> {
    Json(catalog::sessions())
}
