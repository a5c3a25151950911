pub mod health;
pub mod leaderboard;
pub mod profiles;
pub mod teams;

use axum::Json;
use serde::Serialize;

/// Success envelope the frontend expects: `{ "success": true, "data": ... }`.
#[derive(Debug, Serialize)]
pub struct ApiOk<T> {
    pub success: bool,
    pub data: T,
}

pub fn ok<T: Serialize>(data: T) -> Json<ApiOk<T>> {
    Json(ApiOk {
        success: true,
        data,
    })
}
