use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use tm_core::leaderboard::{compute, LeaderboardKind, LeaderboardView};

use super::{ok, ApiOk};
use crate::error::ApiError;
use crate::SharedState;

#[derive(Debug, Deserialize, Default)]
pub struct LeaderboardQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

pub async fn leaderboard(
    State(state): State<SharedState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<ApiOk<LeaderboardView>>, ApiError> {
    let kind = LeaderboardKind::parse(query.kind.as_deref());
    let profiles = state.store.list(None).await?;
    let view = compute(kind, &profiles, state.limits.leaderboard_size);
    Ok(ok(view))
}
