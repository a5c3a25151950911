use axum::{extract::State, Json};

use tm_core::team::{assemble_team, TeamMember, TeamRequest};

use super::{ok, ApiOk};
use crate::error::ApiError;
use crate::SharedState;

pub async fn build_team(
    State(state): State<SharedState>,
    Json(request): Json<TeamRequest>,
) -> Result<Json<ApiOk<Vec<TeamMember>>>, ApiError> {
    if !request.is_valid() {
        return Err(ApiError::BadRequest(
            "Skills and a valid team size are required".into(),
        ));
    }

    let profiles = state.store.list(None).await?;
    let team = assemble_team(&profiles, &request, &state.limits);
    Ok(ok(team))
}
