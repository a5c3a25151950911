use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use tm_core::filter::ProfileFilter;
use tm_core::{Availability, Profile, Skill};

use super::{ok, ApiOk};
use crate::error::ApiError;
use crate::SharedState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub availability: Option<Availability>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ProfileQuery {
    pub name: Option<String>,
    pub skills: Option<String>,
}

// Seeded initials avatar, rendered by the image provider.
fn random_avatar() -> String {
    let seed = Uuid::new_v4().simple().to_string();
    format!("https://api.dicebear.com/6.x/initials/svg?seed={}", &seed[..7])
}

fn required(field: &str, value: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::BadRequest(format!(
            "First name, last name, and email are required (missing {field})"
        )));
    }
    Ok(trimmed.to_string())
}

fn validate_skills(skills: Vec<Skill>) -> Result<Vec<Skill>, ApiError> {
    for skill in &skills {
        if skill.name.trim().is_empty() {
            return Err(ApiError::BadRequest("skill name must not be blank".into()));
        }
        if !(1..=5).contains(&skill.proficiency) {
            return Err(ApiError::BadRequest(format!(
                "skill proficiency must be between 1 and 5: {}",
                skill.name
            )));
        }
    }
    Ok(skills)
}

pub async fn create_profile(
    State(state): State<SharedState>,
    Json(body): Json<CreateProfileRequest>,
) -> Result<Json<ApiOk<Profile>>, ApiError> {
    let profile = Profile {
        id: Uuid::new_v4().to_string(),
        first_name: required("firstName", &body.first_name)?,
        last_name: required("lastName", &body.last_name)?,
        email: required("email", &body.email)?,
        photo_url: random_avatar(),
        bio: body
            .bio
            .as_deref()
            .map(str::trim)
            .filter(|bio| !bio.is_empty())
            .map(str::to_string),
        availability: body.availability.unwrap_or_default(),
        skills: validate_skills(body.skills)?,
        created_at: Utc::now().timestamp_millis(),
    };

    let created = state.store.create(profile).await?;
    Ok(ok(created))
}

pub async fn list_profiles(
    State(state): State<SharedState>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<ApiOk<Vec<Profile>>>, ApiError> {
    let filter = ProfileFilter::from_query(query.name.as_deref(), query.skills.as_deref());
    let profiles = state.store.list(Some(&filter)).await?;
    Ok(ok(profiles))
}

pub async fn get_profile(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<ApiOk<Profile>>, ApiError> {
    let profile = state
        .store
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("profile not found: {id}")))?;

    Ok(ok(profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_url_embeds_a_short_seed() {
        let url = random_avatar();
        assert!(url.starts_with("https://api.dicebear.com/6.x/initials/svg?seed="));
        let seed = url.rsplit('=').next().unwrap();
        assert_eq!(seed.len(), 7);
    }

    #[test]
    fn required_trims_and_rejects_blank() {
        assert_eq!(required("firstName", "  Ada ").unwrap(), "Ada");
        assert!(required("email", "   ").is_err());
    }

    #[test]
    fn proficiency_outside_scale_is_rejected() {
        let err = validate_skills(vec![Skill {
            name: "Rust".into(),
            proficiency: 6,
        }])
        .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));

        let err = validate_skills(vec![Skill {
            name: "Rust".into(),
            proficiency: 0,
        }])
        .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));

        assert!(validate_skills(vec![Skill {
            name: "Rust".into(),
            proficiency: 5,
        }])
        .is_ok());
    }
}
