use serde::{Deserialize, Serialize};

use crate::config::EngineLimits;
use crate::skills::skill_key;
use crate::{Profile, Skill};

/// Requested team composition: the skills the team must cover and how many
/// members to return.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub team_size: usize,
}

impl TeamRequest {
    /// A request is usable once it names at least one non-blank skill and a
    /// positive team size. Validation failures surface at the API boundary.
    pub fn is_valid(&self) -> bool {
        self.team_size >= 1 && self.skills.iter().any(|name| !skill_key(name).is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(flatten)]
    pub profile: Profile,
    pub score: u32,
    pub matching_skills: Vec<Skill>,
}

/// Sum of proficiencies over the requested skills this profile possesses,
/// together with the matched skills in request order. Requested skills are
/// deduplicated by normalized key; the first occurrence wins on both sides.
pub fn score_against(profile: &Profile, requested: &[String]) -> (u32, Vec<Skill>) {
    let mut seen: Vec<String> = Vec::with_capacity(requested.len());
    let mut score = 0u32;
    let mut matching = Vec::new();

    for name in requested {
        let key = skill_key(name);
        if key.is_empty() || seen.contains(&key) {
            continue;
        }
        seen.push(key.clone());

        if let Some(skill) = profile
            .skills
            .iter()
            .find(|skill| skill_key(&skill.name) == key)
        {
            score += u32::from(skill.proficiency);
            matching.push(skill.clone());
        }
    }

    (score, matching)
}

/// Rank available profiles by summed proficiency over the requested skills
/// and keep the top `team_size`. Zero-score profiles never make the team;
/// ties preserve input order.
pub fn assemble_team(
    profiles: &[Profile],
    request: &TeamRequest,
    limits: &EngineLimits,
) -> Vec<TeamMember> {
    let team_size = request.team_size.min(limits.max_team_size);

    let mut team: Vec<TeamMember> = profiles
        .iter()
        .filter(|profile| profile.is_available())
        .filter_map(|profile| {
            let (score, matching_skills) = score_against(profile, &request.skills);
            (score > 0).then(|| TeamMember {
                profile: profile.clone(),
                score,
                matching_skills,
            })
        })
        .collect();

    team.sort_by(|a, b| b.score.cmp(&a.score));
    team.truncate(team_size);
    team
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Availability;

    fn profile(id: &str, availability: Availability, skills: &[(&str, u8)]) -> Profile {
        Profile {
            id: id.into(),
            first_name: id.into(),
            last_name: "Member".into(),
            email: format!("{id}@example.com"),
            photo_url: String::new(),
            bio: None,
            availability,
            skills: skills
                .iter()
                .map(|(name, proficiency)| Skill {
                    name: (*name).into(),
                    proficiency: *proficiency,
                })
                .collect(),
            created_at: 0,
        }
    }

    fn request(skills: &[&str], team_size: usize) -> TeamRequest {
        TeamRequest {
            skills: skills.iter().map(|s| (*s).to_string()).collect(),
            team_size,
        }
    }

    #[test]
    fn scores_sum_matched_proficiencies() {
        let p = profile("a", Availability::Available, &[("Rust", 5), ("Go", 2)]);
        let (score, matching) = score_against(&p, &["rust".into(), "go".into(), "react".into()]);

        assert_eq!(score, 7);
        assert_eq!(matching.len(), 2);
        assert_eq!(matching[0].name, "Rust");
        assert_eq!(matching[1].name, "Go");
    }

    #[test]
    fn duplicate_requested_skills_count_once() {
        let p = profile("a", Availability::Available, &[("Rust", 5)]);
        let (score, matching) = score_against(&p, &["Rust".into(), "rust".into(), "RUST ".into()]);

        assert_eq!(score, 5);
        assert_eq!(matching.len(), 1);
    }

    #[test]
    fn ranks_by_score_and_truncates() {
        let profiles = vec![
            profile("low", Availability::Available, &[("Rust", 2)]),
            profile("high", Availability::Available, &[("Rust", 5), ("Go", 4)]),
            profile("mid", Availability::Available, &[("Rust", 4)]),
        ];

        let team = assemble_team(
            &profiles,
            &request(&["rust", "go"], 2),
            &EngineLimits::default(),
        );

        assert_eq!(team.len(), 2);
        assert_eq!(team[0].profile.id, "high");
        assert_eq!(team[0].score, 9);
        assert_eq!(team[1].profile.id, "mid");
    }

    #[test]
    fn unavailable_profiles_are_excluded() {
        let profiles = vec![
            profile("busy", Availability::Busy, &[("Rust", 5)]),
            profile("out", Availability::NotLooking, &[("Rust", 5)]),
            profile("in", Availability::Available, &[("Rust", 1)]),
        ];

        let team = assemble_team(&profiles, &request(&["rust"], 5), &EngineLimits::default());

        assert_eq!(team.len(), 1);
        assert_eq!(team[0].profile.id, "in");
    }

    #[test]
    fn zero_score_profiles_never_make_the_team() {
        let profiles = vec![profile("a", Availability::Available, &[("Go", 5)])];

        let team = assemble_team(&profiles, &request(&["rust"], 5), &EngineLimits::default());
        assert!(team.is_empty());
    }

    #[test]
    fn ties_preserve_input_order() {
        let profiles = vec![
            profile("first", Availability::Available, &[("Rust", 3)]),
            profile("second", Availability::Available, &[("Rust", 3)]),
        ];

        let team = assemble_team(&profiles, &request(&["rust"], 2), &EngineLimits::default());
        assert_eq!(team[0].profile.id, "first");
        assert_eq!(team[1].profile.id, "second");
    }

    #[test]
    fn team_size_clamps_to_configured_maximum() {
        let profiles: Vec<Profile> = (0..5)
            .map(|i| profile(&format!("p{i}"), Availability::Available, &[("Rust", 3)]))
            .collect();

        let limits = EngineLimits {
            max_team_size: 3,
            ..EngineLimits::default()
        };

        let team = assemble_team(&profiles, &request(&["rust"], 100), &limits);
        assert_eq!(team.len(), 3);
    }

    #[test]
    fn blank_only_requests_are_invalid() {
        assert!(!request(&["  "], 3).is_valid());
        assert!(!request(&["rust"], 0).is_valid());
        assert!(request(&["rust"], 1).is_valid());
    }

    #[test]
    fn member_serializes_flattened_with_score() {
        let p = profile("a", Availability::Available, &[("Rust", 5)]);
        let (score, matching_skills) = score_against(&p, &["rust".into()]);
        let member = TeamMember {
            profile: p,
            score,
            matching_skills,
        };

        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["id"], "a");
        assert_eq!(json["score"], 5);
        assert_eq!(json["matchingSkills"][0]["name"], "Rust");
    }
}
