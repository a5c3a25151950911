use std::collections::HashMap;

use chrono::DateTime;
use serde::Serialize;

use crate::Profile;

/// Which of the three leaderboard views to compute. Anything unrecognized
/// falls back to the skill-popularity view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeaderboardKind {
    #[default]
    TopSkills,
    Prolific,
    Newest,
}

impl LeaderboardKind {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("prolific") => Self::Prolific,
            Some("newest") => Self::Newest,
            _ => Self::TopSkills,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LeaderboardValue {
    Count(usize),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub photo_url: String,
    pub value: LeaderboardValue,
}

/// A computed view; the two row shapes serialize to the arrays the original
/// endpoint returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LeaderboardView {
    Skills(Vec<SkillCount>),
    Users(Vec<LeaderboardUser>),
}

pub fn compute(kind: LeaderboardKind, profiles: &[Profile], limit: usize) -> LeaderboardView {
    match kind {
        LeaderboardKind::TopSkills => LeaderboardView::Skills(top_skills(profiles, limit)),
        LeaderboardKind::Prolific => LeaderboardView::Users(prolific(profiles, limit)),
        LeaderboardKind::Newest => LeaderboardView::Users(newest(profiles, limit)),
    }
}

/// Skill popularity histogram keyed by the exact stored name. Spellings are
/// not merged; count descending, name ascending on ties.
pub fn top_skills(profiles: &[Profile], limit: usize) -> Vec<SkillCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for profile in profiles {
        for skill in &profile.skills {
            *counts.entry(skill.name.as_str()).or_default() += 1;
        }
    }

    let mut rows: Vec<SkillCount> = counts
        .into_iter()
        .map(|(name, count)| SkillCount {
            name: name.to_string(),
            count,
        })
        .collect();

    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    rows.truncate(limit);
    rows
}

/// Users ranked by how many skills they list; ties keep store order.
pub fn prolific(profiles: &[Profile], limit: usize) -> Vec<LeaderboardUser> {
    let mut rows: Vec<(usize, &Profile)> = profiles
        .iter()
        .map(|profile| (profile.skills.len(), profile))
        .collect();

    rows.sort_by(|a, b| b.0.cmp(&a.0));
    rows.truncate(limit);

    rows.into_iter()
        .map(|(count, profile)| user_row(profile, LeaderboardValue::Count(count)))
        .collect()
}

/// Newest members first; the value is the join date as `YYYY-MM-DD`.
pub fn newest(profiles: &[Profile], limit: usize) -> Vec<LeaderboardUser> {
    let mut rows: Vec<&Profile> = profiles.iter().collect();
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    rows.truncate(limit);

    rows.into_iter()
        .map(|profile| user_row(profile, LeaderboardValue::Text(join_date(profile.created_at))))
        .collect()
}

fn user_row(profile: &Profile, value: LeaderboardValue) -> LeaderboardUser {
    LeaderboardUser {
        id: profile.id.clone(),
        first_name: profile.first_name.clone(),
        last_name: profile.last_name.clone(),
        photo_url: profile.photo_url.clone(),
        value,
    }
}

fn join_date(created_at: i64) -> String {
    DateTime::from_timestamp_millis(created_at)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Availability, Skill};

    fn profile(id: &str, created_at: i64, skills: &[&str]) -> Profile {
        Profile {
            id: id.into(),
            first_name: id.into(),
            last_name: "User".into(),
            email: format!("{id}@example.com"),
            photo_url: format!("https://example.com/{id}.svg"),
            bio: None,
            availability: Availability::Available,
            skills: skills
                .iter()
                .map(|name| Skill {
                    name: (*name).into(),
                    proficiency: 3,
                })
                .collect(),
            created_at,
        }
    }

    #[test]
    fn parse_defaults_to_top_skills() {
        assert_eq!(LeaderboardKind::parse(None), LeaderboardKind::TopSkills);
        assert_eq!(
            LeaderboardKind::parse(Some("bogus")),
            LeaderboardKind::TopSkills
        );
        assert_eq!(
            LeaderboardKind::parse(Some("prolific")),
            LeaderboardKind::Prolific
        );
        assert_eq!(LeaderboardKind::parse(Some("newest")), LeaderboardKind::Newest);
    }

    #[test]
    fn top_skills_counts_and_orders() {
        let profiles = vec![
            profile("a", 0, &["Rust", "Go"]),
            profile("b", 0, &["Rust"]),
            profile("c", 0, &["Go", "React"]),
        ];

        let rows = top_skills(&profiles, 10);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], SkillCount { name: "Go".into(), count: 2 });
        assert_eq!(rows[1], SkillCount { name: "Rust".into(), count: 2 });
        assert_eq!(rows[2], SkillCount { name: "React".into(), count: 1 });
    }

    #[test]
    fn top_skills_keeps_distinct_spellings() {
        let profiles = vec![profile("a", 0, &["Rust"]), profile("b", 0, &["rust"])];

        let rows = top_skills(&profiles, 10);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.count == 1));
    }

    #[test]
    fn top_skills_respects_limit() {
        let profiles = vec![profile("a", 0, &["A", "B", "C", "D"])];
        assert_eq!(top_skills(&profiles, 2).len(), 2);
    }

    #[test]
    fn prolific_ranks_by_skill_count() {
        let profiles = vec![
            profile("one", 0, &["Rust"]),
            profile("three", 0, &["Rust", "Go", "React"]),
            profile("two", 0, &["Rust", "Go"]),
        ];

        let rows = prolific(&profiles, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "three");
        assert_eq!(rows[0].value, LeaderboardValue::Count(3));
        assert_eq!(rows[1].id, "two");
    }

    #[test]
    fn newest_orders_by_created_at_desc() {
        let profiles = vec![
            profile("old", 1_600_000_000_000, &[]),
            profile("new", 1_700_000_000_000, &[]),
        ];

        let rows = newest(&profiles, 10);
        assert_eq!(rows[0].id, "new");
        assert_eq!(rows[0].value, LeaderboardValue::Text("2023-11-14".into()));
        assert_eq!(rows[1].id, "old");
    }

    #[test]
    fn value_serializes_untagged() {
        let count = serde_json::to_value(LeaderboardValue::Count(4)).unwrap();
        assert_eq!(count, serde_json::json!(4));

        let text = serde_json::to_value(LeaderboardValue::Text("2024-01-01".into())).unwrap();
        assert_eq!(text, serde_json::json!("2024-01-01"));
    }

    #[test]
    fn compute_dispatches_by_kind() {
        let profiles = vec![profile("a", 0, &["Rust"])];

        match compute(LeaderboardKind::TopSkills, &profiles, 10) {
            LeaderboardView::Skills(rows) => assert_eq!(rows[0].name, "Rust"),
            other => panic!("unexpected view: {other:?}"),
        }

        match compute(LeaderboardKind::Newest, &profiles, 10) {
            LeaderboardView::Users(rows) => assert_eq!(rows[0].id, "a"),
            other => panic!("unexpected view: {other:?}"),
        }
    }
}
