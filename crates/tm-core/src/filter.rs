use crate::skills::skill_key;
use crate::Profile;

/// Search criteria for profile listing: substring match on name, set
/// containment on skills. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFilter {
    pub name: Option<String>,
    pub skills: Vec<String>,
}

impl ProfileFilter {
    /// Build a filter from the HTTP query form: `name` is a free-text
    /// fragment, `skills` a comma-separated list. Blank segments are dropped.
    pub fn from_query(name: Option<&str>, skills_csv: Option<&str>) -> Self {
        let name = name
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_string);

        let skills = skills_csv
            .map(|csv| {
                csv.split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self { name, skills }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.skills.is_empty()
    }

    pub fn matches(&self, profile: &Profile) -> bool {
        if let Some(fragment) = &self.name {
            let needle = fragment.to_lowercase();
            let first = profile.first_name.to_lowercase();
            let last = profile.last_name.to_lowercase();
            if !first.contains(&needle) && !last.contains(&needle) {
                return false;
            }
        }

        if !self.skills.is_empty() {
            let possessed: Vec<String> = profile
                .skills
                .iter()
                .map(|skill| skill_key(&skill.name))
                .collect();

            let all_present = self
                .skills
                .iter()
                .map(|requested| skill_key(requested))
                .filter(|key| !key.is_empty())
                .all(|key| possessed.contains(&key));

            if !all_present {
                return false;
            }
        }

        true
    }
}
