pub mod config;
pub mod filter;
pub mod leaderboard;
pub mod logging;
pub mod skills;
pub mod store;
pub mod team;

use serde::{Deserialize, Serialize};

// Commonly used data models. Field names serialize camelCase to match the
// wire contract consumed by the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// 1-5 scale.
    pub proficiency: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    #[default]
    Available,
    Busy,
    #[serde(rename = "Not Looking")]
    NotLooking,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub photo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub availability: Availability,
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Epoch millis.
    pub created_at: i64,
}

impl Profile {
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }
}
