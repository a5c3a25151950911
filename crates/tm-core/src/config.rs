use std::env;

/// Fixed upper bounds the engine operates under. Every listing scans at most
/// `scan_limit` records; leaderboards return at most `leaderboard_size` rows;
/// team requests are clamped to `max_team_size` members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineLimits {
    pub scan_limit: usize,
    pub leaderboard_size: usize,
    pub max_team_size: usize,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            scan_limit: 1000,
            leaderboard_size: 10,
            max_team_size: 50,
        }
    }
}

impl EngineLimits {
    fn parse_env_usize(name: &str) -> Option<usize> {
        env::var(name)
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|value| *value > 0)
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            scan_limit: Self::parse_env_usize("TM_SCAN_LIMIT").unwrap_or(defaults.scan_limit),
            leaderboard_size: Self::parse_env_usize("TM_LEADERBOARD_SIZE")
                .unwrap_or(defaults.leaderboard_size),
            max_team_size: Self::parse_env_usize("TM_MAX_TEAM_SIZE")
                .unwrap_or(defaults.max_team_size),
        }
    }
}
