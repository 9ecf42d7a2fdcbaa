use chrono::{FixedOffset, Offset, Utc};

/// Environment variable overriding where the data documents live
pub const SOURCE_ENV_VAR: &str = "ONDE_VAI_PASSAR_SOURCE";

#[derive(Debug, Clone)]
pub struct SourceSettings {
    /// Base URL or directory holding `matches.json`, `teams.json` and `tournaments.json`
    pub location: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            location: "data".to_string(),
            user_agent: "OndeVaiPassar/0.1",
            timeout_secs: 15,
        }
    }
}

impl SourceSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            location: std::env::var(SOURCE_ENV_VAR).unwrap_or(defaults.location),
            ..defaults
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplaySettings {
    pub utc_offset_minutes: i32,
    /// Detail page that card links point at
    pub detail_base: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            utc_offset_minutes: -180, // Brasília
            detail_base: "/jogo".to_string(),
        }
    }
}

impl DisplaySettings {
    /// Offset kickoffs are shown in; out-of-range values fall back to UTC
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or(Utc.fix())
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub source: SourceSettings,
    pub display: DisplaySettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            source: SourceSettings::from_env(),
            display: DisplaySettings::default(),
        }
    }
}
