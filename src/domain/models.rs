use chrono::{FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::api::parsers::parse_kickoff;
use crate::errors::LoadError;

/// Team or tournament identifier as it appears in the data documents.
///
/// References are compared through their text, so the JSON values `7` and `"7"`
/// point at the same entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Reference(String);

impl Reference {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Reference {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Reference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawReference {
            Text(String),
            Number(i64),
        }

        Ok(match RawReference::deserialize(deserializer)? {
            RawReference::Text(text) => Reference(text),
            RawReference::Number(number) => Reference(number.to_string()),
        })
    }
}

/// Which of the three static documents a value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Matches,
    Teams,
    Tournaments,
}

impl DocumentKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            DocumentKind::Matches => "matches.json",
            DocumentKind::Teams => "teams.json",
            DocumentKind::Tournaments => "tournaments.json",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::Matches => "matches",
            DocumentKind::Teams => "teams",
            DocumentKind::Tournaments => "tournaments",
        };
        f.write_str(name)
    }
}

/// Team entry of `teams.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: Reference,
    #[serde(default)]
    pub slug: Option<Reference>,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

impl Team {
    pub fn slug(&self) -> &Reference {
        self.slug.as_ref().unwrap_or(&self.id)
    }

    pub fn logo(&self) -> Option<&str> {
        non_empty(self.logo.as_deref())
    }
}

/// Tournament entry of `tournaments.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: Reference,
    #[serde(default)]
    pub slug: Option<Reference>,
    pub name: String,
    #[serde(default, alias = "shortName")]
    pub short_name: Option<String>,
}

impl Tournament {
    pub fn slug(&self) -> &Reference {
        self.slug.as_ref().unwrap_or(&self.id)
    }

    /// Short name when the document has one, full name otherwise
    pub fn display_name(&self) -> &str {
        non_empty(self.short_name.as_deref()).unwrap_or(&self.name)
    }
}

/// Final or partial score; either side may be null in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    #[serde(default)]
    pub home: Option<i32>,
    #[serde(default)]
    pub away: Option<i32>,
}

impl Score {
    /// Both sides, or nothing when either one is missing
    pub fn pair(&self) -> Option<(i32, i32)> {
        Some((self.home?, self.away?))
    }
}

/// Channel showing a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Broadcast {
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

impl Broadcast {
    pub fn logo(&self) -> Option<&str> {
        non_empty(self.logo.as_deref())
    }
}

/// Match with a parsed kickoff, ready for filtering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub id: Reference,
    pub home: Reference,
    pub away: Reference,
    pub tournament: Reference,
    pub kickoff: NaiveDateTime,
    pub live: bool,
    pub score: Option<Score>,
    pub broadcasts: Vec<Broadcast>,
}

impl Match {
    /// Calendar day of the kickoff in the display offset
    pub fn date(&self) -> NaiveDate {
        self.kickoff.date()
    }

    pub fn score_pair(&self) -> Option<(i32, i32)> {
        self.score.as_ref().and_then(Score::pair)
    }
}

// --- Document Structures ---

/// Raw match entry of `matches.json`
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRecord {
    pub id: Reference,
    #[serde(alias = "homeTeam", alias = "home_team")]
    pub home: Reference,
    #[serde(alias = "awayTeam", alias = "away_team")]
    pub away: Reference,
    #[serde(alias = "league")]
    pub tournament: Reference,
    #[serde(alias = "datetime", alias = "kickoff")]
    pub date: String,
    #[serde(default, alias = "isLive", alias = "is_live")]
    pub live: bool,
    #[serde(default)]
    pub score: Option<Score>,
    #[serde(default, alias = "channels", alias = "broadcasting")]
    pub broadcasts: Vec<Broadcast>,
}

impl MatchRecord {
    pub fn into_match(self, offset: &FixedOffset) -> Result<Match, LoadError> {
        let kickoff = parse_kickoff(&self.date, offset).ok_or_else(|| LoadError::Timestamp {
            match_id: self.id.to_string(),
            value: self.date.clone(),
        })?;

        Ok(Match {
            id: self.id,
            home: self.home,
            away: self.away,
            tournament: self.tournament,
            kickoff,
            live: self.live,
            score: self.score,
            broadcasts: self.broadcasts,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchesDocument {
    pub matches: Vec<MatchRecord>,
}

impl MatchesDocument {
    pub fn into_matches(self, offset: &FixedOffset) -> Result<Vec<Match>, LoadError> {
        self.matches
            .into_iter()
            .map(|record| record.into_match(offset))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamsDocument {
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentsDocument {
    pub tournaments: Vec<Tournament>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
