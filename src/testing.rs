//! Shared fixtures for unit tests.

use chrono::{FixedOffset, NaiveDate};
use serde_json::json;

use crate::domain::{GuideData, MatchesDocument, TeamsDocument, TournamentsDocument};

pub fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, day).unwrap()
}

pub fn brasilia() -> FixedOffset {
    FixedOffset::west_opt(3 * 3600).unwrap()
}

pub fn sample_data() -> GuideData {
    let matches: MatchesDocument = serde_json::from_value(json!({
        "matches": [
            {
                "id": 1, "home": "flamengo", "away": "vasco", "tournament": "carioca",
                "date": "2026-01-16T16:00", "isLive": true,
                "score": { "home": 2, "away": 1 },
                "broadcasts": [
                    { "name": "SporTV", "logo": "/assets/canais/sportv.png" },
                    { "name": "Premiere", "logo": "" }
                ]
            },
            {
                "id": 2, "home": "palmeiras", "away": "corinthians", "tournament": "paulistao",
                "date": "2026-01-16T18:30", "score": null,
                "broadcasts": [{ "name": "Record" }, { "name": "CazéTV" }]
            },
            {
                "id": 3, "home": "sao-paulo", "away": "santos", "tournament": "paulista",
                "date": "2026-01-16T11:00",
                "broadcasts": [{ "name": "TNT Sports" }]
            },
            {
                "id": 4, "home": "vasco", "away": 7, "tournament": "carioca",
                "date": "2026-01-17T20:00",
                "score": { "home": 0, "away": null },
                "broadcasts": [{ "name": "Globo" }]
            },
            {
                "id": 5, "home": "flamengo", "away": "palmeiras", "tournament": "brasileirao",
                "date": "2026-01-18T19:00",
                "broadcasts": []
            }
        ]
    }))
    .unwrap();

    let teams: TeamsDocument = serde_json::from_value(json!({
        "teams": [
            { "id": "flamengo", "slug": "flamengo", "name": "Flamengo", "logo": "/assets/times/flamengo.png" },
            { "id": "vasco", "name": "Vasco" },
            { "id": 7, "slug": "sao-paulo", "name": "São Paulo", "logo": "/assets/times/sao-paulo.png" },
            { "id": "palmeiras", "name": "Palmeiras", "logo": "/assets/times/palmeiras.png" },
            { "id": "corinthians", "name": "Corinthians" }
        ]
    }))
    .unwrap();

    let tournaments: TournamentsDocument = serde_json::from_value(json!({
        "tournaments": [
            { "id": "carioca", "name": "Campeonato Carioca", "shortName": "Carioca" },
            { "id": "paulista", "slug": "paulistao", "name": "Paulistão" }
        ]
    }))
    .unwrap();

    GuideData::from_documents(matches, teams, tournaments, &brasilia()).unwrap()
}
