// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sport record as served by the remote catalog.

use serde::{Deserialize, Deserializer, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// One card of the swipe deck.
///
/// Field names follow the catalog's JSON so the same shape round-trips
/// through the API and the decision store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct Sport {
    /// Catalog identifier (unique within the catalog)
    #[serde(rename = "idSport", deserialize_with = "string_or_number")]
    #[validate(length(min = 1, message = "idSport must not be empty"))]
    pub id_sport: String,
    /// Display name
    #[serde(rename = "strSport")]
    #[validate(length(min = 1, message = "strSport must not be empty"))]
    pub name: String,
    /// Format tag (e.g. "TeamvsTeam")
    #[serde(rename = "strFormat", default)]
    pub format: String,
    /// Thumbnail image URI
    #[serde(rename = "strSportThumb", default)]
    pub thumb_url: String,
    /// Icon image URI
    #[serde(rename = "strSportIconGreen", default)]
    pub icon_url: String,
    /// Long-form description
    #[serde(rename = "strSportDescription", default)]
    pub description: String,
}

impl Sport {
    /// Minimal record with only the required fields set.
    pub fn new(id_sport: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id_sport: id_sport.into(),
            name: name.into(),
            format: String::new(),
            thumb_url: String::new(),
            icon_url: String::new(),
            description: String::new(),
        }
    }
}

/// The catalog has served `idSport` both as `"102"` and as `102`.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Uint(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s.trim().to_string(),
        Raw::Int(n) => n.to_string(),
        Raw::Uint(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_fields() {
        let json = r#"{
            "idSport": "102",
            "strSport": "Soccer",
            "strFormat": "TeamvsTeam",
            "strSportThumb": "https://example.com/soccer.jpg",
            "strSportIconGreen": "https://example.com/soccer.png",
            "strSportDescription": "Association football"
        }"#;

        let sport: Sport = serde_json::from_str(json).unwrap();
        assert_eq!(sport.id_sport, "102");
        assert_eq!(sport.name, "Soccer");
        assert_eq!(sport.format, "TeamvsTeam");
        assert_eq!(sport.thumb_url, "https://example.com/soccer.jpg");
        assert!(sport.validate().is_ok());
    }

    #[test]
    fn test_numeric_id_is_normalised() {
        let sport: Sport = serde_json::from_str(r#"{"idSport": 7, "strSport": "Darts"}"#).unwrap();
        assert_eq!(sport.id_sport, "7");
        assert_eq!(sport.description, "");
    }

    #[test]
    fn test_empty_id_fails_validation() {
        let sport: Sport = serde_json::from_str(r#"{"idSport": " ", "strSport": "Darts"}"#).unwrap();
        assert!(sport.validate().is_err());
    }

    #[test]
    fn test_serialize_uses_catalog_names() {
        let value = serde_json::to_value(Sport::new("1", "Darts")).unwrap();
        assert_eq!(value["idSport"], "1");
        assert_eq!(value["strSport"], "Darts");
    }
}
