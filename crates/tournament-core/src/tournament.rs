//! Tournament records.

use serde::{Deserialize, Serialize};

/// A tournament as submitted for insertion, before storage assigns an id.
///
/// Required fields are plain strings; an empty string counts as missing.
/// A JSON record that omits a required field deserializes with that field
/// empty, so it fails validation instead of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTournament {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Sport, expected to be one of [`crate::SPORTS`].
    #[serde(default)]
    pub sport: String,
    /// Competitive tier, expected to be one of [`crate::LEVELS`].
    #[serde(default)]
    pub level: String,
    /// First day, `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: String,
    /// Last day, `YYYY-MM-DD`.
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub official_url: Option<String>,
    /// Broadcasters or streaming services, in display order.
    #[serde(default)]
    pub streaming_links: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl NewTournament {
    /// Creates a record with the required fields set and nothing else.
    pub fn new(
        name: impl Into<String>,
        sport: impl Into<String>,
        level: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            sport: sport.into(),
            level: level.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            ..Self::default()
        }
    }

    /// Returns the name of the first required field that is empty, if any.
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("sport", &self.sport),
            ("level", &self.level),
            ("start_date", &self.start_date),
            ("end_date", &self.end_date),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
    }
}

/// A stored tournament.
///
/// Absent optional fields serialize as `""`, and `""` reads back as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    /// Storage-assigned identifier, starting at 1.
    pub id: i64,
    pub name: String,
    pub sport: String,
    pub level: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(with = "empty_as_none", default)]
    pub official_url: Option<String>,
    pub streaming_links: Vec<String>,
    #[serde(with = "empty_as_none", default)]
    pub image_url: Option<String>,
    #[serde(with = "empty_as_none", default)]
    pub summary: Option<String>,
    /// When the record was inserted.
    pub created_at: String,
    /// Always equal to `created_at`; records are never updated.
    pub updated_at: String,
}

mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_deref().unwrap_or_default())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.filter(|v| !v.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_reports_first_empty() {
        let mut record = NewTournament::new("Test Cup", "Chess", "", "2025-06-01", "");
        assert_eq!(record.missing_field(), Some("level"));

        record.level = "State".to_string();
        assert_eq!(record.missing_field(), Some("end_date"));

        record.end_date = "2025-06-10".to_string();
        assert_eq!(record.missing_field(), None);
    }

    #[test]
    fn test_deserialize_fills_omitted_fields() {
        let record: NewTournament = serde_json::from_str(
            r#"{"name": "Test Cup", "sport": "Chess", "start_date": "2025-06-01"}"#,
        )
        .unwrap();

        assert_eq!(record.name, "Test Cup");
        assert!(record.level.is_empty());
        assert!(record.streaming_links.is_empty());
        assert_eq!(record.official_url, None);
        assert_eq!(record.missing_field(), Some("level"));
    }

    #[test]
    fn test_absent_optional_fields_serialize_as_empty() {
        let stored = Tournament {
            id: 1,
            name: "Test Cup".to_string(),
            sport: "Chess".to_string(),
            level: "State".to_string(),
            start_date: "2025-06-01".to_string(),
            end_date: "2025-06-10".to_string(),
            official_url: None,
            streaming_links: vec![],
            image_url: None,
            summary: Some("A cup.".to_string()),
            created_at: "2025-01-01 00:00:00".to_string(),
            updated_at: "2025-01-01 00:00:00".to_string(),
        };

        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value["official_url"], "");
        assert_eq!(value["image_url"], "");
        assert_eq!(value["summary"], "A cup.");

        let back: Tournament = serde_json::from_value(value).unwrap();
        assert_eq!(back, stored);
    }
}
