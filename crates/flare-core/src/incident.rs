use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IncidentError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("unknown incident type: {0}")]
    UnknownType(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentType {
    Fire,
    Electrical,
    Hazmat,
}

impl IncidentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentType::Fire => "FIRE",
            IncidentType::Electrical => "ELECTRICAL",
            IncidentType::Hazmat => "HAZMAT",
        }
    }
}

impl FromStr for IncidentType {
    type Err = IncidentError;

    // Membership is case-sensitive: "fire" is not a valid type.
    fn from_str(s: &str) -> Result<Self, IncidentError> {
        match s {
            "FIRE" => Ok(IncidentType::Fire),
            "ELECTRICAL" => Ok(IncidentType::Electrical),
            "HAZMAT" => Ok(IncidentType::Hazmat),
            other => Err(IncidentError::UnknownType(other.to_string())),
        }
    }
}

impl fmt::Display for IncidentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub incident_type: IncidentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Inbound fields as parsed by the HTTP layer, before any invariant has
/// been checked. `incident_type` is still the raw string from the request.
#[derive(Debug, Clone, Default)]
pub struct IncidentDraft {
    pub title: String,
    pub description: String,
    pub incident_type: String,
    pub location: Option<Location>,
    pub image_url: Option<String>,
}

impl Incident {
    /// Validate a draft and construct the record that will be handed to the
    /// store. Text fields are trimmed; a trimmed-empty title or a type string
    /// outside the enumeration is rejected and nothing is constructed.
    pub fn build(
        draft: IncidentDraft,
        id: String,
        created_at: DateTime<Utc>,
    ) -> Result<Incident, IncidentError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(IncidentError::EmptyTitle);
        }
        let incident_type = draft.incident_type.parse()?;
        let description = draft.description.trim();

        Ok(Incident {
            id,
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            incident_type,
            location: draft.location,
            image_url: draft.image_url,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, incident_type: &str) -> IncidentDraft {
        IncidentDraft {
            title: title.to_string(),
            incident_type: incident_type.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_trims_fields() {
        let incident = Incident::build(
            IncidentDraft {
                title: "  Warehouse fire  ".to_string(),
                description: "  smoke on the second floor  ".to_string(),
                incident_type: "FIRE".to_string(),
                ..Default::default()
            },
            "id-1".to_string(),
            Utc::now(),
        )
        .unwrap();

        assert_eq!(incident.title, "Warehouse fire");
        assert_eq!(
            incident.description.as_deref(),
            Some("smoke on the second floor")
        );
        assert_eq!(incident.incident_type, IncidentType::Fire);
    }

    #[test]
    fn test_empty_title_rejected() {
        assert_eq!(
            Incident::build(draft("", "FIRE"), "id-1".to_string(), Utc::now()),
            Err(IncidentError::EmptyTitle)
        );
        assert_eq!(
            Incident::build(draft("   ", "FIRE"), "id-2".to_string(), Utc::now()),
            Err(IncidentError::EmptyTitle)
        );
    }

    #[test]
    fn test_unknown_type_rejected() {
        for bad in ["fire", "Fire", "FLOOD", ""] {
            let err = Incident::build(draft("Warehouse fire", bad), "id-1".to_string(), Utc::now())
                .unwrap_err();
            assert_eq!(err, IncidentError::UnknownType(bad.to_string()));
        }
    }

    #[test]
    fn test_all_types_accepted() {
        for (raw, expected) in [
            ("FIRE", IncidentType::Fire),
            ("ELECTRICAL", IncidentType::Electrical),
            ("HAZMAT", IncidentType::Hazmat),
        ] {
            let incident =
                Incident::build(draft("Report", raw), "id-1".to_string(), Utc::now()).unwrap();
            assert_eq!(incident.incident_type, expected);
        }
    }

    #[test]
    fn test_empty_description_omitted() {
        let incident = Incident::build(
            IncidentDraft {
                title: "Sparking outlet".to_string(),
                description: "   ".to_string(),
                incident_type: "ELECTRICAL".to_string(),
                ..Default::default()
            },
            "id-1".to_string(),
            Utc::now(),
        )
        .unwrap();

        assert_eq!(incident.description, None);
        let json = serde_json::to_value(&incident).unwrap();
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_wire_field_names() {
        let incident = Incident::build(
            IncidentDraft {
                title: "Chemical spill".to_string(),
                description: "drums leaking".to_string(),
                incident_type: "HAZMAT".to_string(),
                location: Some(Location {
                    latitude: 19.4326,
                    longitude: -99.1332,
                }),
                image_url: Some("/uploads/abc.jpg".to_string()),
            },
            "id-1".to_string(),
            Utc::now(),
        )
        .unwrap();

        let json = serde_json::to_value(&incident).unwrap();
        assert_eq!(json["incident_type"], "HAZMAT");
        assert_eq!(json["imageUrl"], "/uploads/abc.jpg");
        assert_eq!(json["location"]["latitude"], 19.4326);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn test_absent_optionals_omitted() {
        let incident = Incident::build(
            draft("Warehouse fire", "FIRE"),
            "id-1".to_string(),
            Utc::now(),
        )
        .unwrap();

        let json = serde_json::to_value(&incident).unwrap();
        assert!(json.get("location").is_none());
        assert!(json.get("imageUrl").is_none());
    }
}
