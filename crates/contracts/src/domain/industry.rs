use serde::{Deserialize, Serialize};

use super::common::CatalogRecord;

/// Industry served by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Industry {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_public_id: Option<String>,
}

impl CatalogRecord for Industry {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn display_label(&self) -> &str {
        &self.title
    }

    fn resource_path() -> &'static str {
        "/Industries"
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndustryDraft {
    pub title: String,
    pub description: String,
}

impl IndustryDraft {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
        ]
    }
}

impl From<&Industry> for IndustryDraft {
    fn from(record: &Industry) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_record() {
        let json = r#"{
            "id": 4,
            "title": "Pharmaceuticals",
            "description": "APIs and excipients",
            "imageUrl": "https://cdn.example.com/pharma.webp"
        }"#;
        let record: Industry = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "Pharmaceuticals");
        assert!(record.image_public_id.is_none());
    }

    #[test]
    fn form_fields_in_wire_order() {
        let draft = IndustryDraft {
            title: "Coatings".to_string(),
            description: "Paints and surface treatment".to_string(),
        };
        assert_eq!(
            draft.form_fields(),
            vec![
                ("title", "Coatings".to_string()),
                ("description", "Paints and surface treatment".to_string()),
            ]
        );
    }
}
