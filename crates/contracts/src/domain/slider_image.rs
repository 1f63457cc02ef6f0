use serde::{Deserialize, Serialize};

use super::common::CatalogRecord;

/// Home page slider entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderImage {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub extra_description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_public_id: Option<String>,
}

impl CatalogRecord for SliderImage {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn display_label(&self) -> &str {
        &self.title
    }

    fn resource_path() -> &'static str {
        "/SliderImages"
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliderImageDraft {
    pub title: String,
    pub description: String,
    pub extra_description: String,
}

impl SliderImageDraft {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("extraDescription", self.extra_description.clone()),
        ]
    }
}

impl From<&SliderImage> for SliderImageDraft {
    fn from(record: &SliderImage) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            extra_description: record.extra_description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_record() {
        let json = r#"{
            "id": 2,
            "title": "Global reach",
            "description": "Serving 40 countries",
            "extraDescription": "Since 1998",
            "imageUrl": "https://cdn.example.com/slide-2.webp"
        }"#;
        let record: SliderImage = serde_json::from_str(json).unwrap();
        assert_eq!(record.extra_description, "Since 1998");
    }

    #[test]
    fn form_fields_use_wire_names() {
        let draft = SliderImageDraft {
            extra_description: "Since 1998".to_string(),
            ..Default::default()
        };
        assert!(draft
            .form_fields()
            .contains(&("extraDescription", "Since 1998".to_string())));
    }
}
