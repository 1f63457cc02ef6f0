use serde::{Deserialize, Serialize};

use super::common::CatalogRecord;

/// Trade exhibition appearance. `date` stays the ISO text the API returns;
/// the client only ever shows its date part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exhibition {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub exhibition_type: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_public_id: Option<String>,
}

impl CatalogRecord for Exhibition {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn display_label(&self) -> &str {
        &self.title
    }

    fn resource_path() -> &'static str {
        "/Exhibitions"
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExhibitionDraft {
    pub title: String,
    /// yyyy-mm-dd, as produced by a date input.
    pub date: String,
    pub location: String,
    pub exhibition_type: String,
}

impl ExhibitionDraft {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("date", self.date.clone()),
            ("location", self.location.clone()),
            ("exhibitionType", self.exhibition_type.clone()),
        ]
    }
}

impl From<&Exhibition> for ExhibitionDraft {
    fn from(record: &Exhibition) -> Self {
        Self {
            title: record.title.clone(),
            // drop the time part so the value fits a date input
            date: record
                .date
                .split('T')
                .next()
                .unwrap_or_default()
                .to_string(),
            location: record.location.clone(),
            exhibition_type: record.exhibition_type.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_record() {
        let json = r#"{
            "id": 7,
            "title": "ChemExpo",
            "date": "2026-05-10T00:00:00",
            "location": "Dubai",
            "exhibitionType": "Trade fair",
            "imageUrl": "https://cdn.example.com/expo.jpg"
        }"#;
        let record: Exhibition = serde_json::from_str(json).unwrap();
        assert_eq!(record.exhibition_type, "Trade fair");
        assert_eq!(record.date, "2026-05-10T00:00:00");
    }

    #[test]
    fn draft_prefill_keeps_only_the_date_part() {
        let record = Exhibition {
            id: 7,
            title: "ChemExpo".to_string(),
            date: "2026-05-10T00:00:00".to_string(),
            location: "Dubai".to_string(),
            exhibition_type: "Trade fair".to_string(),
            image_url: None,
            image_public_id: None,
        };
        assert_eq!(ExhibitionDraft::from(&record).date, "2026-05-10");
    }

    #[test]
    fn form_fields_use_wire_names() {
        let draft = ExhibitionDraft {
            title: "ChemExpo".to_string(),
            date: "2026-05-10".to_string(),
            location: "Dubai".to_string(),
            exhibition_type: "Trade fair".to_string(),
        };
        let fields = draft.form_fields();
        assert_eq!(fields[3], ("exhibitionType", "Trade fair".to_string()));
    }
}
