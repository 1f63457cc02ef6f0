use serde::{Deserialize, Serialize};

use super::common::CatalogRecord;

/// Product category. The only resource without an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub title: String,
}

impl CatalogRecord for Category {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn display_label(&self) -> &str {
        &self.title
    }

    fn resource_path() -> &'static str {
        "/Categories"
    }
}

/// JSON body for category create/update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    pub title: String,
}

impl CategoryDraft {
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Copy with surrounding whitespace stripped, as submitted on the wire.
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
        }
    }
}

impl From<&Category> for CategoryDraft {
    fn from(record: &Category) -> Self {
        Self {
            title: record.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_record() {
        let record: Category = serde_json::from_str(r#"{"id":3,"title":"Solvents"}"#).unwrap();
        assert_eq!(record.id, 3);
        assert_eq!(record.title, "Solvents");
        assert_eq!(record.display_label(), "Solvents");
    }

    #[test]
    fn draft_serializes_title_only() {
        let draft = CategoryDraft {
            title: "Solvents".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&draft).unwrap(),
            r#"{"title":"Solvents"}"#
        );
    }

    #[test]
    fn blank_title_is_invalid() {
        assert!(!CategoryDraft::default().is_valid());
        assert!(!CategoryDraft { title: "   ".to_string() }.is_valid());
        assert!(CategoryDraft { title: "Acids".to_string() }.is_valid());
    }

    #[test]
    fn trimmed_strips_whitespace() {
        let draft = CategoryDraft {
            title: "  Solvents ".to_string(),
        };
        assert_eq!(draft.trimmed().title, "Solvents");
    }
}
