use serde::{Deserialize, Serialize};

use super::common::CatalogRecord;

/// Person shown on the team page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_public_id: Option<String>,
}

impl CatalogRecord for TeamMember {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn display_label(&self) -> &str {
        &self.name
    }

    fn resource_path() -> &'static str {
        "/TeamMembers"
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamMemberDraft {
    pub name: String,
    pub position: String,
}

impl TeamMemberDraft {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("position", self.position.clone()),
        ]
    }
}

impl From<&TeamMember> for TeamMemberDraft {
    fn from(record: &TeamMember) -> Self {
        Self {
            name: record.name.clone(),
            position: record.position.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_record() {
        let json = r#"{
            "id": 9,
            "name": "Lina Haddad",
            "position": "Head of Sales",
            "imageUrl": "https://cdn.example.com/team/lina.jpg",
            "imagePublicId": "team/lina"
        }"#;
        let record: TeamMember = serde_json::from_str(json).unwrap();
        assert_eq!(record.display_label(), "Lina Haddad");
        assert_eq!(record.image_public_id.as_deref(), Some("team/lina"));
    }

    #[test]
    fn form_fields_in_wire_order() {
        let draft = TeamMemberDraft {
            name: "Lina Haddad".to_string(),
            position: "Head of Sales".to_string(),
        };
        assert_eq!(
            draft.form_fields(),
            vec![
                ("name", "Lina Haddad".to_string()),
                ("position", "Head of Sales".to_string()),
            ]
        );
    }
}
