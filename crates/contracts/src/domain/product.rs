use serde::{Deserialize, Serialize};

use super::category::Category;
use super::common::CatalogRecord;

/// Catalog product. Reads carry the joined category so lists can show its
/// title without a second lookup.
///
/// `purity`, `grade` and `quantity` are opaque text; the catalog holds
/// unit-bearing values like "99.5%" or "500 mL" and nothing computes on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cas_number: String,
    #[serde(default)]
    pub purity: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_public_id: Option<String>,
}

impl CatalogRecord for Product {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn display_label(&self) -> &str {
        &self.title
    }

    fn resource_path() -> &'static str {
        "/Products"
    }
}

/// Editable product fields, submitted as multipart text parts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub cas_number: String,
    pub purity: String,
    pub grade: String,
    pub quantity: String,
    pub category_id: Option<i64>,
}

impl ProductDraft {
    /// Text parts for the multipart body, in wire order. All editable fields
    /// are sent; the foreign key is omitted when unset.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("casNumber", self.cas_number.clone()),
            ("purity", self.purity.clone()),
            ("grade", self.grade.clone()),
            ("quantity", self.quantity.clone()),
        ];
        if let Some(category_id) = self.category_id {
            fields.push(("categoryId", category_id.to_string()));
        }
        fields
    }
}

impl From<&Product> for ProductDraft {
    fn from(record: &Product) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            cas_number: record.cas_number.clone(),
            purity: record.purity.clone(),
            grade: record.grade.clone(),
            quantity: record.quantity.clone(),
            category_id: record.category_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_record_with_joined_category() {
        let json = r#"{
            "id": 12,
            "title": "Acetone",
            "description": "General purpose solvent",
            "casNumber": "67-64-1",
            "purity": "99.5%",
            "grade": "ACS",
            "quantity": "500 mL",
            "categoryId": 3,
            "category": { "id": 3, "title": "Solvents" },
            "imageUrl": "https://cdn.example.com/acetone.png",
            "imagePublicId": "catalog/acetone"
        }"#;
        let record: Product = serde_json::from_str(json).unwrap();
        assert_eq!(record.cas_number, "67-64-1");
        assert_eq!(record.category_id, Some(3));
        assert_eq!(record.category.as_ref().unwrap().title, "Solvents");
        assert_eq!(
            record.image_url.as_deref(),
            Some("https://cdn.example.com/acetone.png")
        );
    }

    #[test]
    fn absent_optional_fields_default() {
        let record: Product = serde_json::from_str(r#"{"id":1,"title":"Toluene"}"#).unwrap();
        assert_eq!(record.description, "");
        assert_eq!(record.category_id, None);
        assert!(record.category.is_none());
        assert!(record.image_url.is_none());
    }

    #[test]
    fn form_fields_send_every_editable_field() {
        let draft = ProductDraft {
            title: "Acetone".to_string(),
            cas_number: "67-64-1".to_string(),
            ..Default::default()
        };
        let fields = draft.form_fields();
        assert_eq!(fields.len(), 6);
        assert!(fields.contains(&("casNumber", "67-64-1".to_string())));
        // untouched fields still go on the wire, empty
        assert!(fields.contains(&("grade", String::new())));
        assert!(!fields.iter().any(|(name, _)| *name == "categoryId"));
    }

    #[test]
    fn form_fields_include_category_when_set() {
        let draft = ProductDraft {
            category_id: Some(3),
            ..Default::default()
        };
        assert!(draft
            .form_fields()
            .contains(&("categoryId", "3".to_string())));
    }

    #[test]
    fn draft_prefills_from_record_without_image_fields() {
        let record = Product {
            id: 12,
            title: "Acetone".to_string(),
            description: String::new(),
            cas_number: "67-64-1".to_string(),
            purity: "99.5%".to_string(),
            grade: String::new(),
            quantity: String::new(),
            category_id: Some(3),
            category: None,
            image_url: Some("https://cdn.example.com/acetone.png".to_string()),
            image_public_id: None,
        };
        let draft = ProductDraft::from(&record);
        assert_eq!(draft.title, "Acetone");
        assert_eq!(draft.category_id, Some(3));
        // the image reference never round-trips through the form
        assert!(!draft
            .form_fields()
            .iter()
            .any(|(_, value)| value.contains("cdn.example.com")));
    }
}
