use contracts::domain::category::{Category, CategoryDraft};
use contracts::domain::common::CatalogRecord;

use crate::shared::api_utils;

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    api_utils::fetch_json(Category::resource_path()).await
}

pub async fn create_category(draft: &CategoryDraft) -> Result<(), String> {
    api_utils::send_json("POST", Category::resource_path(), draft).await
}

pub async fn update_category(id: i64, draft: &CategoryDraft) -> Result<(), String> {
    let path = format!("{}/{}", Category::resource_path(), id);
    api_utils::send_json("PUT", &path, draft).await
}

pub async fn delete_category(id: i64) -> Result<(), String> {
    let path = format!("{}/{}", Category::resource_path(), id);
    api_utils::send_delete(&path).await
}
