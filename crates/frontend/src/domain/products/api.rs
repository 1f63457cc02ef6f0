use contracts::domain::common::CatalogRecord;
use contracts::domain::product::{Product, ProductDraft};
use web_sys::File;

use crate::shared::api_utils;

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    api_utils::fetch_json(Product::resource_path()).await
}

pub async fn create_product(draft: &ProductDraft, image: &File) -> Result<(), String> {
    let form = api_utils::multipart(draft.form_fields(), Some(image))?;
    api_utils::send_form("POST", Product::resource_path(), form).await
}

/// `image` is only attached when the user picked a replacement; the server
/// keeps the stored image otherwise.
pub async fn update_product(
    id: i64,
    draft: &ProductDraft,
    image: Option<&File>,
) -> Result<(), String> {
    let form = api_utils::multipart(draft.form_fields(), image)?;
    let path = format!("{}/{}", Product::resource_path(), id);
    api_utils::send_form("PUT", &path, form).await
}

pub async fn delete_product(id: i64) -> Result<(), String> {
    let path = format!("{}/{}", Product::resource_path(), id);
    api_utils::send_delete(&path).await
}
