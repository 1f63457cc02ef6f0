use contracts::domain::common::CatalogRecord;
use contracts::domain::industry::{Industry, IndustryDraft};
use web_sys::File;

use crate::shared::api_utils;

pub async fn fetch_industries() -> Result<Vec<Industry>, String> {
    api_utils::fetch_json(Industry::resource_path()).await
}

pub async fn create_industry(draft: &IndustryDraft, image: &File) -> Result<(), String> {
    let form = api_utils::multipart(draft.form_fields(), Some(image))?;
    api_utils::send_form("POST", Industry::resource_path(), form).await
}

pub async fn update_industry(
    id: i64,
    draft: &IndustryDraft,
    image: Option<&File>,
) -> Result<(), String> {
    let form = api_utils::multipart(draft.form_fields(), image)?;
    let path = format!("{}/{}", Industry::resource_path(), id);
    api_utils::send_form("PUT", &path, form).await
}

pub async fn delete_industry(id: i64) -> Result<(), String> {
    let path = format!("{}/{}", Industry::resource_path(), id);
    api_utils::send_delete(&path).await
}
