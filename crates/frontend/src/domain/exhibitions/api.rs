use contracts::domain::common::CatalogRecord;
use contracts::domain::exhibition::{Exhibition, ExhibitionDraft};
use web_sys::File;

use crate::shared::api_utils;

pub async fn fetch_exhibitions() -> Result<Vec<Exhibition>, String> {
    api_utils::fetch_json(Exhibition::resource_path()).await
}

pub async fn create_exhibition(draft: &ExhibitionDraft, image: &File) -> Result<(), String> {
    let form = api_utils::multipart(draft.form_fields(), Some(image))?;
    api_utils::send_form("POST", Exhibition::resource_path(), form).await
}

pub async fn update_exhibition(
    id: i64,
    draft: &ExhibitionDraft,
    image: Option<&File>,
) -> Result<(), String> {
    let form = api_utils::multipart(draft.form_fields(), image)?;
    let path = format!("{}/{}", Exhibition::resource_path(), id);
    api_utils::send_form("PUT", &path, form).await
}

pub async fn delete_exhibition(id: i64) -> Result<(), String> {
    let path = format!("{}/{}", Exhibition::resource_path(), id);
    api_utils::send_delete(&path).await
}
