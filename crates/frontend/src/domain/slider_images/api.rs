use contracts::domain::common::CatalogRecord;
use contracts::domain::slider_image::{SliderImage, SliderImageDraft};
use web_sys::File;

use crate::shared::api_utils;

pub async fn fetch_slider_images() -> Result<Vec<SliderImage>, String> {
    api_utils::fetch_json(SliderImage::resource_path()).await
}

pub async fn create_slider_image(draft: &SliderImageDraft, image: &File) -> Result<(), String> {
    let form = api_utils::multipart(draft.form_fields(), Some(image))?;
    api_utils::send_form("POST", SliderImage::resource_path(), form).await
}

pub async fn update_slider_image(
    id: i64,
    draft: &SliderImageDraft,
    image: Option<&File>,
) -> Result<(), String> {
    let form = api_utils::multipart(draft.form_fields(), image)?;
    let path = format!("{}/{}", SliderImage::resource_path(), id);
    api_utils::send_form("PUT", &path, form).await
}

pub async fn delete_slider_image(id: i64) -> Result<(), String> {
    let path = format!("{}/{}", SliderImage::resource_path(), id);
    api_utils::send_delete(&path).await
}
