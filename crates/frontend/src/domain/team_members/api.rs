use contracts::domain::common::CatalogRecord;
use contracts::domain::team_member::{TeamMember, TeamMemberDraft};
use web_sys::File;

use crate::shared::api_utils;

pub async fn fetch_team_members() -> Result<Vec<TeamMember>, String> {
    api_utils::fetch_json(TeamMember::resource_path()).await
}

pub async fn create_team_member(draft: &TeamMemberDraft, image: &File) -> Result<(), String> {
    let form = api_utils::multipart(draft.form_fields(), Some(image))?;
    api_utils::send_form("POST", TeamMember::resource_path(), form).await
}

pub async fn update_team_member(
    id: i64,
    draft: &TeamMemberDraft,
    image: Option<&File>,
) -> Result<(), String> {
    let form = api_utils::multipart(draft.form_fields(), image)?;
    let path = format!("{}/{}", TeamMember::resource_path(), id);
    api_utils::send_form("PUT", &path, form).await
}

pub async fn delete_team_member(id: i64) -> Result<(), String> {
    let path = format!("{}/{}", TeamMember::resource_path(), id);
    api_utils::send_delete(&path).await
}
