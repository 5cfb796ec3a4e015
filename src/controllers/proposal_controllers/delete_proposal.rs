use axum::{
    extract::{Extension, Path, State},
    Json,
};
use mongodb::bson::doc;

use crate::controllers::{caller_id, parse_id};
use crate::models::proposal_models::Proposal;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::session::Claims;

/// Individual votes are never deleted; the only removal is the whole
/// proposal, by its creator.
pub async fn delete_proposal(
    Path(proposal_id): Path<String>,
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<serde_json::Value>> {
    let user_id = caller_id(&claims)?;
    let obj_id = parse_id(&proposal_id, "proposal")?;

    let coll = state.db.collection::<Proposal>("proposals");

    let proposal = coll
        .find_one(doc! { "_id": obj_id })
        .await?
        .ok_or_else(|| AppError::NotFound("Proposal not found".to_string()))?;

    if proposal.created_by != user_id {
        return Err(AppError::PermissionDenied(
            "Only the creator of the proposal can delete it".to_string(),
        ));
    }

    coll.delete_one(doc! { "_id": obj_id }).await?;

    Ok(Json(serde_json::json!({ "success": true })))
}
