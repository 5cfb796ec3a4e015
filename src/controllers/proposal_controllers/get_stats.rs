use axum::{
    extract::{Path, State},
    Json,
};
use mongodb::bson::doc;

use crate::controllers::parse_id;
use crate::models::proposal_models::Proposal;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::voting::proposal::{vote_stats, VoteStats};

pub async fn get_stats(
    Path(proposal_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<VoteStats>> {
    let obj_id = parse_id(&proposal_id, "proposal")?;

    let proposal = state
        .db
        .collection::<Proposal>("proposals")
        .find_one(doc! { "_id": obj_id })
        .await?
        .ok_or_else(|| AppError::NotFound("Proposal not found".to_string()))?;

    Ok(Json(vote_stats(&proposal.votes)))
}
