use axum::{
    extract::{Extension, Path, State},
    Json,
};
use chrono::Utc;
use mongodb::bson::{doc, to_bson};

use crate::controllers::proposal_controllers::models::{CastProposalVoteRequest, ProposalResponse};
use crate::controllers::{caller_id, ensure_member, find_trip, parse_id};
use crate::models::proposal_models::Proposal;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::session::Claims;
use crate::voting::proposal::{cast_vote as apply_vote, derive_status};

pub async fn cast_vote(
    Path(proposal_id): Path<String>,
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CastProposalVoteRequest>,
) -> AppResult<Json<ProposalResponse>> {
    let user_id = caller_id(&claims)?;
    let obj_id = parse_id(&proposal_id, "proposal")?;

    let coll = state.db.collection::<Proposal>("proposals");

    let mut proposal = coll
        .find_one(doc! { "_id": obj_id })
        .await?
        .ok_or_else(|| AppError::NotFound("Proposal not found".to_string()))?;

    let trip = find_trip(&state.db, proposal.trip_id).await?;
    ensure_member(&trip, &user_id)?;

    let now = Utc::now();
    apply_vote(&mut proposal.votes, user_id, payload.vote, now);
    // Status never diverges from the tally: recompute on every cast.
    proposal.status = derive_status(&proposal.votes);
    proposal.updated_at = now;

    coll.update_one(
        doc! { "_id": obj_id },
        doc! {
            "$set": {
                "votes": to_bson(&proposal.votes)?,
                "status": to_bson(&proposal.status)?,
                "updated_at": to_bson(&proposal.updated_at)?,
            }
        },
    )
    .await?;

    Ok(Json(proposal.into()))
}
