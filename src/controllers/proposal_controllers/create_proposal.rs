use axum::{
    extract::{Extension, State},
    Json,
};
use chrono::Utc;
use mongodb::bson::oid::ObjectId;

use crate::controllers::proposal_controllers::models::{CreateProposalRequest, ProposalResponse};
use crate::controllers::{caller_id, ensure_member, find_trip, parse_id};
use crate::models::proposal_models::Proposal;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::session::Claims;
use crate::voting::proposal::{derive_status, initial_votes};

pub async fn create_proposal(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateProposalRequest>,
) -> AppResult<Json<ProposalResponse>> {
    let user_id = caller_id(&claims)?;
    let trip_obj_id = parse_id(&payload.trip_id, "trip")?;

    let title = payload.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::ValidationError("Proposal title must not be empty".to_string()));
    }

    let trip = find_trip(&state.db, trip_obj_id).await?;
    ensure_member(&trip, &user_id)?;

    let now = Utc::now();
    // Creator auto-approves; everyone else starts pending.
    let votes = initial_votes(user_id, &trip.members, now);
    let status = derive_status(&votes);

    let proposal = Proposal {
        id: ObjectId::new(),
        trip_id: trip_obj_id,
        category: payload.category,
        title,
        description: payload.description,
        status,
        votes,
        created_by: user_id,
        created_at: now,
        updated_at: now,
    };

    state
        .db
        .collection::<Proposal>("proposals")
        .insert_one(&proposal)
        .await?;

    Ok(Json(proposal.into()))
}
