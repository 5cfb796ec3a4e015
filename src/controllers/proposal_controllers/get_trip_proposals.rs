use axum::{
    extract::{Path, State},
    Json,
};
use futures_util::TryStreamExt;
use mongodb::bson::doc;

use crate::controllers::parse_id;
use crate::controllers::proposal_controllers::models::ProposalResponse;
use crate::models::proposal_models::Proposal;
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn get_trip_proposals(
    Path(trip_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProposalResponse>>> {
    let trip_obj_id = parse_id(&trip_id, "trip")?;

    let coll = state.db.collection::<Proposal>("proposals");

    let mut cursor = coll.find(doc! { "trip_id": trip_obj_id }).await?;

    let mut proposals = Vec::new();
    while let Some(proposal) = cursor.try_next().await? {
        proposals.push(proposal);
    }

    Ok(Json(proposals.into_iter().map(ProposalResponse::from).collect()))
}
