use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    response::sse::{Event, Sse},
    Json,
};
use futures::stream::{self, Stream};
use mongodb::{bson::doc, Database};
use tokio::time::sleep;

use crate::controllers::parse_id;
use crate::controllers::poll_controllers::models::PollResultsResponse;
use crate::models::poll_models::Poll;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::voting::poll::poll_stats;

pub async fn get_results(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<PollResultsResponse>> {
    let obj_id = parse_id(&poll_id, "poll")?;

    let poll = state
        .db
        .collection::<Poll>("polls")
        .find_one(doc! { "_id": obj_id })
        .await?
        .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

    Ok(Json(results_response(poll)))
}

/// Live results feed: re-reads the poll every couple of seconds and
/// pushes a fresh snapshot. The stream ends when the poll disappears.
pub async fn results_stream(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Sse<impl Stream<Item = Result<Event, std::convert::Infallible>>>> {
    let obj_id = parse_id(&poll_id, "poll")?;
    let db: Arc<Database> = state.db.clone();

    let stream = stream::unfold((db, obj_id), |(db, poll_id)| async move {
        sleep(Duration::from_secs(2)).await;

        let coll = db.collection::<Poll>("polls");

        match coll.find_one(doc! { "_id": poll_id }).await {
            Ok(Some(poll)) => {
                let snapshot = results_response(poll);

                match serde_json::to_string(&snapshot) {
                    Ok(json_data) => Some((Ok(Event::default().data(json_data)), (db, poll_id))),
                    Err(_) => None,
                }
            }
            _ => None,
        }
    });

    Ok(Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    ))
}

fn results_response(poll: Poll) -> PollResultsResponse {
    PollResultsResponse {
        poll_id: poll.id.to_hex(),
        question: poll.question,
        status: poll.status,
        stats: poll_stats(&poll.options),
    }
}
