use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use screening_instruments::collector::{FormView, ResponseCollector};
use screening_instruments::scorer::ScoreResult;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
    question_count: usize,
    max_score: u32,
}

/// One "answer selected" event.
#[derive(Debug, Deserialize)]
pub struct Selection {
    pub question: usize,
    pub value: u32,
}

/// Selection events in the order they happened. A later event for the same
/// question replaces an earlier one.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub answers: Vec<Selection>,
}

pub async fn list_instruments(State(state): State<AppState>) -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = state
        .registry
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
            question_count: i.questions().len(),
            max_score: i.max_score(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FormView>, ApiError> {
    let instrument = state
        .registry
        .get(&id)
        .ok_or_else(|| ApiError::unknown_instrument(&id))?;

    Ok(Json(FormView::of(instrument)))
}

pub async fn score_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResult>, ApiError> {
    let instrument = state
        .registry
        .get(&id)
        .ok_or_else(|| ApiError::unknown_instrument(&id))?;

    let (_, mut collector) = ResponseCollector::render(instrument);
    for selection in &request.answers {
        collector.select(selection.question, selection.value)?;
    }

    let result = collector.submit()?;
    tracing::info!(instrument = %id, "screening scored");
    Ok(Json(result))
}
