use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;

use screening_instruments::collector::ResponseCollector;
use screening_instruments::error::ScoreError;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn show_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let instrument = state
        .registry
        .get(&id)
        .ok_or_else(|| ApiError::unknown_instrument(&id))?;

    let (view, collector) = ResponseCollector::render(instrument);
    let page = state.renderer.render_form(&view, collector.responses(), None)?;
    Ok(Html(page))
}

/// Handle a posted form. Fields are named `q<index>` with the chosen value;
/// anything else is ignored.
pub async fn submit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let instrument = state
        .registry
        .get(&id)
        .ok_or_else(|| ApiError::unknown_instrument(&id))?;

    let (view, mut collector) = ResponseCollector::render(instrument);
    for (name, value) in &fields {
        let Some(index) = name.strip_prefix('q') else {
            continue;
        };
        let index: usize = index
            .parse()
            .map_err(|_| ApiError::BadRequest(format!("invalid question field: {name}")))?;
        let value: u32 = value
            .parse()
            .map_err(|_| ApiError::BadRequest(format!("invalid answer for {name}: {value}")))?;
        collector.select(index, value)?;
    }

    match collector.submit() {
        Ok(result) => {
            tracing::info!(instrument = %id, "screening scored");
            let page = state.renderer.render_result(&view.name, &result)?;
            Ok(Html(page).into_response())
        }
        Err(ScoreError::Incomplete(incomplete)) => {
            let page = state
                .renderer
                .render_form(&view, collector.responses(), Some(incomplete))?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response())
        }
        Err(other) => Err(other.into()),
    }
}
