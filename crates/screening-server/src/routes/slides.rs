use axum::extract::State;
use axum::Json;

use crate::manifest::SlideManifest;
use crate::state::AppState;

pub async fn list_slides(State(state): State<AppState>) -> Json<SlideManifest> {
    Json(state.slides.as_ref().clone())
}
