//! Form handlers

use axum::extract::{Form, Query, State};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use tracing::warn;

use crate::video::resolve;
use crate::web::page::{render, PageView};
use crate::web::{AppState, WebError};

#[derive(Debug, Default, Deserialize)]
pub struct LinkForm {
    #[serde(default)]
    pub url: String,
}

/// Empty form, or a thumbnail preview when `?url=` resolves.
pub async fn index(Query(form): Query<LinkForm>) -> Html<String> {
    let video_id = resolve(&form.url);

    Html(render(&PageView {
        url: &form.url,
        video_id: video_id.as_ref(),
        notes: None,
        error: None,
    }))
}

/// Run the link through the notes pipeline.
pub async fn create_notes(State(state): State<AppState>, Form(form): Form<LinkForm>) -> Response {
    match state.pipeline.notes(&form.url).await {
        Ok(notes) => Html(render(&PageView {
            url: &form.url,
            video_id: Some(&notes.video_id),
            notes: Some(&notes.summary),
            error: None,
        }))
        .into_response(),
        Err(error) => {
            warn!(url = %form.url, error = %error, "Notes request failed");
            WebError::new(form.url, error).into_response()
        }
    }
}

pub async fn health() -> &'static str {
    "ok"
}
