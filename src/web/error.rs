//! Error responses for the web form

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::transcript::AcquisitionError;
use crate::web::page::{render, PageView};
use crate::NotesError;

/// A failed notes request, rendered back into the form.
#[derive(Debug)]
pub struct WebError {
    pub url: String,
    pub error: NotesError,
}

impl WebError {
    pub fn new(url: impl Into<String>, error: NotesError) -> Self {
        Self {
            url: url.into(),
            error,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match &self.error {
            NotesError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            NotesError::Transcript(AcquisitionError::NoTranscriptAvailable { .. }) => {
                StatusCode::NOT_FOUND
            }
            NotesError::Transcript(AcquisitionError::TranscriptsDisabled) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            NotesError::Transcript(AcquisitionError::Service(_)) | NotesError::Summarization(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.error.user_message();
        let video_id = crate::video::resolve(&self.url);

        let body = render(&PageView {
            url: &self.url,
            video_id: video_id.as_ref(),
            notes: None,
            error: Some(&message),
        });

        (status, Html(body)).into_response()
    }
}
