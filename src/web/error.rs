use axum::http::StatusCode;
use kraken::KrakenError;

pub fn status_for(err: &KrakenError) -> StatusCode {
    match err {
        KrakenError::UnsupportedUpload(_) | KrakenError::InvalidRequest(_) => {
            StatusCode::BAD_REQUEST
        }
        KrakenError::EnvironmentResolution(_)
        | KrakenError::OcrExecution { .. }
        | KrakenError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// The message shown to the user for a failed run.
pub fn user_message(err: &KrakenError) -> String {
    match err {
        KrakenError::EnvironmentResolution(_) => {
            format!("Error activating virtual environment: {}", err)
        }
        KrakenError::OcrExecution { stderr, .. } => format!("Error running Kraken OCR: {}", stderr),
        KrakenError::UnsupportedUpload(_) | KrakenError::InvalidRequest(_) => err.to_string(),
        KrakenError::Unexpected(_) => format!("An error occurred: {}", err),
    }
}
