use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::mx::LookupMx;
use crate::verify::{MailboxProbe, VerificationReport, Verifier};

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub email: String,
    pub result: VerificationReport,
}

pub(crate) async fn validate_email<R, P>(
    State(verifier): State<Arc<Verifier<R, P>>>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Response
where
    R: LookupMx + 'static,
    P: MailboxProbe + 'static,
{
    let email = match payload {
        Ok(Json(ValidateRequest { email: Some(email) })) if !email.trim().is_empty() => email,
        Ok(_) => return missing_email(),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable request body");
            return missing_email();
        }
    };

    tracing::info!(email = %email, "checking email");
    let result = verifier.verify(&email).await;
    tracing::info!(email = %email, reason = %result.reason, "check finished");
    (StatusCode::OK, Json(ValidateResponse { email, result })).into_response()
}

pub(crate) async fn index() -> &'static str {
    "Hello World"
}

fn missing_email() -> Response {
    (StatusCode::BAD_REQUEST, "Email is required").into_response()
}
