//! Signup and login endpoints, thin proxies over the identity provider.
//! Provider rejections pass through with their original status and message.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::providers::error::ProviderError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

/// POST /signup
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(request): Json<AuthRequest>,
) -> Result<Json<Value>, AppError> {
    let body = state
        .identity
        .sign_up(&request.email, &request.password)
        .await
        .map_err(identity_error)?;
    Ok(Json(body))
}

/// POST /login
pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<AuthRequest>,
) -> Result<Json<Value>, AppError> {
    let body = state
        .identity
        .sign_in(&request.email, &request.password)
        .await
        .map_err(identity_error)?;
    Ok(Json(body))
}

fn identity_error(err: ProviderError) -> AppError {
    match err {
        ProviderError::Api { status, message } => AppError::Identity { status, message },
        ProviderError::MissingCredential => AppError::Identity {
            status: 503,
            message: "identity provider is not configured".to_string(),
        },
        other => AppError::Identity {
            status: 502,
            message: format!("identity provider unreachable: {other}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_rejection_passes_through() {
        let err = identity_error(ProviderError::Api {
            status: 400,
            message: "EMAIL_EXISTS".to_string(),
        });
        match err {
            AppError::Identity { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "EMAIL_EXISTS");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unconfigured_provider_is_unavailable() {
        let err = identity_error(ProviderError::MissingCredential);
        match err {
            AppError::Identity { status, .. } => assert_eq!(status, 503),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
