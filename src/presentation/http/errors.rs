use poem::{IntoResponse, Response, error::ResponseError, http::StatusCode, web::Json};
use poem_openapi::error::{
    ParseMultipartError, ParseParamError, ParsePathError, ParseRequestPayloadError,
};
use serde::Serialize;
use tracing::{debug, error};

use crate::domain::errors::DomainError;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: &'static str,
    pub message: String,
    pub detail: Vec<FieldError>,
}

/// One failed constraint; `loc` is the path to the offending input,
/// e.g. `["body", "by", "email"]`.
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
}

impl ErrorBody {
    fn unprocessable(message: String, loc: Vec<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY.as_u16(),
            error: "validation_error",
            detail: vec![FieldError {
                loc,
                msg: message.clone(),
            }],
            message,
        }
    }
}

impl IntoResponse for ErrorBody {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl ResponseError for DomainError {
    fn status(&self) -> StatusCode {
        match self {
            DomainError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::AlreadyExists(_) => StatusCode::CONFLICT,
            DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
            DomainError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            DomainError::Corrupted(_) | DomainError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn as_response(&self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        let (kind, message, detail) = match self {
            DomainError::Validation { field, reason } => {
                let mut loc = vec!["body".to_string()];
                loc.extend(field.split('.').map(str::to_string));
                let detail = vec![FieldError {
                    loc,
                    msg: reason.clone(),
                }];
                ("validation_error", self.to_string(), detail)
            }
            DomainError::NotFound(_) => ("not_found", self.to_string(), Vec::new()),
            DomainError::AlreadyExists(_) => ("conflict", self.to_string(), Vec::new()),
            DomainError::Forbidden(_) => ("forbidden", self.to_string(), Vec::new()),
            DomainError::NotImplemented(_) => ("not_implemented", self.to_string(), Vec::new()),
            DomainError::Corrupted(_) => ("storage_corrupted", self.to_string(), Vec::new()),
            DomainError::Other(_) => (
                "internal_error",
                "internal server error".to_string(),
                Vec::new(),
            ),
        };

        ErrorBody {
            status: status.as_u16(),
            error: kind,
            message,
            detail,
        }
        .into_response()
    }
}

pub async fn payload_error(err: ParseRequestPayloadError) -> ErrorBody {
    let mut loc = vec!["body".to_string()];
    loc.extend(field_name(&err.reason));
    ErrorBody::unprocessable(err.reason, loc)
}

pub async fn param_error(err: ParseParamError) -> ErrorBody {
    ErrorBody::unprocessable(err.reason, vec!["params".to_string(), err.name.to_string()])
}

pub async fn path_error(err: ParsePathError) -> ErrorBody {
    ErrorBody::unprocessable(err.reason, vec!["params".to_string(), err.name.to_string()])
}

pub async fn multipart_error(err: ParseMultipartError) -> ErrorBody {
    let mut loc = vec!["body".to_string()];
    loc.extend(field_name(&err.reason));
    ErrorBody::unprocessable(err.reason, loc)
}

// the framework reports object field failures as "... field `name` verify failed ..."
fn field_name(reason: &str) -> Option<String> {
    let (_, rest) = reason.split_once("field `")?;
    let (name, _) = rest.split_once('`')?;
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_field_from_reason() {
        assert_eq!(
            field_name(r#"failed to parse "SignupRequestDto": field `password` verify failed. minLength(3)"#),
            Some("password".to_string())
        );
        assert_eq!(field_name("expected value at line 1 column 1"), None);
    }

    #[test]
    fn domain_errors_map_to_client_and_server_statuses() {
        assert_eq!(
            DomainError::validation("content", "too short").status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(DomainError::Forbidden("minor".into()).status(), StatusCode::FORBIDDEN);
        assert_eq!(DomainError::NotImplemented("login").status(), StatusCode::NOT_IMPLEMENTED);
        assert_eq!(
            DomainError::Corrupted("users.json".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn malformed_path_segment_is_unprocessable() -> Result<(), anyhow::Error> {
        let response = path_error(ParsePathError {
            name: "tweet_id",
            reason: "invalid length".to_string(),
        })
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: serde_json::Value = response.into_body().into_json().await?;
        assert_eq!(body["detail"][0]["loc"], serde_json::json!(["params", "tweet_id"]));
        Ok(())
    }

    #[tokio::test]
    async fn validation_response_carries_the_field_path() -> Result<(), anyhow::Error> {
        let response = DomainError::validation("by.email", "is not a valid email address").as_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: serde_json::Value = response.into_body().into_json().await?;
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["detail"][0]["loc"], serde_json::json!(["body", "by", "email"]));
        Ok(())
    }
}
