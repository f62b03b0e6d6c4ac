//! Request body as a field map, from JSON or URL-encoded form data.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, FormRejection},
        FromRequest, Request,
    },
    http::header::CONTENT_TYPE,
    Form,
};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Body fields keyed by name. Bodies with no recognised content type, or no content, are empty.
#[derive(Clone, Debug, Default)]
pub struct ResourcePayload(pub Map<String, Value>);

enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(content_type: &str) -> BodyKind {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    if mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json")) {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

#[async_trait]
impl<S> FromRequest<S> for ResourcePayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        match body_kind(&content_type) {
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(bytes_rejected)?;
                parse_json_object(&bytes)
            }
            BodyKind::Form => {
                let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                    .await
                    .map_err(form_rejected)?;
                Ok(ResourcePayload(
                    fields.into_iter().map(|(k, v)| (k, Value::String(v))).collect(),
                ))
            }
            BodyKind::Other => Ok(ResourcePayload::default()),
        }
    }
}

fn bytes_rejected(rejection: BytesRejection) -> AppError {
    AppError::BodyRejected {
        status: rejection.status(),
        message: rejection.body_text(),
    }
}

fn form_rejected(rejection: FormRejection) -> AppError {
    AppError::BodyRejected {
        status: rejection.status(),
        message: rejection.body_text(),
    }
}

fn parse_json_object(bytes: &[u8]) -> Result<ResourcePayload, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(ResourcePayload::default());
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(m)) => Ok(ResourcePayload(m)),
        Ok(_) => Err(AppError::InvalidBody("body must be a JSON object".into())),
        Err(e) => Err(AppError::InvalidBody(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types_are_classified() {
        assert!(matches!(body_kind("application/json"), BodyKind::Json));
        assert!(matches!(body_kind("Application/JSON; charset=utf-8"), BodyKind::Json));
        assert!(matches!(body_kind("application/merge-patch+json"), BodyKind::Json));
        assert!(matches!(
            body_kind("application/x-www-form-urlencoded"),
            BodyKind::Form
        ));
        assert!(matches!(body_kind("text/plain"), BodyKind::Other));
        assert!(matches!(body_kind(""), BodyKind::Other));
    }

    #[test]
    fn blank_json_body_is_empty() {
        assert!(parse_json_object(b"").unwrap().0.is_empty());
        assert!(parse_json_object(b" \n").unwrap().0.is_empty());
    }

    #[test]
    fn non_object_json_is_rejected() {
        assert!(matches!(parse_json_object(b"[1,2]"), Err(AppError::InvalidBody(_))));
        assert!(matches!(parse_json_object(b"{\"name\":"), Err(AppError::InvalidBody(_))));
    }
}
