//! Turns a parsed request body into typed create/update input.

use crate::error::{AppError, RESOURCE_NOT_FOUND};
use crate::model::{NewResource, ResourceChanges, ResourceFilters};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::num::IntErrorKind;

pub struct RequestValidator;

impl RequestValidator {
    /// `name` must be present and non-empty. Other fields are optional.
    pub fn new_resource(body: &Map<String, Value>) -> Result<NewResource, AppError> {
        let name = text_field(body, "name")?
            .ok_or_else(|| AppError::BadRequest("Name is required".into()))?;
        Ok(NewResource {
            name,
            description: text_field(body, "description")?,
            category: text_field(body, "category")?,
            status: text_field(body, "status")?,
        })
    }

    /// Every field optional; empty and absent both mean "leave as is".
    pub fn changes(body: &Map<String, Value>) -> Result<ResourceChanges, AppError> {
        Ok(ResourceChanges {
            name: text_field(body, "name")?,
            description: text_field(body, "description")?,
            category: text_field(body, "category")?,
            status: text_field(body, "status")?,
        })
    }

    /// Known query keys only; empty values are ignored.
    pub fn filters(params: &HashMap<String, String>) -> ResourceFilters {
        let get = |k: &str| params.get(k).filter(|v| !v.is_empty()).cloned();
        ResourceFilters {
            category: get("category"),
            status: get("status"),
            name: get("name"),
        }
    }

    /// Non-integers are a bad request. Integers outside `i64` cannot name a stored row,
    /// so they are reported as not found without touching the store.
    pub fn id(raw: &str) -> Result<i64, AppError> {
        raw.trim().parse::<i64>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                AppError::NotFound(RESOURCE_NOT_FOUND.into())
            }
            _ => AppError::BadRequest("Invalid resource ID".into()),
        })
    }
}

/// Truthy scalars become text. Missing, `null`, `""`, `false` and `0` are all `None`.
fn text_field(body: &Map<String, Value>, key: &str) -> Result<Option<String>, AppError> {
    match body.get(key) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(true)) => Ok(Some("true".into())),
        Some(Value::Array(_)) | Some(Value::Object(_)) => {
            Err(AppError::BadRequest(format!("{} must be a string", key)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn name_is_required_and_non_empty() {
        for b in [
            json!({}),
            json!({"name": ""}),
            json!({"name": null, "status": "x"}),
            json!({"name": false}),
            json!({"name": 0}),
            json!({"name": 0.0}),
        ] {
            let err = RequestValidator::new_resource(&body(b)).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(ref m) if m == "Name is required"));
        }
    }

    #[test]
    fn empty_optional_fields_are_unset() {
        let new = RequestValidator::new_resource(&body(json!({
            "name": "Widget",
            "description": "",
            "category": "tools",
            "status": ""
        })))
        .unwrap();
        assert_eq!(new.name, "Widget");
        assert_eq!(new.description, None);
        assert_eq!(new.category.as_deref(), Some("tools"));
        assert_eq!(new.status, None);
    }

    #[test]
    fn scalars_are_rendered_as_text() {
        let changes = RequestValidator::changes(&body(json!({"name": 12, "status": true}))).unwrap();
        assert_eq!(changes.name.as_deref(), Some("12"));
        assert_eq!(changes.status.as_deref(), Some("true"));
    }

    #[test]
    fn falsy_scalars_leave_fields_unchanged() {
        let changes = RequestValidator::changes(&body(json!({
            "name": false,
            "description": 0,
            "category": -0.0,
            "status": ""
        })))
        .unwrap();
        assert_eq!(changes.name, None);
        assert_eq!(changes.description, None);
        assert_eq!(changes.category, None);
        assert_eq!(changes.status, None);

        let new = RequestValidator::new_resource(&body(json!({"name": "Widget", "status": false}))).unwrap();
        assert_eq!(new.status, None);
    }

    #[test]
    fn structured_values_are_rejected() {
        let err = RequestValidator::changes(&body(json!({"category": ["a"]}))).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == "category must be a string"));
    }

    #[test]
    fn ids_must_be_integers() {
        assert_eq!(RequestValidator::id("17").unwrap(), 17);
        assert!(RequestValidator::id("abc").is_err());
        assert!(RequestValidator::id("1.5").is_err());
        assert!(matches!(RequestValidator::id(""), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn out_of_range_ids_are_not_found() {
        for raw in ["99999999999999999999", "-99999999999999999999"] {
            let err = RequestValidator::id(raw).unwrap_err();
            assert!(matches!(err, AppError::NotFound(ref m) if m == "Resource not found"));
        }
    }

    #[test]
    fn filters_skip_unknown_and_empty_params() {
        let params: HashMap<String, String> = [
            ("category", "tools"),
            ("status", ""),
            ("limit", "5"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let f = RequestValidator::filters(&params);
        assert_eq!(f.category.as_deref(), Some("tools"));
        assert_eq!(f.status, None);
        assert_eq!(f.name, None);
    }
}
