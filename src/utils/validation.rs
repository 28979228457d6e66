use std::borrow::Cow;

use chrono::NaiveDateTime;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::errors::AppError;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(|err| AppError::Validation(describe(&err)))
}

/// Rejects empty and whitespace-only strings.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some(Cow::from("must not be blank"));
        return Err(err);
    }
    Ok(())
}

pub fn validate_not_default_date(value: &NaiveDateTime) -> Result<(), ValidationError> {
    if *value == NaiveDateTime::default() {
        let mut err = ValidationError::new("required");
        err.message = Some(Cow::from("must be a real date"));
        return Err(err);
    }
    Ok(())
}

// Field order is sorted so messages are stable between runs.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));
    fields
        .iter()
        .map(|(field, errs)| {
            let details = errs
                .iter()
                .map(|e| e.message.as_deref().unwrap_or(e.code.as_ref()).to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: {}", camel_case(field), details)
        })
        .collect::<Vec<_>>()
        .join("; ")
}

// Reports fields under their wire names (`emp_name` -> `empName`).
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}
