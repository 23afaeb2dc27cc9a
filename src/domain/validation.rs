use std::borrow::Cow;
use std::collections::BTreeMap;

use validator::{ValidationError, ValidationErrors};

use super::{Choice, EmailAddress, SubmittedAt};

pub fn validate_choice<T: Choice>(code: &str) -> Result<(), ValidationError> {
    match T::from_code(code) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("choice")),
    }
}

pub fn validate_choices<T: Choice>(codes: &[String]) -> Result<(), ValidationError> {
    codes
        .iter()
        .try_for_each(|code| validate_choice::<T>(code))
}

/// Consent checkboxes must be explicitly ticked.
pub fn must_be_affirmed(value: &bool) -> Result<(), ValidationError> {
    if *value {
        Ok(())
    } else {
        Err(ValidationError::new("consent"))
    }
}

pub fn validate_timestamp(value: &str) -> Result<(), ValidationError> {
    SubmittedAt::parse(value)
        .map(|_| ())
        .map_err(|e| ValidationError::new("timestamp").with_message(Cow::Owned(e)))
}

fn invalid(field: &'static str, message: String) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(field, ValidationError::new("invalid").with_message(Cow::Owned(message)));
    errors
}

pub fn parse_choice<T: Choice>(field: &'static str, code: &str) -> Result<T, ValidationErrors> {
    T::from_code(code).ok_or_else(|| invalid(field, format!("{} is not an accepted value.", code)))
}

/// Parses a multi-select, dropping repeated entries but keeping the order in
/// which they were ticked.
pub fn parse_choices<T: Choice + PartialEq>(
    field: &'static str,
    codes: &[String],
) -> Result<Vec<T>, ValidationErrors> {
    let mut parsed: Vec<T> = Vec::with_capacity(codes.len());
    for code in codes {
        let choice = parse_choice(field, code)?;
        if !parsed.contains(&choice) {
            parsed.push(choice);
        }
    }
    Ok(parsed)
}

pub fn parse_email(field: &'static str, value: String) -> Result<EmailAddress, ValidationErrors> {
    EmailAddress::parse(value).map_err(|e| invalid(field, e))
}

pub fn parse_timestamp(field: &'static str, value: &str) -> Result<SubmittedAt, ValidationErrors> {
    SubmittedAt::parse(value).map_err(|e| invalid(field, e))
}

/// Strips surrounding whitespace in place. Runs before validation so that
/// length rules see the text that ends up in the emails.
pub fn trim_in_place<'a>(fields: impl IntoIterator<Item = &'a mut String>) {
    for field in fields {
        let trimmed = field.trim();
        if trimmed.len() != field.len() {
            let trimmed = trimmed.to_string();
            *field = trimmed;
        }
    }
}

/// Optional free-text fields arrive as empty strings when left blank.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Flattens validator output into `{ "fieldName": ["message", ...] }`, keyed
/// by the camelCase names the browser submits.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (to_camel_case(&field.to_string()), messages)
        })
        .collect()
}

fn to_camel_case(field: &str) -> String {
    let mut result = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}
