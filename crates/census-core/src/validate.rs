use crate::error::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Field names every participant payload must carry.
pub const REQUIRED_FIELDS: [&str; 9] = [
    "email",
    "firstname",
    "lastname",
    "dob",
    "companyname",
    "salary",
    "currency",
    "country",
    "city",
];

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid email regex"));
// Prefix-anchored on purpose: trailing characters after the date pass.
static DOB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("valid dob regex"));

/// Checks a raw payload against the participant schema.
///
/// Exactly three checks run in order and the first failure wins: all nine
/// fields present, then email shape, then date-of-birth shape. Nothing
/// else is inspected here; constructing the typed
/// [`Participant`](crate::Participant) afterwards is the structural
/// backstop for the remaining fields.
pub fn validate(payload: &Value) -> Result<(), ValidationError> {
    let record = payload.as_object().ok_or(ValidationError::MissingFields)?;

    if REQUIRED_FIELDS
        .iter()
        .any(|field| !record.contains_key(*field))
    {
        return Err(ValidationError::MissingFields);
    }

    let email_ok = record
        .get("email")
        .and_then(Value::as_str)
        .map(|email| EMAIL_RE.is_match(email))
        .unwrap_or(false);
    if !email_ok {
        return Err(ValidationError::InvalidEmail);
    }

    let dob_ok = record
        .get("dob")
        .and_then(Value::as_str)
        .map(|dob| DOB_RE.is_match(dob))
        .unwrap_or(false);
    if !dob_ok {
        return Err(ValidationError::InvalidDob);
    }

    Ok(())
}
