use serde::{Deserialize, Serialize};

/// A census participant record, keyed by email address.
///
/// All nine fields are required on write; `dob` stays an opaque string
/// whose `YYYY-MM-DD` prefix is checked at validation time and never
/// parsed as a calendar date afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub dob: String,
    pub companyname: String,
    pub salary: Salary,
    pub currency: String,
    pub country: String,
    pub city: String,
}

/// Salary exactly as submitted: a JSON number or a free-form string.
/// Both shapes round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Salary {
    Number(serde_json::Number),
    Text(String),
}
