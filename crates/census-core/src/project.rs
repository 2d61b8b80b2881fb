use crate::types::Participant;
use serde_json::{Map, Value};

/// Named subsets of the participant record served by the projection
/// endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSet {
    Personal,
    Work,
    Home,
}

impl FieldSet {
    /// The record fields this set selects.
    pub const fn fields(self) -> &'static [&'static str] {
        match self {
            FieldSet::Personal => &["firstname", "lastname"],
            FieldSet::Work => &["companyname", "salary", "currency"],
            FieldSet::Home => &["country", "city"],
        }
    }
}

/// Returns the intersection of `record` with the fields in `fieldset`.
///
/// Keys absent from `record` are skipped rather than filled with a
/// placeholder, so projecting an already-projected view is a no-op.
pub fn project(record: &Map<String, Value>, fieldset: FieldSet) -> Map<String, Value> {
    fieldset
        .fields()
        .iter()
        .filter_map(|field| {
            record
                .get(*field)
                .map(|value| ((*field).to_string(), value.clone()))
        })
        .collect()
}

impl Participant {
    /// Serializes the record and narrows it down to `fieldset`.
    pub fn project(&self, fieldset: FieldSet) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(record)) => project(&record, fieldset),
            _ => Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Salary;
    use serde_json::json;

    fn participant() -> Participant {
        Participant {
            email: "jane@example.com".to_string(),
            firstname: "Jane".to_string(),
            lastname: "Doe".to_string(),
            dob: "1990-04-12".to_string(),
            companyname: "Acme".to_string(),
            salary: Salary::Number(serde_json::Number::from(52000)),
            currency: "USD".to_string(),
            country: "US".to_string(),
            city: "Portland".to_string(),
        }
    }

    #[test]
    fn personal_projection_keeps_the_name_fields_only() {
        let view = participant().project(FieldSet::Personal);
        assert_eq!(view.len(), 2);
        assert_eq!(view["firstname"], json!("Jane"));
        assert_eq!(view["lastname"], json!("Doe"));
    }

    #[test]
    fn work_projection_keeps_the_company_fields_only() {
        let view = participant().project(FieldSet::Work);
        assert_eq!(view.len(), 3);
        assert_eq!(view["companyname"], json!("Acme"));
        assert_eq!(view["salary"], json!(52000));
        assert_eq!(view["currency"], json!("USD"));
    }

    #[test]
    fn home_projection_keeps_the_location_fields_only() {
        let view = participant().project(FieldSet::Home);
        assert_eq!(view.len(), 2);
        assert_eq!(view["country"], json!("US"));
        assert_eq!(view["city"], json!("Portland"));
    }

    #[test]
    fn projecting_an_already_projected_view_is_a_no_op() {
        let view = participant().project(FieldSet::Work);
        assert_eq!(project(&view, FieldSet::Work), view);
    }

    #[test]
    fn projecting_a_disjoint_view_yields_an_empty_map() {
        let personal = participant().project(FieldSet::Personal);
        assert!(project(&personal, FieldSet::Home).is_empty());
    }
}
