use crate::project::FieldSet;
use crate::types::Participant;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// In-memory participant registry keyed by email address.
///
/// The registry itself is synchronous; callers that share it across tasks
/// wrap it in a lock so every read sees a consistent snapshot. Contents
/// are lost on process exit.
#[derive(Debug, Default, Clone)]
pub struct ParticipantRegistry {
    records: HashMap<String, Participant>,
}

impl ParticipantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the record stored under `email`.
    ///
    /// The key is supplied separately from the record: an update keeps the
    /// address it was made against even when the payload carries a
    /// different `email` value.
    pub fn upsert(&mut self, email: impl Into<String>, record: Participant) {
        self.records.insert(email.into(), record);
    }

    pub fn get(&self, email: &str) -> Option<&Participant> {
        self.records.get(email)
    }

    pub fn contains(&self, email: &str) -> bool {
        self.records.contains_key(email)
    }

    /// All records, in no particular order.
    pub fn list(&self) -> Vec<Participant> {
        self.records.values().cloned().collect()
    }

    /// Applies `fieldset` to every record.
    pub fn project_all(&self, fieldset: FieldSet) -> Vec<Map<String, Value>> {
        self.records
            .values()
            .map(|record| record.project(fieldset))
            .collect()
    }

    /// Removes the record stored under `email`, reporting whether it
    /// existed.
    pub fn remove(&mut self, email: &str) -> bool {
        self.records.remove(email).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
