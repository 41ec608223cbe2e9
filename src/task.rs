// src/task.rs
use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Task priority. Stored on the wire as the lowercase variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A single to-do item in the `tasks` collection.
///
/// `id` is assigned by the server on insert. An unpersisted task serializes
/// without an `_id` key, which keeps it valid under the collection's
/// `additionalProperties: false` validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub priority: Priority,
    pub completed: bool,
}

impl Task {
    /// A new, not-yet-persisted task.
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: None,
            title: title.into(),
            priority,
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::Bson;

    #[test]
    fn priority_serializes_to_lowercase_strings() {
        assert_eq!(
            bson::to_bson(&Priority::High).unwrap(),
            Bson::String("high".into())
        );
        assert_eq!(
            bson::to_bson(&Priority::Medium).unwrap(),
            Bson::String("medium".into())
        );
        assert_eq!(
            bson::to_bson(&Priority::Low).unwrap(),
            Bson::String("low".into())
        );
    }

    #[test]
    fn priority_outside_enumeration_is_rejected() {
        assert!(bson::from_bson::<Priority>(Bson::String("urgent".into())).is_err());
    }

    #[test]
    fn unpersisted_task_omits_id_key() {
        let doc = bson::to_document(&Task::new("Buy milk", Priority::Low)).unwrap();
        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("title").unwrap(), "Buy milk");
        assert_eq!(doc.get_str("priority").unwrap(), "low");
        assert_eq!(doc.get_bool("completed").unwrap(), false);
    }
}
