//! Stored documents.

use std::collections::BTreeMap;

use jiff::Timestamp;

use super::{StoreError, StoreResult, Value};

/// Store-assigned document identifier.
pub type DocumentId = String;

/// Field map of a document, ordered by field name.
pub type Fields = BTreeMap<String, Value>;

/// A document read back from a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: DocumentId,
    pub fields: Fields,
}

impl Document {
    pub fn new(id: impl Into<DocumentId>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Reads a required string field.
    pub fn string(&self, field: &str) -> StoreResult<String> {
        self.get(field)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| StoreError::decode(&self.id, field, "string"))
    }

    /// Reads an optional string field. Absent and null both map to `None`.
    pub fn optional_string(&self, field: &str) -> StoreResult<Option<String>> {
        match self.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(StoreError::decode(&self.id, field, "string")),
        }
    }

    /// Reads a boolean field, treating an absent field as `default`.
    pub fn boolean_or(&self, field: &str, default: bool) -> StoreResult<bool> {
        match self.get(field) {
            None | Some(Value::Null) => Ok(default),
            Some(value) => value
                .as_bool()
                .ok_or_else(|| StoreError::decode(&self.id, field, "boolean")),
        }
    }

    /// Reads an integer field, treating an absent field as `default`.
    pub fn integer_or(&self, field: &str, default: i64) -> StoreResult<i64> {
        match self.get(field) {
            None | Some(Value::Null) => Ok(default),
            Some(value) => value
                .as_integer()
                .ok_or_else(|| StoreError::decode(&self.id, field, "integer")),
        }
    }

    pub fn timestamp(&self, field: &str) -> StoreResult<Timestamp> {
        self.get(field)
            .and_then(Value::as_timestamp)
            .ok_or_else(|| StoreError::decode(&self.id, field, "timestamp"))
    }

    /// Reads an array of strings, treating an absent field as empty.
    pub fn string_list(&self, field: &str) -> StoreResult<Vec<String>> {
        let Some(value) = self.get(field) else {
            return Ok(Vec::new());
        };
        let items = value
            .as_array()
            .ok_or_else(|| StoreError::decode(&self.id, field, "array of strings"))?;
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| StoreError::decode(&self.id, field, "array of strings"))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let mut fields = Fields::new();
        fields.insert("name".to_string(), Value::from("Quiz 2"));
        fields.insert("active".to_string(), Value::from(true));
        fields.insert("quizIds".to_string(), Value::from(vec!["a", "b"]));
        fields.insert("userCount".to_string(), Value::from("oops"));
        Document::new("doc-1", fields)
    }

    #[test]
    fn test_typed_accessors() {
        let doc = sample();
        assert_eq!(doc.string("name").unwrap(), "Quiz 2");
        assert!(doc.boolean_or("active", false).unwrap());
        assert_eq!(doc.string_list("quizIds").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_absent_fields_use_defaults() {
        let doc = sample();
        assert_eq!(doc.optional_string("description").unwrap(), None);
        assert_eq!(doc.integer_or("missing", 0).unwrap(), 0);
        assert!(doc.string_list("missing").unwrap().is_empty());
    }

    #[test]
    fn test_wrong_type_is_decode_error() {
        let doc = sample();
        match doc.integer_or("userCount", 0) {
            Err(StoreError::Decode { id, field, expected }) => {
                assert_eq!(id, "doc-1");
                assert_eq!(field, "userCount");
                assert_eq!(expected, "integer");
            }
            other => panic!("Expected decode error, got {:?}", other),
        }
        assert!(doc.string("active").is_err());
        assert!(doc.timestamp("name").is_err());
    }
}
