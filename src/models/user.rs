use crate::store::{Document, DocumentId, Fields, StoreResult, Value};

pub const NAME: &str = "name";
pub const QUIZ_IDS: &str = "quizIds";

/// User model read back from the `users` collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: DocumentId,
    pub name: String,
    pub quiz_ids: Vec<String>,
}

/// NewUser model for inserting new documents.
/// A new user always starts without quizzes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
}

impl NewUser {
    pub fn into_fields(self) -> Fields {
        let mut fields = Fields::new();
        fields.insert(NAME.to_string(), Value::from(self.name));
        fields.insert(QUIZ_IDS.to_string(), Value::Array(Vec::new()));
        fields
    }

    /// Builds the stored user from the identifier the store assigned.
    pub fn into_user(self, id: DocumentId) -> User {
        User {
            id,
            name: self.name,
            quiz_ids: Vec::new(),
        }
    }
}

impl TryFrom<Document> for User {
    type Error = crate::store::StoreError;

    fn try_from(doc: Document) -> StoreResult<Self> {
        Ok(Self {
            name: doc.string(NAME)?,
            quiz_ids: doc.string_list(QUIZ_IDS)?,
            id: doc.id,
        })
    }
}
