use jiff::Timestamp;

use crate::store::{Document, DocumentId, Fields, StoreResult, Value};

pub const NAME: &str = "name";
pub const DESCRIPTION: &str = "description";
pub const ACTIVE: &str = "active";
pub const USER_COUNT: &str = "userCount";
pub const CREATED_ON: &str = "createdOn";

/// Quiz model read back from the `quizzes` collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub id: DocumentId,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub user_count: i64,
    pub created_on: Timestamp,
}

/// NewQuiz model for inserting new documents.
///
/// `created_on` is always the server's clock at creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuiz {
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_on: Timestamp,
}

impl NewQuiz {
    /// Converts to stored fields. An absent description is left out of the
    /// document entirely rather than stored as null or empty.
    pub fn into_fields(self) -> Fields {
        let mut fields = Fields::new();
        fields.insert(NAME.to_string(), Value::from(self.name));
        if let Some(description) = self.description {
            fields.insert(DESCRIPTION.to_string(), Value::from(description));
        }
        fields.insert(ACTIVE.to_string(), Value::from(self.active));
        fields.insert(USER_COUNT.to_string(), Value::from(0_i64));
        fields.insert(CREATED_ON.to_string(), Value::from(self.created_on));
        fields
    }

    pub fn into_quiz(self, id: DocumentId) -> Quiz {
        Quiz {
            id,
            name: self.name,
            description: self.description,
            active: self.active,
            user_count: 0,
            created_on: self.created_on,
        }
    }
}

impl TryFrom<Document> for Quiz {
    type Error = crate::store::StoreError;

    fn try_from(doc: Document) -> StoreResult<Self> {
        Ok(Self {
            name: doc.string(NAME)?,
            description: doc.optional_string(DESCRIPTION)?,
            active: doc.boolean_or(ACTIVE, false)?,
            user_count: doc.integer_or(USER_COUNT, 0)?,
            created_on: doc.timestamp(CREATED_ON)?,
            id: doc.id,
        })
    }
}
