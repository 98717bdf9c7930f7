use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A stored or candidate user record.
///
/// Every field is optional on input: absent names decode as empty strings
/// and are reported by validation rather than by the JSON decoder.
/// Unknown fields are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct User {
    /// Store-assigned identifier; `0` means unset
    #[schema(example = 1)]
    pub id: i64,

    #[validate(length(min = 1, message = "Please enter a valid firstname"))]
    #[schema(example = "John")]
    pub first_name: String,

    #[validate(length(min = 1, message = "Please enter a valid lastname"))]
    #[schema(example = "Doe")]
    pub last_name: String,

    #[schema(example = "john.doe@yahoo.com")]
    pub email: String,

    #[schema(example = 34, minimum = 10)]
    pub age: i64,
}

impl User {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        age: i64,
    ) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            age,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn same_name_as(&self, other: &User) -> bool {
        self.first_name == other.first_name && self.last_name == other.last_name
    }

    /// Overwrites the mutable fields with `changes`, keeping `self.id`.
    pub fn apply_changes(&mut self, changes: User) {
        self.first_name = changes.first_name;
        self.last_name = changes.last_name;
        self.email = changes.email;
        self.age = changes.age;
    }
}

/// Body of a successful delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    #[schema(example = "deleted")]
    pub status: String,
}

impl DeleteResponse {
    pub fn deleted() -> Self {
        Self {
            status: "deleted".to_string(),
        }
    }
}
