//! Store domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::STORES_COLLECTION;
use crate::resource::Resource;
use crate::status::Status;

/// Physical store location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Resource for Store {
    const NAME: &'static str = "Store";
    const COLLECTION: &'static str = STORES_COLLECTION;

    type Create = CreateStore;
    type Update = UpdateStore;

    fn id(&self) -> i32 {
        self.id
    }
}

/// Store creation payload. Only the name is required; an email, when
/// given, must be well formed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateStore {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Name is required and must be at most 255 characters"))]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    #[validate(length(max = 50, message = "Phone must be at most 50 characters"))]
    pub phone: String,
    #[serde(default)]
    #[validate(
        length(max = 255, message = "Email must be at most 255 characters"),
        custom(
            function = "crate::validation::email_if_present",
            message = "Email must be a valid email address"
        )
    )]
    pub email: String,
}

/// Store partial update payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateStore {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,
    pub address: Option<String>,
    #[validate(length(max = 50, message = "Phone must be at most 50 characters"))]
    pub phone: Option<String>,
    #[validate(custom(
        function = "crate::validation::email_if_present",
        message = "Email must be a valid email address"
    ))]
    pub email: Option<String>,
    #[validate(custom(
        function = "crate::validation::status_if_present",
        message = "Status must be 'active' or 'inactive'"
    ))]
    pub status: Option<String>,
}
