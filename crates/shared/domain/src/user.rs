//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::USERS_COLLECTION;
use crate::resource::Resource;
use crate::status::Status;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft delete timestamp (None = live, Some = deleted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Check if user is soft deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Live and visible to mobile clients
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none() && self.status.is_active()
    }
}

impl Resource for User {
    const NAME: &'static str = "User";
    const COLLECTION: &'static str = USERS_COLLECTION;

    type Create = CreateUser;
    type Update = UpdateUser;

    const UNIQUE_FIELD: Option<&'static str> = Some("Email");

    fn id(&self) -> i32 {
        self.id
    }

    fn unique_value_on_create(input: &CreateUser) -> Option<&str> {
        Some(input.email.as_str())
    }

    fn unique_value_on_update(input: &UpdateUser) -> Option<&str> {
        input.email.as_deref().filter(|email| !email.is_empty())
    }
}

/// User creation payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateUser {
    /// Full name of the user
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Name is required and must be at most 255 characters"))]
    pub name: String,
    /// Email address, unique among live users
    #[serde(default)]
    #[validate(
        length(max = 255, message = "Email must be at most 255 characters"),
        custom(function = "crate::validation::required_email")
    )]
    pub email: String,
    /// Contact phone number
    #[serde(default)]
    #[validate(length(max = 50, message = "Phone must be at most 50 characters"))]
    pub phone: String,
}

/// User partial update payload.
///
/// Missing fields and empty strings leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,
    #[validate(custom(
        function = "crate::validation::email_if_present",
        message = "Email must be a valid email address"
    ))]
    pub email: Option<String>,
    #[validate(length(max = 50, message = "Phone must be at most 50 characters"))]
    pub phone: Option<String>,
    #[validate(custom(
        function = "crate::validation::status_if_present",
        message = "Status must be 'active' or 'inactive'"
    ))]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MAX_NAME_LENGTH, MAX_PHONE_LENGTH};

    fn first_message(errors: &validator::ValidationErrors, field: &str) -> String {
        errors.field_errors()[field][0]
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn limits_follow_column_sizes() {
        let at_limit = CreateUser {
            name: "n".repeat(MAX_NAME_LENGTH as usize),
            email: "ann@x.com".into(),
            phone: "1".repeat(MAX_PHONE_LENGTH as usize),
        };
        assert!(at_limit.validate().is_ok());

        let over = CreateUser {
            name: "n".repeat(MAX_NAME_LENGTH as usize + 1),
            email: "ann@x.com".into(),
            phone: "1".repeat(MAX_PHONE_LENGTH as usize + 1),
        };
        let errors = over.validate().unwrap_err();
        assert!(first_message(&errors, "name").contains(&MAX_NAME_LENGTH.to_string()));
        assert!(first_message(&errors, "phone").contains(&MAX_PHONE_LENGTH.to_string()));

        let patch = UpdateUser {
            name: Some("n".repeat(MAX_NAME_LENGTH as usize + 1)),
            ..Default::default()
        };
        let errors = patch.validate().unwrap_err();
        assert!(first_message(&errors, "name").contains(&MAX_NAME_LENGTH.to_string()));
    }

    #[test]
    fn create_requires_name_and_valid_email() {
        let ok = CreateUser {
            name: "Ann".into(),
            email: "ann@x.com".into(),
            phone: String::new(),
        };
        assert!(ok.validate().is_ok());

        let missing_name = CreateUser {
            name: String::new(),
            ..ok.clone()
        };
        let errors = missing_name.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        let bad_email = CreateUser {
            email: "ann".into(),
            ..ok.clone()
        };
        let errors = bad_email.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let payload: CreateUser = serde_json::from_str(r#"{"name":"Ann"}"#).unwrap();
        assert_eq!(payload.email, "");
        assert!(payload.validate().is_err());
    }

    #[test]
    fn update_allows_empty_strings() {
        let patch = UpdateUser {
            name: Some(String::new()),
            email: Some(String::new()),
            phone: None,
            status: Some(String::new()),
        };
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn update_rejects_unknown_status_and_bad_email() {
        let patch = UpdateUser {
            status: Some("archived".into()),
            email: Some("nope".into()),
            ..Default::default()
        };
        let errors = patch.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("status"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn deleted_at_is_hidden_when_unset() {
        let now = Utc::now();
        let user = User {
            id: 1,
            name: "Ann".into(),
            email: "ann@x.com".into(),
            phone: String::new(),
            status: Status::Active,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("deleted_at").is_none());
        assert_eq!(json["status"], "active");
        assert!(user.is_active());
    }

    #[test]
    fn email_is_the_unique_field() {
        assert_eq!(User::UNIQUE_FIELD, Some("Email"));
        let patch = UpdateUser {
            email: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(User::unique_value_on_update(&patch), None);
        let patch = UpdateUser {
            email: Some("b@x.com".into()),
            ..Default::default()
        };
        assert_eq!(User::unique_value_on_update(&patch), Some("b@x.com"));
    }
}
