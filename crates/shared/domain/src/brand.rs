//! Brand domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::BRANDS_COLLECTION;
use crate::resource::Resource;
use crate::status::Status;

/// Product brand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// URL of the brand logo image
    pub logo: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Resource for Brand {
    const NAME: &'static str = "Brand";
    const COLLECTION: &'static str = BRANDS_COLLECTION;

    type Create = CreateBrand;
    type Update = UpdateBrand;

    fn id(&self) -> i32 {
        self.id
    }
}

/// Brand creation payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateBrand {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Name is required and must be at most 255 characters"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[validate(length(max = 500, message = "Logo must be at most 500 characters"))]
    pub logo: String,
}

/// Brand partial update payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateBrand {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 500, message = "Logo must be at most 500 characters"))]
    pub logo: Option<String>,
    #[validate(custom(
        function = "crate::validation::status_if_present",
        message = "Status must be 'active' or 'inactive'"
    ))]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MAX_LOGO_LENGTH, MAX_NAME_LENGTH};

    fn first_message(errors: &validator::ValidationErrors, field: &str) -> String {
        errors.field_errors()[field][0]
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn limits_follow_column_sizes() {
        let at_limit = CreateBrand {
            name: "n".repeat(MAX_NAME_LENGTH as usize),
            logo: "l".repeat(MAX_LOGO_LENGTH as usize),
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());

        let over = CreateBrand {
            name: "n".repeat(MAX_NAME_LENGTH as usize + 1),
            logo: "l".repeat(MAX_LOGO_LENGTH as usize + 1),
            ..Default::default()
        };
        let errors = over.validate().unwrap_err();
        assert!(first_message(&errors, "name").contains(&MAX_NAME_LENGTH.to_string()));
        assert!(first_message(&errors, "logo").contains(&MAX_LOGO_LENGTH.to_string()));
    }

    #[test]
    fn empty_name_is_rejected() {
        let payload = CreateBrand {
            name: String::new(),
            description: "Shoes".into(),
            logo: String::new(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn overlong_logo_is_rejected() {
        let payload = CreateBrand {
            name: "Acme".into(),
            logo: "x".repeat(501),
            ..Default::default()
        };
        assert!(payload.validate().is_err());
    }
}
