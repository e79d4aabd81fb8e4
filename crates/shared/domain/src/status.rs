//! Record status shared by every catalog entity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{STATUS_ACTIVE, STATUS_INACTIVE};
use crate::error::DomainError;

/// Visibility status of a record.
///
/// Only `Active` records are served by the mobile API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => STATUS_ACTIVE,
            Status::Inactive => STATUS_INACTIVE,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Status::Active)
    }
}

/// Lossy conversion used when reading stored rows: anything that is not
/// `active` is treated as inactive.
impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s {
            STATUS_ACTIVE => Status::Active,
            _ => Status::Inactive,
        }
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        Status::from(s.as_str())
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.as_str().to_string()
    }
}

/// Strict parse used for client input.
impl FromStr for Status {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_ACTIVE => Ok(Status::Active),
            STATUS_INACTIVE => Ok(Status::Inactive),
            other => Err(DomainError::validation(format!(
                "Status must be one of '{}' or '{}', got '{}'",
                STATUS_ACTIVE, STATUS_INACTIVE, other
            ))),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_active() {
        assert_eq!(Status::default(), Status::Active);
        assert!(Status::default().is_active());
    }

    #[test]
    fn lossy_conversion_defaults_to_inactive() {
        assert_eq!(Status::from("active"), Status::Active);
        assert_eq!(Status::from("inactive"), Status::Inactive);
        assert_eq!(Status::from("archived"), Status::Inactive);
    }

    #[test]
    fn strict_parse_rejects_unknown_values() {
        assert_eq!("inactive".parse::<Status>(), Ok(Status::Inactive));
        assert!(matches!(
            "Active".parse::<Status>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Status::Inactive).unwrap();
        assert_eq!(json, "\"inactive\"");
    }
}
