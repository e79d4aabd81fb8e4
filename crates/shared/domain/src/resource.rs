//! The contract every catalog record type fulfils.
//!
//! Repositories, services and HTTP handlers are written once against
//! [`Resource`] and instantiated for `User`, `Store` and `Brand`.

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

/// A soft-deletable catalog record with an integer identity and a status.
pub trait Resource: Clone + Debug + Serialize + Send + Sync + 'static {
    /// Singular display name used in messages ("User not found").
    const NAME: &'static str;

    /// Collection name; doubles as the table name and route segment.
    const COLLECTION: &'static str;

    /// Payload accepted when creating a record.
    type Create: Validate + DeserializeOwned + Debug + Send + Sync + 'static;

    /// Partial payload accepted when updating a record.
    type Update: Validate + DeserializeOwned + Debug + Send + Sync + 'static;

    /// Label of the field that must stay unique among live records, if any.
    const UNIQUE_FIELD: Option<&'static str> = None;

    /// Server-assigned identifier.
    fn id(&self) -> i32;

    /// Value of the unique field carried by a create payload.
    fn unique_value_on_create(_input: &Self::Create) -> Option<&str> {
        None
    }

    /// Value of the unique field carried by an update payload, when it
    /// would change the stored value.
    fn unique_value_on_update(_input: &Self::Update) -> Option<&str> {
        None
    }
}

/// Returns the value only when the client actually supplied something.
///
/// Update payloads treat a missing field and an empty string the same way:
/// the stored value is left untouched.
pub fn provided(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
