//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Record Status
// =============================================================================

/// Status of a record that is visible to mobile clients
pub const STATUS_ACTIVE: &str = "active";

/// Status of a record hidden from mobile clients
pub const STATUS_INACTIVE: &str = "inactive";

/// All valid status values
pub const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_INACTIVE];

/// Check if a status value is valid
pub fn is_valid_status(status: &str) -> bool {
    VALID_STATUSES.contains(&status)
}

// =============================================================================
// Field Limits
// =============================================================================

// Payload validation messages repeat these numbers; the payload tests pin them.

/// Maximum length of a name column (varchar(255))
pub const MAX_NAME_LENGTH: u32 = 255;

/// Maximum length of an email column (varchar(255))
pub const MAX_EMAIL_LENGTH: u32 = 255;

/// Maximum length of a phone column (varchar(50))
pub const MAX_PHONE_LENGTH: u32 = 50;

/// Maximum length of a logo URL column (varchar(500))
pub const MAX_LOGO_LENGTH: u32 = 500;

// =============================================================================
// Resource Names
// =============================================================================

pub const USERS_COLLECTION: &str = "users";
pub const STORES_COLLECTION: &str = "stores";
pub const BRANDS_COLLECTION: &str = "brands";
