//! UUID utilities

use uuid::{Uuid, Variant};

/// Generate a new UUIDv4
pub fn generate() -> Uuid {
    Uuid::new_v4()
}

/// Parse UUID from string
pub fn parse(s: &str) -> Result<Uuid, uuid::Error> {
    Uuid::parse_str(s)
}

/// Parse a result identifier
///
/// Accepts only hyphenated RFC 4122 UUIDs with version 1-5. Braced, simple
/// and URN forms are rejected so that result URLs stay canonical.
pub fn parse_result_id(s: &str) -> Option<Uuid> {
    if s.len() != 36 {
        return None;
    }
    let id = parse(s).ok()?;
    let version_ok = matches!(id.get_version_num(), 1..=5);
    if version_ok && id.get_variant() == Variant::RFC4122 {
        Some(id)
    } else {
        None
    }
}
