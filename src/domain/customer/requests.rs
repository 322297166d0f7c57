use serde::Deserialize;

// ============================================================================
// Customer Request Types
// ============================================================================
//
// Immutable value structs carried from the HTTP boundary into the service.
// No behavior beyond field access and equality.
//
// ============================================================================

/// Request to register a new customer. All fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// Request to update an existing customer.
///
/// Every field is optional; an absent field means "no change". The service
/// rejects the request wholesale when no present field actually differs from
/// the stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}
