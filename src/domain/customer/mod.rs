// ============================================================================
// Customer Domain
// ============================================================================
//
// Everything customer-specific lives here:
// - Entity (Customer, NewCustomer)
// - Request types (RegistrationRequest, UpdateRequest)
// - Errors (CustomerError enum)
// - Service (CustomerService with the business rules)
//
// ============================================================================

pub mod entity;
pub mod errors;
pub mod requests;
pub mod service;

// Re-export for convenience
pub use entity::*;
pub use errors::*;
pub use requests::*;
pub use service::*;
