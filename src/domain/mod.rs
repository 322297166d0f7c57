// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Domain-specific entities and business rules, separate from the HTTP and
// storage infrastructure.
//
// ============================================================================

pub mod customer;
