// ============================================================================
// Customer Business Rule Errors
// ============================================================================

/// Errors raised by the customer service.
///
/// The first three are client-correctable conditions the HTTP boundary maps
/// to status codes; `Storage` wraps backend failures and is never produced by
/// a business rule.
#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("customer with id [{0}] not found")]
    NotFound(i64),

    #[error("email already taken")]
    EmailTaken,

    #[error("no data changes found")]
    NoChanges,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
