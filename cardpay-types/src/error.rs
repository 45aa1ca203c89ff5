//! Error types for the account and card services.
//!
//! The taxonomy is a closed set of tagged kinds; HTTP status mapping
//! dispatches on the variant, never on message contents.

use crate::domain::AccountId;

/// Domain-level errors (business rule violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("country is required")]
    CountryRequired,

    #[error("account ID is required")]
    AccountIdRequired,

    #[error("account not known to this service: {0}")]
    AccountNotFound(AccountId),

    #[error("cannot issue a card for deleted account {0}")]
    AccountDeleted(AccountId),

    #[error("cannot issue a card for inactive account {0}")]
    AccountInactive(AccountId),

    #[error("account is already deleted")]
    AccountAlreadyDeleted,

    #[error("cannot update a deleted account")]
    UpdateDeletedAccount,

    #[error("card is already deleted")]
    CardAlreadyDeleted,
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("entity not found")]
    NotFound,

    #[error("an entity with this ID already exists")]
    DuplicateId,

    #[error("an account with this account number already exists")]
    DuplicateNumber,

    #[error("invalid cache entry: {0}")]
    InvalidEntry(String),
}

/// Errors surfaced by the application services.
///
/// Keeps the domain kind intact so callers (and tests) can tell the
/// eligibility failures apart; the HTTP layer flattens it to [`AppError`].
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repo(RepoError),
}

impl From<RepoError> for ServiceError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Domain(e) => ServiceError::Domain(e),
            other => ServiceError::Repo(other),
        }
    }
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes: 400, 404, 409, 403, 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::CountryRequired | DomainError::AccountIdRequired => {
                AppError::BadRequest(err.to_string())
            }
            DomainError::AccountNotFound(id) => {
                AppError::NotFound(format!("Account not found: {}", id))
            }
            DomainError::AccountDeleted(_) | DomainError::AccountInactive(_) => {
                AppError::Forbidden(err.to_string())
            }
            DomainError::AccountAlreadyDeleted
            | DomainError::UpdateDeletedAccount
            | DomainError::CardAlreadyDeleted => AppError::Conflict(err.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Domain(e) => e.into(),
            RepoError::NotFound => AppError::NotFound("Resource not found".into()),
            RepoError::DuplicateId | RepoError::DuplicateNumber => {
                AppError::Conflict(err.to_string())
            }
            RepoError::InvalidEntry(msg) => AppError::BadRequest(msg),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => e.into(),
            ServiceError::Repo(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligibility_errors_stay_distinguishable() {
        let id = AccountId::new();

        assert!(matches!(
            AppError::from(DomainError::AccountNotFound(id)),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            AppError::from(DomainError::AccountDeleted(id)),
            AppError::Forbidden(_)
        ));
        assert!(matches!(
            AppError::from(DomainError::AccountInactive(id)),
            AppError::Forbidden(_)
        ));
    }

    #[test]
    fn test_conflicts_map_to_conflict() {
        assert!(matches!(
            AppError::from(RepoError::DuplicateNumber),
            AppError::Conflict(_)
        ));
        assert!(matches!(
            AppError::from(DomainError::AccountAlreadyDeleted),
            AppError::Conflict(_)
        ));
    }
}
