use crate::errors::{AppError, DomainError};

/// RESULT DU DOMAINE (Interne)
/// Utilisé par : Agrégats, Use Cases, Repositories (Ports).
pub type Result<T> = std::result::Result<T, DomainError>;

/// RESULT D'APPLICATION (Exécutable)
/// Utilisé par : Workers, Consumers, binaires.
pub type AppResult<T> = std::result::Result<T, AppError>;
