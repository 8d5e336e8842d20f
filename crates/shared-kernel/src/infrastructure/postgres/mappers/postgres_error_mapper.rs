// crates/shared-kernel/src/infrastructure/postgres/mappers/postgres_error_mapper.rs

use crate::domain::entities::EntityMetadata;
use crate::errors::DomainError;
use sqlx::postgres::PgDatabaseError;

pub trait SqlxErrorExt<T> {
    fn map_domain<E: EntityMetadata>(self) -> Result<T, DomainError>;
    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError>;
}

impl<T> SqlxErrorExt<T> for std::result::Result<T, sqlx::Error> {
    fn map_domain<E: EntityMetadata>(self) -> Result<T, DomainError> {
        self.map_err(|e| {
            match e {
                sqlx::Error::RowNotFound => DomainError::NotFound {
                    entity: E::entity_name(),
                    id: "unknown".into(),
                },
                sqlx::Error::Database(db_err) => {
                    // 1. Violation d'unicité (Code Postgres 23505)
                    if db_err.code().map(|c| c == "23505").unwrap_or(false) {
                        let mut field = "unique_constraint";

                        if let Some(constraint_name) = db_err.try_downcast_ref::<PgDatabaseError>().and_then(|pg| pg.constraint()) {
                            field = E::map_constraint_to_field(constraint_name);
                        }

                        return DomainError::AlreadyExists {
                            entity: E::entity_name(),
                            field,
                            value: "already taken".into(),
                        };
                    }

                    // 2. Concurrence (40001 serialization_failure, 40P01 deadlock)
                    if db_err.code().map(|c| c == "40001" || c == "40P01").unwrap_or(false) {
                        return DomainError::ConcurrencyConflict {
                            reason: format!("Concurrency conflict on {}", E::entity_name()),
                        };
                    }

                    DomainError::Infrastructure(db_err.message().into())
                }
                other => map_connectivity(other, E::entity_name()),
            }
        })
    }

    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError> {
        self.map_err(|e| map_connectivity(e, context))
    }
}

/// Le store injoignable est distingué des autres pannes techniques.
fn map_connectivity(e: sqlx::Error, context: &str) -> DomainError {
    match e {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => DomainError::StorageUnavailable(format!("{}: {}", context, e)),
        _ => DomainError::Infrastructure(format!("{}: {}", context, e)),
    }
}
