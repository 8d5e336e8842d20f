// crates/shared-kernel/src/domain/entities/entity.rs

/// Nom métier d'une entité persistée, utilisé par le mapping d'erreurs SQL.
pub trait EntityMetadata {
    fn entity_name() -> &'static str;

    /// Contrainte unique SQL -> champ métier exposé dans `AlreadyExists`
    fn map_constraint_to_field(_constraint: &str) -> &'static str {
        "unique_constraint"
    }
}
