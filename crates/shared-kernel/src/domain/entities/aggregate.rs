// crates/shared-kernel/src/domain/entities/aggregate.rs

use serde::{Deserialize, Serialize};

/// Données techniques partagées par tous les agrégats : version (OCC) et suivi des modifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateMetadata {
    version: i32,
    #[serde(skip)]
    has_changes: bool,
}

impl AggregateMetadata {
    /// Création : l'agrégat n'existe pas encore en base, il doit être écrit.
    pub fn new(version: i32) -> Self {
        Self {
            version,
            has_changes: true,
        }
    }

    /// RESTAURATION : version exacte de la DB, aucune modification en attente.
    pub fn restore(version: i32) -> Self {
        Self {
            version,
            has_changes: false,
        }
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn has_changes(&self) -> bool {
        self.has_changes
    }

    /// La version n'avance qu'une fois par cycle lecture/écriture,
    /// peu importe le nombre de mutations appliquées entre-temps.
    pub fn mark_changed(&mut self) {
        if !self.has_changes {
            self.version += 1;
            self.has_changes = true;
        }
    }

    pub fn mark_as_persisted(&mut self) {
        self.has_changes = false;
    }
}

impl Default for AggregateMetadata {
    fn default() -> Self {
        Self::new(1)
    }
}

pub trait AggregateRoot: Send + Sync {
    fn id(&self) -> String;

    fn metadata(&self) -> &AggregateMetadata;

    fn metadata_mut(&mut self) -> &mut AggregateMetadata;

    // --- Implémentations par défaut ---

    /// Version attendue après écriture (Optimistic Concurrency Control)
    fn version(&self) -> i32 {
        self.metadata().version()
    }

    fn has_changes(&self) -> bool {
        self.metadata().has_changes()
    }

    fn mark_as_persisted(&mut self) {
        self.metadata_mut().mark_as_persisted();
    }
}
