// crates/shared-kernel/src/domain/identifier.rs

use uuid::Uuid;

/// Identifiant d'agrégat adossé à un UUID.
/// Les ids de la projection reprennent tels quels ceux de l'agrégat source.
pub trait Identifier: serde::Serialize + for<'de> serde::Deserialize<'de> + Clone + Send + Sync + PartialEq {
    fn as_uuid(&self) -> Uuid;
    fn as_string(&self) -> String;
    fn from_uuid(uuid: Uuid) -> Self;
}
