// crates/shared-kernel/src/domain/mod.rs

pub mod entities;
pub mod events;
mod identifier;
pub mod pagination;
pub mod transaction;
pub mod utils;
pub mod value_objects;

pub use identifier::Identifier;
