pub mod engine;
pub mod errors;

pub use engine::{CharacterEntry, Engine, EngineConfig, MetadataValidator};
pub use errors::GolemError;
