pub mod author;
pub mod character;
pub mod corpora;
pub mod corpus;
pub mod errors;
pub mod graph;
pub mod metrics;
pub mod queries;
pub mod work;

mod fetch;

pub use author::{Author, AuthorMetadata};
pub use character::{Character, CharacterMetadata, CharacterType, Gender};
pub use corpora::Corpora;
pub use corpus::{Corpus, CorpusMetadata, Licence};
pub use errors::ModelError;
pub use metrics::Metrics;
pub use work::{Work, WorkMetadata};

/// External reference of an entity, e.g. a Wikidata identifier.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ExternalReference {
    #[serde(rename = "ref")]
    pub ref_id: String,
    #[serde(rename = "type")]
    pub ref_type: String,
}
