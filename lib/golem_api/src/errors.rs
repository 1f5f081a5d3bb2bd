use corpus_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GolemError {
    #[error("No store defined in the engine config")]
    NoStoreDefined,
    #[error("Error creating store gateway: {0}")]
    CreateStore(#[from] sparql_store::endpoint::SparqlEndpointError),
    #[error("No corpus with ID `{0}`")]
    NoSuchCorpus(String),
    #[error("Metadata validation failed: {0}")]
    Validation(String),
    #[error("Error serializing metadata: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Model(#[from] ModelError),
}
