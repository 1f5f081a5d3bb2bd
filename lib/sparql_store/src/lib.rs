pub mod endpoint;
pub mod solutions;

use async_trait::async_trait;
use endpoint::SparqlEndpointError;
use solutions::{SolutionsParseError, SparqlSolutions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SparqlStoreError {
    #[error(transparent)]
    Endpoint(#[from] SparqlEndpointError),
    #[error(transparent)]
    SolutionsParse(#[from] SolutionsParseError),
}

#[async_trait]
pub trait SparqlQueryable: Send + Sync {
    async fn execute(&self, query: &str) -> Result<SparqlSolutions, SparqlStoreError>;
}
