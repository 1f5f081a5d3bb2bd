use oxrdf::IriParseError;
use query_templates::results::SimplifyError;
use query_templates::template::QueryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Store connection is not available")]
    MissingStore,
    #[error("Entity has no URI")]
    MissingUri,
    #[error("Not found in graph: {0}")]
    NotFound(String),
    #[error("Unexpected result shape for {0}")]
    UnexpectedShape(String),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Simplify(#[from] SimplifyError),
    #[error("Invalid URI `{0}`")]
    InvalidUri(#[from] IriParseError),
}

/// Turns an absent attribute into `None` while letting every other
/// failure (store errors included) propagate. Callers decide whether
/// absence is fatal.
pub fn optional<T>(result: Result<T, ModelError>) -> Result<Option<T>, ModelError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ModelError::NotFound(_)) => Ok(None),
        Err(error) => Err(error),
    }
}
