//! Shared flow of the lazy attribute accessors: build the template,
//! inject the entity URI, execute, simplify.

use crate::errors::ModelError;
use log::debug;
use query_templates::results::{ResultMapping, SimpleResults, SimpleValue};
use query_templates::template::{QuerySpec, QueryTemplate};
use sparql_store::SparqlQueryable;
use std::collections::HashMap;

pub(crate) async fn query_attribute(
    store: &dyn SparqlQueryable,
    spec: QuerySpec,
    uri: &str,
    mapping: Option<&ResultMapping>,
) -> Result<SimpleResults, ModelError> {
    let mut query = QueryTemplate::new(spec);
    // prepare is a no-op for ready queries, which carry no placeholders
    query.prepare();
    query.inject(&[uri]);
    query.execute(store).await?;
    Ok(query.simplified(mapping)?)
}

fn not_found(what: &str, uri: &str) -> ModelError {
    ModelError::NotFound(format!("{} of <{}>", what, uri))
}

/// First value of a single-variable result. Zero rows are a `NotFound`
/// failure; additional rows are tolerated, first one wins.
pub(crate) fn single_value(
    results: SimpleResults,
    what: &str,
    uri: &str,
) -> Result<SimpleValue, ModelError> {
    if results.is_empty() {
        return Err(not_found(what, uri));
    }
    match results {
        SimpleResults::Values(values) => {
            if values.len() > 1 {
                debug!(
                    "{} candidates for {} of <{}>, taking the first",
                    values.len(),
                    what,
                    uri
                );
            }
            match values.into_iter().next() {
                Some(value) => Ok(value),
                None => Err(not_found(what, uri)),
            }
        }
        SimpleResults::Records(_) => Err(ModelError::UnexpectedShape(what.to_string())),
    }
}

/// First row of a multi-variable result, `NotFound` on zero rows.
pub(crate) fn single_record(
    results: SimpleResults,
    what: &str,
    uri: &str,
) -> Result<HashMap<String, SimpleValue>, ModelError> {
    if results.is_empty() {
        return Err(not_found(what, uri));
    }
    match results {
        SimpleResults::Records(records) => {
            if records.len() > 1 {
                debug!(
                    "{} candidates for {} of <{}>, taking the first",
                    records.len(),
                    what,
                    uri
                );
            }
            match records.into_iter().next() {
                Some(record) => Ok(record),
                None => Err(not_found(what, uri)),
            }
        }
        SimpleResults::Values(_) => Err(ModelError::UnexpectedShape(what.to_string())),
    }
}

/// All rows of a multi-variable result, `NotFound` on zero rows.
pub(crate) fn all_records(
    results: SimpleResults,
    what: &str,
    uri: &str,
) -> Result<Vec<HashMap<String, SimpleValue>>, ModelError> {
    if results.is_empty() {
        return Err(not_found(what, uri));
    }
    match results {
        SimpleResults::Records(records) => Ok(records),
        SimpleResults::Values(_) => Err(ModelError::UnexpectedShape(what.to_string())),
    }
}

/// All values of a single-variable result, `NotFound` on zero rows.
pub(crate) fn all_values(
    results: SimpleResults,
    what: &str,
    uri: &str,
) -> Result<Vec<SimpleValue>, ModelError> {
    if results.is_empty() {
        return Err(not_found(what, uri));
    }
    match results {
        SimpleResults::Values(values) => Ok(values),
        SimpleResults::Records(_) => Err(ModelError::UnexpectedShape(what.to_string())),
    }
}

/// Final path segment of a URI, e.g. the type name of a gt: type URI.
pub(crate) fn last_segment(uri: &str) -> &str {
    uri.trim_end_matches('/').rsplit('/').next().unwrap_or(uri)
}

pub(crate) fn record_text(
    record: &HashMap<String, SimpleValue>,
    key: &str,
    what: &str,
) -> Result<String, ModelError> {
    record
        .get(key)
        .map(SimpleValue::to_text)
        .ok_or_else(|| ModelError::UnexpectedShape(format!("{} is missing `{}`", what, key)))
}
