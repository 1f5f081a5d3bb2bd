#![allow(dead_code)]

use async_trait::async_trait;
use sparql_store::endpoint::SparqlEndpointError;
use sparql_store::solutions::{SparqlSolutions, Term};
use sparql_store::{SparqlQueryable, SparqlStoreError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Routes incoming queries to canned solutions by substring match,
/// in registration order. Unmatched queries produce an empty result.
pub struct MockStore {
    routes: Vec<(String, Route)>,
    calls: AtomicUsize,
}

enum Route {
    Solutions(SparqlSolutions),
    Failure,
}

impl MockStore {
    pub fn new() -> MockStore {
        MockStore {
            routes: vec![],
            calls: AtomicUsize::new(0),
        }
    }

    pub fn route(mut self, pattern: &str, solutions: SparqlSolutions) -> MockStore {
        self.routes
            .push((pattern.to_string(), Route::Solutions(solutions)));
        self
    }

    pub fn fail_on(mut self, pattern: &str) -> MockStore {
        self.routes.push((pattern.to_string(), Route::Failure));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SparqlQueryable for MockStore {
    async fn execute(&self, query: &str) -> Result<SparqlSolutions, SparqlStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        for (pattern, route) in &self.routes {
            if query.contains(pattern.as_str()) {
                return match route {
                    Route::Solutions(solutions) => Ok(solutions.clone()),
                    Route::Failure => Err(SparqlStoreError::Endpoint(
                        SparqlEndpointError::BadStatusCode(
                            "500 Internal Server Error".to_string(),
                        ),
                    )),
                };
            }
        }
        Ok(SparqlSolutions::new(vec![], vec![]))
    }
}

/// Single-variable solutions with plain literal values.
pub fn literal_column(variable: &str, values: &[&str]) -> SparqlSolutions {
    let bindings = values
        .iter()
        .map(|value| {
            let mut row = HashMap::new();
            row.insert(variable.to_string(), Term::literal(*value));
            row
        })
        .collect();
    SparqlSolutions::new(vec![variable.to_string()], bindings)
}

/// Single-variable solutions with URI values.
pub fn uri_column(variable: &str, values: &[&str]) -> SparqlSolutions {
    let bindings = values
        .iter()
        .map(|value| {
            let mut row = HashMap::new();
            row.insert(variable.to_string(), Term::uri(*value));
            row
        })
        .collect();
    SparqlSolutions::new(vec![variable.to_string()], bindings)
}

/// Multi-variable solutions; a `None` leaves the variable unbound in
/// that row, the way an OPTIONAL pattern would.
pub fn table(variables: &[&str], rows: &[&[Option<Term>]]) -> SparqlSolutions {
    let bindings = rows
        .iter()
        .map(|row| {
            let mut binding = HashMap::new();
            for (variable, term) in variables.iter().zip(row.iter()) {
                if let Some(term) = term {
                    binding.insert(variable.to_string(), term.clone());
                }
            }
            binding
        })
        .collect();
    SparqlSolutions::new(
        variables.iter().map(|v| v.to_string()).collect(),
        bindings,
    )
}

/// Dimension/value rows the metrics query returns.
pub fn metric_rows(rows: &[(&str, i64)]) -> SparqlSolutions {
    let bindings = rows
        .iter()
        .map(|(dimension_uri, value)| {
            let mut row = HashMap::new();
            row.insert("dimensionURI".to_string(), Term::uri(*dimension_uri));
            row.insert(
                "value".to_string(),
                Term {
                    kind: sparql_store::solutions::TermKind::TypedLiteral,
                    value: value.to_string(),
                    datatype: Some("http://www.w3.org/2001/XMLSchema#integer".to_string()),
                    lang: None,
                },
            );
            row
        })
        .collect();
    SparqlSolutions::new(
        vec!["dimensionURI".to_string(), "value".to_string()],
        bindings,
    )
}
