use crate::results::{simplify, ResultMapping, SimpleResults, SimplifyError};
use crate::scan;
use log::debug;
use sparql_store::solutions::SparqlSolutions;
use sparql_store::{SparqlQueryable, SparqlStoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("The query is not prepared or still contains placeholders")]
    UnpreparedQuery,
    #[error("Can not generate explanation, label and/or description are missing")]
    MissingDocumentation,
    #[error("No results attached, the query has not been executed")]
    NotExecuted,
    #[error(transparent)]
    Store(#[from] SparqlStoreError),
    #[error(transparent)]
    Simplify(#[from] SimplifyError),
}

/// Lifecycle of a query. Only a `Prepared` query without remaining
/// placeholders may be executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryState {
    New,
    Prepared,
    Executed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectTarget {
    Query,
    Template,
}

/// Short name for a namespace URI, declared at the top of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    pub prefix: String,
    pub uri: String,
}

impl Prefix {
    pub fn new(prefix: &str, uri: &str) -> Prefix {
        Prefix {
            prefix: prefix.to_string(),
            uri: uri.trim().to_string(),
        }
    }
}

/// Documentation of one placeholder: what class of entity it expects.
/// Descriptive only, not enforced at runtime.
#[derive(Debug, Clone)]
pub struct VariableDoc {
    pub id: String,
    pub class: String,
    pub description: String,
}

impl VariableDoc {
    pub fn new(id: &str, class: &str, description: &str) -> VariableDoc {
        VariableDoc {
            id: id.to_string(),
            class: class.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum QueryText {
    /// Ready to run, possibly pending prefix declarations.
    Ready(String),
    /// Contains positional placeholders that must be resolved first.
    Template(String),
}

/// Value object describing one named, documented, parameterized query.
/// A deployment supplies its own set of these instead of subclassing.
#[derive(Debug, Clone)]
pub struct QuerySpec {
    pub label: Option<String>,
    pub description: Option<String>,
    pub prefixes: Vec<Prefix>,
    pub text: QueryText,
    pub variables: Vec<VariableDoc>,
}

impl QuerySpec {
    pub fn ready(text: &str) -> QuerySpec {
        QuerySpec {
            label: None,
            description: None,
            prefixes: vec![],
            text: QueryText::Ready(text.to_string()),
            variables: vec![],
        }
    }

    pub fn template(text: &str) -> QuerySpec {
        QuerySpec {
            label: None,
            description: None,
            prefixes: vec![],
            text: QueryText::Template(text.to_string()),
            variables: vec![],
        }
    }

    pub fn with_label(mut self, label: &str) -> QuerySpec {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> QuerySpec {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_prefixes(mut self, prefixes: Vec<Prefix>) -> QuerySpec {
        self.prefixes = prefixes;
        self
    }

    pub fn with_variables(mut self, variables: Vec<VariableDoc>) -> QuerySpec {
        self.variables = variables;
        self
    }
}

pub struct QueryTemplate {
    label: Option<String>,
    description: Option<String>,
    prefixes: Vec<Prefix>,
    variables: Vec<VariableDoc>,
    query: Option<String>,
    template: Option<String>,
    state: QueryState,
    results: Option<SparqlSolutions>,
}

impl QueryTemplate {
    pub fn new(spec: QuerySpec) -> QueryTemplate {
        let QuerySpec {
            label,
            description,
            prefixes,
            text,
            variables,
        } = spec;
        let mut built = QueryTemplate {
            label,
            description,
            prefixes,
            variables,
            query: None,
            template: None,
            state: QueryState::New,
            results: None,
        };
        match text {
            QueryText::Ready(query) => {
                built.query = Some(query);
                built.ensure_prefixes();
                if !built.has_unresolved_placeholders() {
                    built.state = QueryState::Prepared;
                }
            }
            QueryText::Template(template) => {
                built.template = Some(template);
            }
        }
        built
    }

    /// Copies the template into the query string and adds the prefix
    /// declarations. Returns false when there is nothing to prepare,
    /// a silent path callers must check.
    pub fn prepare(&mut self) -> bool {
        if self.state == QueryState::New && self.query.is_none() && self.template.is_some() {
            self.query = self.template.clone();
            self.ensure_prefixes();
            self.state = QueryState::Prepared;
            true
        } else {
            false
        }
    }

    pub fn inject(&mut self, values: &[&str]) -> bool {
        self.inject_into(values, InjectTarget::Query)
    }

    /// Replaces `$1`, `$2`, ... in order with the supplied values and
    /// stores the result as the query string. Injecting into the template
    /// overwrites a previously prepared query.
    pub fn inject_into(&mut self, values: &[&str], target: InjectTarget) -> bool {
        let source = match target {
            InjectTarget::Template => self.template.clone().or_else(|| self.query.clone()),
            InjectTarget::Query => self.query.clone().or_else(|| self.template.clone()),
        };
        let source = match source {
            Some(source) => source,
            None => return false,
        };
        self.query = Some(scan::substitute_placeholders(&source, values));
        self.ensure_prefixes();
        self.state = QueryState::Prepared;
        true
    }

    /// Sends the query string to the store. Requires state `Prepared` and
    /// no remaining placeholders, fails with `UnpreparedQuery` otherwise
    /// without contacting the store.
    pub async fn execute(&mut self, store: &dyn SparqlQueryable) -> Result<(), QueryError> {
        if self.state != QueryState::Prepared || self.has_unresolved_placeholders() {
            return Err(QueryError::UnpreparedQuery);
        }
        let query = match &self.query {
            Some(query) => query,
            None => return Err(QueryError::UnpreparedQuery),
        };
        if let Some(label) = &self.label {
            debug!("Executing query: {}", label);
        }
        let solutions = store.execute(query).await?;
        self.results = Some(solutions);
        self.state = QueryState::Executed;
        Ok(())
    }

    pub fn results(&self) -> Option<&SparqlSolutions> {
        self.results.as_ref()
    }

    /// Simple representation of the attached results.
    pub fn simplified(
        &self,
        mapping: Option<&ResultMapping>,
    ) -> Result<SimpleResults, QueryError> {
        match &self.results {
            Some(solutions) => Ok(simplify(solutions, mapping)?),
            None => Err(QueryError::NotExecuted),
        }
    }

    pub fn explain(&self) -> Result<String, QueryError> {
        match (&self.label, &self.description) {
            (Some(label), Some(description)) => Ok(format!("{}: {}", label, description)),
            _ => Err(QueryError::MissingDocumentation),
        }
    }

    /// Current version of the query string.
    pub fn dump(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn state(&self) -> QueryState {
        self.state
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn variables(&self) -> &[VariableDoc] {
        &self.variables
    }

    pub fn has_unresolved_placeholders(&self) -> bool {
        self.query
            .as_deref()
            .map_or(false, scan::contains_placeholder)
    }

    fn ensure_prefixes(&mut self) {
        if self.prefixes.is_empty() {
            return;
        }
        if let Some(query) = &self.query {
            if !scan::contains_prefix_declaration(query) {
                let declarations: Vec<String> = self
                    .prefixes
                    .iter()
                    .map(|p| format!("PREFIX {}: <{}>", p.prefix, p.uri))
                    .collect();
                self.query = Some(format!("{}\n{}", declarations.join("\n"), query));
            }
        }
    }
}
