use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolutionsParseError {
    #[error("Results parse error `{0}`")]
    ResultsParse(#[from] serde_json::Error),
    #[error("Duplicate result variable `{0}`")]
    DuplicateVariable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TermKind {
    Uri,
    Literal,
    TypedLiteral,
    Bnode,
}

impl TermKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TermKind::Uri => "uri",
            TermKind::Literal => "literal",
            TermKind::TypedLiteral => "typed-literal",
            TermKind::Bnode => "bnode",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    #[serde(rename = "type")]
    pub kind: TermKind,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[serde(default, rename = "xml:lang", skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl Term {
    pub fn uri(value: impl Into<String>) -> Term {
        Term {
            kind: TermKind::Uri,
            value: value.into(),
            datatype: None,
            lang: None,
        }
    }

    pub fn literal(value: impl Into<String>) -> Term {
        Term {
            kind: TermKind::Literal,
            value: value.into(),
            datatype: None,
            lang: None,
        }
    }
}

/// Raw payload of a SELECT query in the shape of the SPARQL 1.1 Results
/// JSON format, see https://www.w3.org/TR/sparql11-results-json/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparqlSolutions {
    pub variables: Vec<String>,
    pub bindings: Vec<HashMap<String, Term>>,
}

#[derive(Deserialize)]
struct ResultsDocument {
    head: Head,
    results: Results,
}

#[derive(Deserialize)]
struct Head {
    vars: Vec<String>,
}

#[derive(Deserialize)]
struct Results {
    bindings: Vec<HashMap<String, Term>>,
}

impl SparqlSolutions {
    pub fn new(variables: Vec<String>, bindings: Vec<HashMap<String, Term>>) -> SparqlSolutions {
        SparqlSolutions {
            variables,
            bindings,
        }
    }

    pub fn from_json(text: &str) -> Result<SparqlSolutions, SolutionsParseError> {
        let document: ResultsDocument = serde_json::from_str(text)?;
        for (i, variable) in document.head.vars.iter().enumerate() {
            if document.head.vars[..i].contains(variable) {
                return Err(SolutionsParseError::DuplicateVariable(variable.clone()));
            }
        }
        Ok(SparqlSolutions {
            variables: document.head.vars,
            bindings: document.results.bindings,
        })
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
