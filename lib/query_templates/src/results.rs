use serde::Serialize;
use sparql_store::solutions::{SparqlSolutions, Term, TermKind};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimplifyError {
    #[error("No mapping for value type `{0}`")]
    UnsupportedValueType(String),
    #[error("Variable `{0}` is not bound in a result row")]
    MissingBinding(String),
    #[error("Can not coerce `{value}` to an integer")]
    IntegerCoercion {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Output datatype a variable can be coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Datatype {
    Str,
    Int,
}

/// Optional per-variable redirection: rename the output key and/or force
/// a datatype. An explicit datatype has priority over the value type tag.
#[derive(Debug, Clone, Default)]
pub struct FieldMapping {
    pub key: Option<String>,
    pub datatype: Option<Datatype>,
}

impl FieldMapping {
    pub fn key(key: &str) -> FieldMapping {
        FieldMapping {
            key: Some(key.to_string()),
            datatype: None,
        }
    }

    pub fn datatype(datatype: Datatype) -> FieldMapping {
        FieldMapping {
            key: None,
            datatype: Some(datatype),
        }
    }

    pub fn new(key: &str, datatype: Datatype) -> FieldMapping {
        FieldMapping {
            key: Some(key.to_string()),
            datatype: Some(datatype),
        }
    }
}

pub type ResultMapping = HashMap<String, FieldMapping>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SimpleValue {
    String(String),
    Integer(i64),
}

impl SimpleValue {
    pub fn to_text(&self) -> String {
        match self {
            SimpleValue::String(s) => s.clone(),
            SimpleValue::Integer(i) => i.to_string(),
        }
    }
}

/// Simplified representation of a result set: a flat value list for
/// single-variable queries, one mapping per row otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleResults {
    Values(Vec<SimpleValue>),
    Records(Vec<HashMap<String, SimpleValue>>),
}

impl SimpleResults {
    pub fn len(&self) -> usize {
        match self {
            SimpleResults::Values(values) => values.len(),
            SimpleResults::Records(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Derives the simple representation from a raw result set. Pure with
/// respect to `solutions`, so it can be re-derived at any time.
pub fn simplify(
    solutions: &SparqlSolutions,
    mapping: Option<&ResultMapping>,
) -> Result<SimpleResults, SimplifyError> {
    if solutions.variables.len() == 1 {
        let variable = &solutions.variables[0];
        let mut values = vec![];
        for binding in &solutions.bindings {
            values.push(value_of(variable, binding, mapping)?);
        }
        Ok(SimpleResults::Values(values))
    } else {
        let mut records = vec![];
        for binding in &solutions.bindings {
            let mut record = HashMap::new();
            for variable in &solutions.variables {
                // OPTIONAL patterns leave variables unbound; the key is
                // omitted from the row instead of failing the whole set
                if !binding.contains_key(variable.as_str()) {
                    continue;
                }
                let value = value_of(variable, binding, mapping)?;
                let key = mapping
                    .and_then(|m| m.get(variable))
                    .and_then(|f| f.key.clone())
                    .unwrap_or_else(|| variable.clone());
                record.insert(key, value);
            }
            records.push(record);
        }
        Ok(SimpleResults::Records(records))
    }
}

fn value_of(
    variable: &str,
    binding: &HashMap<String, Term>,
    mapping: Option<&ResultMapping>,
) -> Result<SimpleValue, SimplifyError> {
    let term = binding
        .get(variable)
        .ok_or_else(|| SimplifyError::MissingBinding(variable.to_string()))?;
    let datatype = mapping
        .and_then(|m| m.get(variable))
        .and_then(|f| f.datatype);
    match datatype {
        Some(Datatype::Str) => Ok(SimpleValue::String(term.value.clone())),
        Some(Datatype::Int) => match term.value.parse::<i64>() {
            Ok(i) => Ok(SimpleValue::Integer(i)),
            Err(source) => Err(SimplifyError::IntegerCoercion {
                value: term.value.clone(),
                source,
            }),
        },
        None => match term.kind {
            TermKind::Uri | TermKind::Literal => Ok(SimpleValue::String(term.value.clone())),
            other => Err(SimplifyError::UnsupportedValueType(other.as_str().to_string())),
        },
    }
}
