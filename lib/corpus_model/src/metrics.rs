//! Aggregation of dimension/value rows into a flat metrics mapping.

use crate::errors::ModelError;
use crate::fetch::last_segment;
use query_templates::results::{Datatype, FieldMapping, ResultMapping, SimpleValue};
use serde::ser::SerializeMap;
use serde::Serializer;
use std::collections::{BTreeMap, HashMap};

/// Metrics of an entity, keyed by stable metric names.
pub type Metrics = BTreeMap<String, i64>;

/// Result mapping for the metrics query: coerce the value column to an
/// integer, keep the dimension URI as-is.
pub(crate) fn metrics_mapping() -> ResultMapping {
    let mut mapping = ResultMapping::new();
    mapping.insert("value".to_string(), FieldMapping::datatype(Datatype::Int));
    mapping
}

/// Stable output name of a dimension URI. The key is the final path
/// segment, remapped through a fixed table; unmapped keys pass through.
pub(crate) fn metric_key(dimension_uri: &str) -> String {
    let segment = last_segment(dimension_uri);
    let mapped = match segment {
        "number_of_documents" => "documents",
        "number_of_chapters" => "chapters",
        "number_of_paragraphs" => "paragraphs",
        "number_of_characters" => "characters",
        "number_of_male_characters" => "male",
        "number_of_female_characters" => "female",
        "number_of_nonbinary_characters" => "nonbinary",
        "number_of_comments" => "comments",
        "number_of_words_in_documents" => "words_in_documents",
        "number_of_words_in_comments" => "words_in_comments",
        other => other,
    };
    mapped.to_string()
}

/// Keys nested under `wordcount` in the serialized corpus metrics.
const WORDCOUNT_KEYS: [&str; 2] = ["words_in_documents", "words_in_comments"];

/// Serializes corpus metrics in the published shape: flat counters with
/// the word counts nested under a `wordcount` object.
pub(crate) fn serialize_with_wordcount<S>(
    metrics: &Option<Metrics>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let metrics = match metrics {
        Some(metrics) => metrics,
        // unreachable behind skip_serializing_if
        None => return serializer.serialize_none(),
    };
    let mut map = serializer.serialize_map(None)?;
    let mut wordcount = BTreeMap::new();
    for (key, value) in metrics {
        if WORDCOUNT_KEYS.contains(&key.as_str()) {
            wordcount.insert(key, value);
        } else {
            map.serialize_entry(key, value)?;
        }
    }
    if !wordcount.is_empty() {
        map.serialize_entry("wordcount", &wordcount)?;
    }
    map.end()
}

pub(crate) fn metrics_from_records(
    records: Vec<HashMap<String, SimpleValue>>,
) -> Result<Metrics, ModelError> {
    let mut metrics = Metrics::new();
    for record in records {
        let dimension_uri = match record.get("dimensionURI") {
            Some(SimpleValue::String(uri)) => uri.clone(),
            _ => return Err(ModelError::UnexpectedShape("metrics dimension".to_string())),
        };
        let value = match record.get("value") {
            Some(SimpleValue::Integer(value)) => *value,
            _ => return Err(ModelError::UnexpectedShape("metrics value".to_string())),
        };
        metrics.insert(metric_key(&dimension_uri), value);
    }
    Ok(metrics)
}
