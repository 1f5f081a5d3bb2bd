use crate::corpus::{Corpus, CorpusMetadata};
use crate::errors::ModelError;
use crate::fetch::{all_records, record_text};
use crate::queries;
use query_templates::template::QueryTemplate;
use sparql_store::SparqlQueryable;
use std::collections::HashMap;
use std::sync::Arc;

/// Collection of the corpora in the knowledge graph, keyed by corpus ID.
/// Insertion order is kept so listings are deterministic.
#[derive(Clone, Default)]
pub struct Corpora {
    corpora: HashMap<String, Corpus>,
    order: Vec<String>,
}

impl Corpora {
    pub fn new() -> Corpora {
        Default::default()
    }

    /// Discovers all corpora in the store and returns them as entities
    /// bound to it, with URI and ID pre-resolved. A store without any
    /// corpus yields an empty collection, not a failure.
    pub async fn load(store: Arc<dyn SparqlQueryable>) -> Result<Corpora, ModelError> {
        let mut query = QueryTemplate::new(queries::corpora_uris_ids());
        query.execute(store.as_ref()).await?;
        let results = query.simplified(None)?;

        let mut corpora = Corpora::new();
        if results.is_empty() {
            return Ok(corpora);
        }
        let records = all_records(results, "corpora", "the store")?;
        for record in records {
            let uri = record_text(&record, "corpus_uri", "corpora")?;
            let id = record_text(&record, "corpus_id", "corpora")?;
            corpora.add(Corpus {
                store: Some(store.clone()),
                uri: Some(uri),
                id: Some(id),
                ..Default::default()
            })?;
        }
        Ok(corpora)
    }

    /// Adds a corpus under its ID. The ID must already be resolved; a
    /// corpus with the same ID is replaced, keeping its list position.
    pub fn add(&mut self, corpus: Corpus) -> Result<(), ModelError> {
        let id = match &corpus.id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => {
                return Err(ModelError::UnexpectedShape(
                    "corpus without a resolved ID cannot be added".to_string(),
                ))
            }
        };
        if self.corpora.insert(id.clone(), corpus).is_none() {
            self.order.push(id);
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Corpus> {
        self.corpora.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Corpus> {
        self.corpora.get_mut(id)
    }

    /// Corpus IDs in insertion order.
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Metadata of all corpora in insertion order. The first entity that
    /// fails aborts the whole listing.
    pub async fn list(&mut self, include_metrics: bool) -> Result<Vec<CorpusMetadata>, ModelError> {
        let ids = self.order.clone();
        let mut listing = Vec::with_capacity(ids.len());
        for id in ids {
            let corpus = self
                .corpora
                .get_mut(&id)
                .ok_or_else(|| ModelError::NotFound(format!("corpus `{}`", id)))?;
            listing.push(corpus.get_metadata(include_metrics).await?);
        }
        Ok(listing)
    }
}
