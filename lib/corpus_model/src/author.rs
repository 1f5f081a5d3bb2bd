use crate::errors::{optional, ModelError};
use crate::fetch::{all_records, all_values, last_segment, query_attribute, record_text, single_value};
use crate::queries;
use crate::ExternalReference;
use query_templates::results::SimpleValue;
use serde::Serialize;
use sparql_store::SparqlQueryable;
use std::sync::Arc;

/// Author (crm:E39_Actor) in the knowledge graph.
#[derive(Clone, Default)]
pub struct Author {
    pub store: Option<Arc<dyn SparqlQueryable>>,
    pub uri: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub refs: Option<Vec<ExternalReference>>,
    pub corpus_ids: Option<Vec<String>>,
}

/// Flat metadata projection of an author.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorMetadata {
    pub id: String,
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corpus_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refs: Option<Vec<ExternalReference>>,
}

impl Author {
    pub fn new(store: Arc<dyn SparqlQueryable>, uri: &str) -> Author {
        Author {
            store: Some(store),
            uri: Some(uri.to_string()),
            ..Default::default()
        }
    }

    fn store(&self) -> Result<Arc<dyn SparqlQueryable>, ModelError> {
        self.store.clone().ok_or(ModelError::MissingStore)
    }

    fn uri(&self) -> Result<String, ModelError> {
        self.uri.clone().ok_or(ModelError::MissingUri)
    }

    pub async fn get_id(&mut self) -> Result<String, ModelError> {
        if let Some(id) = &self.id {
            return Ok(id.clone());
        }
        let store = self.store()?;
        let uri = self.uri()?;
        let results = query_attribute(store.as_ref(), queries::entity_id(), &uri, None).await?;
        let id = single_value(results, "id", &uri)?.to_text();
        self.id = Some(id.clone());
        Ok(id)
    }

    pub async fn get_name(&mut self) -> Result<String, ModelError> {
        if let Some(name) = &self.name {
            return Ok(name.clone());
        }
        let store = self.store()?;
        let uri = self.uri()?;
        let results = query_attribute(store.as_ref(), queries::author_name(), &uri, None).await?;
        let name = single_value(results, "name", &uri)?.to_text();
        self.name = Some(name.clone());
        Ok(name)
    }

    pub async fn get_refs(&mut self) -> Result<Vec<ExternalReference>, ModelError> {
        if let Some(refs) = &self.refs {
            return Ok(refs.clone());
        }
        let store = self.store()?;
        let uri = self.uri()?;
        let results = query_attribute(store.as_ref(), queries::entity_refs(), &uri, None).await?;
        let records = all_records(results, "refs", &uri)?;
        let mut refs = vec![];
        for record in records {
            let type_uri = record_text(&record, "type", "refs")?;
            refs.push(ExternalReference {
                ref_id: record_text(&record, "ref", "refs")?,
                ref_type: last_segment(&type_uri).to_string(),
            });
        }
        self.refs = Some(refs.clone());
        Ok(refs)
    }

    pub async fn get_corpus_ids(&mut self) -> Result<Vec<String>, ModelError> {
        if let Some(corpus_ids) = &self.corpus_ids {
            return Ok(corpus_ids.clone());
        }
        let store = self.store()?;
        let uri = self.uri()?;
        let results =
            query_attribute(store.as_ref(), queries::entity_corpus_ids(), &uri, None).await?;
        let corpus_ids: Vec<String> = all_values(results, "corpus ids", &uri)?
            .iter()
            .map(SimpleValue::to_text)
            .collect();
        self.corpus_ids = Some(corpus_ids.clone());
        Ok(corpus_ids)
    }

    /// Metadata projection of the author. Attributes absent from the
    /// graph are omitted; store failures propagate.
    pub async fn get_metadata(&mut self) -> Result<AuthorMetadata, ModelError> {
        let id = self.get_id().await?;
        let uri = self.uri()?;
        let author_name = optional(self.get_name().await)?;
        let corpus_ids = optional(self.get_corpus_ids().await)?;
        let refs = optional(self.get_refs().await)?;
        Ok(AuthorMetadata {
            id,
            uri,
            author_name,
            corpus_ids,
            refs,
        })
    }
}
