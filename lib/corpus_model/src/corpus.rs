use crate::character::Character;
use crate::errors::{optional, ModelError};
use crate::fetch::{all_records, query_attribute, record_text, single_record, single_value};
use crate::metrics::{metrics_from_records, metrics_mapping, Metrics};
use crate::queries;
use query_templates::results::SimpleValue;
use serde::Serialize;
use sparql_store::SparqlQueryable;
use std::sync::Arc;

/// Corpus in the knowledge graph. Fields left unset are resolved lazily
/// against the store and cached on the instance; the graph itself is
/// never owned by the entity.
#[derive(Clone, Default)]
pub struct Corpus {
    pub store: Option<Arc<dyn SparqlQueryable>>,
    pub uri: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub acronym: Option<String>,
    pub description: Option<String>,
    pub licence: Option<Licence>,
    pub repository: Option<String>,
    pub metrics: Option<Metrics>,
    pub characters: Option<Vec<Character>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Licence {
    pub name: String,
    pub uri: String,
}

/// Flat metadata projection of a corpus, shaped like the DraCor corpus
/// metadata object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusMetadata {
    pub name: String,
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licence_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::metrics::serialize_with_wordcount"
    )]
    pub metrics: Option<Metrics>,
}

impl Corpus {
    pub fn new(store: Arc<dyn SparqlQueryable>, uri: &str) -> Corpus {
        Corpus {
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
        let results = query_attribute(store.as_ref(), queries::corpus_id(), &uri, None).await?;
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
        let results = query_attribute(store.as_ref(), queries::corpus_name(), &uri, None).await?;
        let name = single_value(results, "name", &uri)?.to_text();
        self.name = Some(name.clone());
        Ok(name)
    }

    pub async fn get_acronym(&mut self) -> Result<String, ModelError> {
        if let Some(acronym) = &self.acronym {
            return Ok(acronym.clone());
        }
        let store = self.store()?;
        let uri = self.uri()?;
        let results =
            query_attribute(store.as_ref(), queries::corpus_acronym(), &uri, None).await?;
        let acronym = single_value(results, "acronym", &uri)?.to_text();
        self.acronym = Some(acronym.clone());
        Ok(acronym)
    }

    pub async fn get_description(&mut self) -> Result<String, ModelError> {
        if let Some(description) = &self.description {
            return Ok(description.clone());
        }
        let store = self.store()?;
        let uri = self.uri()?;
        let results =
            query_attribute(store.as_ref(), queries::corpus_description(), &uri, None).await?;
        let description = single_value(results, "description", &uri)?.to_text();
        self.description = Some(description.clone());
        Ok(description)
    }

    pub async fn get_licence(&mut self) -> Result<Licence, ModelError> {
        if let Some(licence) = &self.licence {
            return Ok(licence.clone());
        }
        let store = self.store()?;
        let uri = self.uri()?;
        let results =
            query_attribute(store.as_ref(), queries::corpus_licence(), &uri, None).await?;
        let record = single_record(results, "licence", &uri)?;
        let licence = Licence {
            name: record_text(&record, "name", "licence")?,
            uri: record_text(&record, "uri", "licence")?,
        };
        self.licence = Some(licence.clone());
        Ok(licence)
    }

    pub async fn get_repository(&mut self) -> Result<String, ModelError> {
        if let Some(repository) = &self.repository {
            return Ok(repository.clone());
        }
        let store = self.store()?;
        let uri = self.uri()?;
        let results =
            query_attribute(store.as_ref(), queries::corpus_repository(), &uri, None).await?;
        let repository = single_value(results, "repository", &uri)?.to_text();
        self.repository = Some(repository.clone());
        Ok(repository)
    }

    /// Metrics of the corpus. Zero dimension rows are a `NotFound`
    /// failure and nothing is cached, so a later call queries again.
    pub async fn get_metrics(&mut self) -> Result<Metrics, ModelError> {
        if let Some(metrics) = &self.metrics {
            return Ok(metrics.clone());
        }
        let store = self.store()?;
        let uri = self.uri()?;
        let results = query_attribute(
            store.as_ref(),
            queries::entity_metrics(),
            &uri,
            Some(&metrics_mapping()),
        )
        .await?;
        let records = all_records(results, "metrics", &uri)?;
        let metrics = metrics_from_records(records)?;
        self.metrics = Some(metrics.clone());
        Ok(metrics)
    }

    /// Characters contained in the corpus, as entities bound to the same
    /// store so their remaining attributes resolve lazily.
    pub async fn get_characters(&mut self) -> Result<Vec<Character>, ModelError> {
        if let Some(characters) = &self.characters {
            return Ok(characters.clone());
        }
        let store = self.store()?;
        let uri = self.uri()?;
        let results =
            query_attribute(store.as_ref(), queries::corpus_characters(), &uri, None).await?;
        let records = all_records(results, "characters", &uri)?;
        let mut characters = vec![];
        for record in records {
            let character_uri = record_text(&record, "uri", "characters")?;
            characters.push(Character {
                store: Some(store.clone()),
                uri: Some(character_uri),
                id: record.get("id").map(SimpleValue::to_text),
                name: record.get("name").map(SimpleValue::to_text),
                ..Default::default()
            });
        }
        self.characters = Some(characters.clone());
        Ok(characters)
    }

    /// Metadata projection of the corpus. Optional attributes absent from
    /// the graph are omitted; store failures propagate. Metrics are only
    /// resolved when explicitly requested.
    pub async fn get_metadata(
        &mut self,
        include_metrics: bool,
    ) -> Result<CorpusMetadata, ModelError> {
        // DraCor uses the corpus ID as its "name"
        let name = self.get_id().await?;
        let uri = self.uri()?;
        let title = optional(self.get_name().await)?;
        let acronym = optional(self.get_acronym().await)?;
        let description = optional(self.get_description().await)?;
        let licence = optional(self.get_licence().await)?;
        let repository = optional(self.get_repository().await)?;
        let metrics = if include_metrics {
            optional(self.get_metrics().await)?
        } else {
            None
        };
        Ok(CorpusMetadata {
            name,
            uri,
            title,
            acronym,
            description,
            licence: licence.as_ref().map(|l| l.name.clone()),
            licence_url: licence.map(|l| l.uri),
            repository,
            metrics,
        })
    }
}
