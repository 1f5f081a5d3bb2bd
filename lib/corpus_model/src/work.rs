use crate::author::Author;
use crate::character::Character;
use crate::errors::{optional, ModelError};
use crate::fetch::{all_records, all_values, last_segment, query_attribute, record_text, single_value};
use crate::queries;
use crate::ExternalReference;
use query_templates::results::SimpleValue;
use serde::Serialize;
use sparql_store::SparqlQueryable;
use std::sync::Arc;

/// Work (lrm:F1_Work) in the knowledge graph, e.g. the source work a
/// fanfiction corpus derives from.
#[derive(Clone, Default)]
pub struct Work {
    pub store: Option<Arc<dyn SparqlQueryable>>,
    pub uri: Option<String>,
    pub id: Option<String>,
    pub title: Option<String>,
    pub created_year: Option<String>,
    pub characters: Option<Vec<Character>>,
    pub authors: Option<Vec<Author>>,
    pub refs: Option<Vec<ExternalReference>>,
    pub corpus_ids: Option<Vec<String>>,
}

/// Flat metadata projection of a work.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkMetadata {
    pub id: String,
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<WorkAuthor>>,
}

/// Author entry inside the work metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkAuthor {
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Work {
    pub fn new(store: Arc<dyn SparqlQueryable>, uri: &str) -> Work {
        Work {
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

    pub async fn get_title(&mut self) -> Result<String, ModelError> {
        if let Some(title) = &self.title {
            return Ok(title.clone());
        }
        let store = self.store()?;
        let uri = self.uri()?;
        let results = query_attribute(store.as_ref(), queries::work_title(), &uri, None).await?;
        let title = single_value(results, "title", &uri)?.to_text();
        self.title = Some(title.clone());
        Ok(title)
    }

    pub async fn get_created_year(&mut self) -> Result<String, ModelError> {
        if let Some(created_year) = &self.created_year {
            return Ok(created_year.clone());
        }
        let store = self.store()?;
        let uri = self.uri()?;
        let results = query_attribute(store.as_ref(), queries::work_dates(), &uri, None).await?;
        let created_year = single_value(results, "created year", &uri)?.to_text();
        self.created_year = Some(created_year.clone());
        Ok(created_year)
    }

    /// Characters created by the creation event of the work, bound to the
    /// same store so their remaining attributes resolve lazily.
    pub async fn get_characters(&mut self) -> Result<Vec<Character>, ModelError> {
        if let Some(characters) = &self.characters {
            return Ok(characters.clone());
        }
        let store = self.store()?;
        let uri = self.uri()?;
        let results =
            query_attribute(store.as_ref(), queries::work_characters(), &uri, None).await?;
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

    /// Authors that carried out the creation event of the work.
    pub async fn get_authors(&mut self) -> Result<Vec<Author>, ModelError> {
        if let Some(authors) = &self.authors {
            return Ok(authors.clone());
        }
        let store = self.store()?;
        let uri = self.uri()?;
        let results = query_attribute(store.as_ref(), queries::work_authors(), &uri, None).await?;
        let records = all_records(results, "authors", &uri)?;
        let mut authors = vec![];
        for record in records {
            let author_uri = record_text(&record, "uri", "authors")?;
            authors.push(Author {
                store: Some(store.clone()),
                uri: Some(author_uri),
                id: record.get("id").map(SimpleValue::to_text),
                name: record.get("name").map(SimpleValue::to_text),
                ..Default::default()
            });
        }
        self.authors = Some(authors.clone());
        Ok(authors)
    }

    /// External reference identifiers, with the type URIs reduced to
    /// their resource name (e.g. "wikidata").
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

    /// Metadata projection of the work. Attributes absent from the graph
    /// are omitted; store failures propagate.
    pub async fn get_metadata(&mut self) -> Result<WorkMetadata, ModelError> {
        let id = self.get_id().await?;
        let uri = self.uri()?;
        let title = optional(self.get_title().await)?;
        let created_year = optional(self.get_created_year().await)?;
        let authors = optional(self.get_authors().await)?.map(|authors| {
            authors
                .into_iter()
                .filter_map(|author| {
                    author.uri.map(|uri| WorkAuthor {
                        uri,
                        id: author.id,
                        name: author.name,
                    })
                })
                .collect()
        });
        Ok(WorkMetadata {
            id,
            uri,
            title,
            created_year,
            authors,
        })
    }
}
