use crate::errors::{optional, ModelError};
use crate::fetch::{
    all_records, all_values, last_segment, query_attribute, record_text, single_record,
    single_value,
};
use crate::metrics::{metrics_from_records, metrics_mapping, Metrics};
use crate::queries;
use crate::ExternalReference;
use query_templates::results::SimpleValue;
use serde::Serialize;
use sparql_store::SparqlQueryable;
use std::sync::Arc;

/// Character concept (go:C1_Character_Concept) in the knowledge graph.
#[derive(Clone, Default)]
pub struct Character {
    pub store: Option<Arc<dyn SparqlQueryable>>,
    pub uri: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub character_type: Option<CharacterType>,
    pub refs: Option<Vec<ExternalReference>>,
    pub corpus_ids: Option<Vec<String>>,
    pub source: Option<Source>,
    pub created_year: Option<String>,
    pub relations: Option<Vec<CharacterRelation>>,
    pub metrics: Option<Metrics>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Nonbinary,
}

impl Gender {
    /// Maps a gender type URI (gt:gender/…) to the enum.
    pub fn from_uri(uri: &str) -> Result<Gender, ModelError> {
        match last_segment(uri) {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "nonbinary" => Ok(Gender::Nonbinary),
            other => Err(ModelError::UnexpectedShape(format!(
                "unknown gender type `{}`",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Nonbinary => "nonbinary",
        }
    }
}

/// Canon characters originate in the source work, fanon characters in
/// fan-made derivatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterType {
    Canon,
    Fanon,
}

impl CharacterType {
    pub fn from_uri(uri: &str) -> Result<CharacterType, ModelError> {
        match last_segment(uri) {
            "canon_character" => Ok(CharacterType::Canon),
            "fanon_character" => Ok(CharacterType::Fanon),
            other => Err(ModelError::UnexpectedShape(format!(
                "unknown character type `{}`",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterType::Canon => "canon",
            CharacterType::Fanon => "fanon",
        }
    }
}

/// Source (go:C3_Source) a character is documented in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Typed relation of a character to another character, the target given
/// by its ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterRelation {
    #[serde(rename = "type")]
    pub relation_type: String,
    pub id: String,
}

/// Flat metadata projection of a character.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterMetadata {
    pub id: String,
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_type: Option<CharacterType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corpus_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refs: Option<Vec<ExternalReference>>,
}

impl Character {
    pub fn new(store: Arc<dyn SparqlQueryable>, uri: &str) -> Character {
        Character {
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
        let results =
            query_attribute(store.as_ref(), queries::character_name(), &uri, None).await?;
        let name = single_value(results, "name", &uri)?.to_text();
        self.name = Some(name.clone());
        Ok(name)
    }

    pub async fn get_gender(&mut self) -> Result<Gender, ModelError> {
        if let Some(gender) = self.gender {
            return Ok(gender);
        }
        let store = self.store()?;
        let uri = self.uri()?;
        let results =
            query_attribute(store.as_ref(), queries::character_gender(), &uri, None).await?;
        let gender_uri = single_value(results, "gender", &uri)?.to_text();
        let gender = Gender::from_uri(&gender_uri)?;
        self.gender = Some(gender);
        Ok(gender)
    }

    pub async fn get_character_type(&mut self) -> Result<CharacterType, ModelError> {
        if let Some(character_type) = self.character_type {
            return Ok(character_type);
        }
        let store = self.store()?;
        let uri = self.uri()?;
        let results =
            query_attribute(store.as_ref(), queries::character_type(), &uri, None).await?;
        let type_uri = single_value(results, "character type", &uri)?.to_text();
        let character_type = CharacterType::from_uri(&type_uri)?;
        self.character_type = Some(character_type);
        Ok(character_type)
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

    pub async fn get_source(&mut self) -> Result<Source, ModelError> {
        if let Some(source) = &self.source {
            return Ok(source.clone());
        }
        let store = self.store()?;
        let uri = self.uri()?;
        let results =
            query_attribute(store.as_ref(), queries::character_source(), &uri, None).await?;
        let record = single_record(results, "source", &uri)?;
        let source = Source {
            name: record_text(&record, "name", "source")?,
            url: record.get("url").map(SimpleValue::to_text),
        };
        self.source = Some(source.clone());
        Ok(source)
    }

    pub async fn get_created_year(&mut self) -> Result<String, ModelError> {
        if let Some(created_year) = &self.created_year {
            return Ok(created_year.clone());
        }
        let store = self.store()?;
        let uri = self.uri()?;
        let results =
            query_attribute(store.as_ref(), queries::character_years(), &uri, None).await?;
        let created_year = single_value(results, "created year", &uri)?.to_text();
        self.created_year = Some(created_year.clone());
        Ok(created_year)
    }

    pub async fn get_relations(&mut self) -> Result<Vec<CharacterRelation>, ModelError> {
        if let Some(relations) = &self.relations {
            return Ok(relations.clone());
        }
        let store = self.store()?;
        let uri = self.uri()?;
        let results =
            query_attribute(store.as_ref(), queries::character_relations(), &uri, None).await?;
        let records = all_records(results, "relations", &uri)?;
        let mut relations = vec![];
        for record in records {
            let type_uri = record_text(&record, "type", "relations")?;
            relations.push(CharacterRelation {
                relation_type: last_segment(&type_uri).to_string(),
                id: record_text(&record, "id", "relations")?,
            });
        }
        self.relations = Some(relations.clone());
        Ok(relations)
    }

    /// Metrics of the character. Zero dimension rows are a `NotFound`
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

    /// Metadata projection of the character. Attributes absent from the
    /// graph are omitted; store failures propagate.
    pub async fn get_metadata(&mut self) -> Result<CharacterMetadata, ModelError> {
        let id = self.get_id().await?;
        let uri = self.uri()?;
        let character_name = optional(self.get_name().await)?;
        let gender = optional(self.get_gender().await)?;
        let character_type = optional(self.get_character_type().await)?;
        let created_year = optional(self.get_created_year().await)?;
        let source = optional(self.get_source().await)?;
        let corpus_ids = optional(self.get_corpus_ids().await)?;
        let refs = optional(self.get_refs().await)?;
        Ok(CharacterMetadata {
            id,
            uri,
            character_name,
            gender,
            character_type,
            created_year,
            source,
            corpus_ids,
            refs,
        })
    }
}
