use crate::errors::GolemError;
use corpus_model::{Character, Corpora, CorpusMetadata};
use log::debug;
use serde::Serialize;
use sparql_store::endpoint::{SparqlEndpoint, StoreConfig};
use sparql_store::SparqlQueryable;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Schema check applied to serialized metadata before it leaves the
/// engine. The engine invokes the check, it never defines one.
pub trait MetadataValidator: Send + Sync {
    fn validate(&self, metadata: &serde_json::Value) -> Result<(), String>;
}

#[derive(Clone, Default)]
pub struct EngineConfig {
    pub store: Option<StoreConfig>,
    pub validator: Option<Arc<dyn MetadataValidator>>,
}

/// Character entry of a corpus listing, resolved from a single query.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterEntry {
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Facade over the store gateway and the corpora cache. The cache is
/// shared between callers, and lazy resolution mutates the entities in
/// it, so all access goes through one mutex.
pub struct Engine {
    store: Arc<dyn SparqlQueryable>,
    corpora: Mutex<Corpora>,
    validator: Option<Arc<dyn MetadataValidator>>,
}

impl Engine {
    pub fn from_config(config: EngineConfig) -> Result<Engine, GolemError> {
        let store_config = config.store.ok_or(GolemError::NoStoreDefined)?;
        let endpoint = SparqlEndpoint::from_config(store_config)?;
        Ok(Engine::with_store(Arc::new(endpoint), config.validator))
    }

    /// Builds an engine over an existing gateway, e.g. a mock in tests.
    pub fn with_store(
        store: Arc<dyn SparqlQueryable>,
        validator: Option<Arc<dyn MetadataValidator>>,
    ) -> Engine {
        Engine {
            store,
            corpora: Mutex::new(Corpora::new()),
            validator,
        }
    }

    /// Discards the cache and discovers the corpora again.
    pub async fn load_corpora(&self) -> Result<(), GolemError> {
        let loaded = Corpora::load(self.store.clone()).await?;
        debug!("Loaded {} corpora", loaded.len());
        *self.corpora.lock().await = loaded;
        Ok(())
    }

    /// Metadata of all corpora. An empty cache is loaded first, so the
    /// first call after startup discovers the corpora on its own.
    pub async fn list_corpora(
        &self,
        include_metrics: bool,
    ) -> Result<Vec<CorpusMetadata>, GolemError> {
        let mut corpora = self.corpora.lock().await;
        if corpora.is_empty() {
            *corpora = Corpora::load(self.store.clone()).await?;
        }
        let listing = corpora.list(include_metrics).await?;
        for metadata in &listing {
            self.validate(metadata)?;
        }
        Ok(listing)
    }

    /// Metadata of a single corpus identified by its ID.
    pub async fn corpus_metadata(
        &self,
        id: &str,
        include_metrics: bool,
    ) -> Result<CorpusMetadata, GolemError> {
        let mut corpora = self.corpora.lock().await;
        if corpora.is_empty() {
            *corpora = Corpora::load(self.store.clone()).await?;
        }
        let corpus = corpora
            .get_mut(id)
            .ok_or_else(|| GolemError::NoSuchCorpus(id.to_string()))?;
        let metadata = corpus.get_metadata(include_metrics).await?;
        self.validate(&metadata)?;
        Ok(metadata)
    }

    /// Characters of a single corpus identified by its ID.
    pub async fn corpus_characters(&self, id: &str) -> Result<Vec<CharacterEntry>, GolemError> {
        let mut corpora = self.corpora.lock().await;
        if corpora.is_empty() {
            *corpora = Corpora::load(self.store.clone()).await?;
        }
        let corpus = corpora
            .get_mut(id)
            .ok_or_else(|| GolemError::NoSuchCorpus(id.to_string()))?;
        let characters = corpus.get_characters().await?;
        Ok(characters.into_iter().filter_map(entry_of).collect())
    }

    fn validate(&self, metadata: &impl Serialize) -> Result<(), GolemError> {
        if let Some(validator) = &self.validator {
            let value = serde_json::to_value(metadata)?;
            validator.validate(&value).map_err(GolemError::Validation)?;
        }
        Ok(())
    }
}

fn entry_of(character: Character) -> Option<CharacterEntry> {
    character.uri.clone().map(|uri| CharacterEntry {
        uri,
        id: character.id,
        name: character.name,
    })
}
