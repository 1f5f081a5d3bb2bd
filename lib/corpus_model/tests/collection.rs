mod common;

use common::{literal_column, table, MockStore};
use corpus_model::errors::ModelError;
use corpus_model::{Corpora, Corpus};
use sparql_store::solutions::Term;
use sparql_store::SparqlQueryable;
use std::sync::Arc;

fn discovery_rows() -> sparql_store::solutions::SparqlSolutions {
    table(
        &["corpus_uri", "corpus_id"],
        &[
            &[
                Some(Term::uri("http://data.golemlab.eu/data/corpus/fan1")),
                Some(Term::literal("fan1")),
            ],
            &[
                Some(Term::uri("http://data.golemlab.eu/data/corpus/fan2")),
                Some(Term::literal("fan2")),
            ],
        ],
    )
}

#[tokio::test]
async fn load_discovers_corpora_in_listing_order() {
    let mock = Arc::new(
        MockStore::new().route("?corpus_uri a cls:X1_Corpus", discovery_rows()),
    );
    let store: Arc<dyn SparqlQueryable> = mock.clone();

    let corpora = Corpora::load(store).await.unwrap();
    assert_eq!(corpora.len(), 2);
    assert_eq!(corpora.ids(), ["fan1", "fan2"]);
    assert_eq!(mock.calls(), 1);

    let fan1 = corpora.get("fan1").unwrap();
    assert_eq!(
        fan1.uri.as_deref(),
        Some("http://data.golemlab.eu/data/corpus/fan1")
    );
    assert_eq!(fan1.id.as_deref(), Some("fan1"));
}

#[tokio::test]
async fn empty_store_loads_an_empty_collection() {
    let mock = Arc::new(MockStore::new());
    let store: Arc<dyn SparqlQueryable> = mock.clone();

    let mut corpora = Corpora::load(store).await.unwrap();
    assert!(corpora.is_empty());
    assert_eq!(corpora.ids(), Vec::<String>::new());
    assert_eq!(corpora.list(false).await.unwrap().len(), 0);
}

#[test]
fn add_requires_a_resolved_id() {
    let mut corpora = Corpora::new();
    let without_id = Corpus::default();
    assert!(matches!(
        corpora.add(without_id),
        Err(ModelError::UnexpectedShape(_))
    ));

    let empty_id = Corpus {
        id: Some(String::new()),
        ..Default::default()
    };
    assert!(matches!(
        corpora.add(empty_id),
        Err(ModelError::UnexpectedShape(_))
    ));
    assert!(corpora.is_empty());
}

#[test]
fn add_replaces_a_duplicate_but_keeps_its_position() {
    let mut corpora = Corpora::new();
    for id in ["fan1", "fan2"] {
        corpora
            .add(Corpus {
                id: Some(id.to_string()),
                ..Default::default()
            })
            .unwrap();
    }

    corpora
        .add(Corpus {
            id: Some("fan1".to_string()),
            name: Some("replacement".to_string()),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(corpora.len(), 2);
    assert_eq!(corpora.ids(), ["fan1", "fan2"]);
    assert_eq!(
        corpora.get("fan1").unwrap().name.as_deref(),
        Some("replacement")
    );
}

#[tokio::test]
async fn list_returns_metadata_in_insertion_order() {
    let mock = Arc::new(
        MockStore::new()
            .route("?corpus_uri a cls:X1_Corpus", discovery_rows())
            .route("fan1> a cls:X1_Corpus ;\n            crm:P1_is_identified_by ?nameID", literal_column("name", &["First"]))
            .route("fan2> a cls:X1_Corpus ;\n            crm:P1_is_identified_by ?nameID", literal_column("name", &["Second"])),
    );
    let store: Arc<dyn SparqlQueryable> = mock.clone();

    let mut corpora = Corpora::load(store).await.unwrap();
    let listing = corpora.list(false).await.unwrap();

    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0].name, "fan1");
    assert_eq!(listing[0].title.as_deref(), Some("First"));
    assert_eq!(listing[1].name, "fan2");
    assert_eq!(listing[1].title.as_deref(), Some("Second"));
}

#[tokio::test]
async fn list_aborts_on_the_first_failing_corpus() {
    let mock = Arc::new(
        MockStore::new()
            .route("?corpus_uri a cls:X1_Corpus", discovery_rows())
            .fail_on("fan1>"),
    );
    let store: Arc<dyn SparqlQueryable> = mock.clone();

    let mut corpora = Corpora::load(store).await.unwrap();
    assert!(matches!(
        corpora.list(false).await,
        Err(ModelError::Query(_))
    ));
}
