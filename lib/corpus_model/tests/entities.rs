mod common;

use common::{literal_column, metric_rows, table, uri_column, MockStore};
use corpus_model::errors::ModelError;
use corpus_model::{Author, Character, CharacterType, Corpus, Gender, Work};
use sparql_store::solutions::Term;
use sparql_store::SparqlQueryable;
use std::sync::Arc;

const CORPUS_URI: &str = "http://data.golemlab.eu/data/corpus/fan1";
const CHARACTER_URI: &str = "http://data.golemlab.eu/data/character/hp_snape";
const WORK_URI: &str = "http://data.golemlab.eu/data/work/hp";
const AUTHOR_URI: &str = "http://data.golemlab.eu/data/author/rowling";

#[tokio::test]
async fn corpus_name_is_resolved_once() {
    let mock = Arc::new(
        MockStore::new().route("gt:corpus_name", literal_column("name", &["German Fanfiction"])),
    );
    let store: Arc<dyn SparqlQueryable> = mock.clone();
    let mut corpus = Corpus::new(store, CORPUS_URI);

    assert_eq!(corpus.get_name().await.unwrap(), "German Fanfiction");
    assert_eq!(corpus.get_name().await.unwrap(), "German Fanfiction");
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn detached_corpus_reports_the_missing_store() {
    let mut corpus = Corpus {
        uri: Some(CORPUS_URI.to_string()),
        ..Default::default()
    };
    assert!(matches!(
        corpus.get_name().await,
        Err(ModelError::MissingStore)
    ));
}

#[tokio::test]
async fn corpus_metric_keys_are_remapped() {
    let mock = Arc::new(MockStore::new().route(
        "crm:P43_has_dimension",
        metric_rows(&[
            ("http://data.golemlab.eu/data/corpus/fan1/dim/number_of_chapters", 42),
            ("http://data.golemlab.eu/data/corpus/fan1/dim/number_of_male_characters", 7),
            ("http://data.golemlab.eu/data/corpus/fan1/dim/number_of_potions", 3),
        ]),
    ));
    let store: Arc<dyn SparqlQueryable> = mock.clone();
    let mut corpus = Corpus::new(store, CORPUS_URI);

    let metrics = corpus.get_metrics().await.unwrap();
    assert_eq!(metrics.get("chapters"), Some(&42));
    assert_eq!(metrics.get("male"), Some(&7));
    // unmapped dimensions keep their segment name
    assert_eq!(metrics.get("number_of_potions"), Some(&3));
}

#[tokio::test]
async fn corpus_metrics_serialize_with_a_nested_wordcount() {
    let mock = Arc::new(
        MockStore::new()
            .route("?node crm:P2_has_type gt:id", literal_column("id", &["fan1"]))
            .route(
                "crm:P43_has_dimension",
                metric_rows(&[
                    ("http://data.golemlab.eu/data/corpus/fan1/dim/number_of_chapters", 42),
                    (
                        "http://data.golemlab.eu/data/corpus/fan1/dim/number_of_words_in_documents",
                        9000,
                    ),
                    (
                        "http://data.golemlab.eu/data/corpus/fan1/dim/number_of_words_in_comments",
                        120,
                    ),
                ]),
            ),
    );
    let store: Arc<dyn SparqlQueryable> = mock.clone();
    let mut corpus = Corpus::new(store, CORPUS_URI);

    let metadata = corpus.get_metadata(true).await.unwrap();
    let serialized = serde_json::to_value(&metadata).unwrap();
    let metrics = &serialized["metrics"];
    assert_eq!(metrics["chapters"], 42);
    assert_eq!(metrics["wordcount"]["words_in_documents"], 9000);
    assert_eq!(metrics["wordcount"]["words_in_comments"], 120);
    // the word counts only appear inside the wordcount object
    assert!(metrics.get("words_in_documents").is_none());
    assert!(metrics.get("words_in_comments").is_none());
}

#[tokio::test]
async fn absent_metrics_are_not_cached() {
    let mock = Arc::new(MockStore::new());
    let store: Arc<dyn SparqlQueryable> = mock.clone();
    let mut corpus = Corpus::new(store, CORPUS_URI);

    assert!(matches!(
        corpus.get_metrics().await,
        Err(ModelError::NotFound(_))
    ));
    assert!(matches!(
        corpus.get_metrics().await,
        Err(ModelError::NotFound(_))
    ));
    // a failed resolution leaves nothing behind, so the store is asked again
    assert_eq!(mock.calls(), 2);
}

#[tokio::test]
async fn corpus_characters_carry_ids_and_optional_names() {
    let mock = Arc::new(MockStore::new().route(
        "crm:P148i_is_component_of",
        table(
            &["uri", "id", "name"],
            &[
                &[
                    Some(Term::uri(CHARACTER_URI)),
                    Some(Term::literal("hp_snape")),
                    Some(Term::literal("Severus Snape")),
                ],
                &[
                    Some(Term::uri("http://data.golemlab.eu/data/character/hp_oc1")),
                    Some(Term::literal("hp_oc1")),
                    None,
                ],
            ],
        ),
    ));
    let store: Arc<dyn SparqlQueryable> = mock.clone();
    let mut corpus = Corpus::new(store, CORPUS_URI);

    let characters = corpus.get_characters().await.unwrap();
    assert_eq!(characters.len(), 2);
    assert_eq!(characters[0].id.as_deref(), Some("hp_snape"));
    assert_eq!(characters[0].name.as_deref(), Some("Severus Snape"));
    assert_eq!(characters[1].id.as_deref(), Some("hp_oc1"));
    assert_eq!(characters[1].name, None);
}

#[tokio::test]
async fn corpus_metadata_omits_absent_attributes() {
    let mock = Arc::new(
        MockStore::new()
            .route("?node crm:P2_has_type gt:id", literal_column("id", &["fan1"]))
            .route("gt:corpus_name", literal_column("name", &["German Fanfiction"]))
            .route(
                "crm:P104_is_subject_to",
                table(
                    &["uri", "name"],
                    &[&[
                        Some(Term::uri("https://creativecommons.org/licenses/by/4.0/")),
                        Some(Term::literal("CC BY 4.0")),
                    ]],
                ),
            ),
    );
    let store: Arc<dyn SparqlQueryable> = mock.clone();
    let mut corpus = Corpus::new(store, CORPUS_URI);

    let metadata = corpus.get_metadata(false).await.unwrap();
    assert_eq!(metadata.name, "fan1");
    assert_eq!(metadata.uri, CORPUS_URI);
    assert_eq!(metadata.title.as_deref(), Some("German Fanfiction"));
    assert_eq!(metadata.licence.as_deref(), Some("CC BY 4.0"));
    assert_eq!(
        metadata.licence_url.as_deref(),
        Some("https://creativecommons.org/licenses/by/4.0/")
    );
    assert_eq!(metadata.acronym, None);
    assert_eq!(metadata.description, None);
    assert_eq!(metadata.repository, None);
    assert_eq!(metadata.metrics, None);

    let serialized = serde_json::to_value(&metadata).unwrap();
    assert_eq!(serialized["licenceUrl"], "https://creativecommons.org/licenses/by/4.0/");
    assert!(serialized.get("acronym").is_none());
}

#[tokio::test]
async fn character_gender_and_type_come_from_type_uris() {
    let mock = Arc::new(
        MockStore::new()
            .route(
                "STRSTARTS",
                uri_column(
                    "gender",
                    &["http://data.golemlab.eu/data/entity/type/gender/female"],
                ),
            )
            .route(
                "gt:canon_character",
                uri_column(
                    "type",
                    &["http://data.golemlab.eu/data/entity/type/canon_character"],
                ),
            ),
    );
    let store: Arc<dyn SparqlQueryable> = mock.clone();
    let mut character = Character::new(store, CHARACTER_URI);

    assert_eq!(character.get_gender().await.unwrap(), Gender::Female);
    assert_eq!(
        character.get_character_type().await.unwrap(),
        CharacterType::Canon
    );
}

#[tokio::test]
async fn unknown_gender_uri_is_rejected() {
    let mock = Arc::new(MockStore::new().route(
        "STRSTARTS",
        uri_column(
            "gender",
            &["http://data.golemlab.eu/data/entity/type/gender/unknown"],
        ),
    ));
    let store: Arc<dyn SparqlQueryable> = mock.clone();
    let mut character = Character::new(store, CHARACTER_URI);

    assert!(matches!(
        character.get_gender().await,
        Err(ModelError::UnexpectedShape(_))
    ));
}

#[tokio::test]
async fn character_refs_reduce_type_uris_to_resource_names() {
    let mock = Arc::new(MockStore::new().route(
        "FILTER(?type != gt:id)",
        table(
            &["ref", "type"],
            &[&[
                Some(Term::literal("Q313331")),
                Some(Term::uri("http://data.golemlab.eu/data/entity/type/wikidata")),
            ]],
        ),
    ));
    let store: Arc<dyn SparqlQueryable> = mock.clone();
    let mut character = Character::new(store, CHARACTER_URI);

    let refs = character.get_refs().await.unwrap();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].ref_id, "Q313331");
    assert_eq!(refs[0].ref_type, "wikidata");
}

#[tokio::test]
async fn character_relations_use_target_ids() {
    let mock = Arc::new(MockStore::new().route(
        "go:R1_has_relation",
        table(
            &["type", "id"],
            &[&[
                Some(Term::uri(
                    "http://data.golemlab.eu/data/entity/type/relation/parent_of",
                )),
                Some(Term::literal("hp_harry")),
            ]],
        ),
    ));
    let store: Arc<dyn SparqlQueryable> = mock.clone();
    let mut character = Character::new(store, CHARACTER_URI);

    let relations = character.get_relations().await.unwrap();
    assert_eq!(relations.len(), 1);
    assert_eq!(relations[0].relation_type, "parent_of");
    assert_eq!(relations[0].id, "hp_harry");
}

#[tokio::test]
async fn character_source_url_is_optional() {
    let mock = Arc::new(MockStore::new().route(
        "go:C3_Source",
        table(&["name", "url"], &[&[Some(Term::literal("Archive of Our Own")), None]]),
    ));
    let store: Arc<dyn SparqlQueryable> = mock.clone();
    let mut character = Character::new(store, CHARACTER_URI);

    let source = character.get_source().await.unwrap();
    assert_eq!(source.name, "Archive of Our Own");
    assert_eq!(source.url, None);
}

#[tokio::test]
async fn work_metadata_collects_authors() {
    let mock = Arc::new(
        MockStore::new()
            .route("a crm:E42_Identifier", literal_column("id", &["hp"]))
            .route("crm:P102_has_title", literal_column("title", &["Harry Potter"]))
            .route("crm:P14_carried_out_by", table(
                &["uri", "id", "name"],
                &[&[
                    Some(Term::uri(AUTHOR_URI)),
                    Some(Term::literal("rowling")),
                    Some(Term::literal("J. K. Rowling")),
                ]],
            ))
            .route("crm:P4_has_time-span", literal_column("year", &["1997"])),
    );
    let store: Arc<dyn SparqlQueryable> = mock.clone();
    let mut work = Work::new(store, WORK_URI);

    let metadata = work.get_metadata().await.unwrap();
    assert_eq!(metadata.id, "hp");
    assert_eq!(metadata.title.as_deref(), Some("Harry Potter"));
    assert_eq!(metadata.created_year.as_deref(), Some("1997"));
    let authors = metadata.authors.unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].uri, AUTHOR_URI);
    assert_eq!(authors[0].name.as_deref(), Some("J. K. Rowling"));
}

#[tokio::test]
async fn author_name_uses_the_appellation() {
    let mock = Arc::new(
        MockStore::new().route("gt:author_name", literal_column("name", &["J. K. Rowling"])),
    );
    let store: Arc<dyn SparqlQueryable> = mock.clone();
    let mut author = Author::new(store, AUTHOR_URI);

    assert_eq!(author.get_name().await.unwrap(), "J. K. Rowling");
}

#[tokio::test]
async fn store_failure_is_not_swallowed_by_metadata() {
    let mock = Arc::new(
        MockStore::new()
            .route("?node crm:P2_has_type gt:id", literal_column("id", &["fan1"]))
            .fail_on("gt:corpus_name"),
    );
    let store: Arc<dyn SparqlQueryable> = mock.clone();
    let mut corpus = Corpus::new(store, CORPUS_URI);

    assert!(matches!(
        corpus.get_metadata(false).await,
        Err(ModelError::Query(_))
    ));
}
