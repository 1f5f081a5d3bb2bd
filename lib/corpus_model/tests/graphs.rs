use corpus_model::graph::vocab;
use corpus_model::{Author, Character, CharacterType, Gender, Work};
use corpus_model::ExternalReference;
use oxrdf::{Literal, NamedNode, Triple};

fn node(uri: &str) -> NamedNode {
    NamedNode::new(uri).unwrap()
}

#[test]
fn character_graph_carries_identifier_and_appellation_nodes() {
    let character = Character {
        uri: Some("http://data.golemlab.eu/data/character/hp_snape".to_string()),
        id: Some("hp_snape".to_string()),
        name: Some("Severus Snape".to_string()),
        character_type: Some(CharacterType::Canon),
        gender: Some(Gender::Male),
        ..Default::default()
    };

    let graph = character.generate_graph().unwrap();
    let entity = node("http://data.golemlab.eu/data/character/hp_snape");
    let id_node = node("http://data.golemlab.eu/data/character/hp_snape/id");
    let name_node = node("http://data.golemlab.eu/data/character/hp_snape/character_name");

    assert!(graph.contains(&Triple::new(
        entity.clone(),
        vocab::RDF_TYPE,
        vocab::GO_C1_CHARACTER_CONCEPT
    )));
    assert!(graph.contains(&Triple::new(
        entity.clone(),
        vocab::CRM_P1_IS_IDENTIFIED_BY,
        id_node.clone()
    )));
    assert!(graph.contains(&Triple::new(
        id_node.clone(),
        vocab::RDF_VALUE,
        Literal::new_simple_literal("hp_snape")
    )));
    assert!(graph.contains(&Triple::new(
        name_node.clone(),
        vocab::CRM_P2_HAS_TYPE,
        vocab::GT_CHARACTER_NAME
    )));
    assert!(graph.contains(&Triple::new(
        entity.clone(),
        vocab::CRM_P2_HAS_TYPE,
        node("http://data.golemlab.eu/data/entity/type/canon_character")
    )));
    assert!(graph.contains(&Triple::new(
        entity,
        vocab::CRM_P2_HAS_TYPE,
        node("http://data.golemlab.eu/data/entity/type/gender/male")
    )));
}

#[test]
fn character_graph_carries_metric_dimensions_and_corpus_links() {
    let mut metrics = corpus_model::Metrics::new();
    metrics.insert("comments".to_string(), 7);
    let character = Character {
        uri: Some("http://data.golemlab.eu/data/character/hp_snape".to_string()),
        metrics: Some(metrics),
        corpus_ids: Some(vec!["fan1".to_string()]),
        ..Default::default()
    };

    let graph = character.generate_graph().unwrap();
    let entity = node("http://data.golemlab.eu/data/character/hp_snape");
    let dim_node = node("http://data.golemlab.eu/data/character/hp_snape/dim/comments");
    let corpus_node = node("http://data.golemlab.eu/data/fan1");

    assert!(graph.contains(&Triple::new(
        entity.clone(),
        vocab::CRM_P43_HAS_DIMENSION,
        dim_node.clone()
    )));
    assert!(graph.contains(&Triple::new(
        dim_node,
        vocab::CRM_P90_HAS_VALUE,
        Literal::new_typed_literal("7", oxrdf::vocab::xsd::INTEGER)
    )));
    assert!(graph.contains(&Triple::new(
        corpus_node.clone(),
        vocab::CRM_P148_HAS_COMPONENT,
        entity.clone()
    )));
    assert!(graph.contains(&Triple::new(
        entity,
        vocab::CRM_P148I_IS_COMPONENT_OF,
        corpus_node
    )));
}

#[test]
fn character_graph_skips_unknown_attributes() {
    let character = Character {
        uri: Some("http://data.golemlab.eu/data/character/hp_oc1".to_string()),
        ..Default::default()
    };

    let graph = character.generate_graph().unwrap();
    // only the type triple is known
    assert_eq!(graph.len(), 1);
}

#[test]
fn author_graph_exports_a_single_wikidata_reference() {
    let author = Author {
        uri: Some("http://data.golemlab.eu/data/author/rowling".to_string()),
        refs: Some(vec![ExternalReference {
            ref_id: "Q34660".to_string(),
            ref_type: "wikidata".to_string(),
        }]),
        ..Default::default()
    };

    let graph = author.generate_graph().unwrap();
    let wd_node = node("http://data.golemlab.eu/data/author/rowling/wd");
    assert!(graph.contains(&Triple::new(
        wd_node.clone(),
        vocab::CRM_P2_HAS_TYPE,
        vocab::GT_WIKIDATA
    )));
    assert!(graph.contains(&Triple::new(
        wd_node,
        vocab::RDF_VALUE,
        Literal::new_simple_literal("Q34660")
    )));
}

#[test]
fn ambiguous_wikidata_references_are_not_exported() {
    let author = Author {
        uri: Some("http://data.golemlab.eu/data/author/rowling".to_string()),
        refs: Some(vec![
            ExternalReference {
                ref_id: "Q34660".to_string(),
                ref_type: "wikidata".to_string(),
            },
            ExternalReference {
                ref_id: "Q42".to_string(),
                ref_type: "wikidata".to_string(),
            },
        ]),
        ..Default::default()
    };

    let graph = author.generate_graph().unwrap();
    let wd_node = node("http://data.golemlab.eu/data/author/rowling/wd");
    assert!(!graph.contains(&Triple::new(
        wd_node,
        vocab::CRM_P2_HAS_TYPE,
        vocab::GT_WIKIDATA
    )));
}

#[test]
fn work_graph_links_creation_to_characters_and_authors() {
    let work = Work {
        uri: Some("http://data.golemlab.eu/data/work/hp".to_string()),
        id: Some("hp".to_string()),
        title: Some("Harry Potter".to_string()),
        created_year: Some("1997".to_string()),
        characters: Some(vec![Character {
            uri: Some("http://data.golemlab.eu/data/character/hp_snape".to_string()),
            ..Default::default()
        }]),
        authors: Some(vec![Author {
            uri: Some("http://data.golemlab.eu/data/author/rowling".to_string()),
            ..Default::default()
        }]),
        ..Default::default()
    };

    let graph = work.generate_graph().unwrap();
    let entity = node("http://data.golemlab.eu/data/work/hp");
    let creation = node("http://data.golemlab.eu/data/work/hp/creation");
    let ts = node("http://data.golemlab.eu/data/work/hp/creation/ts");

    assert!(graph.contains(&Triple::new(
        creation.clone(),
        vocab::LRM_R16_CREATED,
        entity.clone()
    )));
    assert!(graph.contains(&Triple::new(
        entity.clone(),
        vocab::LRM_R16I_WAS_CREATED_BY,
        creation.clone()
    )));
    assert!(graph.contains(&Triple::new(
        creation.clone(),
        vocab::CRM_P94_HAS_CREATED,
        node("http://data.golemlab.eu/data/character/hp_snape")
    )));
    assert!(graph.contains(&Triple::new(
        creation.clone(),
        vocab::CRM_P14_CARRIED_OUT_BY,
        node("http://data.golemlab.eu/data/author/rowling")
    )));
    assert!(graph.contains(&Triple::new(
        creation,
        vocab::CRM_P4_HAS_TIME_SPAN,
        ts.clone()
    )));
    assert!(graph.contains(&Triple::new(
        ts,
        vocab::RDF_VALUE,
        Literal::new_simple_literal("1997")
    )));
}

#[test]
fn detached_entity_without_a_uri_cannot_be_exported() {
    let character = Character::default();
    assert!(character.generate_graph().is_err());
}
