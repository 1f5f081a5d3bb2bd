//! Fixture graph export. Entities with locally known attributes can be
//! serialized back into CIDOC-CRM triples, which is how test data for a
//! store is produced.

use crate::author::Author;
use crate::character::Character;
use crate::errors::ModelError;
use crate::work::Work;
use crate::ExternalReference;
use oxrdf::{Graph, Literal, NamedNode, Triple};

/// Vocabulary terms used by the exported triples.
pub mod vocab {
    use oxrdf::NamedNodeRef;

    pub const RDF_TYPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
    pub const RDF_VALUE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#value");
    pub const RDFS_LABEL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#label");

    pub const CRM_P1_IS_IDENTIFIED_BY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/P1_is_identified_by");
    pub const CRM_P1I_IDENTIFIES: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/P1i_identifies");
    pub const CRM_P2_HAS_TYPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/P2_has_type");
    pub const CRM_P14_CARRIED_OUT_BY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/P14_carried_out_by");
    pub const CRM_P14I_PERFORMED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/P14i_performed");
    pub const CRM_P94_HAS_CREATED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/P94_has_created");
    pub const CRM_P94I_WAS_CREATED_BY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/P94i_was_created_by");
    pub const CRM_P102_HAS_TITLE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/P102_has_title");
    pub const CRM_P102I_IS_TITLE_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/P102i_is_title_of");
    pub const CRM_P4_HAS_TIME_SPAN: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/P4_has_time-span");
    pub const CRM_P4I_IS_TIME_SPAN_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/P4i_is_time-span_of");
    pub const CRM_P43_HAS_DIMENSION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/P43_has_dimension");
    pub const CRM_P90_HAS_VALUE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/P90_has_value");
    pub const CRM_P148_HAS_COMPONENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/P148_has_component");
    pub const CRM_P148I_IS_COMPONENT_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/P148i_is_component_of");

    pub const CRM_E35_TITLE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/E35_Title");
    pub const CRM_E39_ACTOR: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/E39_Actor");
    pub const CRM_E41_APPELLATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/E41_Appellation");
    pub const CRM_E42_IDENTIFIER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/E42_Identifier");
    pub const CRM_E52_TIME_SPAN: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/E52_Time-Span");

    pub const LRM_F1_WORK: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/lrmoo/F1_Work");
    pub const LRM_F27_WORK_CREATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/lrmoo/F27_Work_Creation");
    pub const LRM_R16_CREATED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/lrmoo/R16_created");
    pub const LRM_R16I_WAS_CREATED_BY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/lrmoo/R16i_was_created_by");

    pub const GO_C1_CHARACTER_CONCEPT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://golemlab.eu/ontology/C1_Character_Concept");

    pub const GT_ID: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://data.golemlab.eu/data/entity/type/id");
    pub const GT_CHARACTER_NAME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://data.golemlab.eu/data/entity/type/character_name");
    pub const GT_AUTHOR_NAME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://data.golemlab.eu/data/entity/type/author_name");
    pub const GT_WIKIDATA: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://data.golemlab.eu/data/entity/type/wikidata");
}

use crate::metrics::Metrics;
use crate::queries::{GD_NAMESPACE, GT_NAMESPACE};

fn node(uri: &str) -> Result<NamedNode, ModelError> {
    Ok(NamedNode::new(uri)?)
}

/// Triples of the `{uri}/dim/{key}` dimension nodes carrying metrics.
fn insert_metric_nodes(
    graph: &mut Graph,
    entity: &NamedNode,
    metrics: &Metrics,
) -> Result<(), ModelError> {
    for (key, value) in metrics {
        let dim_node = node(&format!("{}/dim/{}", entity.as_str(), key))?;
        graph.insert(&Triple::new(
            entity.clone(),
            vocab::CRM_P43_HAS_DIMENSION,
            dim_node.clone(),
        ));
        graph.insert(&Triple::new(
            dim_node,
            vocab::CRM_P90_HAS_VALUE,
            Literal::new_typed_literal(value.to_string(), oxrdf::vocab::xsd::INTEGER),
        ));
    }
    Ok(())
}

/// Membership links to the parent corpora, derived from their IDs in the
/// data namespace.
fn insert_corpus_links(
    graph: &mut Graph,
    entity: &NamedNode,
    corpus_ids: &[String],
) -> Result<(), ModelError> {
    for corpus_id in corpus_ids {
        let corpus_node = node(&format!("{}{}", GD_NAMESPACE, corpus_id))?;
        graph.insert(&Triple::new(
            corpus_node.clone(),
            vocab::CRM_P148_HAS_COMPONENT,
            entity.clone(),
        ));
        graph.insert(&Triple::new(
            entity.clone(),
            vocab::CRM_P148I_IS_COMPONENT_OF,
            corpus_node,
        ));
    }
    Ok(())
}

/// Triples of the `{uri}/id` identifier node shared by all entity kinds.
fn insert_id_node(graph: &mut Graph, entity: &NamedNode, id: &str) -> Result<(), ModelError> {
    let id_node = node(&format!("{}/id", entity.as_str()))?;
    graph.insert(&Triple::new(
        entity.clone(),
        vocab::CRM_P1_IS_IDENTIFIED_BY,
        id_node.clone(),
    ));
    graph.insert(&Triple::new(
        id_node.clone(),
        vocab::RDF_TYPE,
        vocab::CRM_E42_IDENTIFIER,
    ));
    graph.insert(&Triple::new(
        id_node.clone(),
        vocab::CRM_P1I_IDENTIFIES,
        entity.clone(),
    ));
    graph.insert(&Triple::new(id_node.clone(), vocab::CRM_P2_HAS_TYPE, vocab::GT_ID));
    graph.insert(&Triple::new(
        id_node,
        vocab::RDF_VALUE,
        Literal::new_simple_literal(id),
    ));
    Ok(())
}

/// Triples of the `{uri}/wd` identifier node when the refs carry exactly
/// one Wikidata reference. More than one makes no sense and exports
/// nothing.
fn insert_wikidata_node(
    graph: &mut Graph,
    entity: &NamedNode,
    refs: &[ExternalReference],
) -> Result<(), ModelError> {
    let wikidata: Vec<&ExternalReference> = refs
        .iter()
        .filter(|r| r.ref_type.contains("wikidata"))
        .collect();
    if let [wikidata_ref] = wikidata.as_slice() {
        let wd_node = node(&format!("{}/wd", entity.as_str()))?;
        graph.insert(&Triple::new(
            entity.clone(),
            vocab::CRM_P1_IS_IDENTIFIED_BY,
            wd_node.clone(),
        ));
        graph.insert(&Triple::new(
            wd_node.clone(),
            vocab::RDF_TYPE,
            vocab::CRM_E42_IDENTIFIER,
        ));
        graph.insert(&Triple::new(
            wd_node.clone(),
            vocab::CRM_P1I_IDENTIFIES,
            entity.clone(),
        ));
        graph.insert(&Triple::new(
            wd_node.clone(),
            vocab::CRM_P2_HAS_TYPE,
            vocab::GT_WIKIDATA,
        ));
        graph.insert(&Triple::new(
            wd_node,
            vocab::RDF_VALUE,
            Literal::new_simple_literal(&wikidata_ref.ref_id),
        ));
    }
    Ok(())
}

fn insert_appellation_node(
    graph: &mut Graph,
    entity: &NamedNode,
    suffix: &str,
    appellation_type: oxrdf::NamedNodeRef<'_>,
    name: &str,
) -> Result<(), ModelError> {
    graph.insert(&Triple::new(
        entity.clone(),
        vocab::RDFS_LABEL,
        Literal::new_simple_literal(name),
    ));
    let name_node = node(&format!("{}/{}", entity.as_str(), suffix))?;
    graph.insert(&Triple::new(
        entity.clone(),
        vocab::CRM_P1_IS_IDENTIFIED_BY,
        name_node.clone(),
    ));
    graph.insert(&Triple::new(
        name_node.clone(),
        vocab::RDF_TYPE,
        vocab::CRM_E41_APPELLATION,
    ));
    graph.insert(&Triple::new(
        name_node.clone(),
        vocab::CRM_P1I_IDENTIFIES,
        entity.clone(),
    ));
    graph.insert(&Triple::new(
        name_node.clone(),
        vocab::CRM_P2_HAS_TYPE,
        appellation_type,
    ));
    graph.insert(&Triple::new(
        name_node,
        vocab::RDF_VALUE,
        Literal::new_simple_literal(name),
    ));
    Ok(())
}

impl Character {
    /// Triples describing the character, from its locally known
    /// attributes only. Nothing is resolved against the store.
    pub fn generate_graph(&self) -> Result<Graph, ModelError> {
        let uri = self.uri.as_deref().ok_or(ModelError::MissingUri)?;
        let entity = node(uri)?;
        let mut graph = Graph::new();

        graph.insert(&Triple::new(
            entity.clone(),
            vocab::RDF_TYPE,
            vocab::GO_C1_CHARACTER_CONCEPT,
        ));
        if let Some(id) = &self.id {
            insert_id_node(&mut graph, &entity, id)?;
        }
        if let Some(name) = &self.name {
            insert_appellation_node(
                &mut graph,
                &entity,
                "character_name",
                vocab::GT_CHARACTER_NAME,
                name,
            )?;
        }
        if let Some(character_type) = self.character_type {
            let type_node = node(&format!(
                "{}{}_character",
                GT_NAMESPACE,
                character_type.as_str()
            ))?;
            graph.insert(&Triple::new(entity.clone(), vocab::CRM_P2_HAS_TYPE, type_node));
        }
        if let Some(gender) = self.gender {
            let gender_node = node(&format!("{}gender/{}", GT_NAMESPACE, gender.as_str()))?;
            graph.insert(&Triple::new(
                entity.clone(),
                vocab::CRM_P2_HAS_TYPE,
                gender_node,
            ));
        }
        if let Some(metrics) = &self.metrics {
            insert_metric_nodes(&mut graph, &entity, metrics)?;
        }
        if let Some(corpus_ids) = &self.corpus_ids {
            insert_corpus_links(&mut graph, &entity, corpus_ids)?;
        }
        Ok(graph)
    }
}

impl Author {
    pub fn generate_graph(&self) -> Result<Graph, ModelError> {
        let uri = self.uri.as_deref().ok_or(ModelError::MissingUri)?;
        let entity = node(uri)?;
        let mut graph = Graph::new();

        graph.insert(&Triple::new(
            entity.clone(),
            vocab::RDF_TYPE,
            vocab::CRM_E39_ACTOR,
        ));
        if let Some(id) = &self.id {
            insert_id_node(&mut graph, &entity, id)?;
        }
        if let Some(name) = &self.name {
            insert_appellation_node(&mut graph, &entity, "name", vocab::GT_AUTHOR_NAME, name)?;
        }
        if let Some(refs) = &self.refs {
            insert_wikidata_node(&mut graph, &entity, refs)?;
        }
        Ok(graph)
    }
}

impl Work {
    pub fn generate_graph(&self) -> Result<Graph, ModelError> {
        let uri = self.uri.as_deref().ok_or(ModelError::MissingUri)?;
        let entity = node(uri)?;
        let mut graph = Graph::new();

        graph.insert(&Triple::new(entity.clone(), vocab::RDF_TYPE, vocab::LRM_F1_WORK));
        if let Some(id) = &self.id {
            insert_id_node(&mut graph, &entity, id)?;
        }
        if let Some(title) = &self.title {
            graph.insert(&Triple::new(
                entity.clone(),
                vocab::RDFS_LABEL,
                Literal::new_simple_literal(title),
            ));
            let title_node = node(&format!("{}/title", uri))?;
            graph.insert(&Triple::new(
                entity.clone(),
                vocab::CRM_P102_HAS_TITLE,
                title_node.clone(),
            ));
            graph.insert(&Triple::new(
                title_node.clone(),
                vocab::RDF_TYPE,
                vocab::CRM_E35_TITLE,
            ));
            graph.insert(&Triple::new(
                title_node.clone(),
                vocab::CRM_P102I_IS_TITLE_OF,
                entity.clone(),
            ));
            graph.insert(&Triple::new(
                title_node,
                vocab::RDF_VALUE,
                Literal::new_simple_literal(title),
            ));
        }

        let creation = node(&format!("{}/creation", uri))?;
        graph.insert(&Triple::new(
            creation.clone(),
            vocab::RDF_TYPE,
            vocab::LRM_F27_WORK_CREATION,
        ));
        graph.insert(&Triple::new(
            creation.clone(),
            vocab::LRM_R16_CREATED,
            entity.clone(),
        ));
        graph.insert(&Triple::new(
            entity.clone(),
            vocab::LRM_R16I_WAS_CREATED_BY,
            creation.clone(),
        ));

        if let Some(characters) = &self.characters {
            for character in characters {
                if let Some(character_uri) = &character.uri {
                    let character_node = node(character_uri)?;
                    graph.insert(&Triple::new(
                        creation.clone(),
                        vocab::CRM_P94_HAS_CREATED,
                        character_node.clone(),
                    ));
                    graph.insert(&Triple::new(
                        character_node,
                        vocab::CRM_P94I_WAS_CREATED_BY,
                        creation.clone(),
                    ));
                }
            }
        }
        if let Some(authors) = &self.authors {
            for author in authors {
                if let Some(author_uri) = &author.uri {
                    let author_node = node(author_uri)?;
                    graph.insert(&Triple::new(
                        creation.clone(),
                        vocab::CRM_P14_CARRIED_OUT_BY,
                        author_node.clone(),
                    ));
                    graph.insert(&Triple::new(
                        author_node,
                        vocab::CRM_P14I_PERFORMED,
                        creation.clone(),
                    ));
                }
            }
        }
        if let Some(created_year) = &self.created_year {
            let ts = node(&format!("{}/ts", creation.as_str()))?;
            graph.insert(&Triple::new(
                creation.clone(),
                vocab::CRM_P4_HAS_TIME_SPAN,
                ts.clone(),
            ));
            graph.insert(&Triple::new(
                ts.clone(),
                vocab::CRM_P4I_IS_TIME_SPAN_OF,
                creation,
            ));
            graph.insert(&Triple::new(ts.clone(), vocab::RDF_TYPE, vocab::CRM_E52_TIME_SPAN));
            graph.insert(&Triple::new(
                ts,
                vocab::RDF_VALUE,
                Literal::new_simple_literal(created_year),
            ));
        }
        if let Some(refs) = &self.refs {
            insert_wikidata_node(&mut graph, &entity, refs)?;
        }
        Ok(graph)
    }
}
