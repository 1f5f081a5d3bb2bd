//! Catalog of the SPARQL queries used by the entity models. Each function
//! returns a `QuerySpec` value carrying the GOLEM prefix set, so a
//! different deployment can substitute its own catalog without touching
//! the entities.

use query_templates::template::{Prefix, QuerySpec, VariableDoc};

/// Base namespace of the entity data, used to derive URIs from IDs.
pub const GD_NAMESPACE: &str = "http://data.golemlab.eu/data/";

/// Namespace of the entity type vocabulary (gt:).
pub const GT_NAMESPACE: &str = "http://data.golemlab.eu/data/entity/type/";

pub fn golem_prefixes() -> Vec<Prefix> {
    vec![
        Prefix::new("gd", GD_NAMESPACE),
        Prefix::new("gt", GT_NAMESPACE),
        Prefix::new("crm", "http://www.cidoc-crm.org/cidoc-crm/"),
        Prefix::new("owl", "http://www.w3.org/2002/07/owl#"),
        Prefix::new("xsd", "http://www.w3.org/2001/XMLSchema#"),
        Prefix::new("cls", "http://clscor.io/ontology/"),
        Prefix::new("go", "http://golemlab.eu/ontology/"),
        Prefix::new("lrm", "http://www.cidoc-crm.org/cidoc-crm/lrmoo/"),
        Prefix::new("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
        Prefix::new("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
        Prefix::new(
            "nif",
            "http://persistence.uni-leipzig.org/nlp2rdf/ontologies/nif-core#",
        ),
    ]
}

fn corpus_uri_variable() -> Vec<VariableDoc> {
    vec![VariableDoc::new(
        "corpus_uri",
        "cls:X1_Corpus",
        "URI of a Corpus.",
    )]
}

fn entity_uri_variable() -> Vec<VariableDoc> {
    vec![VariableDoc::new(
        "entity_uri",
        "crm:E1_CRM_Entity",
        "URI of an Entity.",
    )]
}

/// URIs and IDs of all corpora (cls:X1_Corpus) in the Knowledge Graph.
pub fn corpora_uris_ids() -> QuerySpec {
    QuerySpec::ready(
        r#"
    SELECT ?corpus_uri ?corpus_id WHERE {
        ?corpus_uri a cls:X1_Corpus ;
            crm:P1_is_identified_by ?nodeID .

        ?nodeID crm:P2_has_type gt:id ;
            rdf:value ?corpus_id .
    }
    "#,
    )
    .with_label("URIs and IDs of Corpora")
    .with_description("Get URIs and IDs of corpora (cls:X1_Corpus) in the Knowledge Graph.")
    .with_prefixes(golem_prefixes())
}

pub fn corpus_name() -> QuerySpec {
    QuerySpec::template(
        r#"
    SELECT ?name WHERE {
        <$1> a cls:X1_Corpus ;
            crm:P1_is_identified_by ?nameID .

        ?nameID crm:P2_has_type gt:corpus_name ;
            rdf:value ?name .
    }
    "#,
    )
    .with_label("Name of Corpus")
    .with_description("Get name of a corpus identified by an URI.")
    .with_prefixes(golem_prefixes())
    .with_variables(corpus_uri_variable())
}

pub fn corpus_id() -> QuerySpec {
    QuerySpec::template(
        r#"
    SELECT ?id WHERE {
        <$1> a cls:X1_Corpus ;
            crm:P1_is_identified_by ?node .

        ?node crm:P2_has_type gt:id ;
            rdf:value ?id .
    }
    "#,
    )
    .with_label("ID of Corpus")
    .with_description("Get ID of a corpus identified by an URI.")
    .with_prefixes(golem_prefixes())
    .with_variables(corpus_uri_variable())
}

pub fn corpus_acronym() -> QuerySpec {
    QuerySpec::template(
        r#"
    SELECT ?acronym WHERE {
        <$1> a cls:X1_Corpus ;
            crm:P1_is_identified_by ?acronymID .

        ?acronymID crm:P2_has_type gt:corpus_acronym ;
            rdf:value ?acronym .
    }
    "#,
    )
    .with_label("Acronym of Corpus")
    .with_description("Get acronym of a corpus identified by an URI.")
    .with_prefixes(golem_prefixes())
    .with_variables(corpus_uri_variable())
}

pub fn corpus_description() -> QuerySpec {
    QuerySpec::template(
        r#"
    SELECT ?description WHERE {
        <$1> a cls:X1_Corpus ;
            crm:P3_has_note ?description .
    }
    "#,
    )
    .with_label("Description of Corpus")
    .with_description("Get description of a corpus identified by an URI.")
    .with_prefixes(golem_prefixes())
    .with_variables(corpus_uri_variable())
}

pub fn corpus_licence() -> QuerySpec {
    QuerySpec::template(
        r#"
    SELECT ?uri ?name WHERE {
        <$1> a cls:X1_Corpus ;
            crm:P104_is_subject_to ?licence .

        ?licence a crm:E30_Right ;
            crm:P3_has_note ?name ;
            crm:P67_refers_to ?uri .
    }
    "#,
    )
    .with_label("Licence data of Corpus")
    .with_description("Get licence data of a corpus identified by an URI.")
    .with_prefixes(golem_prefixes())
    .with_variables(corpus_uri_variable())
}

pub fn corpus_repository() -> QuerySpec {
    QuerySpec::template(
        r#"
    SELECT ?repository WHERE {
        <$1> a cls:X1_Corpus ;
            crm:P1_is_identified_by ?repositoryID .

        ?repositoryID crm:P2_has_type gt:repository ;
            rdf:value ?repository .
    }
    "#,
    )
    .with_label("Repository of Corpus")
    .with_description("Get the repository URL of a corpus identified by an URI.")
    .with_prefixes(golem_prefixes())
    .with_variables(corpus_uri_variable())
}

/// Dimension/value pairs of any entity that carries metrics.
pub fn entity_metrics() -> QuerySpec {
    QuerySpec::template(
        r#"
    SELECT ?dimensionURI ?value WHERE {
        <$1> crm:P43_has_dimension ?dimensionURI .
        ?dimensionURI crm:P90_has_value ?value .
    }
    "#,
    )
    .with_label("Entity Metrics")
    .with_description("Get all metrics of an entity identified by an URI.")
    .with_prefixes(golem_prefixes())
    .with_variables(entity_uri_variable())
}

/// Character data (uri, id, optionally name) of a single corpus.
pub fn corpus_characters() -> QuerySpec {
    QuerySpec::template(
        r#"
    SELECT ?character AS ?uri ?id ?name WHERE {
        ?character a go:C1_Character_Concept ;
            crm:P148i_is_component_of <$1> ;
            crm:P1_is_identified_by ?identifier .

        ?identifier crm:P2_has_type gt:id ;
            rdf:value ?id .

        OPTIONAL {
            ?character crm:P1_is_identified_by ?appellation .

            ?appellation a crm:E41_Appellation ;
                crm:P2_has_type gt:character_name ;
                rdf:value ?name .
        }
    }
    "#,
    )
    .with_label("Character data (uri, id, name) of corpus")
    .with_description("Get character data (uri, id, optionally name) of a single corpus.")
    .with_prefixes(golem_prefixes())
    .with_variables(corpus_uri_variable())
}

/// Generic query to get the ID of an entity identified by an URI. It
/// identifies the node that holds the ID as value by the type gt:id.
pub fn entity_id() -> QuerySpec {
    QuerySpec::template(
        r#"
    SELECT ?id WHERE {
        <$1> crm:P1_is_identified_by ?identifier .

        ?identifier a crm:E42_Identifier ;
            crm:P2_has_type gt:id ;
            rdf:value ?id .
    }
    "#,
    )
    .with_label("ID of an Entity")
    .with_description("Generic query to get ID of an entity identified by an URI.")
    .with_prefixes(golem_prefixes())
    .with_variables(entity_uri_variable())
}

/// External reference identifiers (e.g. Wikidata) of an entity.
pub fn entity_refs() -> QuerySpec {
    QuerySpec::template(
        r#"
    SELECT ?ref ?type WHERE {
        <$1> crm:P1_is_identified_by ?refID .

        ?refID a crm:E42_Identifier ;
            crm:P2_has_type ?type ;
            rdf:value ?ref .

        FILTER(?type != gt:id)
    }
    "#,
    )
    .with_label("External references of an Entity")
    .with_description(
        "Get identifiers of an entity in external reference resources, e.g. Wikidata.",
    )
    .with_prefixes(golem_prefixes())
    .with_variables(entity_uri_variable())
}

/// IDs of the corpora an entity is a component of.
pub fn entity_corpus_ids() -> QuerySpec {
    QuerySpec::template(
        r#"
    SELECT ?id WHERE {
        ?corpus a cls:X1_Corpus ;
            crm:P148_has_component <$1> ;
            crm:P1_is_identified_by ?node .

        ?node crm:P2_has_type gt:id ;
            rdf:value ?id .
    }
    "#,
    )
    .with_label("Corpus IDs of an Entity")
    .with_description("Get IDs of the corpora an entity is a component of.")
    .with_prefixes(golem_prefixes())
    .with_variables(entity_uri_variable())
}

fn character_uri_variable() -> Vec<VariableDoc> {
    vec![VariableDoc::new(
        "character_uri",
        "go:C1_Character_Concept",
        "URI of a Character.",
    )]
}

pub fn character_name() -> QuerySpec {
    QuerySpec::template(
        r#"
    SELECT ?name WHERE {
        <$1> crm:P1_is_identified_by ?appellation .

        ?appellation a crm:E41_Appellation ;
            crm:P2_has_type gt:character_name ;
            rdf:value ?name .
    }
    "#,
    )
    .with_label("Name of a character")
    .with_description("Get the name (E41_Appellation) of a character.")
    .with_prefixes(golem_prefixes())
    .with_variables(character_uri_variable())
}

/// Gender type URI of a character, e.g. gt:gender/male.
pub fn character_gender() -> QuerySpec {
    QuerySpec::template(
        r#"
    SELECT ?gender WHERE {
        <$1> crm:P2_has_type ?gender .

        FILTER(STRSTARTS(STR(?gender), "http://data.golemlab.eu/data/entity/type/gender/"))
    }
    "#,
    )
    .with_label("Gender of a character")
    .with_description("Get the gender type URI of a character.")
    .with_prefixes(golem_prefixes())
    .with_variables(character_uri_variable())
}

/// Classification of a character as canon or fanon.
pub fn character_type() -> QuerySpec {
    QuerySpec::template(
        r#"
    SELECT ?type WHERE {
        <$1> crm:P2_has_type ?type .

        FILTER(?type IN (gt:canon_character, gt:fanon_character))
    }
    "#,
    )
    .with_label("Type of a character")
    .with_description("Get the classification (canon or fanon) of a character.")
    .with_prefixes(golem_prefixes())
    .with_variables(character_uri_variable())
}

/// Source a character is documented in.
pub fn character_source() -> QuerySpec {
    QuerySpec::template(
        r#"
    SELECT ?name ?url WHERE {
        <$1> crm:P67i_is_referred_to_by ?source .

        ?source a go:C3_Source ;
            crm:P3_has_note ?name .

        OPTIONAL { ?source crm:P1_is_identified_by ?url . }
    }
    "#,
    )
    .with_label("Source of a character")
    .with_description("Get information on the source a character is documented in.")
    .with_prefixes(golem_prefixes())
    .with_variables(character_uri_variable())
}

/// Creation year of a character via the work creation it resulted from.
pub fn character_years() -> QuerySpec {
    QuerySpec::template(
        r#"
    SELECT ?year WHERE {
        <$1> crm:P94i_was_created_by ?creation .

        ?creation crm:P4_has_time-span ?ts .

        ?ts a crm:E52_Time-Span ;
            rdf:value ?year .
    }
    "#,
    )
    .with_label("Creation year of a character")
    .with_description("Get the year a character was created, via the work creation event.")
    .with_prefixes(golem_prefixes())
    .with_variables(character_uri_variable())
}

/// Relations of a character to other characters.
pub fn character_relations() -> QuerySpec {
    QuerySpec::template(
        r#"
    SELECT ?type ?id WHERE {
        <$1> go:R1_has_relation ?relation .

        ?relation crm:P2_has_type ?type ;
            go:R2_has_target ?target .

        ?target crm:P1_is_identified_by ?node .
        ?node crm:P2_has_type gt:id ;
            rdf:value ?id .
    }
    "#,
    )
    .with_label("Relations of a character")
    .with_description("Get relations of a character to other characters.")
    .with_prefixes(golem_prefixes())
    .with_variables(character_uri_variable())
}

fn work_uri_variable() -> Vec<VariableDoc> {
    vec![VariableDoc::new("work_uri", "lrm:F1_Work", "URI of a Work.")]
}

pub fn work_title() -> QuerySpec {
    QuerySpec::template(
        r#"
    SELECT ?title WHERE {
        <$1> a lrm:F1_Work ;
            crm:P102_has_title ?titleNode .

        ?titleNode a crm:E35_Title ;
            rdf:value ?title .
    }
    "#,
    )
    .with_label("Title of a work")
    .with_description("Get the title (E35_Title) of a work.")
    .with_prefixes(golem_prefixes())
    .with_variables(work_uri_variable())
}

/// Characters created by the creation event of a work.
pub fn work_characters() -> QuerySpec {
    QuerySpec::template(
        r#"
    SELECT ?character AS ?uri ?id ?name WHERE {
        <$1> lrm:R16i_was_created_by ?creation .

        ?creation crm:P94_has_created ?character .

        ?character a go:C1_Character_Concept .

        OPTIONAL {
            ?character crm:P1_is_identified_by ?identifier .
            ?identifier crm:P2_has_type gt:id ;
                rdf:value ?id .
        }

        OPTIONAL {
            ?character crm:P1_is_identified_by ?appellation .
            ?appellation a crm:E41_Appellation ;
                crm:P2_has_type gt:character_name ;
                rdf:value ?name .
        }
    }
    "#,
    )
    .with_label("Characters of a work")
    .with_description("Get characters created by the creation event of a work.")
    .with_prefixes(golem_prefixes())
    .with_variables(work_uri_variable())
}

/// Authors that carried out the creation event of a work.
pub fn work_authors() -> QuerySpec {
    QuerySpec::template(
        r#"
    SELECT ?author AS ?uri ?id ?name WHERE {
        <$1> lrm:R16i_was_created_by ?creation .

        ?creation crm:P14_carried_out_by ?author .

        OPTIONAL {
            ?author crm:P1_is_identified_by ?identifier .
            ?identifier crm:P2_has_type gt:id ;
                rdf:value ?id .
        }

        OPTIONAL {
            ?author crm:P1_is_identified_by ?appellation .
            ?appellation a crm:E41_Appellation ;
                crm:P2_has_type gt:author_name ;
                rdf:value ?name .
        }
    }
    "#,
    )
    .with_label("Authors of a work")
    .with_description("Get authors that carried out the creation event of a work.")
    .with_prefixes(golem_prefixes())
    .with_variables(work_uri_variable())
}

/// Creation year of a work via the time-span of its creation event.
pub fn work_dates() -> QuerySpec {
    QuerySpec::template(
        r#"
    SELECT ?year WHERE {
        <$1> lrm:R16i_was_created_by ?creation .

        ?creation crm:P4_has_time-span ?ts .

        ?ts a crm:E52_Time-Span ;
            rdf:value ?year .
    }
    "#,
    )
    .with_label("Dates of a work")
    .with_description("Get the creation year of a work.")
    .with_prefixes(golem_prefixes())
    .with_variables(work_uri_variable())
}

fn author_uri_variable() -> Vec<VariableDoc> {
    vec![VariableDoc::new(
        "author_uri",
        "crm:E39_Actor",
        "URI of an Author.",
    )]
}

pub fn author_name() -> QuerySpec {
    QuerySpec::template(
        r#"
    SELECT ?name WHERE {
        <$1> crm:P1_is_identified_by ?appellation .

        ?appellation a crm:E41_Appellation ;
            crm:P2_has_type gt:author_name ;
            rdf:value ?name .
    }
    "#,
    )
    .with_label("Name of an author")
    .with_description("Get the name (E41_Appellation) of an author.")
    .with_prefixes(golem_prefixes())
    .with_variables(author_uri_variable())
}
