//! Serde shapes for the E-utilities XML payloads and their conversion into
//! the crate's [`Record`] / [`SearchHits`] types.

use super::error::{EntrezError, EntrezResult};
use super::record::{Record, Reference, SearchHits};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct ESearchResult {
    #[serde(rename = "Count", default)]
    count: Option<u64>,
    #[serde(rename = "QueryTranslation", default)]
    query_translation: Option<String>,
    #[serde(rename = "IdList", default)]
    id_list: IdList,
    #[serde(rename = "ERROR", default)]
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct IdList {
    #[serde(rename = "Id", default)]
    ids: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GbSet {
    #[serde(rename = "GBSeq", default)]
    sequences: Vec<GbSeq>,
}

#[derive(Debug, Default, Deserialize)]
struct GbSeq {
    #[serde(rename = "GBSeq_locus", default)]
    locus: String,
    #[serde(rename = "GBSeq_length", default)]
    length: u64,
    #[serde(rename = "GBSeq_strandedness", default)]
    strandedness: Option<String>,
    #[serde(rename = "GBSeq_moltype", default)]
    mol_type: String,
    #[serde(rename = "GBSeq_topology", default)]
    topology: Option<String>,
    #[serde(rename = "GBSeq_division", default)]
    division: Option<String>,
    #[serde(rename = "GBSeq_update-date", default)]
    update_date: String,
    #[serde(rename = "GBSeq_create-date", default)]
    create_date: String,
    #[serde(rename = "GBSeq_definition", default)]
    definition: String,
    #[serde(rename = "GBSeq_primary-accession", default)]
    primary_accession: String,
    #[serde(rename = "GBSeq_other-seqids", default)]
    other_seqids: GbSeqids,
    #[serde(rename = "GBSeq_organism", default)]
    organism: String,
    #[serde(rename = "GBSeq_taxonomy", default)]
    taxonomy: Option<String>,
    #[serde(rename = "GBSeq_references", default)]
    references: GbReferences,
    #[serde(rename = "GBSeq_keywords", default)]
    keywords: GbKeywords,
    #[serde(rename = "GBSeq_sequence", default)]
    sequence: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GbReferences {
    #[serde(rename = "GBReference", default)]
    items: Vec<GbReference>,
}

#[derive(Debug, Default, Deserialize)]
struct GbSeqids {
    #[serde(rename = "GBSeqid", default)]
    items: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GbKeywords {
    #[serde(rename = "GBKeyword", default)]
    items: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GbReference {
    #[serde(rename = "GBReference_reference", default)]
    reference: String,
    #[serde(rename = "GBReference_authors", default)]
    authors: GbAuthors,
    #[serde(rename = "GBReference_title", default)]
    title: Option<String>,
    #[serde(rename = "GBReference_journal", default)]
    journal: Option<String>,
    #[serde(rename = "GBReference_pubmed", default)]
    pubmed: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GbAuthors {
    #[serde(rename = "GBAuthor", default)]
    items: Vec<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// The GI number among seqids such as `ref|NM_000207.3|` and `gi|1519245484`.
fn gi_number(seqids: &[String]) -> Option<String> {
    seqids
        .iter()
        .filter_map(|id| id.trim().strip_prefix("gi|"))
        .map(str::to_string)
        .find(|gi| !gi.is_empty())
}

/// `GBReference_reference` looks like `1` or `1  (bases 1 to 465)`.
fn reference_number(raw: &str) -> u32 {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

impl From<GbReference> for Reference {
    fn from(raw: GbReference) -> Self {
        Self {
            number: reference_number(&raw.reference),
            title: non_empty(raw.title),
            authors: raw
                .authors
                .items
                .into_iter()
                .filter(|a| !a.trim().is_empty())
                .collect(),
            journal: non_empty(raw.journal),
            pubmed: non_empty(raw.pubmed),
        }
    }
}

impl From<GbSeq> for Record {
    fn from(raw: GbSeq) -> Self {
        Self {
            locus: raw.locus,
            accession: raw.primary_accession,
            uid: gi_number(&raw.other_seqids.items),
            length: raw.length,
            strandedness: non_empty(raw.strandedness),
            mol_type: raw.mol_type,
            topology: non_empty(raw.topology),
            division: non_empty(raw.division),
            definition: raw.definition,
            organism: raw.organism,
            taxonomy: non_empty(raw.taxonomy),
            create_date: raw.create_date,
            update_date: raw.update_date,
            references: raw.references.items.into_iter().map(Reference::from).collect(),
            keywords: raw
                .keywords
                .items
                .into_iter()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect(),
            sequence: non_empty(raw.sequence),
        }
    }
}

/// Decodes an `eSearchResult` document.
pub fn decode_search(body: &str) -> EntrezResult<SearchHits> {
    let result: ESearchResult =
        quick_xml::de::from_str(body).map_err(|source| EntrezError::Decode {
            endpoint: "esearch",
            source,
        })?;

    if let Some(message) = non_empty(result.error) {
        return Err(EntrezError::Service(message));
    }

    tracing::debug!(
        count = result.count.unwrap_or_default(),
        returned = result.id_list.ids.len(),
        "decoded esearch response"
    );

    Ok(SearchHits {
        ids: result.id_list.ids,
        query_translation: result.query_translation.unwrap_or_default(),
    })
}

/// Decodes a `GBSet` document into records, preserving document order.
pub fn decode_records(body: &str) -> EntrezResult<Vec<Record>> {
    let set: GbSet = quick_xml::de::from_str(body).map_err(|source| EntrezError::Decode {
        endpoint: "efetch",
        source,
    })?;
    Ok(set.sequences.into_iter().map(Record::from).collect())
}
