/// A normalized GenBank/GenPept entry as returned by efetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub locus: String,
    pub accession: String,
    /// Entrez uid (GI number) when efetch lists one among the seqids.
    pub uid: Option<String>,
    pub length: u64,
    pub strandedness: Option<String>,
    pub mol_type: String,
    pub topology: Option<String>,
    pub division: Option<String>,
    pub definition: String,
    pub organism: String,
    pub taxonomy: Option<String>,
    pub create_date: String,
    pub update_date: String,
    pub references: Vec<Reference>,
    pub keywords: Vec<String>,
    /// Only present when the record was fetched with the full sequence.
    pub sequence: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reference {
    pub number: u32,
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub journal: Option<String>,
    pub pubmed: Option<String>,
}

/// Result of an esearch call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchHits {
    pub ids: Vec<String>,
    /// The query as Entrez understood it, e.g. `genbank[filter] AND insulin[All Fields]`.
    pub query_translation: String,
}

/// One row of the result list shown on a search page.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSummary {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl Record {
    /// Builds the list row for this record. Without an accession the row is
    /// labelled with the record's own uid, then with `fallback_uid`.
    pub fn summary(&self, fallback_uid: Option<&str>) -> ResultSummary {
        let id = if !self.accession.is_empty() {
            self.accession.clone()
        } else {
            self.uid
                .as_deref()
                .or(fallback_uid)
                .unwrap_or_default()
                .to_string()
        };

        let context = self
            .references
            .first()
            .and_then(|r| r.title.as_deref())
            .unwrap_or(&self.organism);

        ResultSummary {
            title: self.definition.clone(),
            description: format!("{id} - {} - {context}", self.mol_type),
            id,
        }
    }
}
