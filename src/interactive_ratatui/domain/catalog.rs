//! The fixed taxonomy of menus and search pages wired at startup.

use crate::config::Config;
use crate::interactive_ratatui::domain::models::PageId;
use crate::interactive_ratatui::ui::pages::{MenuPage, Page, SearchPage, SearchSettings};
use crate::interactive_ratatui::ui::registry::{Registry, RegistryError};

pub const HOME: PageId = PageId::new(0);
pub const DNA: PageId = PageId::new(1);
pub const RNA: PageId = PageId::new(2);
pub const PROTEIN: PageId = PageId::new(3);
pub const LITERATURE: PageId = PageId::new(4);

pub const GENBANK: PageId = PageId::new(10);
pub const REFSEQ_NUCLEOTIDE: PageId = PageId::new(11);
pub const GENOMIC_DNA: PageId = PageId::new(12);
pub const MRNA: PageId = PageId::new(20);
pub const NCRNA: PageId = PageId::new(21);
pub const RRNA: PageId = PageId::new(22);
pub const REFSEQ_PROTEIN: PageId = PageId::new(30);
pub const SWISSPROT: PageId = PageId::new(31);
pub const NUCLEOTIDE_LITERATURE: PageId = PageId::new(40);
pub const PROTEIN_LITERATURE: PageId = PageId::new(41);

struct MenuEntry {
    id: PageId,
    title: &'static str,
    description: &'static str,
    options: &'static [(&'static str, PageId)],
}

struct SearchEntry {
    id: PageId,
    title: &'static str,
    description: &'static str,
    filter: &'static str,
    /// `None` searches the configured default database.
    database: Option<&'static str>,
}

const MENUS: &[MenuEntry] = &[
    MenuEntry {
        id: HOME,
        title: "Home",
        description: "What biological data are you interested in?",
        options: &[
            ("DNA", DNA),
            ("RNA", RNA),
            ("Protein", PROTEIN),
            ("Literature", LITERATURE),
        ],
    },
    MenuEntry {
        id: DNA,
        title: "DNA",
        description: "Which nucleotide source?",
        options: &[
            ("GenBank", GENBANK),
            ("RefSeq", REFSEQ_NUCLEOTIDE),
            ("Genomic DNA", GENOMIC_DNA),
        ],
    },
    MenuEntry {
        id: RNA,
        title: "RNA",
        description: "Which kind of RNA?",
        options: &[("mRNA", MRNA), ("ncRNA", NCRNA), ("rRNA", RRNA)],
    },
    MenuEntry {
        id: PROTEIN,
        title: "Protein",
        description: "Which protein source?",
        options: &[("RefSeq", REFSEQ_PROTEIN), ("Swiss-Prot", SWISSPROT)],
    },
    MenuEntry {
        id: LITERATURE,
        title: "Literature",
        description: "Sequences with linked PubMed articles",
        options: &[
            ("Nucleotide", NUCLEOTIDE_LITERATURE),
            ("Protein", PROTEIN_LITERATURE),
        ],
    },
];

const SEARCHES: &[SearchEntry] = &[
    SearchEntry {
        id: GENBANK,
        title: "GenBank",
        description: "Search GenBank nucleotide records",
        filter: "genbank",
        database: None,
    },
    SearchEntry {
        id: REFSEQ_NUCLEOTIDE,
        title: "RefSeq",
        description: "Search curated RefSeq nucleotide records",
        filter: "refseq",
        database: None,
    },
    SearchEntry {
        id: GENOMIC_DNA,
        title: "Genomic DNA",
        description: "Search genomic DNA records",
        filter: "biomol_genomic",
        database: None,
    },
    SearchEntry {
        id: MRNA,
        title: "mRNA",
        description: "Search messenger RNA records",
        filter: "biomol_mrna",
        database: None,
    },
    SearchEntry {
        id: NCRNA,
        title: "ncRNA",
        description: "Search non-coding RNA records",
        filter: "biomol_ncrna",
        database: None,
    },
    SearchEntry {
        id: RRNA,
        title: "rRNA",
        description: "Search ribosomal RNA records",
        filter: "biomol_rrna",
        database: None,
    },
    SearchEntry {
        id: REFSEQ_PROTEIN,
        title: "RefSeq",
        description: "Search curated RefSeq protein records",
        filter: "refseq",
        database: Some("protein"),
    },
    SearchEntry {
        id: SWISSPROT,
        title: "Swiss-Prot",
        description: "Search UniProtKB/Swiss-Prot protein records",
        filter: "swissprot",
        database: Some("protein"),
    },
    SearchEntry {
        id: NUCLEOTIDE_LITERATURE,
        title: "Nucleotide",
        description: "Search nucleotide records cited in PubMed",
        filter: "nuccore_pubmed",
        database: None,
    },
    SearchEntry {
        id: PROTEIN_LITERATURE,
        title: "Protein",
        description: "Search protein records cited in PubMed",
        filter: "protein_pubmed",
        database: Some("protein"),
    },
];

/// Every static page, menus first.
pub fn build_pages(config: &Config) -> Vec<(PageId, Page)> {
    let menus = MENUS.iter().map(|entry| {
        let options = entry
            .options
            .iter()
            .map(|(label, id)| (label.to_string(), *id))
            .collect();
        (
            entry.id,
            Page::from(MenuPage::new(entry.title, entry.description, options)),
        )
    });

    let searches = SEARCHES.iter().map(|entry| {
        let settings = SearchSettings {
            database: entry
                .database
                .map(str::to_string)
                .unwrap_or_else(|| config.entrez.database.clone()),
            fatal_fetch_errors: config.fatal_fetch_errors,
            label_padding: config.label_padding,
            sequence_path: config.sequence_path.clone(),
        };
        (
            entry.id,
            Page::from(SearchPage::new(
                entry.title,
                entry.description,
                entry.filter,
                settings,
            )),
        )
    });

    menus.chain(searches).collect()
}

pub fn build_registry(config: &Config) -> Result<Registry, RegistryError> {
    Registry::new(
        build_pages(config),
        HOME,
        PageId::new(config.result_page_offset),
    )
}
