use crate::entrez::Record;
use std::fmt;
use std::path::PathBuf;

/// Key of a page slot in the registry.
///
/// Ids below the configured result offset are declared by the catalog at
/// startup; ids at or above it are handed out at runtime, one per fetched
/// record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One entry of the back-navigation history.
#[derive(Clone, Debug, PartialEq)]
pub struct Crumb {
    pub page: PageId,
    pub title: String,
}

/// Search + fetch requested by a search page.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchRequest {
    pub origin: PageId,
    pub database: String,
    pub filter: String,
    pub query: String,
}

/// Successful outcome of a [`FetchRequest`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FetchPayload {
    /// Entrez uids in relevance order, as returned by esearch.
    pub ids: Vec<String>,
    pub query_translation: String,
    /// Records in the same order as `ids`.
    pub records: Vec<Record>,
}

/// Full-sequence download requested by a result page.
#[derive(Clone, Debug, PartialEq)]
pub struct SaveRequest {
    pub origin: PageId,
    pub database: String,
    pub accession: String,
    pub path: PathBuf,
}

/// How key presses should be decoded for the active page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Navigation,
    /// A text field has focus; printable keys edit it.
    TextEntry,
}
