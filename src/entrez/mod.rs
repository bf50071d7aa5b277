//! Client side of the NCBI Entrez E-utilities: search, fetch, decode and
//! pretty-print GenBank records.

pub mod client;
pub mod error;
pub mod format;
pub mod record;
mod xml;

pub use client::HttpEntrezClient;
pub use error::{EntrezError, EntrezResult};
pub use format::pretty_print;
pub use record::{Record, Reference, ResultSummary, SearchHits};

/// The two remote operations the browser depends on.
///
/// Both calls block; the browser only invokes them from its fetch worker.
pub trait EntrezClient: Send + Sync {
    /// Runs esearch for `<filter>[filter] <query>` against `database`.
    fn search(&self, database: &str, filter: &str, query: &str) -> EntrezResult<SearchHits>;

    /// Runs efetch for `ids`. Without `full_sequence` only the first base is
    /// requested, which keeps list fetches small.
    fn fetch_records(
        &self,
        database: &str,
        ids: &[String],
        full_sequence: bool,
    ) -> EntrezResult<Vec<Record>>;
}
