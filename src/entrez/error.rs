use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the Entrez collaborator.
///
/// The navigation core does not distinguish between these; once they cross
/// the worker boundary they travel as a plain message.
#[derive(Debug, Error)]
pub enum EntrezError {
    #[error("failed to make request to {endpoint}: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("failed to parse XML from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: quick_xml::DeError,
    },

    #[error("Entrez reported an error: {0}")]
    Service(String),

    #[error("no record returned for {0}")]
    MissingRecord(String),

    #[error("record {0} has no sequence data")]
    MissingSequence(String),

    #[error("failed to write sequence to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type EntrezResult<T> = Result<T, EntrezError>;
