use crate::entrez::{EntrezClient, EntrezError, EntrezResult};
use crate::interactive_ratatui::domain::models::{FetchPayload, FetchRequest, SaveRequest};
use crate::interactive_ratatui::ui::events::Action;
use std::fs;
use std::sync::Arc;
use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::Instant;

/// Work handed to the fetch worker.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchJob {
    Search(FetchRequest),
    SaveSequence(SaveRequest),
}

pub struct FetchService {
    client: Arc<dyn EntrezClient>,
}

impl FetchService {
    pub fn new(client: Arc<dyn EntrezClient>) -> Self {
        Self { client }
    }

    /// esearch for the query, then efetch the summaries of every hit.
    pub fn search_and_fetch(&self, request: &FetchRequest) -> EntrezResult<FetchPayload> {
        let hits = self
            .client
            .search(&request.database, &request.filter, &request.query)?;
        let records = self
            .client
            .fetch_records(&request.database, &hits.ids, false)?;

        Ok(FetchPayload {
            ids: hits.ids,
            query_translation: hits.query_translation,
            records,
        })
    }

    /// Fetch the full record and overwrite `request.path` with its raw
    /// sequence. Returns the number of bases written.
    pub fn save_sequence(&self, request: &SaveRequest) -> EntrezResult<usize> {
        let records = self.client.fetch_records(
            &request.database,
            std::slice::from_ref(&request.accession),
            true,
        )?;
        let record = records
            .into_iter()
            .next()
            .ok_or_else(|| EntrezError::MissingRecord(request.accession.clone()))?;
        let sequence = record
            .sequence
            .filter(|sequence| !sequence.is_empty())
            .ok_or_else(|| EntrezError::MissingSequence(request.accession.clone()))?;

        fs::write(&request.path, &sequence).map_err(|source| EntrezError::Io {
            path: request.path.clone(),
            source,
        })?;
        Ok(sequence.chars().count())
    }

    /// Carry out one job and turn its outcome into the completion action.
    pub fn run(&self, job: FetchJob) -> Action {
        let started = Instant::now();
        match job {
            FetchJob::Search(request) => match self.search_and_fetch(&request) {
                Ok(payload) => {
                    tracing::info!(
                        page = %request.origin,
                        records = payload.records.len(),
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "fetch finished"
                    );
                    Action::FetchSucceeded {
                        origin: request.origin,
                        payload,
                    }
                }
                Err(e) => {
                    tracing::error!(page = %request.origin, error = %e, "fetch failed");
                    Action::FetchFailed {
                        origin: request.origin,
                        error: e.to_string(),
                    }
                }
            },
            FetchJob::SaveSequence(request) => match self.save_sequence(&request) {
                Ok(bases) => {
                    tracing::info!(
                        accession = %request.accession,
                        path = %request.path.display(),
                        bases,
                        "sequence saved"
                    );
                    Action::SequenceSaved {
                        origin: request.origin,
                        path: request.path,
                        bases,
                    }
                }
                Err(e) => {
                    tracing::error!(accession = %request.accession, error = %e, "sequence download failed");
                    Action::SequenceSaveFailed {
                        origin: request.origin,
                        error: e.to_string(),
                    }
                }
            },
        }
    }
}

/// Spawn the long-lived worker. Jobs run one at a time in submission order
/// and each sends exactly one completion action into `actions`.
pub fn start_fetch_worker(service: Arc<FetchService>, actions: Sender<Action>) -> Sender<FetchJob> {
    let (job_tx, job_rx) = mpsc::channel::<FetchJob>();

    thread::spawn(move || {
        while let Ok(job) = job_rx.recv() {
            let action = service.run(job);
            if actions.send(action).is_err() {
                // UI side is gone
                break;
            }
        }
        tracing::debug!("fetch worker stopped");
    });

    job_tx
}
