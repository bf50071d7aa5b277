#[cfg(test)]
mod tests {
    use super::super::fetch_service::*;
    use crate::entrez::{EntrezClient, EntrezError, EntrezResult, Record, SearchHits};
    use crate::interactive_ratatui::domain::models::{FetchRequest, PageId, SaveRequest};
    use crate::interactive_ratatui::ui::events::Action;
    use std::sync::mpsc;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Search(String, String, String),
        Fetch(String, Vec<String>, bool),
    }

    /// In-memory Entrez double that records every call.
    #[derive(Default)]
    struct StubClient {
        records: Vec<Record>,
        fail_search: bool,
        calls: Mutex<Vec<Call>>,
    }

    impl StubClient {
        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl EntrezClient for StubClient {
        fn search(&self, database: &str, filter: &str, query: &str) -> EntrezResult<SearchHits> {
            self.calls.lock().unwrap().push(Call::Search(
                database.to_string(),
                filter.to_string(),
                query.to_string(),
            ));
            if self.fail_search {
                return Err(EntrezError::Service("Invalid query".to_string()));
            }
            Ok(SearchHits {
                ids: (0..self.records.len()).map(|i| format!("{}", 500 + i)).collect(),
                query_translation: format!("{query}[All Fields]"),
            })
        }

        fn fetch_records(
            &self,
            database: &str,
            ids: &[String],
            full_sequence: bool,
        ) -> EntrezResult<Vec<Record>> {
            self.calls.lock().unwrap().push(Call::Fetch(
                database.to_string(),
                ids.to_vec(),
                full_sequence,
            ));
            Ok(self.records.iter().take(ids.len()).cloned().collect())
        }
    }

    fn create_record(accession: &str, sequence: Option<&str>) -> Record {
        Record {
            accession: accession.to_string(),
            sequence: sequence.map(str::to_string),
            ..Record::default()
        }
    }

    fn search_request() -> FetchRequest {
        FetchRequest {
            origin: PageId(10),
            database: "nuccore".to_string(),
            filter: "genbank".to_string(),
            query: "insulin".to_string(),
        }
    }

    fn save_request(dir: &TempDir) -> SaveRequest {
        SaveRequest {
            origin: PageId(1000),
            database: "nuccore".to_string(),
            accession: "NM_000207".to_string(),
            path: dir.path().join("sequence.txt"),
        }
    }

    #[test]
    fn test_search_then_fetch_summaries() {
        let client = Arc::new(StubClient {
            records: vec![create_record("A1", None), create_record("A2", None)],
            ..StubClient::default()
        });
        let service = FetchService::new(client.clone());

        let payload = service.search_and_fetch(&search_request()).unwrap();
        assert_eq!(payload.ids, vec!["500", "501"]);
        assert_eq!(payload.query_translation, "insulin[All Fields]");
        assert_eq!(payload.records.len(), 2);

        assert_eq!(
            client.calls(),
            vec![
                Call::Search(
                    "nuccore".to_string(),
                    "genbank".to_string(),
                    "insulin".to_string()
                ),
                Call::Fetch(
                    "nuccore".to_string(),
                    vec!["500".to_string(), "501".to_string()],
                    false
                ),
            ]
        );
    }

    #[test]
    fn test_failure_becomes_fetch_failed() {
        let service = FetchService::new(Arc::new(StubClient {
            fail_search: true,
            ..StubClient::default()
        }));

        let action = service.run(FetchJob::Search(search_request()));
        assert_eq!(
            action,
            Action::FetchFailed {
                origin: PageId(10),
                error: "Entrez reported an error: Invalid query".to_string(),
            }
        );
    }

    #[test]
    fn test_save_sequence_overwrites_file() {
        let dir = TempDir::new().unwrap();
        let request = save_request(&dir);
        std::fs::write(&request.path, "old contents that are longer").unwrap();

        let client = Arc::new(StubClient {
            records: vec![create_record("NM_000207", Some("acgtacgt"))],
            ..StubClient::default()
        });
        let service = FetchService::new(client.clone());

        let action = service.run(FetchJob::SaveSequence(request.clone()));
        assert_eq!(
            action,
            Action::SequenceSaved {
                origin: PageId(1000),
                path: request.path.clone(),
                bases: 8,
            }
        );
        assert_eq!(std::fs::read_to_string(&request.path).unwrap(), "acgtacgt");
        assert_eq!(
            client.calls(),
            vec![Call::Fetch(
                "nuccore".to_string(),
                vec!["NM_000207".to_string()],
                true
            )]
        );
    }

    #[test]
    fn test_save_sequence_without_sequence_fails() {
        let dir = TempDir::new().unwrap();
        let service = FetchService::new(Arc::new(StubClient {
            records: vec![create_record("NM_000207", None)],
            ..StubClient::default()
        }));

        let error = service.save_sequence(&save_request(&dir)).unwrap_err();
        assert!(matches!(error, EntrezError::MissingSequence(ref id) if id == "NM_000207"));
        assert!(!dir.path().join("sequence.txt").exists());
    }

    #[test]
    fn test_save_sequence_without_record_fails() {
        let dir = TempDir::new().unwrap();
        let service = FetchService::new(Arc::new(StubClient::default()));

        let action = service.run(FetchJob::SaveSequence(save_request(&dir)));
        assert_eq!(
            action,
            Action::SequenceSaveFailed {
                origin: PageId(1000),
                error: "no record returned for NM_000207".to_string(),
            }
        );
    }

    #[test]
    fn test_worker_sends_one_completion_per_job() {
        let service = Arc::new(FetchService::new(Arc::new(StubClient {
            records: vec![create_record("A1", None)],
            ..StubClient::default()
        })));
        let (action_tx, action_rx) = mpsc::channel();
        let jobs = start_fetch_worker(service, action_tx);

        jobs.send(FetchJob::Search(search_request())).unwrap();
        jobs.send(FetchJob::Search(search_request())).unwrap();

        for _ in 0..2 {
            let action = action_rx.recv_timeout(Duration::from_secs(5)).unwrap();
            assert!(matches!(action, Action::FetchSucceeded { origin: PageId(10), .. }));
        }
        drop(jobs);
        assert!(action_rx.recv_timeout(Duration::from_secs(5)).is_err());
    }
}
