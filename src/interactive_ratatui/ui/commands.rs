use crate::interactive_ratatui::domain::models::{FetchRequest, SaveRequest};

/// Deferred work returned by a page handler and carried out by the driver.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    Quit,
    Fetch(FetchRequest),
    SaveSequence(SaveRequest),
    /// End the session with an error (strict fetch-failure policy).
    Abort(String),
}
