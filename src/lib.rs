pub mod config;
pub mod entrez;
pub mod interactive_ratatui;
pub mod logging;

pub use config::{Config, EntrezConfig, Theme};
pub use entrez::{EntrezClient, EntrezError, HttpEntrezClient, Record};
pub use interactive_ratatui::BiodataBrowser;
