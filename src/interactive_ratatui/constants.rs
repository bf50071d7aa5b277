//! Constants for the interactive TUI module
//!
//! Layout numbers and timings that would otherwise be magic values scattered
//! across the pages.

// Timing constants
/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Spinner frame interval in milliseconds
pub const SPINNER_INTERVAL_MS: u64 = 100;

// Terminal defaults used until the first resize arrives
pub const DEFAULT_TERMINAL_WIDTH: u16 = 80;
pub const DEFAULT_TERMINAL_HEIGHT: u16 = 24;

// UI Layout constants
/// Left margin applied to the whole frame
pub const FRAME_MARGIN_LEFT: u16 = 2;

/// Columns taken from the terminal width by list and record viewports
pub const VIEWPORT_WIDTH_MARGIN: u16 = 20;

/// Rows taken from the terminal height by list and record viewports
/// (breadcrumb with its margins, page description and spacing)
pub const VIEWPORT_HEIGHT_MARGIN: u16 = 8;

/// Rows used by the record header banner
pub const BANNER_HEIGHT: u16 = 3;

/// Rows used by the record footer ruler
pub const FOOTER_HEIGHT: u16 = 1;

/// Rows per result list entry (title, description, spacer)
pub const LIST_ITEM_HEIGHT: u16 = 3;

/// Page size for PageUp/PageDown navigation
pub const PAGE_SIZE: usize = 10;

// Text input
/// Maximum query length accepted by a search page
pub const QUERY_CHAR_LIMIT: usize = 156;

/// Placeholder shown in an empty search input
pub const QUERY_PLACEHOLDER: &str = "Text query";

/// Separator between breadcrumb entries
pub const BREADCRUMB_SEPARATOR: &str = " > ";
