//! # viewstats
//!
//! View-analytics aggregation engine for the blog dashboard.
//!
//! Given the raw page-view timestamps for a post (or all of an author's
//! posts), this library produces:
//! - a gap-filled, chronologically ordered chart series for a selected
//!   look-back window ([`aggregate`]),
//! - period-over-period growth figures with calendar-aware ISO week and
//!   month boundaries ([`growth`]),
//! - aggregate reading-time patterns for the dashboard header
//!   ([`summarize`]).
//!
//! Everything here is a pure, synchronous transform over an in-memory
//! event list. Fetching events over HTTP and drawing the chart belong to
//! the callers; the engine holds no state between calls and is safe to
//! invoke concurrently from any number of dashboard renders.
//!
//! ## Example
//!
//! ```rust
//! use viewstats::{aggregate, growth, select_window, GrowthPeriod};
//!
//! let now = viewstats::parse_instant("2024-03-12T00:00:00Z").unwrap();
//! let events = viewstats::parse_events([
//!     "2024-03-10T05:00:00Z",
//!     "2024-03-11T12:00:00Z",
//! ]);
//!
//! let window = select_window("7d", now).unwrap();
//! let series = aggregate(&events, &window);
//! assert_eq!(series.len(), 7);
//!
//! let report = growth(&events, now, GrowthPeriod::Month);
//! assert_eq!(report.current_total, 2);
//! ```

// Re-export commonly used items at the crate root
pub use error::{Error, Result};
pub use events::{parse_events, parse_instant};
pub use growth::{growth, percent_delta, GrowthPeriod, GrowthReport};
pub use series::{aggregate, Bucket, Series};
pub use summary::{summarize, ViewSummary};
pub use window::{select_window, Granularity, Window, WindowSelection};

// Public modules
pub mod calendar;
pub mod error;
pub mod events;
pub mod format;
pub mod growth;
pub mod logging;
pub mod series;
pub mod summary;
pub mod window;
