//! Session/application layer for the Waymark trip planner.
//!
//! Owns the pieces above `waymark-core` that need a runtime: environment
//! configuration, the debounced place search with its stale-response guard,
//! the theme preference store, and the planner session that routes UI
//! events into the synchronizer.

pub mod config;
pub mod prefs;
pub mod search;
pub mod session;

pub use config::Config;
pub use prefs::{KeyValueStore, MemoryStore, Theme, ThemeStore, THEME_KEY};
pub use search::{SearchSession, SearchState, MIN_QUERY_LEN};
pub use session::PlannerSession;
