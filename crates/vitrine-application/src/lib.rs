//! Vitrine application layer.
//!
//! Stateful services coordinating the core domain with the infrastructure
//! adapters: session lifecycle, dashboard metrics aggregation, and the
//! reusable listing view state.

pub mod bootstrap;
pub mod listing;
pub mod session_store;
pub mod stats;

pub use bootstrap::{bootstrap, bootstrap_default, AppServices};
pub use listing::Listing;
pub use session_store::SessionStore;
pub use stats::StatsAggregator;
