//! Application-level configuration.
//!
//! - [`DispatchParams`]: SDK fallback policy for the hybrid dispatcher
//! - [`SessionContext`]: explicit per-session state (API key, defaults)

pub mod dispatch_params;
pub mod session;

pub use dispatch_params::{DEFAULT_ONTOLOGY_TERM, DispatchParams};
pub use session::SessionContext;
