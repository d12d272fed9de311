//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod handle_command;
pub mod hybrid_dispatch;
