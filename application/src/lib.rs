//! Application layer for genomechat
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_ONTOLOGY_TERM, DispatchParams, SessionContext};
pub use ports::{
    prediction_logger::{NoPredictionLogger, PredictionEvent, PredictionLogger},
    prediction_transport::{
        PredictionRestPort, PredictionSdkPort, TransportError, TransportFactory,
    },
    progress::{DispatchProgress, NoProgress},
};
pub use use_cases::handle_command::{BatchItemResult, CommandReply, HandleCommandUseCase};
pub use use_cases::hybrid_dispatch::{DispatchOutcome, HybridDispatcher, VariantPredictionInput};
