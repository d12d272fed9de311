//! Domain layer for genomechat
//!
//! This crate contains the core business logic and value objects. It has no
//! dependencies on infrastructure or presentation concerns and performs no
//! I/O.
//!
//! # Core Concepts
//!
//! ## Input
//!
//! - **Coordinate parsing**: `chr:start-end` and `chr:pos:ref>alt` text is
//!   split into tokens ([`genomics::parsing`])
//! - **Validation**: tokens are range-checked and turned into
//!   [`GenomicInterval`] / [`GenomicVariant`] values ([`InputValidator`])
//!
//! ## Output
//!
//! - **DispatchResponse**: the uniform result of one REST or SDK call
//! - **ErrorClassifier**: maps transport failure text to an [`ErrorCategory`]

pub mod command;
pub mod genomics;
pub mod prediction;
pub mod util;
pub mod validation;

// Re-export commonly used types
pub use command::{
    COMMAND_REFERENCE, Command, CommandParseError, EXAMPLE_COMMANDS, PredictOptions,
    PredictTarget,
};
pub use genomics::{
    chromosome::Chromosome,
    interval::GenomicInterval,
    organism::Organism,
    parsing::{CoordinateParseError, RawInterval, RawVariant, parse_interval, parse_variant},
    sequence::normalize_sequence,
    variant::{GenomicVariant, VariantType},
};
pub use prediction::{
    error_category::{ClassifiedError, ErrorCategory, ErrorClassifier},
    output_type::OutputType,
    request::{ApiEndpoint, PredictionRequest},
    response::{DispatchMethod, DispatchResponse},
    result::{MetadataDescriptor, PredictionResult},
};
pub use validation::{InputValidator, ValidationLimits, ValidationOutcome};
