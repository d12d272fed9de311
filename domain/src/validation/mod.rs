//! Semantic validation of user-supplied genomic input.

pub mod limits;
pub mod outcome;
pub mod validator;

pub use limits::ValidationLimits;
pub use outcome::ValidationOutcome;
pub use validator::InputValidator;
