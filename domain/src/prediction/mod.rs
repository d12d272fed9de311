//! Prediction requests, transport-neutral responses and failure taxonomy.

pub mod error_category;
pub mod output_type;
pub mod request;
pub mod response;
pub mod result;
