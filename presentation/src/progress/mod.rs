//! Progress reporting during dispatch

pub mod reporter;
