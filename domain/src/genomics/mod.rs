//! Genomic coordinate values and the text parser that produces their tokens.
//!
//! - [`chromosome::Chromosome`]: normalized `chr`-prefixed names
//! - [`interval::GenomicInterval`]: half-open coordinate range
//! - [`variant::GenomicVariant`]: reference/alternate allele change
//! - [`organism::Organism`]: reference species
//! - [`parsing`]: delimiter-level parsing of `chr:start-end` / `chr:pos:ref>alt`

pub mod chromosome;
pub mod interval;
pub mod organism;
pub mod parsing;
pub mod sequence;
pub mod variant;
