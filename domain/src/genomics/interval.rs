//! Genomic interval value object.

use super::chromosome::Chromosome;
use super::variant::GenomicVariant;
use serde::Serialize;

/// A half-open genomic coordinate range `[start, end)` on one chromosome.
///
/// Produced by [`InputValidator::validate_interval`](crate::validation::InputValidator::validate_interval),
/// which enforces the width and coordinate bounds, or by
/// [`GenomicInterval::centered_on`] when a prediction window has to be
/// derived from a variant. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenomicInterval {
    chromosome: Chromosome,
    start: u64,
    end: u64,
}

impl GenomicInterval {
    /// Build an interval whose bounds were already checked by the caller.
    pub(crate) fn new(chromosome: Chromosome, start: u64, end: u64) -> Self {
        debug_assert!(end > start, "interval end must exceed start");
        Self {
            chromosome,
            start,
            end,
        }
    }

    /// A window of `size` base pairs centered on the variant's position.
    ///
    /// The start is clamped at 0, so windows near the chromosome origin are
    /// narrower than requested. A zero `size` still yields a 1 bp window.
    pub fn centered_on(variant: &GenomicVariant, size: u64) -> Self {
        let half = size / 2;
        let position = variant.position();
        let start = position.saturating_sub(half);
        let end = (position + half).max(start + 1);
        Self {
            chromosome: variant.chromosome().clone(),
            start,
            end,
        }
    }

    pub fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    /// Number of base pairs covered (`end - start`).
    pub fn width(&self) -> u64 {
        self.end - self.start
    }
}

impl std::fmt::Display for GenomicInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.chromosome, self.start, self.end)
    }
}
