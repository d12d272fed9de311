//! Genetic variant value object and its derived classification.

use super::chromosome::Chromosome;
use serde::Serialize;

/// Kind of sequence change, derived from allele lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantType {
    /// Single-nucleotide variant: both alleles are one base long.
    Snv,
    /// Reference allele longer than the alternate.
    Deletion,
    /// Alternate allele longer than the reference.
    Insertion,
    /// Equal-length multi-base substitution.
    Complex,
}

impl VariantType {
    pub fn classify(reference: &str, alternate: &str) -> Self {
        let (r, a) = (reference.len(), alternate.len());
        if r == 1 && a == 1 {
            Self::Snv
        } else if r > a {
            Self::Deletion
        } else if r < a {
            Self::Insertion
        } else {
            Self::Complex
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Snv => "SNV",
            Self::Deletion => "deletion",
            Self::Insertion => "insertion",
            Self::Complex => "complex",
        }
    }
}

impl std::fmt::Display for VariantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single-position change described by reference and alternate alleles.
///
/// `position` is 1-based. Alleles are upper-case strings over `ACGTN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenomicVariant {
    chromosome: Chromosome,
    position: u64,
    reference_bases: String,
    alternate_bases: String,
}

impl GenomicVariant {
    pub(crate) fn new(
        chromosome: Chromosome,
        position: u64,
        reference_bases: String,
        alternate_bases: String,
    ) -> Self {
        Self {
            chromosome,
            position,
            reference_bases,
            alternate_bases,
        }
    }

    pub fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn reference_bases(&self) -> &str {
        &self.reference_bases
    }

    pub fn alternate_bases(&self) -> &str {
        &self.alternate_bases
    }

    /// Computed on demand; never stored.
    pub fn variant_type(&self) -> VariantType {
        VariantType::classify(&self.reference_bases, &self.alternate_bases)
    }
}

impl std::fmt::Display for GenomicVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}>{}",
            self.chromosome, self.position, self.reference_bases, self.alternate_bases
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_by_allele_length() {
        assert_eq!(VariantType::classify("A", "C"), VariantType::Snv);
        assert_eq!(VariantType::classify("ATG", "A"), VariantType::Deletion);
        assert_eq!(VariantType::classify("A", "TTG"), VariantType::Insertion);
        assert_eq!(VariantType::classify("AT", "GC"), VariantType::Complex);
    }

    #[test]
    fn display_uses_command_grammar() {
        let variant = GenomicVariant::new(
            Chromosome::parse("22").unwrap(),
            36_201_698,
            "A".into(),
            "C".into(),
        );
        assert_eq!(variant.to_string(), "chr22:36201698:A>C");
        assert_eq!(variant.variant_type().as_str(), "SNV");
    }
}
