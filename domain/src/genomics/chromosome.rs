//! Chromosome names.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Recognized chromosome tokens: 1-22, X, Y, M/MT, optionally `chr`-prefixed.
static CHROMOSOME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(chr)?([1-9]|1[0-9]|2[0-2]|X|Y|MT?)$").expect("chromosome pattern is valid")
});

/// A normalized chromosome name (Value Object).
///
/// Always rendered as a single lower-case `chr` prefix followed by the
/// upper-cased token, so `22`, `CHR22` and `chr22` all become `chr22`
/// and `mt` becomes `chrMT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Chromosome(String);

impl Chromosome {
    /// Parse and normalize a raw chromosome token.
    ///
    /// Returns `None` when the token is not one of the recognized names.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let captures = CHROMOSOME_PATTERN.captures(raw)?;
        let token = captures.get(2)?.as_str().to_uppercase();
        Some(Self(format!("chr{}", token)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Chromosome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Chromosome {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("Invalid chromosome '{}'", value))
    }
}

impl From<Chromosome> for String {
    fn from(value: Chromosome) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_and_bare_tokens_normalize_identically() {
        assert_eq!(Chromosome::parse("chr22").unwrap().as_str(), "chr22");
        assert_eq!(Chromosome::parse("22").unwrap().as_str(), "chr22");
        assert_eq!(Chromosome::parse("CHR22").unwrap().as_str(), "chr22");
        assert_eq!(Chromosome::parse("Chr1").unwrap().as_str(), "chr1");
    }

    #[test]
    fn sex_and_mitochondrial_chromosomes() {
        assert_eq!(Chromosome::parse("x").unwrap().as_str(), "chrX");
        assert_eq!(Chromosome::parse("chrY").unwrap().as_str(), "chrY");
        assert_eq!(Chromosome::parse("chrM").unwrap().as_str(), "chrM");
        assert_eq!(Chromosome::parse("mt").unwrap().as_str(), "chrMT");
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        for raw in ["chr0", "chr23", "chr", "", "chrZ", "chr1_random", "chrchr1", "01"] {
            assert!(Chromosome::parse(raw).is_none(), "{raw} should be rejected");
        }
    }

    #[test]
    fn all_autosomes_accepted() {
        for n in 1..=22 {
            let chrom = Chromosome::parse(&n.to_string()).unwrap();
            assert_eq!(chrom.as_str(), format!("chr{}", n));
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = Chromosome::parse("x").unwrap();
        let twice = Chromosome::parse(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn serde_round_trip_rejects_invalid() {
        let chrom: Chromosome = serde_json::from_str("\"chr7\"").unwrap();
        assert_eq!(chrom.as_str(), "chr7");
        assert!(serde_json::from_str::<Chromosome>("\"chr99\"").is_err());
    }
}
