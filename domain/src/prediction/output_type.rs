//! Recognized prediction output tracks.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A named category of predicted genomic signal.
///
/// This is a closed set; the wire form is the upper-case identifier
/// (e.g. `RNA_SEQ`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutputType {
    RnaSeq,
    AtacSeq,
    ChipSeq,
    Cage,
    Dnase,
    #[serde(rename = "H3K27AC")]
    H3k27ac,
    #[serde(rename = "H3K27ME3")]
    H3k27me3,
    #[serde(rename = "H3K36ME3")]
    H3k36me3,
    #[serde(rename = "H3K4ME1")]
    H3k4me1,
    #[serde(rename = "H3K4ME3")]
    H3k4me3,
    #[serde(rename = "H3K9ME3")]
    H3k9me3,
    HistoneMarks,
    ContactMap,
}

impl OutputType {
    pub const ALL: [OutputType; 13] = [
        OutputType::RnaSeq,
        OutputType::AtacSeq,
        OutputType::ChipSeq,
        OutputType::Cage,
        OutputType::Dnase,
        OutputType::H3k27ac,
        OutputType::H3k27me3,
        OutputType::H3k36me3,
        OutputType::H3k4me1,
        OutputType::H3k4me3,
        OutputType::H3k9me3,
        OutputType::HistoneMarks,
        OutputType::ContactMap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputType::RnaSeq => "RNA_SEQ",
            OutputType::AtacSeq => "ATAC_SEQ",
            OutputType::ChipSeq => "CHIP_SEQ",
            OutputType::Cage => "CAGE",
            OutputType::Dnase => "DNASE",
            OutputType::H3k27ac => "H3K27AC",
            OutputType::H3k27me3 => "H3K27ME3",
            OutputType::H3k36me3 => "H3K36ME3",
            OutputType::H3k4me1 => "H3K4ME1",
            OutputType::H3k4me3 => "H3K4ME3",
            OutputType::H3k9me3 => "H3K9ME3",
            OutputType::HistoneMarks => "HISTONE_MARKS",
            OutputType::ContactMap => "CONTACT_MAP",
        }
    }

    /// Human-readable track label used in rendered summaries.
    pub fn display_name(&self) -> &'static str {
        match self {
            OutputType::RnaSeq => "RNA-seq",
            OutputType::AtacSeq => "ATAC-seq",
            OutputType::ChipSeq => "ChIP-seq",
            OutputType::Cage => "CAGE",
            OutputType::Dnase => "DNase-seq",
            OutputType::HistoneMarks => "Histone marks",
            OutputType::ContactMap => "Contact maps",
            other => other.as_str(),
        }
    }

    /// Every identifier, sorted alphabetically.
    pub fn sorted_identifiers() -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = Self::ALL.iter().map(|t| t.as_str()).collect();
        ids.sort_unstable();
        ids
    }
}

impl std::fmt::Display for OutputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputType {
    type Err = String;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == wanted)
            .ok_or(wanted)
    }
}
