//! Organism selection for predictions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Species whose reference genome a prediction runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Organism {
    #[default]
    Human,
    Mouse,
}

impl Organism {
    /// Wire name used in REST request bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Organism::Human => "human",
            Organism::Mouse => "mouse",
        }
    }

    pub fn scientific_name(&self) -> &'static str {
        match self {
            Organism::Human => "Homo sapiens",
            Organism::Mouse => "Mus musculus",
        }
    }
}

impl std::fmt::Display for Organism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Organism {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "human" | "h" | "homo_sapiens" | "hg38" => Ok(Organism::Human),
            "mouse" | "m" | "mus_musculus" | "mm10" => Ok(Organism::Mouse),
            other => Err(format!(
                "Unknown organism '{}'. Use 'human' or 'mouse'",
                other
            )),
        }
    }
}
