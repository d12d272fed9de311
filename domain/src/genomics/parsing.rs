//! Delimiter-level parsing of interval and variant strings.
//!
//! These functions only split text into chromosome / position / allele
//! tokens. They perform no range checks and do not interpret the
//! chromosome name; that is the job of
//! [`InputValidator`](crate::validation::InputValidator).
//!
//! | Function | Grammar | Example |
//! |----------|---------|---------|
//! | [`parse_interval`] | `chr:start-end` | `chr22:35,677,410-36,725,986` |
//! | [`parse_variant`] | `chr:pos:ref>alt` | `chr22:36201698:A>C` |

use thiserror::Error;

/// Why a coordinate string could not be split into tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinateParseError {
    #[error("Invalid format. Use: chr:start-end (e.g., chr22:1000-2000)")]
    IntervalFormat,

    #[error("Invalid format. Missing '-' between start and end positions")]
    MissingRangeSeparator,

    #[error("Invalid position format: '{0}' is not a valid integer")]
    InvalidNumber(String),

    #[error("Invalid format. Use: chr:pos:ref>alt (e.g., chr22:1000:A>T)")]
    VariantFormat,

    #[error("Invalid position '{0}'. Must be a positive integer")]
    InvalidPosition(String),

    #[error("Invalid allele format. Use: ref>alt (e.g., A>T)")]
    AlleleFormat,
}

/// Tokens of an interval string, before any semantic checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInterval {
    pub chromosome: String,
    pub start: i64,
    pub end: i64,
}

/// Tokens of a variant string, before any semantic checks.
///
/// Alleles are trimmed but keep their original case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawVariant {
    pub chromosome: String,
    pub position: i64,
    pub reference: String,
    pub alternate: String,
}

/// Strip thousands separators and blanks, then parse as a signed integer.
fn parse_coordinate(token: &str) -> Option<i64> {
    let cleaned: String = token
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != ' ')
        .collect();
    cleaned.parse::<i64>().ok()
}

/// Split `chr:start-end` into its three tokens.
pub fn parse_interval(text: &str) -> Result<RawInterval, CoordinateParseError> {
    let text = text.trim();
    if !text.contains(':') || !text.contains('-') {
        return Err(CoordinateParseError::IntervalFormat);
    }

    let parts: Vec<&str> = text.split(':').collect();
    let [chrom_part, pos_part] = parts.as_slice() else {
        return Err(CoordinateParseError::IntervalFormat);
    };

    if !pos_part.contains('-') {
        return Err(CoordinateParseError::MissingRangeSeparator);
    }

    let bounds: Vec<&str> = pos_part.split('-').collect();
    let [start_str, end_str] = bounds.as_slice() else {
        return Err(CoordinateParseError::IntervalFormat);
    };

    let start = parse_coordinate(start_str)
        .ok_or_else(|| CoordinateParseError::InvalidNumber(start_str.trim().to_string()))?;
    let end = parse_coordinate(end_str)
        .ok_or_else(|| CoordinateParseError::InvalidNumber(end_str.trim().to_string()))?;

    Ok(RawInterval {
        chromosome: chrom_part.trim().to_string(),
        start,
        end,
    })
}

/// Split `chr:pos:ref>alt` into its four tokens.
///
/// Colons after the second one are treated as part of the allele field, and
/// alleles are split on the first `>` only, so a stray second `>` ends up in
/// the alternate allele where the character-set check rejects it.
pub fn parse_variant(text: &str) -> Result<RawVariant, CoordinateParseError> {
    let text = text.trim();
    if !text.contains(':') || !text.contains('>') {
        return Err(CoordinateParseError::VariantFormat);
    }

    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() < 3 {
        return Err(CoordinateParseError::VariantFormat);
    }

    let chromosome = parts[0].trim();
    let position_str = parts[1].trim();
    let alleles = parts[2..].join(":");

    let Some((reference, alternate)) = alleles.trim().split_once('>') else {
        return Err(CoordinateParseError::AlleleFormat);
    };

    let position = parse_coordinate(position_str)
        .ok_or_else(|| CoordinateParseError::InvalidPosition(position_str.to_string()))?;

    Ok(RawVariant {
        chromosome: chromosome.to_string(),
        position,
        reference: reference.trim().to_string(),
        alternate: alternate.trim().to_string(),
    })
}
