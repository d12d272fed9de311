//! Semantic validation of user input.
//!
//! Every method returns a [`ValidationOutcome`] and never panics: malformed
//! text is the common case and is reported, not raised. Checks run in a
//! fixed order and the first failing check determines the message.

use super::limits::ValidationLimits;
use super::outcome::ValidationOutcome;
use crate::genomics::chromosome::Chromosome;
use crate::genomics::interval::GenomicInterval;
use crate::genomics::parsing::{parse_interval, parse_variant};
use crate::genomics::sequence::{is_nucleotide, n_fraction, normalize_sequence};
use crate::genomics::variant::{GenomicVariant, VariantType};
use crate::prediction::output_type::OutputType;
use crate::util::format_thousands;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

const API_KEY_PREFIX: &str = "AIza";

static ONTOLOGY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(UBERON|CL|GO|SO|CHEBI|MONDO):[0-9]{7,}$")
        .expect("ontology pattern is valid")
});

const INVALID_CHROMOSOME_HINT: &str = "Use format: chr1-22, chrX, chrY, chrMT";

/// Sorted, de-duplicated characters of `text` that are not nucleotides.
fn foreign_characters(text: &str) -> BTreeSet<char> {
    text.chars().filter(|c| !is_nucleotide(*c)).collect()
}

fn join_chars(chars: &BTreeSet<char>) -> String {
    chars
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Input validator parameterized by [`ValidationLimits`].
#[derive(Debug, Clone, Default)]
pub struct InputValidator {
    limits: ValidationLimits,
}

impl InputValidator {
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    /// Format check only; never contacts the backend.
    pub fn validate_api_key(&self, key: &str) -> ValidationOutcome<()> {
        let key = key.trim();
        let limits = &self.limits;

        if key.is_empty() {
            return ValidationOutcome::invalid("API key cannot be empty");
        }
        if !key.starts_with(API_KEY_PREFIX) {
            return ValidationOutcome::invalid(format!(
                "Invalid API key format. Keys should start with '{}'",
                API_KEY_PREFIX
            ));
        }
        let len = key.chars().count();
        if len < limits.min_api_key_length {
            return ValidationOutcome::invalid(format!(
                "API key too short ({} characters). Expected {}-{} characters",
                len, limits.min_api_key_length, limits.max_api_key_length
            ));
        }
        if len > limits.max_api_key_length {
            return ValidationOutcome::invalid(format!(
                "API key too long ({} characters). Expected {}-{} characters",
                len, limits.min_api_key_length, limits.max_api_key_length
            ));
        }
        if !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return ValidationOutcome::invalid(
                "API key contains invalid characters. Only alphanumeric, hyphens, and underscores allowed",
            );
        }

        ValidationOutcome::valid("API key format appears valid", ())
    }

    /// Validate a raw DNA sequence. Whitespace is ignored and case folded.
    ///
    /// Use [`normalize_sequence`] to obtain the form that was checked.
    pub fn validate_dna_sequence(&self, raw: &str) -> ValidationOutcome<()> {
        let limits = &self.limits;
        if raw.trim().is_empty() {
            return ValidationOutcome::invalid("Sequence cannot be empty");
        }

        let sequence = normalize_sequence(raw);

        let invalid = foreign_characters(&sequence);
        if !invalid.is_empty() {
            return ValidationOutcome::invalid(format!(
                "Invalid characters found: {}. Only A, C, G, T, N allowed.",
                join_chars(&invalid)
            ));
        }

        let length = sequence.chars().count();
        if length < limits.min_sequence_length {
            return ValidationOutcome::invalid(format!(
                "Sequence too short ({} bp). Minimum {} base pairs required.",
                format_thousands(length as u64),
                format_thousands(limits.min_sequence_length as u64)
            ));
        }
        if length > limits.max_sequence_length {
            return ValidationOutcome::invalid(format!(
                "Sequence too long ({} bp). Maximum {} base pairs allowed.",
                format_thousands(length as u64),
                format_thousands(limits.max_sequence_length as u64)
            ));
        }

        let n_percentage = n_fraction(&sequence) * 100.0;
        if n_percentage > limits.max_n_fraction * 100.0 {
            return ValidationOutcome::invalid(format!(
                "Too many N bases ({:.1}%). Maximum {:.0}% N content allowed.",
                n_percentage,
                limits.max_n_fraction * 100.0
            ));
        }

        ValidationOutcome::valid(
            format!(
                "Valid DNA sequence ({} bp, {:.1}% N content)",
                format_thousands(length as u64),
                n_percentage
            ),
            (),
        )
    }

    /// Parse and validate `chr:start-end`.
    pub fn validate_interval(&self, text: &str) -> ValidationOutcome<GenomicInterval> {
        self.check_interval(text).into()
    }

    fn check_interval(&self, text: &str) -> Result<ValidationOutcome<GenomicInterval>, String> {
        let limits = &self.limits;
        if text.trim().is_empty() {
            return Err("Interval cannot be empty".into());
        }

        let raw = parse_interval(text).map_err(|e| e.to_string())?;
        let chromosome = self.check_chromosome(&raw.chromosome)?;

        if raw.start < 0 {
            return Err("Start position cannot be negative".into());
        }
        if raw.end < 0 {
            return Err("End position cannot be negative".into());
        }
        let (start, end) = (raw.start as u64, raw.end as u64);

        if end <= start {
            return Err(format!(
                "End position ({}) must be greater than start position ({})",
                format_thousands(end),
                format_thousands(start)
            ));
        }

        let width = end - start;
        if width > limits.max_interval_width {
            return Err(format!(
                "Interval too large ({} bp). Maximum {} base pairs allowed. Try a smaller region for detailed analysis.",
                format_thousands(width),
                format_thousands(limits.max_interval_width)
            ));
        }
        if width < limits.min_interval_width {
            return Err(format!(
                "Interval too small ({} bp). Minimum {} base pairs required.",
                format_thousands(width),
                format_thousands(limits.min_interval_width)
            ));
        }

        if start > limits.max_position || end > limits.max_position {
            return Err(format!(
                "Position too large ({}). Maximum position is {}",
                format_thousands(start.max(end)),
                format_thousands(limits.max_position)
            ));
        }

        let message = format!(
            "Valid interval {}:{}-{} ({} bp)",
            chromosome,
            format_thousands(start),
            format_thousands(end),
            format_thousands(width)
        );
        Ok(ValidationOutcome::valid(
            message,
            GenomicInterval::new(chromosome, start, end),
        ))
    }

    /// Parse and validate `chr:pos:ref>alt`.
    pub fn validate_variant(&self, text: &str) -> ValidationOutcome<GenomicVariant> {
        self.check_variant(text).into()
    }

    fn check_variant(&self, text: &str) -> Result<ValidationOutcome<GenomicVariant>, String> {
        let limits = &self.limits;
        if text.trim().is_empty() {
            return Err("Variant cannot be empty".into());
        }

        let raw = parse_variant(text).map_err(|e| e.to_string())?;
        let chromosome = self.check_chromosome(&raw.chromosome)?;

        if raw.position <= 0 {
            return Err("Position must be positive (1-based coordinate system)".into());
        }
        let position = raw.position as u64;
        if position > limits.max_position {
            return Err(format!(
                "Position too large ({}). Maximum position is {}",
                format_thousands(position),
                format_thousands(limits.max_position)
            ));
        }

        let reference = raw.reference.to_uppercase();
        let alternate = raw.alternate.to_uppercase();
        if reference.is_empty() {
            return Err("Reference allele cannot be empty".into());
        }
        if alternate.is_empty() {
            return Err("Alternate allele cannot be empty".into());
        }

        let invalid_ref = foreign_characters(&reference);
        if !invalid_ref.is_empty() {
            return Err(format!(
                "Invalid characters in reference allele: {}",
                join_chars(&invalid_ref)
            ));
        }
        let invalid_alt = foreign_characters(&alternate);
        if !invalid_alt.is_empty() {
            return Err(format!(
                "Invalid characters in alternate allele: {}",
                join_chars(&invalid_alt)
            ));
        }

        if reference.len() > limits.max_allele_length || alternate.len() > limits.max_allele_length
        {
            return Err(format!(
                "Alleles too long. Maximum {} base pairs per allele",
                limits.max_allele_length
            ));
        }

        let variant_type = VariantType::classify(&reference, &alternate);
        let message = format!(
            "Valid {}: {}:{}:{}>{}",
            variant_type,
            chromosome,
            format_thousands(position),
            reference,
            alternate
        );
        Ok(ValidationOutcome::valid(
            message,
            GenomicVariant::new(chromosome, position, reference, alternate),
        ))
    }

    fn check_chromosome(&self, raw: &str) -> Result<Chromosome, String> {
        if raw.trim().is_empty() {
            return Err("Chromosome cannot be empty".into());
        }
        Chromosome::parse(raw)
            .ok_or_else(|| format!("Invalid chromosome '{}'. {}", raw.trim(), INVALID_CHROMOSOME_HINT))
    }

    /// Validate ontology identifiers such as `UBERON:0001157`.
    ///
    /// Every invalid entry is reported; the count cap applies only once all
    /// entries are well-formed. Accepted terms have their prefix upper-cased.
    pub fn validate_ontology_terms<S: AsRef<str>>(&self, terms: &[S]) -> ValidationOutcome<Vec<String>> {
        if terms.is_empty() {
            return ValidationOutcome::invalid("At least one ontology term is required");
        }

        let mut valid = Vec::new();
        let mut invalid = Vec::new();
        for term in terms {
            let term = term.as_ref().trim();
            if term.is_empty() {
                invalid.push("Empty term".to_string());
            } else if ONTOLOGY_PATTERN.is_match(term) {
                valid.push(match term.split_once(':') {
                    Some((prefix, id)) => format!("{}:{}", prefix.to_uppercase(), id),
                    None => term.to_string(),
                });
            } else {
                invalid.push(format!("Invalid format: {}", term));
            }
        }

        if !invalid.is_empty() {
            return ValidationOutcome::invalid(format!(
                "Invalid ontology terms: {}",
                invalid.join(", ")
            ));
        }
        if valid.len() > self.limits.max_ontology_terms {
            return ValidationOutcome::invalid(format!(
                "Too many ontology terms ({}). Maximum {} allowed",
                valid.len(),
                self.limits.max_ontology_terms
            ));
        }

        ValidationOutcome::valid(format!("Valid ontology terms ({} terms)", valid.len()), valid)
    }

    /// Validate requested output tracks against [`OutputType::ALL`].
    pub fn validate_output_types<S: AsRef<str>>(
        &self,
        types: &[S],
    ) -> ValidationOutcome<Vec<OutputType>> {
        if types.is_empty() {
            return ValidationOutcome::invalid("At least one output type is required");
        }

        let mut valid = Vec::new();
        let mut invalid = Vec::new();
        for requested in types {
            match requested.as_ref().parse::<OutputType>() {
                Ok(output_type) => valid.push(output_type),
                Err(name) => invalid.push(name),
            }
        }

        if !invalid.is_empty() {
            return ValidationOutcome::invalid(format!(
                "Invalid output types: {}. Valid types: {}",
                invalid.join(", "),
                OutputType::sorted_identifiers().join(", ")
            ));
        }

        ValidationOutcome::valid(format!("Valid output types ({} types)", valid.len()), valid)
    }
}
