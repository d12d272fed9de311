//! DNA sequence helpers.

/// Nucleotide alphabet accepted for sequences and alleles.
pub const NUCLEOTIDES: [char; 5] = ['A', 'C', 'G', 'T', 'N'];

/// Whether `c` (already upper-cased) is one of `A`, `C`, `G`, `T`, `N`.
pub fn is_nucleotide(c: char) -> bool {
    NUCLEOTIDES.contains(&c)
}

/// Remove every whitespace character and upper-case the rest.
///
/// This is the form in which sequences are validated and forwarded.
pub fn normalize_sequence(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Fraction of `N` bases in an already-normalized sequence (0.0 for empty).
pub fn n_fraction(sequence: &str) -> f64 {
    let total = sequence.chars().count();
    if total == 0 {
        return 0.0;
    }
    let n_count = sequence.chars().filter(|c| *c == 'N').count();
    n_count as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_all_whitespace() {
        assert_eq!(normalize_sequence(" at cg\n\tnn \r\n"), "ATCGNN");
    }

    #[test]
    fn nucleotide_membership() {
        assert!(is_nucleotide('N'));
        assert!(!is_nucleotide('U'));
        assert!(!is_nucleotide('a'));
    }

    #[test]
    fn n_fraction_counts() {
        assert_eq!(n_fraction(""), 0.0);
        assert_eq!(n_fraction("NNAA"), 0.5);
        assert_eq!(n_fraction("ACGT"), 0.0);
    }
}
