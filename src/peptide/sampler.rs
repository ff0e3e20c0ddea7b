use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

use super::properties::PeptideFilter;

/// Random draws allowed per possible start offset before falling back to enumeration
pub const ATTEMPTS_PER_WINDOW: usize = 4;

/// Draws distinct fixed-length windows from a sequence.
pub struct PeptideSampler<R: Rng = StdRng> {
    rng: R,
    filter: PeptideFilter,
}

impl PeptideSampler<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible sampler for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for PeptideSampler<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PeptideSampler<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            filter: PeptideFilter::default(),
        }
    }

    pub fn with_filter(mut self, filter: PeptideFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Up to `num_peptides` distinct substrings of length `peptide_length`.
    ///
    /// Start offsets are drawn uniformly from `0..=len - peptide_length`. After
    /// `ATTEMPTS_PER_WINDOW` draws per offset the remaining distinct windows are
    /// enumerated and shuffled, so the result is short only when fewer than
    /// `num_peptides` distinct (filter-accepted) windows exist.
    pub fn sample(&mut self, sequence: &str, num_peptides: usize, peptide_length: usize) -> Vec<String> {
        if sequence.is_empty() || num_peptides == 0 || peptide_length == 0 {
            return Vec::new();
        }
        if !sequence.is_ascii() {
            // one-letter codes only; byte windows would split characters
            debug!("refusing to sample from non-ASCII sequence");
            return Vec::new();
        }
        if peptide_length > sequence.len() {
            return Vec::new();
        }

        let max_start = sequence.len() - peptide_length;
        let windows = max_start + 1;
        let max_attempts = windows.saturating_mul(ATTEMPTS_PER_WINDOW);

        let mut seen: HashSet<&str> = HashSet::new();
        let mut peptides: Vec<String> = Vec::with_capacity(num_peptides.min(windows));

        let mut attempts = 0;
        while peptides.len() < num_peptides && attempts < max_attempts {
            attempts += 1;
            let start = self.rng.gen_range(0..=max_start);
            let peptide = &sequence[start..start + peptide_length];
            if seen.insert(peptide) && self.filter.accepts(peptide) {
                peptides.push(peptide.to_string());
            }
        }

        if peptides.len() < num_peptides {
            debug!(
                "sampling budget of {} draws spent with {}/{} peptides, enumerating",
                max_attempts,
                peptides.len(),
                num_peptides
            );
            let mut remaining: Vec<&str> = Vec::new();
            for start in 0..windows {
                let peptide = &sequence[start..start + peptide_length];
                if seen.insert(peptide) && self.filter.accepts(peptide) {
                    remaining.push(peptide);
                }
            }
            remaining.shuffle(&mut self.rng);
            let missing = num_peptides - peptides.len();
            peptides.extend(remaining.into_iter().take(missing).map(str::to_string));
        }

        peptides
    }
}

/// Entropy-seeded convenience wrapper around [`PeptideSampler::sample`].
pub fn generate_random_peptides(sequence: &str, num_peptides: usize, peptide_length: usize) -> Vec<String> {
    PeptideSampler::new().sample(sequence, num_peptides, peptide_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peptide::properties::ChargeClass;

    const SEQ: &str = "ACDEFGHIKLMNPQRSTVWY";

    #[test]
    fn test_degenerate_inputs() {
        assert!(generate_random_peptides("", 5, 8).is_empty());
        assert!(generate_random_peptides(SEQ, 0, 8).is_empty());
        assert!(generate_random_peptides(SEQ, 5, 0).is_empty());
        assert!(generate_random_peptides("ACD", 5, 8).is_empty());
    }

    #[test]
    fn test_exact_length_sequence() {
        assert_eq!(generate_random_peptides("ACDEFGHI", 3, 8), vec!["ACDEFGHI"]);
    }

    #[test]
    fn test_terminates_when_space_exhausted() {
        assert_eq!(generate_random_peptides("AAAAAAAA", 5, 3), vec!["AAA"]);

        let mut all = generate_random_peptides("ACDEF", 10, 2);
        all.sort();
        assert_eq!(all, vec!["AC", "CD", "DE", "EF"]);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = PeptideSampler::seeded(42).sample(SEQ, 5, 8);
        let b = PeptideSampler::seeded(42).sample(SEQ, 5, 8);
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
    }

    #[test]
    fn test_filter_applies() {
        let filter = PeptideFilter {
            charge: Some(ChargeClass::Negative),
            hydrophobicity: None,
        };
        let peptides = PeptideSampler::seeded(7)
            .with_filter(filter)
            .sample("DDDDKKKKGGGG", 20, 3);
        assert!(!peptides.is_empty());
        for p in &peptides {
            assert_eq!(ChargeClass::of(p), ChargeClass::Negative, "{}", p);
        }
    }

    #[test]
    fn test_non_ascii_is_rejected() {
        assert!(generate_random_peptides("AΔCDEFG", 2, 3).is_empty());
    }
}
