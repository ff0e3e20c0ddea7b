//! Per-provider suggestion rules.
//!
//! None of these talk to a model. Each derives its candidates from the sequence
//! with its own fixed slicing rule and attaches static, provider-branded text.

use super::{ProviderRequest, Suggestion, SuggestionProperties};
use crate::peptide::Hydrophobicity;

/// Residues per suggested peptide
pub const WINDOW: usize = 8;

const ACIDIC_MOTIF: &str = "EDD";

/// Window index as a charge offset, saturating instead of wrapping.
fn offset(i: usize) -> i32 {
    i32::try_from(i).unwrap_or(i32::MAX)
}

fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}

fn first_window(seq: &[char]) -> String {
    collect(&seq[..WINDOW.min(seq.len())])
}

fn last_window(seq: &[char]) -> String {
    collect(&seq[seq.len().saturating_sub(WINDOW)..])
}

fn build(sequence: String, net_charge: i32, hydrophobicity: Hydrophobicity, motif: Option<String>, explanation: String) -> Suggestion {
    Suggestion {
        properties: Some(SuggestionProperties {
            length: sequence.chars().count(),
            net_charge,
            hydrophobicity,
            motif,
        }),
        sequence,
        explanation,
    }
}

/// Forward windows from the N-terminus.
pub(super) fn openai(request: &ProviderRequest<'_>) -> Vec<Suggestion> {
    let seq: Vec<char> = request.sequence.chars().collect();
    (0..request.num_peptides)
        .map(|i| {
            let peptide = if seq.len() >= i + WINDOW {
                collect(&seq[i..i + WINDOW])
            } else {
                last_window(&seq)
            };
            let motif = peptide.contains(ACIDIC_MOTIF).then(|| ACIDIC_MOTIF.to_string());
            let hydrophobicity = if i % 2 == 0 {
                Hydrophobicity::Low
            } else {
                Hydrophobicity::Moderate
            };
            let explanation = format!(
                "[OpenAI] This window lines up with a surface-exposed stretch of the chain. \
                 Its charge and hydrophilic character make contact with functional sites likely. \
                 Motif analysis: {}.",
                motif.as_deref().unwrap_or("None")
            );
            build(peptide, offset(i) - 1, hydrophobicity, motif, explanation)
        })
        .collect()
}

/// Windows stepping back from the C-terminus.
pub(super) fn anthropic(request: &ProviderRequest<'_>) -> Vec<Suggestion> {
    let seq: Vec<char> = request.sequence.chars().collect();
    (0..request.num_peptides)
        .map(|i| {
            let peptide = if seq.len() >= i + WINDOW {
                let end = seq.len() - i;
                collect(&seq[end - WINDOW..end])
            } else {
                first_window(&seq)
            };
            build(
                peptide,
                offset(i),
                Hydrophobicity::Moderate,
                None,
                "[Anthropic] Picked for its distinctive sequence and its potential to bind exposed regions."
                    .to_string(),
            )
        })
        .collect()
}

/// Forward windows over the reversed sequence.
pub(super) fn groq(request: &ProviderRequest<'_>) -> Vec<Suggestion> {
    let seq: Vec<char> = request.sequence.chars().collect();
    let reversed: Vec<char> = seq.iter().rev().copied().collect();
    (0..request.num_peptides)
        .map(|i| {
            let peptide = if seq.len() >= i + WINDOW {
                collect(&reversed[i..i + WINDOW])
            } else {
                first_window(&seq)
            };
            let hydrophobicity = if i % 2 == 0 {
                Hydrophobicity::High
            } else {
                Hydrophobicity::Low
            };
            build(
                peptide,
                1 - offset(i),
                hydrophobicity,
                None,
                "[Groq] Picked for diversity and likely surface interaction.".to_string(),
            )
        })
        .collect()
}

/// Forward windows, each read backwards.
pub(super) fn mistral(request: &ProviderRequest<'_>) -> Vec<Suggestion> {
    let seq: Vec<char> = request.sequence.chars().collect();
    (0..request.num_peptides)
        .map(|i| {
            let peptide = if seq.len() >= i + WINDOW {
                seq[i..i + WINDOW].iter().rev().collect()
            } else {
                last_window(&seq)
            };
            build(
                peptide,
                2,
                Hydrophobicity::Moderate,
                None,
                "[Mistral] Picked for sequence uniqueness and possible functional relevance.".to_string(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_saturates() {
        assert_eq!(offset(3), 3);
        assert_eq!(offset(2_147_483_649), i32::MAX);
        assert_eq!(1 - offset(usize::MAX), -2_147_483_646);
    }
}
