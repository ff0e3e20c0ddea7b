use std::collections::HashSet;

use peptide_tools::peptide::{generate_random_peptides, ChargeClass, PeptideFilter, PeptideSampler};

const SEQUENCE: &str = "ACDEFGHIKLMNPQRSTVWY";

#[test]
fn twenty_residues_give_five_distinct_octamers() {
    let peptides = generate_random_peptides(SEQUENCE, 5, 8);

    assert_eq!(peptides.len(), 5);
    let distinct: HashSet<&String> = peptides.iter().collect();
    assert_eq!(distinct.len(), 5);

    for peptide in &peptides {
        assert_eq!(peptide.len(), 8);
        let start = SEQUENCE.find(peptide.as_str()).expect("peptide is a substring");
        assert!(start <= 12, "start offset {} out of range", start);
    }
}

#[test]
fn every_window_is_returned_when_request_exceeds_space() {
    // 13 distinct windows exist; asking for 15 must terminate with all of them
    let peptides = PeptideSampler::seeded(42).sample(SEQUENCE, 15, 8);
    assert_eq!(peptides.len(), 13);

    let expected: HashSet<&str> = (0..=12).map(|i| &SEQUENCE[i..i + 8]).collect();
    let got: HashSet<&str> = peptides.iter().map(String::as_str).collect();
    assert_eq!(got, expected);
}

#[test]
fn degenerate_requests_are_empty() {
    assert!(generate_random_peptides("", 5, 8).is_empty());
    assert!(generate_random_peptides(SEQUENCE, 0, 8).is_empty());
    assert!(generate_random_peptides(SEQUENCE, 5, 0).is_empty());
    assert!(generate_random_peptides("ACD", 5, 8).is_empty());
}

#[test]
fn charge_filter_limits_windows() {
    // Windows such as HIK and QRS carry a net positive charge
    let filter = PeptideFilter {
        charge: Some(ChargeClass::Positive),
        hydrophobicity: None,
    };
    let peptides = PeptideSampler::seeded(3).with_filter(filter).sample(SEQUENCE, 15, 3);

    assert!(!peptides.is_empty());
    for peptide in &peptides {
        assert_eq!(ChargeClass::of(peptide), ChargeClass::Positive, "{}", peptide);
    }
}
