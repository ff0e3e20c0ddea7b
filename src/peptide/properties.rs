//! Physicochemical summaries of short peptides.
//!
//! Net charge uses the pH 7 approximation (K, R positive; D, E negative; H neutral).
//! Hydropathy is the Kyte-Doolittle grand average (GRAVY).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::structure::AminoAcid;

// GRAVY cut-offs for the qualitative labels
const HYDROPHILIC_BELOW: f64 = -0.5;
const HYDROPHOBIC_ABOVE: f64 = 0.5;

fn kyte_doolittle(aa: AminoAcid) -> f64 {
    match aa {
        AminoAcid::Ala => 1.8,
        AminoAcid::Arg => -4.5,
        AminoAcid::Asn => -3.5,
        AminoAcid::Asp => -3.5,
        AminoAcid::Cys => 2.5,
        AminoAcid::Gln => -3.5,
        AminoAcid::Glu => -3.5,
        AminoAcid::Gly => -0.4,
        AminoAcid::His => -3.2,
        AminoAcid::Ile => 4.5,
        AminoAcid::Leu => 3.8,
        AminoAcid::Lys => -3.9,
        AminoAcid::Met => 1.9,
        AminoAcid::Phe => 2.8,
        AminoAcid::Pro => -1.6,
        AminoAcid::Ser => -0.8,
        AminoAcid::Thr => -0.7,
        AminoAcid::Trp => -0.9,
        AminoAcid::Tyr => -1.3,
        AminoAcid::Val => 4.2,
    }
}

pub fn net_charge(peptide: &str) -> i32 {
    peptide
        .chars()
        .filter_map(AminoAcid::from_one_letter)
        .map(|aa| match aa {
            AminoAcid::Lys | AminoAcid::Arg => 1,
            AminoAcid::Asp | AminoAcid::Glu => -1,
            _ => 0,
        })
        .sum()
}

/// Mean Kyte-Doolittle hydropathy. Unknown letters are skipped; 0.0 for an empty peptide.
pub fn gravy(peptide: &str) -> f64 {
    let values: Vec<f64> = peptide
        .chars()
        .filter_map(AminoAcid::from_one_letter)
        .map(kyte_doolittle)
        .collect();
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeClass {
    #[value(name = "negative")]
    Negative,
    #[value(name = "neutral")]
    Neutral,
    #[value(name = "positive")]
    Positive,
}

impl ChargeClass {
    pub fn of(peptide: &str) -> Self {
        match net_charge(peptide) {
            c if c < 0 => ChargeClass::Negative,
            0 => ChargeClass::Neutral,
            _ => ChargeClass::Positive,
        }
    }
}

/// Qualitative hydrophobicity label.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hydrophobicity {
    #[value(name = "low")]
    Low,
    #[value(name = "moderate")]
    Moderate,
    #[value(name = "high")]
    High,
}

impl Hydrophobicity {
    pub fn of(peptide: &str) -> Self {
        let score = gravy(peptide);
        if score < HYDROPHILIC_BELOW {
            Hydrophobicity::Low
        } else if score > HYDROPHOBIC_ABOVE {
            Hydrophobicity::High
        } else {
            Hydrophobicity::Moderate
        }
    }
}

impl fmt::Display for Hydrophobicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Hydrophobicity::Low => "Low",
            Hydrophobicity::Moderate => "Moderate",
            Hydrophobicity::High => "High",
        })
    }
}

/// Restricts sampled peptides to a charge and/or hydrophobicity class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeptideFilter {
    pub charge: Option<ChargeClass>,
    pub hydrophobicity: Option<Hydrophobicity>,
}

impl PeptideFilter {
    pub fn is_empty(&self) -> bool {
        self.charge.is_none() && self.hydrophobicity.is_none()
    }

    pub fn accepts(&self, peptide: &str) -> bool {
        if let Some(charge) = self.charge {
            if ChargeClass::of(peptide) != charge {
                return false;
            }
        }
        if let Some(hydrophobicity) = self.hydrophobicity {
            if Hydrophobicity::of(peptide) != hydrophobicity {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_charge() {
        assert_eq!(net_charge("KKDE"), 0);
        assert_eq!(net_charge("KRH"), 2);
        assert_eq!(net_charge("EDD"), -3);
        assert_eq!(net_charge(""), 0);
    }

    #[test]
    fn test_gravy() {
        assert_eq!(gravy(""), 0.0);
        assert!((gravy("IV") - 4.35).abs() < 1e-9);
        assert!((gravy("AR") - (-1.35)).abs() < 1e-9);
    }

    #[test]
    fn test_classes() {
        assert_eq!(ChargeClass::of("DDDD"), ChargeClass::Negative);
        assert_eq!(ChargeClass::of("GGGG"), ChargeClass::Neutral);
        assert_eq!(ChargeClass::of("GKGK"), ChargeClass::Positive);

        assert_eq!(Hydrophobicity::of("IIVL"), Hydrophobicity::High);
        assert_eq!(Hydrophobicity::of("DEKR"), Hydrophobicity::Low);
        assert_eq!(Hydrophobicity::of("GGAS"), Hydrophobicity::Moderate);
    }

    #[test]
    fn test_filter() {
        let filter = PeptideFilter {
            charge: Some(ChargeClass::Positive),
            hydrophobicity: None,
        };
        assert!(!filter.accepts("DDDD"));
        assert!(filter.accepts("KKAA"));

        let both = PeptideFilter {
            charge: Some(ChargeClass::Positive),
            hydrophobicity: Some(Hydrophobicity::High),
        };
        assert!(!both.accepts("KKKK"));
        assert!(both.accepts("KIIV"));

        assert!(PeptideFilter::default().is_empty());
        assert!(PeptideFilter::default().accepts("anything"));
    }
}
