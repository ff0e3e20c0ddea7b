use std::fmt;

/// The twenty standard amino acids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    Ala,
    Arg,
    Asn,
    Asp,
    Cys,
    Gln,
    Glu,
    Gly,
    His,
    Ile,
    Leu,
    Lys,
    Met,
    Phe,
    Pro,
    Ser,
    Thr,
    Trp,
    Tyr,
    Val,
}

// (three-letter, one-letter) in the same order as the enum.
const CODES: [(AminoAcid, &str, char); 20] = [
    (AminoAcid::Ala, "ALA", 'A'),
    (AminoAcid::Arg, "ARG", 'R'),
    (AminoAcid::Asn, "ASN", 'N'),
    (AminoAcid::Asp, "ASP", 'D'),
    (AminoAcid::Cys, "CYS", 'C'),
    (AminoAcid::Gln, "GLN", 'Q'),
    (AminoAcid::Glu, "GLU", 'E'),
    (AminoAcid::Gly, "GLY", 'G'),
    (AminoAcid::His, "HIS", 'H'),
    (AminoAcid::Ile, "ILE", 'I'),
    (AminoAcid::Leu, "LEU", 'L'),
    (AminoAcid::Lys, "LYS", 'K'),
    (AminoAcid::Met, "MET", 'M'),
    (AminoAcid::Phe, "PHE", 'F'),
    (AminoAcid::Pro, "PRO", 'P'),
    (AminoAcid::Ser, "SER", 'S'),
    (AminoAcid::Thr, "THR", 'T'),
    (AminoAcid::Trp, "TRP", 'W'),
    (AminoAcid::Tyr, "TYR", 'Y'),
    (AminoAcid::Val, "VAL", 'V'),
];

impl AminoAcid {
    /// Look up a residue name such as `"ALA"`, `"Ala"` or `" ala "`.
    /// Returns `None` for ligands, water and modified residues (`MSE`, `HOH`, ...).
    pub fn from_three_letter(name: &str) -> Option<Self> {
        let name = name.trim();
        CODES
            .iter()
            .find(|(_, code, _)| code.eq_ignore_ascii_case(name))
            .map(|(aa, _, _)| *aa)
    }

    pub fn from_one_letter(code: char) -> Option<Self> {
        let code = code.to_ascii_uppercase();
        CODES
            .iter()
            .find(|(_, _, one)| *one == code)
            .map(|(aa, _, _)| *aa)
    }

    fn entry(self) -> &'static (AminoAcid, &'static str, char) {
        // CODES is indexed by discriminant
        &CODES[self as usize]
    }

    pub fn three_letter(self) -> &'static str {
        self.entry().1
    }

    pub fn one_letter(self) -> char {
        self.entry().2
    }

    /// Three-letter code with only the first letter upper-cased, e.g. `"Gly"`.
    pub fn capitalized(self) -> String {
        capitalize(self.three_letter())
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.three_letter())
    }
}

/// Maps a three-letter residue name to its one-letter code.
pub fn three_to_one(name: &str) -> Option<char> {
    AminoAcid::from_three_letter(name).map(AminoAcid::one_letter)
}

pub(crate) fn capitalize(name: &str) -> String {
    let name = name.trim();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
