pub mod fasta;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::de::{Deserializer, Error};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::api::AnalysisOutput;
use crate::structure::ParsedStructure;
use crate::suggest::Suggestion;

pub const RECORD_TYPE: &str = "peptide-tools.analysis";
pub const EXPORT_VERSION: &str = "1.0";

/// JSON envelope for one analysis run
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisExport {
    #[serde(rename = "$type")]
    pub record_type: String,

    pub version: String,
    #[serde(serialize_with = "serialize_datetime", deserialize_with = "deserialize_datetime")]
    pub created_at: DateTime<Utc>,
    pub tool_version: String,

    pub file_name: String,
    pub structure: ParsedStructure,
    pub random_peptides: Vec<String>,
    pub suggestions: Vec<Suggestion>,

    pub metadata: ExportMetadata,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub peptide_length: usize,
    pub seed: Option<u64>,
    pub provider: Option<String>,
    pub model_name: Option<String>,
}

fn serialize_datetime<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339())
}

fn deserialize_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(D::Error::custom)
}

impl AnalysisExport {
    pub fn new(file_name: impl Into<String>, output: AnalysisOutput, metadata: ExportMetadata) -> Self {
        Self {
            record_type: RECORD_TYPE.to_string(),
            version: EXPORT_VERSION.to_string(),
            created_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            file_name: file_name.into(),
            structure: output.structure,
            random_peptides: output.random_peptides,
            suggestions: output.suggestions,
            metadata,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize analysis export")
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::Residue;

    fn export() -> AnalysisExport {
        let output = AnalysisOutput {
            structure: ParsedStructure {
                chain_id: "A".to_string(),
                sequence: "AG".to_string(),
                residues: vec![
                    Residue {
                        name: "Ala".to_string(),
                        id: Some(1),
                        ca_coord: Some([1.0, 2.0, 3.0]),
                    },
                    Residue {
                        name: "Gly".to_string(),
                        id: Some(2),
                        ca_coord: None,
                    },
                ],
            },
            random_peptides: vec!["AG".to_string()],
            suggestions: Vec::new(),
        };
        AnalysisExport::new(
            "tiny.pdb",
            output,
            ExportMetadata {
                peptide_length: 2,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_envelope_round_trip() {
        let export = export();
        let json = export.to_json().unwrap();
        assert!(json.contains(r#""$type": "peptide-tools.analysis""#));
        assert!(json.contains(r#""ca_coord": null"#));

        let back: AnalysisExport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.structure, export.structure);
        assert_eq!(back.random_peptides, vec!["AG"]);
        // RFC 3339 keeps sub-second precision
        assert_eq!(back.created_at, export.created_at);
    }

    #[test]
    fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.json");
        export().write_json(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["structure"]["sequence"], "AG");
        assert_eq!(value["metadata"]["peptide_length"], 2);
    }
}
