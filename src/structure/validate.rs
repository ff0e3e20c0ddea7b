use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::StructureError;

pub const STRUCTURE_EXTENSION: &str = ".pdb";

/// True iff `file_name` ends in `.pdb`, ignoring case.
pub fn is_structure_file(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with(STRUCTURE_EXTENSION)
}

/// Read a structure file from disk. `Ok(None)` if `path` is not a regular file.
pub fn read_structure_file(path: impl AsRef<Path>) -> Result<Option<String>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read structure file {}", path.display()))?;
    Ok(Some(content))
}

/// An uploaded structure: the name it was submitted under and its text.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub content: String,
}

impl Upload {
    /// Accept in-memory content, rejecting names without the structure extension.
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Result<Self, StructureError> {
        let file_name = file_name.into();
        if !is_structure_file(&file_name) {
            return Err(StructureError::InvalidUpload { file_name });
        }
        Ok(Self {
            file_name,
            content: content.into(),
        })
    }
}

/// Validate the extension of `path` and then read it.
pub fn load_upload(path: impl AsRef<Path>) -> Result<Upload, StructureError> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    if !is_structure_file(&file_name) {
        return Err(StructureError::InvalidUpload { file_name });
    }

    let content = fs::read_to_string(path)?;
    Upload::new(file_name, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_extension_check() {
        assert!(is_structure_file("1abc.pdb"));
        assert!(is_structure_file("1ABC.PDB"));
        assert!(is_structure_file("dir/model.Pdb"));
        assert!(!is_structure_file("1abc.cif"));
        assert!(!is_structure_file("1abc.pdb.gz"));
        assert!(!is_structure_file("pdb"));
        assert!(!is_structure_file(""));
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_structure_file("/definitely/not/here.pdb").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_upload_rejects_before_reading() {
        // The path does not exist, so any read attempt would surface as Io
        let err = load_upload("/definitely/not/here.cif").unwrap_err();
        assert!(matches!(err, StructureError::InvalidUpload { .. }));
    }

    #[test]
    fn test_load_upload_reads_content() {
        let mut file = tempfile::Builder::new().suffix(".PDB").tempfile().unwrap();
        writeln!(file, "END").unwrap();

        let upload = load_upload(file.path()).unwrap();
        assert!(upload.file_name.ends_with(".PDB"));
        assert_eq!(upload.content.trim(), "END");
    }
}
