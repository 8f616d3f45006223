use clap::Parser;
use std::fs;
use std::path::PathBuf;

use crate::domain::ports::ShareSource;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};

/// The reference share document the original program was built around. Used
/// whenever no input file is given, so a bare invocation still produces the
/// worked answer.
pub const EMBEDDED_DOCUMENT: &str = r#"{
    "keys": {
        "n": 4,
        "k": 3
    },
    "data": {
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }
}"#;

#[derive(Debug, Clone, Parser)]
#[command(name = "share-recover")]
#[command(about = "Recovers a polynomial's constant term from encoded shares")]
pub struct CliConfig {
    /// Path to a JSON share document; the embedded reference document is
    /// used when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.input {
            validate_path("input", &path.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Reads the share document from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ShareSource for FileSource {
    fn read_input(&self) -> Result<String> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(raw)
    }
}

/// Serves the embedded reference document.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedSource;

impl ShareSource for EmbeddedSource {
    fn read_input(&self) -> Result<String> {
        Ok(EMBEDDED_DOCUMENT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_document_parses() {
        let doc: crate::domain::model::InputDocument =
            serde_json::from_str(EMBEDDED_DOCUMENT).unwrap();
        assert_eq!(doc.keys.n, 4);
        assert_eq!(doc.keys.k, 3);
        assert_eq!(doc.data.len(), 4);
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let source = FileSource::new(PathBuf::from("does-not-exist.json"));
        assert!(source.read_input().is_err());
    }
}
