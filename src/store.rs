use crate::error::Result;
use crate::results::PageRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::PathBuf;

/// JSON file holding the cleaned corpus handed to the chat layer.
///
/// There is a single corpus per file; every save replaces the previous one.
#[derive(Debug, Clone)]
pub struct CorpusStore {
    path: PathBuf,
}

impl CorpusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Overwrite the file with `corpus`, pretty-printed with 4-space indentation
    pub fn save(&self, corpus: &[PageRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        corpus.serialize(&mut serializer)?;
        fs::write(&self.path, buf)?;

        ::log::info!("Saved {} pages to {}", corpus.len(), self.path.display());
        Ok(())
    }

    /// Read the corpus back
    pub fn load(&self) -> Result<Vec<PageRecord>> {
        let contents = fs::read_to_string(&self.path)?;
        let corpus: Vec<PageRecord> = serde_json::from_str(&contents)?;
        ::log::debug!("Loaded {} pages from {}", corpus.len(), self.path.display());
        Ok(corpus)
    }
}
