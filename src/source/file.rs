//! File-based data source.
//!
//! Reads a clock record from a local JSON file. Used for development
//! against scraped data and throughout the tests.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{ClockSource, SourceError};
use crate::data::IncidentRecord;

/// A data source that reads one clock record from a JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    description: String,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self { path, description }
    }

    /// Returns the path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ClockSource for FileSource {
    async fn fetch(&self) -> Result<IncidentRecord, SourceError> {
        let content = fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|e| SourceError::Parse(e.to_string()))
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_json() -> &'static str {
        r#"{
            "clock_name": "Digital AI Safety Clock",
            "description": "Time since the last major AI-enabled cyber incident.",
            "last_incident": {
                "date": "2025-11-20T08:00:00Z",
                "title": "Automated intrusion campaign"
            },
            "data_source": { "name": "Cyber Incident Database" }
        }"#
    }

    #[test]
    fn test_file_source_new() {
        let source = FileSource::new("/tmp/clock.json");
        assert_eq!(source.path(), Path::new("/tmp/clock.json"));
        assert_eq!(source.description(), "file: /tmp/clock.json");
    }

    #[tokio::test]
    async fn test_file_source_fetch() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_json()).unwrap();

        let source = FileSource::new(file.path());
        let record = source.fetch().await.unwrap();
        assert_eq!(record.clock_name, "Digital AI Safety Clock");
        assert_eq!(record.data_source.name, "Cyber Incident Database");
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let source = FileSource::new("/nonexistent/path/clock.json");
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
    }

    #[tokio::test]
    async fn test_file_source_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid json").unwrap();

        let source = FileSource::new(file.path());
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }
}
