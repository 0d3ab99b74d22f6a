//! Loading interval documents from files or stdin

use crate::presence::IntervalMap;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// A single interval map, or a batch of them
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntervalDocument {
    Single(IntervalMap),
    Batch(Vec<IntervalMap>),
}

impl IntervalDocument {
    /// Parse a document from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context(
            "expected an object of non-negative integer arrays, or an array of such objects",
        )
    }

    /// Flatten into the list of maps to evaluate, in document order
    pub fn into_maps(self) -> Vec<IntervalMap> {
        match self {
            IntervalDocument::Single(map) => vec![map],
            IntervalDocument::Batch(maps) => maps,
        }
    }
}

/// Read and parse a document from `path`, or from stdin when `path` is `None`
pub fn load_document(path: Option<&Path>) -> Result<IntervalDocument> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let source = path.map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
    tracing::debug!(source = %source, bytes = text.len(), "loaded interval document");

    IntervalDocument::from_json(&text).with_context(|| format!("Invalid document in {}", source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_single_document() {
        let doc = IntervalDocument::from_json(
            r#"{"lesson": [100, 200], "pupil": [50, 150], "tutor": []}"#,
        )
        .unwrap();

        let maps = doc.into_maps();
        assert_eq!(maps.len(), 1);
        assert_eq!(maps[0]["lesson"], vec![100, 200]);
        assert!(maps[0]["tutor"].is_empty());
    }

    #[test]
    fn test_batch_document() {
        let doc = IntervalDocument::from_json(
            r#"[{"lesson": [1, 2]}, {"lesson": [3, 4], "pupil": [3, 4]}]"#,
        )
        .unwrap();

        let maps = doc.into_maps();
        assert_eq!(maps.len(), 2);
        assert_eq!(maps[1]["pupil"], vec![3, 4]);
    }

    #[test]
    fn test_negative_timestamp_rejected() {
        assert!(IntervalDocument::from_json(r#"{"lesson": [-1, 2]}"#).is_err());
    }

    #[test]
    fn test_non_integer_rejected() {
        assert!(IntervalDocument::from_json(r#"{"lesson": [1.5, 2]}"#).is_err());
        assert!(IntervalDocument::from_json(r#"{"lesson": "soon"}"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"lesson": [0, 10], "pupil": [0, 10], "tutor": [5, 10]}}"#).unwrap();

        let doc = load_document(Some(file.path())).unwrap();
        assert_eq!(doc.into_maps()[0]["tutor"], vec![5, 10]);
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = load_document(Some(Path::new("/nonexistent/lesson.json"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/lesson.json"));
    }
}
