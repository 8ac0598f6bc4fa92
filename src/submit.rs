//! Submission payload and the pass-through submit hook.
//!
//! The form hands a finished [`IntakePayload`] to a [`SubmitSink`] without
//! validating or transforming it; what happens to the payload afterwards is
//! the sink's business. The bundled [`JsonFileSink`] writes it as JSON.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to serialize intake payload: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write submission to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One project entry as it appears in the submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub role: String,
    pub description: String,
    pub tech_stack: String,
    pub results: String,
    pub demo_url: String,
    /// Attachment group name, e.g. `projectFiles_0`.
    pub attachment_group: String,
    /// Paths the user attached to this entry's group.
    pub attachments: Vec<String>,
}

/// The assembled form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakePayload {
    /// Flat fields keyed by their form names.
    pub fields: BTreeMap<String, String>,
    /// Project entries in creation order.
    pub projects: Vec<ProjectEntry>,
    pub submitted_at: DateTime<Utc>,
}

impl IntakePayload {
    pub fn new(fields: BTreeMap<String, String>, projects: Vec<ProjectEntry>) -> Self {
        Self {
            fields,
            projects,
            submitted_at: Utc::now(),
        }
    }
}

/// Extension point for submission transport.
///
/// The payload arrives untouched; sinks must not expect any validation to
/// have happened.
pub trait SubmitSink {
    fn submit(&self, payload: &IntakePayload) -> Result<(), SubmitError>;
}

/// Default sink: pretty-printed JSON written to a file.
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SubmitSink for JsonFileSink {
    fn submit(&self, payload: &IntakePayload) -> Result<(), SubmitError> {
        let json = serde_json::to_string_pretty(payload)?;
        std::fs::write(&self.path, json).map_err(|source| SubmitError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), "submission written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_payload() -> IntakePayload {
        let mut fields = BTreeMap::new();
        fields.insert("fullName".to_string(), "Ada Lovelace".to_string());
        fields.insert("email".to_string(), "ada@example.com".to_string());
        let projects = vec![ProjectEntry {
            title: "Analytical Engine".to_string(),
            attachment_group: "projectFiles_0".to_string(),
            ..ProjectEntry::default()
        }];
        IntakePayload::new(fields, projects)
    }

    #[test]
    fn test_json_file_sink_writes_valid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("submission.json");
        let sink = JsonFileSink::new(&path);

        sink.submit(&sample_payload()).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: IntakePayload = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.fields["fullName"], "Ada Lovelace");
        assert_eq!(parsed.projects[0].attachment_group, "projectFiles_0");
    }

    #[test]
    fn test_json_file_sink_surfaces_io_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("submission.json");
        let sink = JsonFileSink::new(path);

        let err = sink.submit(&sample_payload()).unwrap_err();
        assert!(matches!(err, SubmitError::Io { .. }));
    }

    #[test]
    fn test_payload_keeps_project_order() {
        let projects = vec![
            ProjectEntry {
                attachment_group: "projectFiles_0".to_string(),
                ..ProjectEntry::default()
            },
            ProjectEntry {
                attachment_group: "projectFiles_1".to_string(),
                ..ProjectEntry::default()
            },
        ];
        let payload = IntakePayload::new(BTreeMap::new(), projects);
        let groups: Vec<_> = payload
            .projects
            .iter()
            .map(|p| p.attachment_group.as_str())
            .collect();
        assert_eq!(groups, vec!["projectFiles_0", "projectFiles_1"]);
    }
}
