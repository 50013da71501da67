//! Transport that serves the passive skill dataset from a local JSON file.
//!
//! Stands in for the game data service when the dataset has been exported
//! to disk. The file is re-read on every request; the catalog in front of
//! it only asks once.

use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::domain::models::{MessageType, Request, Response};
use crate::domain::ports::{Transport, TransportError};

/// File-backed transport.
pub struct FileTransport {
    path: PathBuf,
}

impl FileTransport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_skills(&self) -> Result<Response, TransportError> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            TransportError::Io(format!("failed to read {}: {e}", self.path.display()))
        })?;

        match serde_json::from_str::<Value>(&contents) {
            Ok(data) => Ok(Response::success(MessageType::GetPassiveSkills, data)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Malformed passive skill file");
                Ok(Response::error(format!(
                    "failed to parse {}: {e}",
                    self.path.display()
                )))
            }
        }
    }
}

#[async_trait]
impl Transport for FileTransport {
    async fn send_and_wait(&self, request: Request) -> Result<Response, TransportError> {
        debug!(
            message_type = %request.message_type,
            path = %self.path.display(),
            "Serving request from file"
        );

        match request.message_type {
            MessageType::GetPassiveSkills => self.read_skills().await,
            other => Ok(Response::error(format!("Unsupported message type: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_serves_file_contents() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Deffence_up1": {{"name": "Hard Skin", "details": {{"tier": "Common"}}}}}}"#
        )
        .unwrap();

        let transport = FileTransport::new(file.path());
        let response = transport
            .send_and_wait(Request::get_passive_skills())
            .await
            .unwrap();

        assert_eq!(response.message_type, MessageType::GetPassiveSkills);
        assert_eq!(response.data["Deffence_up1"]["name"], json!("Hard Skin"));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let transport = FileTransport::new(dir.path().join("absent.json"));

        let err = transport
            .send_and_wait(Request::get_passive_skills())
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Io(_)));
    }

    #[tokio::test]
    async fn test_malformed_file_is_error_response() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let transport = FileTransport::new(file.path());
        let response = transport
            .send_and_wait(Request::get_passive_skills())
            .await
            .unwrap();

        assert!(response.is_error());
        assert!(response.error_message().unwrap().contains("failed to parse"));
    }

    #[tokio::test]
    async fn test_rejects_unsupported_message() {
        let transport = FileTransport::new("unused.json");
        let response = transport
            .send_and_wait(Request::new(MessageType::Error))
            .await
            .unwrap();

        assert_eq!(
            response.error_message().as_deref(),
            Some("Unsupported message type: error")
        );
    }
}
