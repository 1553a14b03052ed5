//! Error kinds surfaced by the load / render pipeline.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocError {
    /// Input missing or unreadable, or output could not be written.
    #[error("failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },

    /// Content is not syntactically valid JSON.
    #[error("{path} is not valid JSON: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON that does not have the shape of a swagger document.
    #[error("{path} does not match the swagger document shape: {source}")]
    Schema {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl DocError {
    pub fn read(path: impl Into<String>, source: io::Error) -> Self {
        DocError::Io {
            action: "read",
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<String>, source: io::Error) -> Self {
        DocError::Io {
            action: "write",
            path: path.into(),
            source,
        }
    }

    /// Content that is not syntactically valid JSON.
    pub fn parse(path: impl Into<String>, source: serde_json::Error) -> Self {
        DocError::Parse {
            path: path.into(),
            source,
        }
    }

    /// Valid JSON that failed to decode into the document types.
    pub fn schema(path: impl Into<String>, source: serde_json::Error) -> Self {
        DocError::Schema {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_message_names_path() {
        let source = serde_json::from_str::<serde_json::Value>("{oops}").unwrap_err();
        let err = DocError::parse("swagger.json", source);
        assert!(err.to_string().starts_with("swagger.json is not valid JSON: "), "{err}");
    }

    #[test]
    fn schema_message_names_path() {
        let source = serde_json::from_str::<Vec<String>>("[1, 2]").unwrap_err();
        let err = DocError::schema("swagger.json", source);
        assert!(
            err.to_string()
                .starts_with("swagger.json does not match the swagger document shape: "),
            "{err}"
        );
    }

    #[test]
    fn io_message_names_action_and_path() {
        let err = DocError::write(
            "index.md",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "failed to write index.md: denied");
    }
}
