//! Error taxonomy for schema extraction.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SchemaError>;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// The request bytes are not a well-formed `CodeGeneratorRequest`.
    #[error("failed to decode CodeGeneratorRequest: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("request contains no schema files")]
    NoTargetFile,

    /// The options blob, or the `google.api.http` extension inside it, does
    /// not decode against the expected schema.
    #[error("method {method}: malformed HTTP options: {reason}")]
    MalformedHttpOptions { method: String, reason: String },

    #[error(
        "method {method}: HTTP method must be one of GET | POST | PUT | PATCH | DELETE \
         (found {found})"
    )]
    UnsupportedHttpVerb { method: String, found: String },

    #[error("malformed path template {template:?} at byte {offset}: {reason}")]
    MalformedPathTemplate {
        template: String,
        offset: usize,
        reason: &'static str,
    },

    #[error("method '{method}' in service '{service}': {source}")]
    Method {
        service: String,
        method: String,
        #[source]
        source: Box<SchemaError>,
    },

    #[error("render failed: {0}")]
    Render(String),
}

impl SchemaError {
    pub(crate) fn in_method(self, service: &str, method: &str) -> Self {
        SchemaError::Method {
            service: service.to_string(),
            method: method.to_string(),
            source: Box::new(self),
        }
    }

    /// The innermost error, looking through [`SchemaError::Method`] wrappers.
    pub fn root_cause(&self) -> &SchemaError {
        match self {
            SchemaError::Method { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
