//! Schema extraction for protoc plugins.
//!
//! Pipeline:
//! 1. [`decode_request`]: `CodeGeneratorRequest` bytes → [`CompilerRequest`]
//! 2. [`build_proto_model`]: target file (last in dependency order) →
//!    [`ProtoModel`], resolving `google.api.http` annotations
//!    ([`resolve_http_binding`]) and URL path variables
//!    ([`parse_path_variables`]) per method
//! 3. a [`Renderer`] turns the finished model into output files
//!
//! Everything is synchronous and built fresh per invocation.

pub mod builder;
pub mod error;
pub mod http;
pub mod model;
pub mod naming;
pub mod path_template;
pub mod render;
pub mod request;
pub mod wire;

pub use builder::build_proto_model;
pub use error::{Result, SchemaError};
pub use http::{resolve_http_binding, HttpBinding, HttpVerb, ResolvedHttpRule};
pub use model::{HttpModel, MessageModel, MethodModel, ProtoModel, ServiceModel};
pub use path_template::parse_path_variables;
pub use render::{JsonModelRenderer, OutputFile, Renderer};
pub use request::{decode_request, CompilerRequest, SchemaFile};

/// Decode and build in one step.
pub fn model_from_bytes(bytes: &[u8]) -> Result<ProtoModel> {
    let request = decode_request(bytes)?;
    build_proto_model(&request)
}
