//! protoc plugin protocol: request bytes in, `CodeGeneratorResponse` out.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use prost::Message as _;
use prost_types::compiler::{code_generator_response, CodeGeneratorResponse};
use protokit_schema::{
    build_proto_model, CompilerRequest, JsonModelRenderer, ProtoModel, Renderer,
};

use crate::config::PluginConfig;

/// Read the serialized request from `path`, or stdin when `None`.
pub fn read_request_bytes(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read request {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("failed to read CodeGeneratorRequest from stdin")?;
            Ok(buf)
        }
    }
}

/// Build the model and render it; nothing is produced unless every method
/// built successfully.
pub fn generate(
    request: &CompilerRequest,
    config: &PluginConfig,
) -> Result<(ProtoModel, CodeGeneratorResponse)> {
    let model = build_proto_model(request)?;
    tracing::info!(
        package = %model.package,
        services = model.services.len(),
        methods = model.method_count(),
        http_methods = model.http_method_count(),
        "model built"
    );

    let renderer = JsonModelRenderer {
        out_pattern: config.model_out.clone(),
        pretty: config.pretty,
    };
    let files = renderer.render(&model)?;

    let response = CodeGeneratorResponse {
        supported_features: Some(code_generator_response::Feature::Proto3Optional as u64),
        file: files
            .into_iter()
            .map(|f| code_generator_response::File {
                name: Some(f.name),
                content: Some(f.content),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    };
    Ok((model, response))
}

pub fn write_response(response: &CodeGeneratorResponse, out: &mut impl Write) -> Result<()> {
    out.write_all(&response.encode_to_vec())
        .context("failed to write CodeGeneratorResponse")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
