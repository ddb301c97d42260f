//! Request decoding: `CodeGeneratorRequest` bytes → [`CompilerRequest`].
//!
//! The decoded request is a read-only projection of the wire descriptors.
//! Method options stay encoded; they are interpreted later by
//! [`crate::http::resolve_http_binding`].

use std::collections::BTreeMap;

use prost::Message as _;

use crate::error::Result;
use crate::wire::{
    CodeGeneratorRequestWire, DescriptorWire, FileDescriptorWire, MethodDescriptorWire,
    ServiceDescriptorWire,
};

// =============================================================================
// Decoded request
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CompilerRequest {
    /// Schema files in dependency order: a file never precedes a file it
    /// imports, so the file being generated is the last one.
    pub files: Vec<SchemaFile>,
    pub parameters: BTreeMap<String, String>,
    pub files_to_generate: Vec<String>,
    pub compiler_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchemaFile {
    pub name: String,
    pub proto_package: String,
    /// Output package name (`go_package` name, else derived from the
    /// protobuf package).
    pub package_name: String,
    pub import_path: String,
    pub services: Vec<ServiceDescriptor>,
    pub messages: Vec<MessageDescriptor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDescriptor {
    pub name: String,
    pub methods: Vec<MethodDescriptor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDescriptor {
    pub name: String,
    /// Fully-qualified request type, e.g. `.greeter.v1.HelloRequest`.
    pub input_type: String,
    pub output_type: String,
    /// Encoded `google.protobuf.MethodOptions`; `None` when the method
    /// declares no options at all.
    pub options: Option<Vec<u8>>,
    pub client_streaming: bool,
    pub server_streaming: bool,
}

/// A message declared in a schema file. Nested messages are flattened.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageDescriptor {
    /// Fully-qualified name with a leading dot, e.g. `.pkg.Outer.Inner`.
    pub full_name: String,
    /// Identifier used in generated code, e.g. `Outer_Inner`.
    pub ident: String,
}

impl CompilerRequest {
    /// The file being generated (last in dependency order).
    pub fn target_file(&self) -> Option<&SchemaFile> {
        self.files.last()
    }
}

// =============================================================================
// Decoding
// =============================================================================

pub fn decode_request(bytes: &[u8]) -> Result<CompilerRequest> {
    let wire = CodeGeneratorRequestWire::decode(bytes)?;

    let parameters = parse_parameters(wire.parameter.as_deref().unwrap_or(""));
    let compiler_version = wire.compiler_version.as_ref().map(|v| {
        let mut out = format!(
            "{}.{}.{}",
            v.major.unwrap_or(0),
            v.minor.unwrap_or(0),
            v.patch.unwrap_or(0)
        );
        if let Some(suffix) = v.suffix.as_deref().filter(|s| !s.is_empty()) {
            out.push('-');
            out.push_str(suffix);
        }
        out
    });

    let files = wire.proto_file.iter().map(schema_file).collect::<Vec<_>>();
    tracing::debug!(
        files = files.len(),
        parameters = parameters.len(),
        "decoded CodeGeneratorRequest"
    );

    Ok(CompilerRequest {
        files,
        parameters,
        files_to_generate: wire.file_to_generate,
        compiler_version,
    })
}

/// Parse the plugin parameter string: `key=value` pairs separated by `,`.
///
/// A key without `=` maps to the empty string; later duplicates win.
pub fn parse_parameters(param: &str) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    for part in param.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.split_once('=') {
            Some((k, v)) => out.insert(k.trim().to_string(), v.trim().to_string()),
            None => out.insert(part.to_string(), String::new()),
        };
    }
    out
}

fn schema_file(file: &FileDescriptorWire) -> SchemaFile {
    let name = file.name.clone().unwrap_or_default();
    let proto_package = file.package.clone().unwrap_or_default();
    let go_package = file
        .options
        .as_ref()
        .and_then(|o| o.go_package.as_deref())
        .filter(|s| !s.is_empty());
    let (package_name, import_path) = output_package(&name, &proto_package, go_package);

    let mut messages = Vec::new();
    for m in &file.message_type {
        collect_messages(&proto_package, m, &mut Vec::new(), &mut messages);
    }

    SchemaFile {
        name,
        proto_package,
        package_name,
        import_path,
        services: file.service.iter().map(service).collect(),
        messages,
    }
}

fn service(svc: &ServiceDescriptorWire) -> ServiceDescriptor {
    ServiceDescriptor {
        name: svc.name.clone().unwrap_or_default(),
        methods: svc.method.iter().map(method).collect(),
    }
}

fn method(m: &MethodDescriptorWire) -> MethodDescriptor {
    MethodDescriptor {
        name: m.name.clone().unwrap_or_default(),
        input_type: m.input_type.clone().unwrap_or_default(),
        output_type: m.output_type.clone().unwrap_or_default(),
        options: m.options.clone(),
        client_streaming: m.client_streaming.unwrap_or(false),
        server_streaming: m.server_streaming.unwrap_or(false),
    }
}

fn collect_messages(
    package: &str,
    m: &DescriptorWire,
    prefix: &mut Vec<String>,
    out: &mut Vec<MessageDescriptor>,
) {
    let Some(name) = m.name.as_deref() else {
        return;
    };
    prefix.push(name.to_string());

    let dotted = prefix.join(".");
    let full_name = if package.is_empty() {
        format!(".{dotted}")
    } else {
        format!(".{package}.{dotted}")
    };
    out.push(MessageDescriptor {
        full_name,
        ident: prefix.join("_"),
    });

    for nested in &m.nested_type {
        collect_messages(package, nested, prefix, out);
    }
    prefix.pop();
}

/// Output package name and import path for a schema file.
///
/// With `go_package = "example.com/api/greeter/v1;greeterv1"` this yields
/// `("greeterv1", "example.com/api/greeter")`: the import path is the parent
/// of the declared one, so generated code lands next to the schema package.
fn output_package(
    file_name: &str,
    proto_package: &str,
    go_package: Option<&str>,
) -> (String, String) {
    if let Some(go_package) = go_package {
        let (path, name) = match go_package.split_once(';') {
            Some((path, name)) => (path, name.to_string()),
            None => (go_package, last_segment(go_package).to_string()),
        };
        return (sanitize_ident(&name), parent_dir(path));
    }

    let name = if proto_package.is_empty() {
        file_stem(file_name)
    } else {
        proto_package
    };
    (sanitize_ident(name), parent_dir(file_name))
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn parent_dir(path: &str) -> String {
    match path.trim_end_matches('/').rsplit_once('/') {
        Some((dir, _)) if !dir.is_empty() => dir.to_string(),
        Some(_) => "/".to_string(),
        None => ".".to_string(),
    }
}

fn file_stem(file_name: &str) -> &str {
    let base = last_segment(file_name);
    base.strip_suffix(".proto").unwrap_or(base)
}

fn sanitize_ident(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}
