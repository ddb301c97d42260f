//! [`CompilerRequest`] → [`ProtoModel`].
//!
//! Walks the target file's services and methods in declaration order. Any
//! method whose annotation or URL template cannot be interpreted fails the
//! whole build; a partial model is never returned.

use std::collections::HashMap;

use crate::error::{Result, SchemaError};
use crate::http::resolve_http_binding;
use crate::model::{HttpModel, MessageModel, MethodModel, ProtoModel, ServiceModel};
use crate::naming::{lower_camel, title_case};
use crate::path_template::parse_path_variables;
use crate::request::{CompilerRequest, MethodDescriptor, ServiceDescriptor};

/// Fully-qualified message name → identifier, across every file of the
/// request (request/response types usually live in imported files).
type MessageIndex<'a> = HashMap<&'a str, &'a str>;

pub fn build_proto_model(request: &CompilerRequest) -> Result<ProtoModel> {
    let target = request.target_file().ok_or(SchemaError::NoTargetFile)?;
    tracing::info!(
        file = %target.name,
        services = target.services.len(),
        "building model for target file"
    );
    if !request.files_to_generate.is_empty() && !request.files_to_generate.contains(&target.name) {
        tracing::warn!(
            file = %target.name,
            "target file is not among the files the compiler asked to generate"
        );
    }

    let messages: MessageIndex<'_> = request
        .files
        .iter()
        .flat_map(|f| &f.messages)
        .map(|m| (m.full_name.as_str(), m.ident.as_str()))
        .collect();

    let services = target
        .services
        .iter()
        .map(|svc| build_service(svc, &messages))
        .collect::<Result<Vec<_>>>()?;

    Ok(ProtoModel {
        package: target.package_name.clone(),
        import_path: target.import_path.clone(),
        proto_package: target.proto_package.clone(),
        source_file: target.name.clone(),
        parameters: request.parameters.clone(),
        services,
    })
}

fn build_service(svc: &ServiceDescriptor, messages: &MessageIndex<'_>) -> Result<ServiceModel> {
    let methods = svc
        .methods
        .iter()
        .map(|m| build_method(m, messages).map_err(|e| e.in_method(&svc.name, &m.name)))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(service = %svc.name, methods = methods.len(), "service model built");
    Ok(ServiceModel {
        original_name: svc.name.clone(),
        name: lower_camel(&svc.name),
        name_title: title_case(&svc.name),
        methods,
    })
}

fn build_method(m: &MethodDescriptor, messages: &MessageIndex<'_>) -> Result<MethodModel> {
    let http = match resolve_http_binding(&m.name, m.options.as_deref())? {
        Some(rule) => {
            let url = rule.binding.url_template().to_string();
            let vars = parse_path_variables(&url)?;
            let vars_title = vars.iter().map(|v| title_case(v)).collect();
            tracing::debug!(
                method = %m.name,
                verb = %rule.binding.verb(),
                url = %url,
                "http binding resolved"
            );
            Some(HttpModel {
                method: rule.binding.verb(),
                url,
                body: rule.body,
                vars,
                vars_title,
            })
        }
        None => None,
    };

    Ok(MethodModel {
        original_name: m.name.clone(),
        name: lower_camel(&m.name),
        name_title: title_case(&m.name),
        request: message_model(&m.input_type, messages),
        response: message_model(&m.output_type, messages),
        client_streaming: m.client_streaming,
        server_streaming: m.server_streaming,
        http,
    })
}

fn message_model(type_name: &str, messages: &MessageIndex<'_>) -> MessageModel {
    let ident = messages
        .get(type_name)
        .copied()
        .unwrap_or_else(|| type_name.rsplit('.').next().unwrap_or(type_name));
    MessageModel {
        name: lower_camel(ident),
        name_title: title_case(ident),
    }
}
